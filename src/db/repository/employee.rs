use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::Employee;

pub fn insert_employee(conn: &Connection, employee: &Employee) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO employees (name, employee_type, address, annual_salary, branch_city)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            employee.name,
            employee.employee_type,
            employee.address,
            employee.annual_salary,
            employee.branch_city,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_employee(conn: &Connection, id: i64) -> Result<Option<Employee>, DatabaseError> {
    let employee = conn
        .query_row(
            "SELECT id, name, employee_type, address, annual_salary, branch_city
             FROM employees WHERE id = ?1",
            params![id],
            |row| {
                Ok(Employee {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    employee_type: row.get(2)?,
                    address: row.get(3)?,
                    annual_salary: row.get(4)?,
                    branch_city: row.get(5)?,
                })
            },
        )
        .optional()?;
    Ok(employee)
}

pub fn list_employees(conn: &Connection) -> Result<Vec<Employee>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, name, employee_type, address, annual_salary, branch_city
         FROM employees ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Employee {
            id: row.get(0)?,
            name: row.get(1)?,
            employee_type: row.get(2)?,
            address: row.get(3)?,
            annual_salary: row.get(4)?,
            branch_city: row.get(5)?,
        })
    })?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}
