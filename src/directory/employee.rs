use rusqlite::Connection;

use super::DirectoryError;
use crate::db::repository::employee as repo;
use crate::models::{Employee, NewEmployee};

pub fn create_employee(conn: &Connection, new: &NewEmployee) -> Result<Employee, DirectoryError> {
    if new.name.trim().is_empty() || new.address.trim().is_empty() || new.branch_city.trim().is_empty()
    {
        return Err(DirectoryError::Validation(
            "one or more required fields are missing".into(),
        ));
    }
    if new.employee_type.chars().count() != 1 {
        return Err(DirectoryError::Validation(
            "employee_type must be a single-character code".into(),
        ));
    }
    if new.annual_salary < 0.0 {
        return Err(DirectoryError::Validation(
            "annual_salary must not be negative".into(),
        ));
    }

    let mut employee = Employee {
        id: 0,
        name: new.name.clone(),
        employee_type: new.employee_type.clone(),
        address: new.address.clone(),
        annual_salary: new.annual_salary,
        branch_city: new.branch_city.clone(),
    };
    employee.id = repo::insert_employee(conn, &employee)?;

    tracing::info!(id = employee.id, "Employee created");
    Ok(employee)
}

pub fn get_employee(conn: &Connection, id: i64) -> Result<Employee, DirectoryError> {
    repo::find_employee(conn, id)?
        .ok_or_else(|| DirectoryError::NotFound(format!("employee {id} not found")))
}

pub fn list_employees(conn: &Connection) -> Result<Vec<Employee>, DirectoryError> {
    Ok(repo::list_employees(conn)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;

    fn request() -> NewEmployee {
        NewEmployee {
            name: "Dr. Lee".into(),
            employee_type: "D".into(),
            address: "2 Clinic Way".into(),
            annual_salary: 180_000.0,
            branch_city: "Ottawa".into(),
        }
    }

    #[test]
    fn create_and_fetch() {
        let conn = open_memory_database().unwrap();
        let employee = create_employee(&conn, &request()).unwrap();
        assert_eq!(get_employee(&conn, employee.id).unwrap().name, "Dr. Lee");
    }

    #[test]
    fn type_code_must_be_single_character() {
        let conn = open_memory_database().unwrap();
        let mut req = request();
        req.employee_type = "Dentist".into();
        assert!(matches!(
            create_employee(&conn, &req),
            Err(DirectoryError::Validation(_))
        ));
    }

    #[test]
    fn negative_salary_is_rejected() {
        let conn = open_memory_database().unwrap();
        let mut req = request();
        req.annual_salary = -1.0;
        assert!(matches!(
            create_employee(&conn, &req),
            Err(DirectoryError::Validation(_))
        ));
    }

    #[test]
    fn missing_employee_is_not_found() {
        let conn = open_memory_database().unwrap();
        assert!(matches!(
            get_employee(&conn, 1),
            Err(DirectoryError::NotFound(_))
        ));
        assert!(list_employees(&conn).unwrap().is_empty());
    }
}
