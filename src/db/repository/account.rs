use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::Account;

pub fn insert_account(conn: &Connection, account: &Account) -> Result<(), DatabaseError> {
    conn.execute(
        "INSERT INTO accounts (username, password_hash, type_code, patient_id, employee_id)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            account.username,
            account.password_hash,
            account.type_code,
            account.patient_id,
            account.employee_id,
        ],
    )?;
    Ok(())
}

pub fn exists_by_username(conn: &Connection, username: &str) -> Result<bool, DatabaseError> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM accounts WHERE username = ?1)",
        params![username],
        |row| row.get::<_, bool>(0),
    )?;
    Ok(exists)
}

pub fn find_by_username(
    conn: &Connection,
    username: &str,
) -> Result<Option<Account>, DatabaseError> {
    let account = conn
        .query_row(
            "SELECT username, password_hash, type_code, patient_id, employee_id
             FROM accounts WHERE username = ?1",
            params![username],
            |row| {
                Ok(Account {
                    username: row.get(0)?,
                    password_hash: row.get(1)?,
                    type_code: row.get(2)?,
                    patient_id: row.get(3)?,
                    employee_id: row.get(4)?,
                })
            },
        )
        .optional()?;
    Ok(account)
}

/// Returns the number of rows removed (0 or 1).
pub fn delete_by_username(conn: &Connection, username: &str) -> Result<usize, DatabaseError> {
    let removed = conn.execute(
        "DELETE FROM accounts WHERE username = ?1",
        params![username],
    )?;
    Ok(removed)
}
