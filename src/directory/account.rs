//! Account directory: owns the invariants tying an account's type code
//! to its patient/employee references, and username uniqueness.
//!
//! The uniqueness check and the insert are two separate statements, so
//! concurrent creations of the same username can race; SQLite's primary
//! key still guarantees at most one row survives.

use rusqlite::Connection;

use super::DirectoryError;
use crate::credential;
use crate::db::repository::account as repo;
use crate::db::repository::{employee, patient};
use crate::models::{Account, NewAccount, Role};

/// Validate and create an account. The password is hashed before it is
/// persisted; the raw value never reaches the database.
pub fn create_account(conn: &Connection, new: &NewAccount) -> Result<Account, DirectoryError> {
    if new.type_code == 0 && new.employee_id.is_some() {
        return Err(DirectoryError::Validation(
            "employee id must be absent when type_code is 0 (patient)".into(),
        ));
    }
    if new.type_code == 1 && new.patient_id.is_some() {
        return Err(DirectoryError::Validation(
            "patient id must be absent when type_code is 1 (employee)".into(),
        ));
    }
    if new.type_code == 2 && (new.patient_id.is_none() || new.employee_id.is_none()) {
        return Err(DirectoryError::Validation(
            "both patient id and employee id must be set when type_code is 2".into(),
        ));
    }

    if let Some(patient_id) = new.patient_id {
        if !patient::patient_exists(conn, patient_id)? {
            return Err(DirectoryError::Validation(format!(
                "patient {patient_id} does not exist"
            )));
        }
    }
    if let Some(employee_id) = new.employee_id {
        if employee::find_employee(conn, employee_id)?.is_none() {
            return Err(DirectoryError::Validation(format!(
                "employee {employee_id} does not exist"
            )));
        }
    }

    if repo::exists_by_username(conn, &new.username)? {
        return Err(DirectoryError::Conflict("the username is already in use".into()));
    }

    let account = Account {
        username: new.username.clone(),
        password_hash: credential::hash_password(&new.password),
        type_code: new.type_code,
        patient_id: new.patient_id,
        employee_id: new.employee_id,
    };
    repo::insert_account(conn, &account)?;

    tracing::info!(username = %account.username, type_code = account.type_code, "Account created");
    Ok(account)
}

/// Look up an account by credentials.
///
/// A wrong password reports the same `NotFound` as an unknown username,
/// so the response does not reveal which half was wrong.
pub fn get_account_by_credentials(
    conn: &Connection,
    username: &str,
    password: &str,
) -> Result<Account, DirectoryError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(DirectoryError::Validation(
            "username or password is missing".into(),
        ));
    }

    let account = repo::find_by_username(conn, username)?
        .ok_or_else(|| DirectoryError::NotFound("user account not found".into()))?;

    if !credential::verify_password(password, &account.password_hash) {
        return Err(DirectoryError::NotFound("user account not found".into()));
    }

    Ok(account)
}

/// Delete an account by its natural key. Returns false when no such
/// account exists.
pub fn delete_account(conn: &Connection, username: &str) -> Result<bool, DirectoryError> {
    if !repo::exists_by_username(conn, username)? {
        return Ok(false);
    }
    repo::delete_by_username(conn, username)?;
    tracing::info!(%username, "Account deleted");
    Ok(true)
}

/// Map a type code to its authority set. Unknown codes yield an empty
/// set rather than an error.
pub fn derive_roles(type_code: i64) -> Vec<Role> {
    match type_code {
        0 => vec![Role::Patient],
        1 => vec![Role::Employee],
        2 => vec![Role::Patient, Role::Employee],
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::db::repository::{employee, patient};
    use crate::models::{Employee, PatientInfo};
    use chrono::NaiveDate;

    /// Seed one patient and one employee; returns their ids.
    fn seed_refs(conn: &Connection) -> (i64, i64) {
        let info_id = patient::insert_info(
            conn,
            &PatientInfo {
                id: 0,
                address: "1 Main St".into(),
                name: "Bob".into(),
                gender: "M".into(),
                email: "b@x.com".into(),
                phone: "555-1111".into(),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                insurance: None,
                representative: None,
            },
        )
        .unwrap();
        let patient_id = patient::insert_patient(conn, info_id).unwrap();
        let employee_id = employee::insert_employee(
            conn,
            &Employee {
                id: 0,
                name: "Dr. Lee".into(),
                employee_type: "D".into(),
                address: "2 Clinic Way".into(),
                annual_salary: 180_000.0,
                branch_city: "Ottawa".into(),
            },
        )
        .unwrap();
        (patient_id, employee_id)
    }

    fn request(username: &str, type_code: i64) -> NewAccount {
        NewAccount {
            username: username.into(),
            password: "p1".into(),
            type_code,
            patient_id: None,
            employee_id: None,
        }
    }

    #[test]
    fn patient_account_rejects_employee_reference() {
        let conn = open_memory_database().unwrap();
        let (_, employee_id) = seed_refs(&conn);

        let mut req = request("alice", 0);
        req.employee_id = Some(employee_id);

        assert!(matches!(
            create_account(&conn, &req),
            Err(DirectoryError::Validation(_))
        ));
    }

    #[test]
    fn employee_account_rejects_patient_reference() {
        let conn = open_memory_database().unwrap();
        let (patient_id, _) = seed_refs(&conn);

        let mut req = request("bob", 1);
        req.patient_id = Some(patient_id);

        assert!(matches!(
            create_account(&conn, &req),
            Err(DirectoryError::Validation(_))
        ));
    }

    #[test]
    fn dual_account_requires_both_references() {
        let conn = open_memory_database().unwrap();
        let (patient_id, employee_id) = seed_refs(&conn);

        let mut only_patient = request("carol", 2);
        only_patient.patient_id = Some(patient_id);
        assert!(matches!(
            create_account(&conn, &only_patient),
            Err(DirectoryError::Validation(_))
        ));

        let mut both = request("carol", 2);
        both.patient_id = Some(patient_id);
        both.employee_id = Some(employee_id);
        let account = create_account(&conn, &both).unwrap();
        assert_eq!(account.patient_id, Some(patient_id));
        assert_eq!(account.employee_id, Some(employee_id));
    }

    #[test]
    fn dangling_references_are_rejected_before_insert() {
        let conn = open_memory_database().unwrap();

        // No patients or employees seeded; both references dangle.
        let mut req = request("carol", 2);
        req.patient_id = Some(999);
        req.employee_id = Some(999);
        assert!(matches!(
            create_account(&conn, &req),
            Err(DirectoryError::Validation(_))
        ));

        let mut req = request("alice", 0);
        req.patient_id = Some(999);
        assert!(matches!(
            create_account(&conn, &req),
            Err(DirectoryError::Validation(_))
        ));

        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM accounts", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }

    #[test]
    fn duplicate_username_is_a_conflict() {
        let conn = open_memory_database().unwrap();

        create_account(&conn, &request("alice", 0)).unwrap();
        let second = NewAccount {
            password: "p2".into(),
            ..request("alice", 0)
        };

        match create_account(&conn, &second) {
            Err(DirectoryError::Conflict(msg)) => {
                assert!(msg.contains("already in use"));
            }
            other => panic!("expected Conflict, got {other:?}"),
        }

        // Never two stored rows
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM accounts", [], |r| r.get(0))
            .unwrap();
        assert_eq!(count, 1);
    }

    #[test]
    fn password_is_stored_hashed() {
        let conn = open_memory_database().unwrap();
        let account = create_account(&conn, &request("alice", 0)).unwrap();
        assert_ne!(account.password_hash, "p1");
        assert!(account.password_hash.starts_with("pbkdf2-sha256$"));
    }

    #[test]
    fn credentials_lookup_happy_path_and_wrong_password() {
        let conn = open_memory_database().unwrap();
        create_account(&conn, &request("alice", 0)).unwrap();

        let found = get_account_by_credentials(&conn, "alice", "p1").unwrap();
        assert_eq!(found.username, "alice");

        // Wrong password on an existing username is NotFound, not Validation
        assert!(matches!(
            get_account_by_credentials(&conn, "alice", "wrong"),
            Err(DirectoryError::NotFound(_))
        ));
        assert!(matches!(
            get_account_by_credentials(&conn, "nobody", "p1"),
            Err(DirectoryError::NotFound(_))
        ));
    }

    #[test]
    fn credentials_lookup_rejects_blank_input() {
        let conn = open_memory_database().unwrap();
        assert!(matches!(
            get_account_by_credentials(&conn, "", "p1"),
            Err(DirectoryError::Validation(_))
        ));
        assert!(matches!(
            get_account_by_credentials(&conn, "alice", ""),
            Err(DirectoryError::Validation(_))
        ));
    }

    #[test]
    fn delete_account_reports_existence() {
        let conn = open_memory_database().unwrap();
        create_account(&conn, &request("alice", 0)).unwrap();

        assert!(delete_account(&conn, "alice").unwrap());
        assert!(!delete_account(&conn, "alice").unwrap());
    }

    #[test]
    fn unknown_type_codes_are_accepted_and_roleless() {
        let conn = open_memory_database().unwrap();
        // Validation only constrains codes 0..=2; other codes pass
        // through and simply derive no authorities.
        let account = create_account(&conn, &request("ghost", 7)).unwrap();
        assert_eq!(account.type_code, 7);
        assert!(derive_roles(account.type_code).is_empty());
    }

    #[test]
    fn derive_roles_matches_type_codes() {
        assert_eq!(derive_roles(0), vec![Role::Patient]);
        assert_eq!(derive_roles(1), vec![Role::Employee]);
        assert_eq!(derive_roles(2), vec![Role::Patient, Role::Employee]);
        assert!(derive_roles(-1).is_empty());
    }
}
