//! Patient directory: personal-detail records and the clinical patient
//! rows that reference them.

use rusqlite::Connection;

use super::{missing, DirectoryError};
use crate::db::repository::patient as repo;
use crate::models::{NewPatientInfo, Patient, PatientInfo};

/// Validate and create a personal-detail record. Insurance and
/// representative are optional; everything else is required.
pub fn create_patient_info(
    conn: &Connection,
    new: &NewPatientInfo,
) -> Result<PatientInfo, DirectoryError> {
    if missing(new.address.as_deref())
        || missing(new.name.as_deref())
        || missing(new.gender.as_deref())
        || missing(new.email.as_deref())
        || missing(new.phone.as_deref())
        || new.date_of_birth.is_none()
    {
        return Err(DirectoryError::Validation(
            "one or more required fields are missing".into(),
        ));
    }

    let gender = new.gender.clone().unwrap_or_default();
    if gender.chars().count() != 1 {
        return Err(DirectoryError::Validation(
            "gender must be a single-character code".into(),
        ));
    }

    let mut info = PatientInfo {
        id: 0,
        address: new.address.clone().unwrap_or_default(),
        name: new.name.clone().unwrap_or_default(),
        gender,
        email: new.email.clone().unwrap_or_default(),
        phone: new.phone.clone().unwrap_or_default(),
        date_of_birth: new.date_of_birth.unwrap_or_default(),
        insurance: new.insurance.clone(),
        representative: new.representative.clone(),
    };
    info.id = repo::insert_info(conn, &info)?;

    tracing::info!(id = info.id, "Patient info created");
    Ok(info)
}

/// Create a patient row pointing at an existing info record. No further
/// validation beyond the reference itself.
pub fn create_patient(conn: &Connection, info_id: i64) -> Result<Patient, DirectoryError> {
    if !repo::info_exists(conn, info_id)? {
        return Err(DirectoryError::Validation(format!(
            "patient info {info_id} does not exist"
        )));
    }
    let id = repo::insert_patient(conn, info_id)?;
    Ok(Patient { id, info_id })
}

pub fn get_patient(conn: &Connection, id: i64) -> Result<Patient, DirectoryError> {
    repo::find_patient(conn, id)?
        .ok_or_else(|| DirectoryError::NotFound(format!("patient {id} not found")))
}

pub fn get_patient_info(conn: &Connection, id: i64) -> Result<PatientInfo, DirectoryError> {
    repo::find_info(conn, id)?
        .ok_or_else(|| DirectoryError::NotFound(format!("patient info {id} not found")))
}

/// All patients. An empty clinic is an empty list, not an error.
pub fn list_patients(conn: &Connection) -> Result<Vec<Patient>, DirectoryError> {
    Ok(repo::list_patients(conn)?)
}

/// Delete a personal-detail record. Returns false when no such record
/// exists.
pub fn delete_patient_info(conn: &Connection, id: i64) -> Result<bool, DirectoryError> {
    if !repo::info_exists(conn, id)? {
        return Ok(false);
    }
    repo::delete_info(conn, id)?;
    tracing::info!(id, "Patient info deleted");
    Ok(true)
}
