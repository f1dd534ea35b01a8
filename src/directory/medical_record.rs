use rusqlite::Connection;

use super::DirectoryError;
use crate::db::repository::medical_record as repo;
use crate::db::repository::patient;
use crate::models::{MedicalRecord, NewMedicalRecord};

pub fn create_record(
    conn: &Connection,
    new: &NewMedicalRecord,
) -> Result<MedicalRecord, DirectoryError> {
    if new.diagnosis.trim().is_empty() || new.treatment.trim().is_empty() {
        return Err(DirectoryError::Validation(
            "diagnosis and treatment are required".into(),
        ));
    }
    if !patient::patient_exists(conn, new.patient_id)? {
        return Err(DirectoryError::Validation(format!(
            "patient {} does not exist",
            new.patient_id
        )));
    }

    let mut record = MedicalRecord {
        id: 0,
        patient_id: new.patient_id,
        diagnosis: new.diagnosis.clone(),
        treatment: new.treatment.clone(),
    };
    record.id = repo::insert_record(conn, &record)?;

    tracing::info!(id = record.id, patient_id = record.patient_id, "Medical record created");
    Ok(record)
}

pub fn get_record(conn: &Connection, id: i64) -> Result<MedicalRecord, DirectoryError> {
    repo::find_record(conn, id)?
        .ok_or_else(|| DirectoryError::NotFound(format!("medical record {id} not found")))
}

pub fn list_records_for_patient(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<MedicalRecord>, DirectoryError> {
    Ok(repo::list_records_for_patient(conn, patient_id)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::directory::patient as patient_dir;
    use crate::models::NewPatientInfo;
    use chrono::NaiveDate;

    fn seed_patient(conn: &Connection) -> i64 {
        let info = patient_dir::create_patient_info(
            conn,
            &NewPatientInfo {
                address: Some("1 Main St".into()),
                name: Some("Bob".into()),
                gender: Some("M".into()),
                email: Some("b@x.com".into()),
                phone: Some("555-1111".into()),
                date_of_birth: NaiveDate::from_ymd_opt(1990, 1, 1),
                insurance: None,
                representative: None,
            },
        )
        .unwrap();
        patient_dir::create_patient(conn, info.id).unwrap().id
    }

    #[test]
    fn create_and_list_history() {
        let conn = open_memory_database().unwrap();
        let patient_id = seed_patient(&conn);

        let record = create_record(
            &conn,
            &NewMedicalRecord {
                patient_id,
                diagnosis: "gingivitis".into(),
                treatment: "deep cleaning".into(),
            },
        )
        .unwrap();

        assert_eq!(get_record(&conn, record.id).unwrap().diagnosis, "gingivitis");
        assert_eq!(list_records_for_patient(&conn, patient_id).unwrap().len(), 1);
        assert!(list_records_for_patient(&conn, patient_id + 1)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn blank_fields_and_unknown_patient_are_rejected() {
        let conn = open_memory_database().unwrap();
        let patient_id = seed_patient(&conn);

        assert!(matches!(
            create_record(
                &conn,
                &NewMedicalRecord {
                    patient_id,
                    diagnosis: " ".into(),
                    treatment: "x".into(),
                }
            ),
            Err(DirectoryError::Validation(_))
        ));
        assert!(matches!(
            create_record(
                &conn,
                &NewMedicalRecord {
                    patient_id: 999,
                    diagnosis: "gingivitis".into(),
                    treatment: "cleaning".into(),
                }
            ),
            Err(DirectoryError::Validation(_))
        ));
    }
}
