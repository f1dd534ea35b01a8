use rusqlite::{params, Connection, OptionalExtension};

use crate::db::DatabaseError;
use crate::models::MedicalRecord;

pub fn insert_record(conn: &Connection, record: &MedicalRecord) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO medical_records (patient_id, diagnosis, treatment)
         VALUES (?1, ?2, ?3)",
        params![record.patient_id, record.diagnosis, record.treatment],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_record(conn: &Connection, id: i64) -> Result<Option<MedicalRecord>, DatabaseError> {
    let record = conn
        .query_row(
            "SELECT id, patient_id, diagnosis, treatment
             FROM medical_records WHERE id = ?1",
            params![id],
            |row| {
                Ok(MedicalRecord {
                    id: row.get(0)?,
                    patient_id: row.get(1)?,
                    diagnosis: row.get(2)?,
                    treatment: row.get(3)?,
                })
            },
        )
        .optional()?;
    Ok(record)
}

pub fn list_records_for_patient(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<MedicalRecord>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, diagnosis, treatment
         FROM medical_records WHERE patient_id = ?1 ORDER BY id",
    )?;
    let rows = stmt.query_map(params![patient_id], |row| {
        Ok(MedicalRecord {
            id: row.get(0)?,
            patient_id: row.get(1)?,
            diagnosis: row.get(2)?,
            treatment: row.get(3)?,
        })
    })?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::open_memory_database;
    use crate::db::repository::patient;
    use crate::models::PatientInfo;
    use chrono::NaiveDate;

    fn seed_patient(conn: &Connection) -> i64 {
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
        patient::insert_patient(conn, info_id).unwrap()
    }

    #[test]
    fn insert_find_and_list() {
        let conn = open_memory_database().unwrap();
        let patient_id = seed_patient(&conn);

        let id = insert_record(
            &conn,
            &MedicalRecord {
                id: 0,
                patient_id,
                diagnosis: "caries, tooth 14".into(),
                treatment: "composite filling".into(),
            },
        )
        .unwrap();

        let found = find_record(&conn, id).unwrap().unwrap();
        assert_eq!(found.diagnosis, "caries, tooth 14");
        assert_eq!(list_records_for_patient(&conn, patient_id).unwrap().len(), 1);
        assert!(find_record(&conn, 999).unwrap().is_none());
    }
}
