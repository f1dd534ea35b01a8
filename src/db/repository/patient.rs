use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::{Patient, PatientInfo, Representative};

/// Insert a personal-detail record; the `id` on the argument is
/// ignored and the generated row id is returned.
pub fn insert_info(conn: &Connection, info: &PatientInfo) -> Result<i64, DatabaseError> {
    let rep = info.representative.as_ref();
    conn.execute(
        "INSERT INTO patient_info (address, name, gender, email, phone, date_of_birth,
         insurance, rep_name, rep_phone, rep_email, rep_relationship)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
        params![
            info.address,
            info.name,
            info.gender,
            info.email,
            info.phone,
            info.date_of_birth.to_string(),
            info.insurance,
            rep.map(|r| r.name.clone()),
            rep.map(|r| r.phone.clone()),
            rep.map(|r| r.email.clone()),
            rep.map(|r| r.relationship.clone()),
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_info(conn: &Connection, id: i64) -> Result<Option<PatientInfo>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT id, address, name, gender, email, phone, date_of_birth,
             insurance, rep_name, rep_phone, rep_email, rep_relationship
             FROM patient_info WHERE id = ?1",
            params![id],
            info_row,
        )
        .optional()?;

    row.map(info_from_row).transpose()
}

pub fn info_exists(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM patient_info WHERE id = ?1)",
        params![id],
        |row| row.get::<_, bool>(0),
    )?;
    Ok(exists)
}

/// Returns the number of rows removed (0 or 1).
pub fn delete_info(conn: &Connection, id: i64) -> Result<usize, DatabaseError> {
    let removed = conn.execute("DELETE FROM patient_info WHERE id = ?1", params![id])?;
    Ok(removed)
}

pub fn insert_patient(conn: &Connection, info_id: i64) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO patients (info_id) VALUES (?1)",
        params![info_id],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_patient(conn: &Connection, id: i64) -> Result<Option<Patient>, DatabaseError> {
    let patient = conn
        .query_row(
            "SELECT id, info_id FROM patients WHERE id = ?1",
            params![id],
            |row| {
                Ok(Patient {
                    id: row.get(0)?,
                    info_id: row.get(1)?,
                })
            },
        )
        .optional()?;
    Ok(patient)
}

pub fn patient_exists(conn: &Connection, id: i64) -> Result<bool, DatabaseError> {
    let exists = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM patients WHERE id = ?1)",
        params![id],
        |row| row.get::<_, bool>(0),
    )?;
    Ok(exists)
}

pub fn list_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, info_id FROM patients ORDER BY id")?;
    let rows = stmt.query_map([], |row| {
        Ok(Patient {
            id: row.get(0)?,
            info_id: row.get(1)?,
        })
    })?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

// Internal row type for PatientInfo mapping
struct InfoRow {
    id: i64,
    address: String,
    name: String,
    gender: String,
    email: String,
    phone: String,
    date_of_birth: String,
    insurance: Option<String>,
    rep_name: Option<String>,
    rep_phone: Option<String>,
    rep_email: Option<String>,
    rep_relationship: Option<String>,
}

fn info_row(row: &Row<'_>) -> Result<InfoRow, rusqlite::Error> {
    Ok(InfoRow {
        id: row.get(0)?,
        address: row.get(1)?,
        name: row.get(2)?,
        gender: row.get(3)?,
        email: row.get(4)?,
        phone: row.get(5)?,
        date_of_birth: row.get(6)?,
        insurance: row.get(7)?,
        rep_name: row.get(8)?,
        rep_phone: row.get(9)?,
        rep_email: row.get(10)?,
        rep_relationship: row.get(11)?,
    })
}

fn info_from_row(row: InfoRow) -> Result<PatientInfo, DatabaseError> {
    let date_of_birth = NaiveDate::parse_from_str(&row.date_of_birth, "%Y-%m-%d").map_err(|e| {
        DatabaseError::CorruptRow {
            table: "patient_info".into(),
            reason: e.to_string(),
        }
    })?;

    // rep_name is the presence discriminant for the embedded representative
    let representative = row.rep_name.map(|name| Representative {
        name,
        phone: row.rep_phone.unwrap_or_default(),
        email: row.rep_email.unwrap_or_default(),
        relationship: row.rep_relationship.unwrap_or_default(),
    });

    Ok(PatientInfo {
        id: row.id,
        address: row.address,
        name: row.name,
        gender: row.gender,
        email: row.email,
        phone: row.phone,
        date_of_birth,
        insurance: row.insurance,
        representative,
    })
}
