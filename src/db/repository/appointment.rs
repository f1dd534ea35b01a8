use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, OptionalExtension, Row};

use crate::db::DatabaseError;
use crate::models::enums::{AppointmentStatus, AppointmentType};
use crate::models::Appointment;

pub fn insert_appointment(
    conn: &Connection,
    appointment: &Appointment,
) -> Result<i64, DatabaseError> {
    conn.execute(
        "INSERT INTO appointments (patient_id, dentist_id, date, start_time, end_time,
         appointment_type, status, room)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            appointment.patient_id,
            appointment.dentist_id,
            appointment.date.to_string(),
            appointment.start_time.to_string(),
            appointment.end_time.to_string(),
            appointment.appointment_type.as_str(),
            appointment.status.as_str(),
            appointment.room,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn find_appointment(conn: &Connection, id: i64) -> Result<Option<Appointment>, DatabaseError> {
    let row = conn
        .query_row(
            "SELECT id, patient_id, dentist_id, date, start_time, end_time,
             appointment_type, status, room
             FROM appointments WHERE id = ?1",
            params![id],
            appointment_row,
        )
        .optional()?;

    row.map(appointment_from_row).transpose()
}

pub fn list_appointments_for_patient(
    conn: &Connection,
    patient_id: i64,
) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, dentist_id, date, start_time, end_time,
         appointment_type, status, room
         FROM appointments WHERE patient_id = ?1 ORDER BY date, start_time",
    )?;
    let rows = stmt.query_map(params![patient_id], appointment_row)?;

    let mut appointments = Vec::new();
    for row in rows {
        appointments.push(appointment_from_row(row?)?);
    }
    Ok(appointments)
}

pub fn list_appointments(conn: &Connection) -> Result<Vec<Appointment>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT id, patient_id, dentist_id, date, start_time, end_time,
         appointment_type, status, room
         FROM appointments ORDER BY date, start_time",
    )?;
    let rows = stmt.query_map([], appointment_row)?;

    let mut appointments = Vec::new();
    for row in rows {
        appointments.push(appointment_from_row(row?)?);
    }
    Ok(appointments)
}

/// Returns the number of rows updated (0 or 1).
pub fn set_status(
    conn: &Connection,
    id: i64,
    status: AppointmentStatus,
) -> Result<usize, DatabaseError> {
    let updated = conn.execute(
        "UPDATE appointments SET status = ?1 WHERE id = ?2",
        params![status.as_str(), id],
    )?;
    Ok(updated)
}

// Internal row type for Appointment mapping
struct AppointmentRow {
    id: i64,
    patient_id: i64,
    dentist_id: i64,
    date: String,
    start_time: String,
    end_time: String,
    appointment_type: String,
    status: String,
    room: i64,
}

fn appointment_row(row: &Row<'_>) -> Result<AppointmentRow, rusqlite::Error> {
    Ok(AppointmentRow {
        id: row.get(0)?,
        patient_id: row.get(1)?,
        dentist_id: row.get(2)?,
        date: row.get(3)?,
        start_time: row.get(4)?,
        end_time: row.get(5)?,
        appointment_type: row.get(6)?,
        status: row.get(7)?,
        room: row.get(8)?,
    })
}

fn appointment_from_row(row: AppointmentRow) -> Result<Appointment, DatabaseError> {
    let corrupt = |e: &dyn std::fmt::Display| DatabaseError::CorruptRow {
        table: "appointments".into(),
        reason: e.to_string(),
    };

    Ok(Appointment {
        id: row.id,
        patient_id: row.patient_id,
        dentist_id: row.dentist_id,
        date: NaiveDate::parse_from_str(&row.date, "%Y-%m-%d").map_err(|e| corrupt(&e))?,
        start_time: NaiveTime::parse_from_str(&row.start_time, "%H:%M:%S")
            .map_err(|e| corrupt(&e))?,
        end_time: NaiveTime::parse_from_str(&row.end_time, "%H:%M:%S").map_err(|e| corrupt(&e))?,
        appointment_type: AppointmentType::from_str(&row.appointment_type)?,
        status: AppointmentStatus::from_str(&row.status)?,
        room: row.room,
    })
}
