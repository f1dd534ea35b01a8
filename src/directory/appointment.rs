use rusqlite::Connection;

use super::DirectoryError;
use crate::db::repository::appointment as repo;
use crate::db::repository::employee;
use crate::db::repository::patient;
use crate::models::enums::AppointmentStatus;
use crate::models::{Appointment, NewAppointment};

/// Book an appointment. New bookings always start out `scheduled`.
pub fn create_appointment(
    conn: &Connection,
    new: &NewAppointment,
) -> Result<Appointment, DirectoryError> {
    if !patient::patient_exists(conn, new.patient_id)? {
        return Err(DirectoryError::Validation(format!(
            "patient {} does not exist",
            new.patient_id
        )));
    }
    if employee::find_employee(conn, new.dentist_id)?.is_none() {
        return Err(DirectoryError::Validation(format!(
            "dentist {} does not exist",
            new.dentist_id
        )));
    }
    if new.end_time <= new.start_time {
        return Err(DirectoryError::Validation(
            "end_time must be after start_time".into(),
        ));
    }

    let mut appointment = Appointment {
        id: 0,
        patient_id: new.patient_id,
        dentist_id: new.dentist_id,
        date: new.date,
        start_time: new.start_time,
        end_time: new.end_time,
        appointment_type: new.appointment_type,
        status: AppointmentStatus::Scheduled,
        room: new.room,
    };
    appointment.id = repo::insert_appointment(conn, &appointment)?;

    tracing::info!(id = appointment.id, patient_id = appointment.patient_id, "Appointment booked");
    Ok(appointment)
}

pub fn get_appointment(conn: &Connection, id: i64) -> Result<Appointment, DirectoryError> {
    repo::find_appointment(conn, id)?
        .ok_or_else(|| DirectoryError::NotFound(format!("appointment {id} not found")))
}

/// All appointments, optionally narrowed to one patient.
pub fn list_appointments(
    conn: &Connection,
    patient_id: Option<i64>,
) -> Result<Vec<Appointment>, DirectoryError> {
    let appointments = match patient_id {
        Some(pid) => repo::list_appointments_for_patient(conn, pid)?,
        None => repo::list_appointments(conn)?,
    };
    Ok(appointments)
}

/// Cancel an appointment. NotFound when it does not exist; cancelling
/// an already-cancelled appointment is a no-op that still succeeds.
pub fn cancel_appointment(conn: &Connection, id: i64) -> Result<Appointment, DirectoryError> {
    let updated = repo::set_status(conn, id, AppointmentStatus::Cancelled)?;
    if updated == 0 {
        return Err(DirectoryError::NotFound(format!(
            "appointment {id} not found"
        )));
    }
    tracing::info!(id, "Appointment cancelled");
    get_appointment(conn, id)
}
