//! Appointment endpoints.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::directory::appointment;
use crate::models::{Appointment, NewAppointment};
use crate::state::AppState;

/// `POST /api/appointments` — book an appointment.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewAppointment>,
) -> Result<(StatusCode, Json<Appointment>), ApiError> {
    let conn = state.open_db()?;
    let created = appointment::create_appointment(&conn, &req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/appointments/:id`
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Appointment>, ApiError> {
    let conn = state.open_db()?;
    Ok(Json(appointment::get_appointment(&conn, id)?))
}

#[derive(Deserialize)]
pub struct ListQuery {
    #[serde(default)]
    pub patient_id: Option<i64>,
}

#[derive(Serialize)]
pub struct AppointmentsResponse {
    pub appointments: Vec<Appointment>,
}

/// `GET /api/appointments?patient_id=` — list, optionally per patient.
pub async fn list(
    State(state): State<Arc<AppState>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<AppointmentsResponse>, ApiError> {
    let conn = state.open_db()?;
    let appointments = appointment::list_appointments(&conn, query.patient_id)?;
    Ok(Json(AppointmentsResponse { appointments }))
}

/// `POST /api/appointments/:id/cancel`
pub async fn cancel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Appointment>, ApiError> {
    let conn = state.open_db()?;
    Ok(Json(appointment::cancel_appointment(&conn, id)?))
}
