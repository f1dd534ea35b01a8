//! Patient endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::directory::patient;
use crate::models::{NewPatient, Patient};
use crate::state::AppState;

/// `POST /api/patients` — register a patient against an info record.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewPatient>,
) -> Result<(StatusCode, Json<Patient>), ApiError> {
    let conn = state.open_db()?;
    let created = patient::create_patient(&conn, req.info_id)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/patients/:id`
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Patient>, ApiError> {
    let conn = state.open_db()?;
    Ok(Json(patient::get_patient(&conn, id)?))
}

#[derive(Serialize)]
pub struct PatientsResponse {
    pub patients: Vec<Patient>,
}

/// `GET /api/patients` — all patients; empty list when none exist.
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PatientsResponse>, ApiError> {
    let conn = state.open_db()?;
    let patients = patient::list_patients(&conn)?;
    Ok(Json(PatientsResponse { patients }))
}
