//! Patient personal-detail endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::directory::patient;
use crate::models::{NewPatientInfo, PatientInfo};
use crate::state::AppState;

/// `POST /api/patient-info` — create a personal-detail record.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewPatientInfo>,
) -> Result<(StatusCode, Json<PatientInfo>), ApiError> {
    let conn = state.open_db()?;
    let created = patient::create_patient_info(&conn, &req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/patient-info/:id`
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<PatientInfo>, ApiError> {
    let conn = state.open_db()?;
    Ok(Json(patient::get_patient_info(&conn, id)?))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// `DELETE /api/patient-info/:id`
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let conn = state.open_db()?;
    if !patient::delete_patient_info(&conn, id)? {
        return Err(ApiError::NotFound(format!("patient info {id} not found")));
    }
    Ok(Json(DeleteResponse { deleted: true }))
}
