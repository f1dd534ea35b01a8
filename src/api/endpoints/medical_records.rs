//! Medical record endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::directory::medical_record;
use crate::models::{MedicalRecord, NewMedicalRecord};
use crate::state::AppState;

/// `POST /api/medical-records`
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewMedicalRecord>,
) -> Result<(StatusCode, Json<MedicalRecord>), ApiError> {
    let conn = state.open_db()?;
    let created = medical_record::create_record(&conn, &req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/medical-records/:id`
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MedicalRecord>, ApiError> {
    let conn = state.open_db()?;
    Ok(Json(medical_record::get_record(&conn, id)?))
}

#[derive(Serialize)]
pub struct RecordsResponse {
    pub records: Vec<MedicalRecord>,
}

/// `GET /api/patients/:id/medical-records` — a patient's history.
pub async fn list_for_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<RecordsResponse>, ApiError> {
    let conn = state.open_db()?;
    let records = medical_record::list_records_for_patient(&conn, patient_id)?;
    Ok(Json(RecordsResponse { records }))
}
