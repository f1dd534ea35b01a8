//! Billing and insurance-claim endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::directory::billing;
use crate::models::{Billing, InsuranceClaim, NewBilling, NewInsuranceClaim};
use crate::state::AppState;

/// `POST /api/billing`
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewBilling>,
) -> Result<(StatusCode, Json<Billing>), ApiError> {
    let conn = state.open_db()?;
    let created = billing::create_billing(&conn, &req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/billing/:id`
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Billing>, ApiError> {
    let conn = state.open_db()?;
    Ok(Json(billing::get_billing(&conn, id)?))
}

#[derive(Serialize)]
pub struct BillsResponse {
    pub bills: Vec<Billing>,
}

/// `GET /api/patients/:id/billing` — a patient's bills.
pub async fn list_for_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<i64>,
) -> Result<Json<BillsResponse>, ApiError> {
    let conn = state.open_db()?;
    let bills = billing::list_billing_for_patient(&conn, patient_id)?;
    Ok(Json(BillsResponse { bills }))
}

/// `POST /api/insurance-claims`
pub async fn create_claim(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewInsuranceClaim>,
) -> Result<(StatusCode, Json<InsuranceClaim>), ApiError> {
    let conn = state.open_db()?;
    let created = billing::create_claim(&conn, &req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/insurance-claims/:id`
pub async fn get_claim(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<InsuranceClaim>, ApiError> {
    let conn = state.open_db()?;
    Ok(Json(billing::get_claim(&conn, id)?))
}
