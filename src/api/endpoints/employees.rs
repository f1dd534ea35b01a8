//! Employee endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::directory::employee;
use crate::models::{Employee, NewEmployee};
use crate::state::AppState;

/// `POST /api/employees`
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewEmployee>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    let conn = state.open_db()?;
    let created = employee::create_employee(&conn, &req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/employees/:id`
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Employee>, ApiError> {
    let conn = state.open_db()?;
    Ok(Json(employee::get_employee(&conn, id)?))
}

#[derive(Serialize)]
pub struct EmployeesResponse {
    pub employees: Vec<Employee>,
}

/// `GET /api/employees`
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<EmployeesResponse>, ApiError> {
    let conn = state.open_db()?;
    let employees = employee::list_employees(&conn)?;
    Ok(Json(EmployeesResponse { employees }))
}
