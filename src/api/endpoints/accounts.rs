//! Account endpoints.
//!
//! - `POST /api/accounts` — create an account
//! - `GET /api/accounts/login` — look up an account by credentials
//! - `DELETE /api/accounts/:username` — delete by natural key

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::api::error::ApiError;
use crate::directory::account;
use crate::models::{Account, NewAccount, Role};
use crate::state::AppState;

/// `POST /api/accounts` — validate and create an account.
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewAccount>,
) -> Result<(StatusCode, Json<Account>), ApiError> {
    let conn = state.open_db()?;
    let created = account::create_account(&conn, &req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// Both parameters optional at the extractor level so that blank input
/// surfaces as a 400 with a message instead of a rejection.
#[derive(Deserialize)]
pub struct LoginQuery {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub account: Account,
    pub roles: Vec<Role>,
}

/// `GET /api/accounts/login?username=&password=` — credential lookup.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Query(query): Query<LoginQuery>,
) -> Result<Json<LoginResponse>, ApiError> {
    let conn = state.open_db()?;
    let found = account::get_account_by_credentials(&conn, &query.username, &query.password)?;
    let roles = account::derive_roles(found.type_code);
    Ok(Json(LoginResponse {
        account: found,
        roles,
    }))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub deleted: bool,
}

/// `DELETE /api/accounts/:username` — delete an account.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let conn = state.open_db()?;
    if !account::delete_account(&conn, &username)? {
        return Err(ApiError::NotFound("user account not found".into()));
    }
    Ok(Json(DeleteResponse { deleted: true }))
}
