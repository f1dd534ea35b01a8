//! Review endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::directory::review;
use crate::models::{NewReview, Review};
use crate::state::AppState;

/// `POST /api/reviews`
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewReview>,
) -> Result<(StatusCode, Json<Review>), ApiError> {
    let conn = state.open_db()?;
    let created = review::create_review(&conn, &req)?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /api/reviews/:id`
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Review>, ApiError> {
    let conn = state.open_db()?;
    Ok(Json(review::get_review(&conn, id)?))
}

#[derive(Serialize)]
pub struct ReviewsResponse {
    pub reviews: Vec<Review>,
}

/// `GET /api/reviews`
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<ReviewsResponse>, ApiError> {
    let conn = state.open_db()?;
    let reviews = review::list_reviews(&conn)?;
    Ok(Json(ReviewsResponse { reviews }))
}
