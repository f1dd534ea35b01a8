//! Clinic API router.
//!
//! Returns a composable `Router` that can be mounted on any axum
//! server. Routes are nested under `/api/`. Handlers use
//! `State<Arc<AppState>>` and open one database connection each.

use std::sync::Arc;

use axum::routing::{delete, get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::endpoints;
use crate::state::AppState;

/// Build the clinic API router.
pub fn api_router(state: Arc<AppState>) -> Router {
    let routes = Router::new()
        .route("/health", get(endpoints::health::check))
        .route("/accounts", post(endpoints::accounts::create))
        .route("/accounts/login", get(endpoints::accounts::login))
        .route("/accounts/:username", delete(endpoints::accounts::delete))
        .route("/patient-info", post(endpoints::patient_info::create))
        .route(
            "/patient-info/:id",
            get(endpoints::patient_info::get).delete(endpoints::patient_info::delete),
        )
        .route(
            "/patients",
            post(endpoints::patients::create).get(endpoints::patients::list),
        )
        .route("/patients/:id", get(endpoints::patients::get))
        .route(
            "/patients/:id/medical-records",
            get(endpoints::medical_records::list_for_patient),
        )
        .route(
            "/patients/:id/billing",
            get(endpoints::billing::list_for_patient),
        )
        .route(
            "/employees",
            post(endpoints::employees::create).get(endpoints::employees::list),
        )
        .route("/employees/:id", get(endpoints::employees::get))
        .route(
            "/appointments",
            post(endpoints::appointments::create).get(endpoints::appointments::list),
        )
        .route("/appointments/:id", get(endpoints::appointments::get))
        .route(
            "/appointments/:id/cancel",
            post(endpoints::appointments::cancel),
        )
        .route("/medical-records", post(endpoints::medical_records::create))
        .route("/medical-records/:id", get(endpoints::medical_records::get))
        .route("/billing", post(endpoints::billing::create))
        .route("/billing/:id", get(endpoints::billing::get))
        .route("/insurance-claims", post(endpoints::billing::create_claim))
        .route("/insurance-claims/:id", get(endpoints::billing::get_claim))
        .route(
            "/reviews",
            post(endpoints::reviews::create).get(endpoints::reviews::list),
        )
        .route("/reviews/:id", get(endpoints::reviews::get))
        .with_state(state);

    Router::new()
        .nest("/api", routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
