//! HTTP API Layer
//!
//! REST API for the auto claims pipeline using Axum.
//!
//! # Routes
//!
//! - `POST /api/v1/claims` - submit a claim (201, 422 on rejection)
//! - `GET /api/v1/claims/:claim_number` - fetch a claim (200, 404)
//! - `PUT /api/v1/claims/:claim_number/status` - update the status
//! - `GET /health` - liveness check
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(service);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimsService;

use crate::handlers::{claims, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClaimsService>,
}

/// Creates the main API router
pub fn create_router(service: Arc<ClaimsService>) -> Router {
    let state = AppState { service };

    let claims_routes = Router::new()
        .route("/", post(claims::submit_claim))
        .route("/:claim_number", get(claims::get_claim))
        .route("/:claim_number/status", put(claims::update_status));

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api/v1/claims", claims_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
