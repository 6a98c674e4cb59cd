pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis", post(handlers::handle_analyze))
        .route(
            "/api/v1/analysis/:session_id",
            get(handlers::handle_get_report),
        )
        .route(
            "/api/v1/analysis/:session_id/reset",
            post(handlers::handle_reset),
        )
        .with_state(state)
}
