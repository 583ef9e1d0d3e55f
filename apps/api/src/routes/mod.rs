pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ats::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/v1/ats/score", post(handlers::handle_score))
        .route("/api/v1/ats/autofix", post(handlers::handle_autofix))
        .route("/api/v1/ats/review", post(handlers::handle_review))
        .with_state(state)
}
