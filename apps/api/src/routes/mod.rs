pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers as analysis;
use crate::extraction::handlers as extraction;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analysis/score", post(analysis::handle_score))
        .route("/api/v1/analysis/match", post(analysis::handle_match))
        // Extraction API
        .route("/api/v1/extract/resume", post(extraction::handle_extract_resume))
        .route("/api/v1/extract/job", post(extraction::handle_extract_job))
        .with_state(state)
}
