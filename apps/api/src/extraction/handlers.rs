//! Axum route handlers for the Extraction API.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::errors::AppError;
use crate::extraction::validate_text;
use crate::models::job::JobDocument;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

/// POST /api/v1/extract/resume
///
/// Preview of the structured résumé the scorer will see.
pub async fn handle_extract_resume(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<ResumeDocument>, AppError> {
    validate_text("text", &request.text, state.config.max_input_chars)?;
    let resume = state.extractor.extract_resume(&request.text).await?;
    Ok(Json(resume))
}

/// POST /api/v1/extract/job
pub async fn handle_extract_job(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Result<Json<JobDocument>, AppError> {
    validate_text("text", &request.text, state.config.max_input_chars)?;
    let job = state.extractor.extract_job(&request.text).await?;
    Ok(Json(job))
}
