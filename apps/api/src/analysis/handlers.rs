//! Axum route handlers for the Analysis API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::analysis::engine::analyze;
use crate::analysis::ingest::parse_analysis_request;
use crate::errors::AppError;
use crate::extraction::validate_text;
use crate::models::analysis::ScoreBreakdown;
use crate::models::job::JobDocument;
use crate::models::resume::ResumeDocument;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchRequest {
    #[serde(alias = "resume_text")]
    pub resume_text: String,
    #[serde(alias = "job_text")]
    pub job_text: String,
}

/// Envelope around a breakdown. The id and timestamp live here so the
/// breakdown itself stays identical for identical inputs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResponse {
    pub analysis_id: Uuid,
    pub analyzed_at: DateTime<Utc>,
    pub result: ScoreBreakdown,
}

impl AnalysisResponse {
    fn new(result: ScoreBreakdown) -> Self {
        Self {
            analysis_id: Uuid::new_v4(),
            analyzed_at: Utc::now(),
            result,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    #[serde(flatten)]
    pub analysis: AnalysisResponse,
    pub resume: ResumeDocument,
    pub job: JobDocument,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/analysis/score
///
/// Scores already-structured documents. The body must be an object with
/// `resume` and `job`; anything missing below that is scored as empty.
pub async fn handle_score(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::InvalidInputShape(e.body_text()))?;
    let (resume, job) = parse_analysis_request(&payload)?;

    Ok(Json(AnalysisResponse::new(analyze(&resume, &job))))
}

/// POST /api/v1/analysis/match
///
/// Full pipeline from free text: extract both documents concurrently, then score.
pub async fn handle_match(
    State(state): State<AppState>,
    payload: Result<Json<MatchRequest>, JsonRejection>,
) -> Result<Json<MatchResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::InvalidInputShape(e.body_text()))?;
    let max_chars = state.config.max_input_chars;
    validate_text("resumeText", &request.resume_text, max_chars)?;
    validate_text("jobText", &request.job_text, max_chars)?;

    let (resume, job) = tokio::try_join!(
        state.extractor.extract_resume(&request.resume_text),
        state.extractor.extract_job(&request.job_text),
    )?;

    let result = analyze(&resume, &job);

    Ok(Json(MatchResponse {
        analysis: AnalysisResponse::new(result),
        resume,
        job,
    }))
}
