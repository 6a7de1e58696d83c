// Upstream extraction: free text → structured documents.
// All LLM calls go through llm_client; output is coerced by analysis::ingest
// exactly like an HTTP payload would be.

pub mod handlers;
pub mod prompts;

use async_trait::async_trait;
use serde_json::Value;

use crate::analysis::ingest::{job_from_value, resume_from_value};
use crate::errors::AppError;
use crate::extraction::prompts::{
    JOB_EXTRACT_PROMPT_TEMPLATE, JOB_EXTRACT_SYSTEM, RESUME_EXTRACT_PROMPT_TEMPLATE,
    RESUME_EXTRACT_SYSTEM,
};
use crate::llm_client::{strip_json_fences, LlmClient, LlmError};
use crate::models::job::JobDocument;
use crate::models::resume::ResumeDocument;

/// Turns free text into documents. Implement this to swap extraction
/// backends without touching the handlers.
///
/// Carried in `AppState` as `Arc<dyn DocumentExtractor>`.
#[async_trait]
pub trait DocumentExtractor: Send + Sync {
    async fn extract_resume(&self, text: &str) -> Result<ResumeDocument, AppError>;
    async fn extract_job(&self, text: &str) -> Result<JobDocument, AppError>;
}

/// Claude-backed extractor.
pub struct LlmExtractor(pub LlmClient);

#[async_trait]
impl DocumentExtractor for LlmExtractor {
    async fn extract_resume(&self, text: &str) -> Result<ResumeDocument, AppError> {
        let prompt = RESUME_EXTRACT_PROMPT_TEMPLATE.replace("{resume_text}", text);
        let raw = self
            .0
            .complete(&prompt, RESUME_EXTRACT_SYSTEM)
            .await
            .map_err(|e| extraction_failure("resume", e))?;
        Ok(resume_from_value(&parse_object(&raw, "resume")?))
    }

    async fn extract_job(&self, text: &str) -> Result<JobDocument, AppError> {
        let prompt = JOB_EXTRACT_PROMPT_TEMPLATE.replace("{job_text}", text);
        let raw = self
            .0
            .complete(&prompt, JOB_EXTRACT_SYSTEM)
            .await
            .map_err(|e| extraction_failure("job", e))?;
        Ok(job_from_value(&parse_object(&raw, "job")?))
    }
}

fn extraction_failure(kind: &str, error: LlmError) -> AppError {
    match error {
        LlmError::EmptyContent => AppError::Extraction(format!("{kind} extraction returned no content")),
        other => AppError::Llm(format!("{kind} extraction failed: {other}")),
    }
}

/// Parses extractor output. Anything that is not a JSON object is an
/// upstream failure the caller has to see.
pub fn parse_object(raw: &str, kind: &str) -> Result<Value, AppError> {
    let value: Value = serde_json::from_str(strip_json_fences(raw))
        .map_err(|e| AppError::Extraction(format!("{kind} extraction returned invalid JSON: {e}")))?;
    if !value.is_object() {
        return Err(AppError::Extraction(format!(
            "{kind} extraction returned JSON that is not an object"
        )));
    }
    Ok(value)
}

/// Rejects empty or oversized free text before it reaches the extractor.
pub fn validate_text(field: &str, text: &str, max_chars: usize) -> Result<(), AppError> {
    if text.trim().is_empty() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }
    let chars = text.chars().count();
    if chars > max_chars {
        return Err(AppError::Validation(format!(
            "{field} is {chars} characters; the limit is {max_chars}"
        )));
    }
    Ok(())
}
