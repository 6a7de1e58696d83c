use std::sync::Arc;

use crate::config::Config;
use crate::extraction::DocumentExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
/// Scoring is stateless; only extraction needs a backend.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extractor. Default: LlmExtractor.
    pub extractor: Arc<dyn DocumentExtractor>,
}
