// Qualification matching and ATS scoring.
// Pipeline: ingest (JSON → documents) → matcher → scorer → suggestions.
// Everything below `handlers` is synchronous and side-effect free.

pub mod engine;
pub mod handlers;
pub mod ingest;
pub mod matcher;
pub mod scorer;
pub mod suggestions;
pub mod tokenizer;
