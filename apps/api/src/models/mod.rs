// Value objects shared by the analysis engine, the extractor, and the HTTP layer.
// Every document is built once per request and never mutated afterwards.

pub mod analysis;
pub mod job;
pub mod resume;
