//! Report synthesis
//!
//! The scan engine ties the pipeline together: sanitize, analyze per
//! standard, merge, score, summarize. See [`engine::ScanEngine`].

pub mod engine;
pub mod idgen;
pub mod summary;

// Re-export main types
pub use engine::{ScanEngine, ScanRequest};
pub use idgen::{IdGenerator, RandomIdGenerator, SequentialIdGenerator};
pub use summary::build_summary;
