//! PHI/PII sanitization
//!
//! This module redacts sensitive spans from document text before any
//! analysis runs, and validates after the fact that redaction actually
//! removed what it claims to have removed.
//!
//! # Pipeline
//!
//! - **Patterns**: regex catalog loaded from embedded TOML
//! - **Redaction**: sequential substitution passes plus an identity pass
//! - **Risk classification**: HIGH/MEDIUM/LOW from the matched classes
//! - **Validation**: per-class match-count comparison, fatal on leaks

pub mod patterns;
pub mod redactor;
pub mod validator;

// Re-export main types
pub use patterns::{PatternRegistry, PhiPattern, RiskClass};
pub use redactor::{Redactor, HEALTHCARE_TERM_THRESHOLD};
pub use validator::verify_sanitization;
