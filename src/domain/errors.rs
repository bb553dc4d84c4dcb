//! Domain error types
//!
//! This module defines the error hierarchy for Aegis. All errors are
//! domain-specific and don't expose third-party types.

use thiserror::Error;

/// Main Aegis error type
///
/// This is the primary error type used throughout the application.
/// It wraps specific error types and provides context for error handling.
#[derive(Debug, Error)]
pub enum AegisError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Sanitization failures (fatal, aborts the whole scan)
    #[error("Sanitization error: {0}")]
    Sanitization(#[from] SanitizationError),

    /// Analyzer errors (recovered internally via the keyword fallback)
    #[error("Analysis error: {0}")]
    Analysis(#[from] AnalysisError),

    /// Report storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Audit logging errors
    #[error("Audit error: {0}")]
    Audit(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// Generic errors with context
    #[error("{0}")]
    Other(String),
}

/// Sanitization-specific errors
///
/// The scan pipeline treats these as fatal: a report must never be built
/// from text whose redaction could not be verified.
#[derive(Debug, Error)]
pub enum SanitizationError {
    /// The post-hoc validator found a pattern class whose match count
    /// survived redaction unchanged.
    #[error("redaction left {count} '{pattern}' match(es) in the sanitized text")]
    LeakDetected {
        /// Pattern class that leaked
        pattern: String,
        /// Number of surviving matches
        count: usize,
    },
}

/// Per-standard analyzer errors
///
/// These never surface to the scan caller; the engine substitutes the
/// deterministic keyword fallback for the affected standard.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Failed to reach the analysis backend
    #[error("analyzer request failed: {0}")]
    RequestFailed(String),

    /// Backend responded with a non-success status
    #[error("analyzer returned {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Request timeout
    #[error("analyzer request timed out: {0}")]
    Timeout(String),

    /// Response body could not be parsed into an analysis result
    #[error("malformed analyzer response: {0}")]
    MalformedResponse(String),

    /// The backend has no analysis defined for the requested standard
    #[error("no analysis available for standard: {0}")]
    UnsupportedStandard(String),
}

// Conversion from std::io::Error
impl From<std::io::Error> for AegisError {
    fn from(err: std::io::Error) -> Self {
        AegisError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for AegisError {
    fn from(err: serde_json::Error) -> Self {
        AegisError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for AegisError {
    fn from(err: toml::de::Error) -> Self {
        AegisError::Configuration(format!("TOML parse error: {err}"))
    }
}

impl AegisError {
    /// True when the error is the fatal sanitization abort
    pub fn is_sanitization_failure(&self) -> bool {
        matches!(self, AegisError::Sanitization(_))
    }
}
