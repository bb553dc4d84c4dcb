//! Domain models and types for Aegis.
//!
//! This module contains the core domain models, types, and business rules
//! for compliance scanning.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Strongly-typed identifiers** ([`DocumentId`], [`UserId`])
//! - **Domain models** ([`ComplianceIssue`], [`ComplianceReport`],
//!   [`SanitizationResult`])
//! - **Error types** ([`AegisError`], [`SanitizationError`], [`AnalysisError`])
//! - **Result type alias** ([`Result`])
//!
//! # Type Safety
//!
//! Aegis uses the newtype pattern for identifiers to prevent mixing
//! different ID types:
//!
//! ```rust
//! use aegis::domain::{DocumentId, UserId};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let document_id = DocumentId::new("doc-2024-0917")?;
//! let user_id = UserId::new("user-42")?;
//!
//! // This won't compile - type safety prevents mixing IDs
//! // let wrong: DocumentId = user_id;  // Compile error!
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, AegisError>`]. Only
//! [`SanitizationError`] is fatal for a scan; per-standard analyzer
//! failures degrade to the deterministic keyword fallback.

pub mod errors;
pub mod ids;
pub mod issue;
pub mod report;
pub mod result;

// Re-export commonly used types for convenience
pub use errors::{AegisError, AnalysisError, SanitizationError};
pub use ids::{DocumentId, UserId};
pub use issue::{ComplianceIssue, Finding, Severity, Standard, DEFAULT_CONFIDENCE};
pub use report::{ComplianceReport, RiskLevel, SanitizationResult, SeverityCounts};
pub use result::Result;
