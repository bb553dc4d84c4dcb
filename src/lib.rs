// Aegis - Document Compliance Scanning Engine
// Copyright (c) 2025 Aegis Contributors
// Licensed under the MIT License

//! # Aegis - Document Compliance Scanning Engine
//!
//! Aegis scans healthcare documents for HIPAA/GDPR compliance issues. Text
//! is redacted for PHI/PII before any analysis runs, analyzed against one
//! or more regulatory standards, scored, and reconciled into a single
//! report with deduplicated recommendations.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Sanitizing** document text with a regex-driven PHI pattern catalog
//!   and a post-hoc leak validator
//! - **Analyzing** sanitized text per standard, offline (keyword rule-set)
//!   or through a model-backed endpoint, with a deterministic fallback
//! - **Synthesizing** one scored [`domain::ComplianceReport`] per scan
//! - **Auditing** every scan without ever logging plaintext PHI
//!
//! ## Architecture
//!
//! Aegis follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`scan`] - Report synthesis (engine, issue ids, summaries)
//! - [`sanitize`] - PHI redaction and validation
//! - [`analysis`] - Per-standard analyzers and scoring
//! - [`storage`] - Report persistence collaborators
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`audit`] - Scan audit trail
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use aegis::analysis::RuleSetAnalyzer;
//! use aegis::domain::DocumentId;
//! use aegis::scan::{ScanEngine, ScanRequest};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = ScanEngine::new(Arc::new(RuleSetAnalyzer::new()))?;
//!
//!     let report = engine
//!         .scan_document(ScanRequest::new(
//!             "Patient records are stored unencrypted.",
//!             "intake.txt",
//!             DocumentId::new("doc-1")?,
//!             vec!["HIPAA".parse()?, "GDPR".parse()?],
//!         ))
//!         .await?;
//!
//!     println!("{}", report.summary);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Aegis uses the [`domain::AegisError`] type for all errors. Only a
//! sanitization failure aborts a scan; a failing per-standard analyzer is
//! replaced by the deterministic keyword fallback:
//!
//! ```rust,no_run
//! use aegis::domain::AegisError;
//!
//! fn example() -> Result<(), AegisError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = aegis::config::load_config("aegis.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Aegis uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!("Starting scan");
//! warn!(standard = "GDPR", "analysis failed, substituting keyword fallback");
//! ```

pub mod analysis;
pub mod audit;
pub mod cli;
pub mod config;
pub mod domain;
pub mod logging;
pub mod sanitize;
pub mod scan;
pub mod storage;
