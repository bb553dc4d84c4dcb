//! Configuration management for Aegis.
//!
//! This module provides TOML-based configuration loading, parsing, and
//! validation.
//!
//! # Overview
//!
//! Aegis uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `AEGIS_*` environment variable overrides
//! - Default values for optional settings
//! - Comprehensive validation
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [analysis]
//! standards = ["HIPAA", "GDPR"]
//! backend = "remote"
//!
//! [analysis.remote]
//! endpoint = "https://models.example.com/v1/generate"
//! api_key = "${AEGIS_REMOTE_API_KEY}"
//! timeout_secs = 30
//!
//! [audit]
//! enabled = true
//! log_path = "./audit/scans.log"
//!
//! [storage]
//! target = "jsonl"
//! path = "./data"
//! ```
//!
//! # Validation
//!
//! Configuration is validated on load:
//!
//! ```rust,no_run
//! use aegis::config::load_config;
//!
//! match load_config("aegis.toml") {
//!     Ok(config) => println!("Configuration valid"),
//!     Err(e) => eprintln!("Configuration error: {e}"),
//! }
//! ```

pub mod loader;
pub mod schema;
pub mod secret;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str};
pub use schema::{
    AegisConfig, AnalysisConfig, AnalyzerBackend, ApplicationConfig, AuditConfig, Environment,
    LoggingConfig, RemoteAnalyzerConfig, SanitizationConfig, StorageConfig, StorageTarget,
};
pub use secret::{secret_string, SecretString, SecretValue};
