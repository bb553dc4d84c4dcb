//! Configuration schema types
//!
//! This module defines the configuration structure for Aegis. It maps
//! one-to-one onto the `aegis.toml` file.

use crate::config::SecretString;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Analysis backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AnalyzerBackend {
    /// Offline keyword rule-set analyzer
    #[default]
    Local,
    /// Model-backed generate-content endpoint
    Remote,
}

/// Runtime environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment
    #[default]
    Development,
    /// Staging environment
    Staging,
    /// Production environment
    Production,
}

/// Main Aegis configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AegisConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: Environment,

    /// Analysis settings
    #[serde(default)]
    pub analysis: AnalysisConfig,

    /// Sanitization settings
    #[serde(default)]
    pub sanitization: SanitizationConfig,

    /// Audit logging configuration
    #[serde(default)]
    pub audit: AuditConfig,

    /// Report storage configuration
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AegisConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.analysis.validate()?;
        self.sanitization.validate()?;
        self.storage.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

impl Default for AegisConfig {
    fn default() -> Self {
        Self {
            application: ApplicationConfig::default(),
            environment: Environment::default(),
            analysis: AnalysisConfig::default(),
            sanitization: SanitizationConfig::default(),
            audit: AuditConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// Analysis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Standards scanned when the caller doesn't name any
    #[serde(default = "default_standards")]
    pub standards: Vec<String>,

    /// Analysis backend (local or remote)
    #[serde(default)]
    pub backend: AnalyzerBackend,

    /// Remote analyzer settings (required if backend = remote)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteAnalyzerConfig>,
}

impl AnalysisConfig {
    fn validate(&self) -> Result<(), String> {
        if self.standards.is_empty() {
            return Err("analysis.standards must name at least one standard".to_string());
        }

        match self.backend {
            AnalyzerBackend::Remote => match &self.remote {
                Some(remote) => remote.validate(),
                None => Err(
                    "analysis.remote configuration is required when backend = 'remote'".to_string(),
                ),
            },
            AnalyzerBackend::Local => Ok(()),
        }
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            standards: default_standards(),
            backend: AnalyzerBackend::default(),
            remote: None,
        }
    }
}

/// Remote analyzer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteAnalyzerConfig {
    /// Generate-content endpoint URL
    pub endpoint: String,

    /// API key, exposed only at the request site
    pub api_key: SecretString,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Sampling temperature; low for consistent analyses
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Nucleus sampling parameter
    #[serde(default = "default_top_p")]
    pub top_p: f64,

    /// Top-k sampling parameter
    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Maximum response tokens
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl RemoteAnalyzerConfig {
    fn validate(&self) -> Result<(), String> {
        url::Url::parse(&self.endpoint)
            .map_err(|e| format!("analysis.remote.endpoint is not a valid URL: {e}"))?;

        use secrecy::ExposeSecret;
        if self.api_key.expose_secret().is_empty() {
            return Err("analysis.remote.api_key must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("analysis.remote.timeout_secs must be greater than zero".to_string());
        }

        Ok(())
    }
}

/// Sanitization configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SanitizationConfig {
    /// Path to a replacement pattern library TOML file
    pub pattern_library: Option<PathBuf>,
}

impl SanitizationConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.pattern_library {
            if !path.exists() {
                return Err(format!("Pattern library file not found: {}", path.display()));
            }
            if path.extension().and_then(|s| s.to_str()) != Some("toml") {
                return Err(format!(
                    "Pattern library must be a TOML file: {}",
                    path.display()
                ));
            }
        }
        Ok(())
    }
}

/// Audit logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditConfig {
    /// Enable audit logging
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Audit log file path
    #[serde(default = "default_audit_log_path")]
    pub log_path: PathBuf,

    /// Use JSON format for audit logs
    #[serde(default = "default_true")]
    pub json_format: bool,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_path: default_audit_log_path(),
            json_format: true,
        }
    }
}

/// Report storage target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageTarget {
    /// Keep reports in process memory only
    #[default]
    Memory,
    /// Append reports and audit actions to JSONL files
    Jsonl,
}

/// Report storage configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage target (memory or jsonl)
    #[serde(default)]
    pub target: StorageTarget,

    /// Directory for JSONL storage files
    #[serde(default = "default_storage_path")]
    pub path: PathBuf,
}

impl StorageConfig {
    fn validate(&self) -> Result<(), String> {
        if self.target == StorageTarget::Jsonl && self.path.as_os_str().is_empty() {
            return Err("storage.path must be set when storage.target = 'jsonl'".to_string());
        }
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            target: StorageTarget::default(),
            path: default_storage_path(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log file path
    #[serde(default = "default_local_log_path")]
    pub local_path: String,

    /// Log rotation strategy (daily or hourly)
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_log_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_standards() -> Vec<String> {
    vec!["HIPAA".to_string(), "GDPR".to_string()]
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_temperature() -> f64 {
    0.1
}

fn default_top_p() -> f64 {
    0.8
}

fn default_top_k() -> u32 {
    40
}

fn default_max_output_tokens() -> u32 {
    2048
}

fn default_true() -> bool {
    true
}

fn default_audit_log_path() -> PathBuf {
    PathBuf::from("./audit/scans.log")
}

fn default_storage_path() -> PathBuf {
    PathBuf::from("./data")
}

fn default_local_log_path() -> String {
    "./logs".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
