//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::{AegisConfig, AnalyzerBackend};
use crate::domain::errors::AegisError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into AegisConfig
/// 4. Applies environment variable overrides (`AEGIS_*` prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - Configuration validation fails
///
/// # Examples
///
/// ```no_run
/// use aegis::config::load_config;
///
/// let config = load_config("aegis.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AegisConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AegisError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AegisError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from TOML content
pub fn load_config_from_str(contents: &str) -> Result<AegisConfig> {
    // Perform environment variable substitution
    let contents = substitute_env_vars(contents)?;

    // Parse TOML
    let mut config: AegisConfig = toml::from_str(&contents)
        .map_err(|e| AegisError::Configuration(format!("Failed to parse TOML: {e}")))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut config)?;

    // Validate configuration
    config
        .validate()
        .map_err(|e| AegisError::Configuration(format!("Configuration validation failed: {e}")))?;

    Ok(config)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// Comment lines are passed through untouched so sample configurations can
/// mention the syntax without requiring the variable to be set.
fn substitute_env_vars(contents: &str) -> Result<String> {
    let pattern = Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}")
        .map_err(|e| AegisError::Configuration(format!("Invalid substitution pattern: {e}")))?;

    let mut result = String::with_capacity(contents.len());

    for line in contents.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            continue;
        }

        let mut last_end = 0;
        for captures in pattern.captures_iter(line) {
            let whole = captures.get(0).expect("capture 0 always present");
            let var_name = &captures[1];

            let value = std::env::var(var_name).map_err(|_| {
                AegisError::Configuration(format!(
                    "Environment variable '{var_name}' referenced in configuration is not set"
                ))
            })?;

            result.push_str(&line[last_end..whole.start()]);
            result.push_str(&value);
            last_end = whole.end();
        }
        result.push_str(&line[last_end..]);
    }

    Ok(result)
}

/// Applies `AEGIS_*` environment variable overrides to the configuration
fn apply_env_overrides(config: &mut AegisConfig) -> Result<()> {
    if let Ok(val) = std::env::var("AEGIS_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Ok(val) = std::env::var("AEGIS_ANALYSIS_BACKEND") {
        config.analysis.backend = match val.to_lowercase().as_str() {
            "local" => AnalyzerBackend::Local,
            "remote" => AnalyzerBackend::Remote,
            _ => {
                return Err(AegisError::Configuration(format!(
                    "Invalid AEGIS_ANALYSIS_BACKEND: {val}"
                )))
            }
        };
    }

    if let Ok(val) = std::env::var("AEGIS_ANALYSIS_STANDARDS") {
        config.analysis.standards = val
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
    }

    if let Ok(val) = std::env::var("AEGIS_REMOTE_ENDPOINT") {
        if let Some(ref mut remote) = config.analysis.remote {
            remote.endpoint = val;
        }
    }

    if let Ok(val) = std::env::var("AEGIS_REMOTE_API_KEY") {
        if let Some(ref mut remote) = config.analysis.remote {
            remote.api_key = super::secret_string(val);
        }
    }

    if let Ok(val) = std::env::var("AEGIS_AUDIT_ENABLED") {
        config.audit.enabled = val.parse().map_err(|_| {
            AegisError::Configuration(format!("Invalid AEGIS_AUDIT_ENABLED value: {val}"))
        })?;
    }

    if let Ok(val) = std::env::var("AEGIS_AUDIT_LOG_PATH") {
        config.audit.log_path = val.into();
    }

    Ok(())
}
