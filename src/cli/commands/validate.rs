//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Aegis configuration file.

use crate::config::{load_config, AnalyzerBackend, StorageTarget};
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Load configuration (load_config validates as part of loading)
        let config = match load_config(config_path) {
            Ok(c) => {
                println!("✅ Configuration file loaded successfully");
                c
            }
            Err(e) => {
                println!("❌ Failed to load configuration file");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!("  Standards: {}", config.analysis.standards.join(", "));

        match config.analysis.backend {
            AnalyzerBackend::Local => {
                println!("  Analysis Backend: local rule-set");
            }
            AnalyzerBackend::Remote => {
                println!("  Analysis Backend: remote");
                if let Some(ref remote) = config.analysis.remote {
                    println!("  Remote Endpoint: {}", remote.endpoint);
                    println!("  Request Timeout: {}s", remote.timeout_secs);
                }
            }
        }

        match config.storage.target {
            StorageTarget::Memory => println!("  Storage: memory"),
            StorageTarget::Jsonl => {
                println!("  Storage: jsonl ({})", config.storage.path.display())
            }
        }

        println!(
            "  Audit Logging: {}",
            if config.audit.enabled {
                format!("enabled ({})", config.audit.log_path.display())
            } else {
                "disabled".to_string()
            }
        );

        if let Some(ref library) = config.sanitization.pattern_library {
            println!("  Pattern Library: {}", library.display());
        } else {
            println!("  Pattern Library: built-in");
        }

        Ok(0)
    }
}
