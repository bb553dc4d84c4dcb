//! Redact command implementation
//!
//! Runs the sanitizer alone: redact a document and print the result
//! without any compliance analysis.

use crate::config::AegisConfig;
use crate::sanitize::{PatternRegistry, Redactor};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the redact command
#[derive(Args, Debug)]
pub struct RedactArgs {
    /// Document file to redact
    pub file: Option<PathBuf>,

    /// Redact inline text instead of a file
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

impl RedactArgs {
    /// Execute the redact command
    pub async fn execute(&self, config: &AegisConfig) -> anyhow::Result<i32> {
        let text = match (&self.file, &self.text) {
            (Some(path), None) => std::fs::read_to_string(path)?,
            (None, Some(text)) => text.clone(),
            _ => {
                println!("❌ Provide a file to redact or --text");
                return Ok(2);
            }
        };

        let redactor = match &config.sanitization.pattern_library {
            Some(path) => Redactor::with_registry(PatternRegistry::from_file(path)?),
            None => Redactor::new()?,
        };

        let result = redactor.sanitize(&text);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&result)?);
            return Ok(0);
        }

        println!();
        println!("🔒 Risk level: {}", result.risk_level);
        if result.removed_patterns.is_empty() {
            println!("   No sensitive patterns found");
        } else {
            for entry in &result.removed_patterns {
                println!("   - {entry}");
            }
        }
        println!();
        println!("{}", result.sanitized_text);

        Ok(0)
    }
}
