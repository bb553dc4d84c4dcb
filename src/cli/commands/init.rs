//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "aegis.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Aegis configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::template()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} with your settings", self.output);
                println!("  2. To use the remote analyzer, set backend = \"remote\" and");
                println!("     export AEGIS_REMOTE_API_KEY with your API key");
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file: {e}");
                Ok(4)
            }
        }
    }

    fn template() -> &'static str {
        r#"# Aegis configuration

[application]
# trace, debug, info, warn, error
log_level = "info"

[analysis]
# Standards scanned when a request doesn't name any
standards = ["HIPAA", "GDPR"]
# "local" uses the offline rule-set analyzer; "remote" calls a
# generate-content endpoint and needs the [analysis.remote] section
backend = "local"

# [analysis.remote]
# endpoint = "https://models.example.com/v1/generate"
# api_key = "${AEGIS_REMOTE_API_KEY}"
# timeout_secs = 30

[sanitization]
# Uncomment to replace the built-in PHI pattern catalog
# pattern_library = "./patterns/phi_patterns.toml"

[audit]
enabled = true
log_path = "./audit/scans.log"
json_format = true

[storage]
# "memory" keeps reports in-process; "jsonl" appends them under `path`
target = "jsonl"
path = "./data"

[logging]
local_enabled = false
local_path = "./logs"
local_rotation = "daily"
"#
    }
}
