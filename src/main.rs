// Aegis - Document Compliance Scanning Engine
// Copyright (c) 2025 Aegis Contributors
// Licensed under the MIT License

use aegis::cli::{Cli, Commands};
use aegis::config::{load_config, AegisConfig, LoggingConfig};
use aegis::logging::init_logging;
use clap::Parser;
use std::process;

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    // This is optional - if .env doesn't exist, it's silently ignored
    let _ = dotenvy::dotenv();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging with console-only config (no file logging for CLI)
    let log_level = cli.log_level.as_deref().unwrap_or("info");
    let logging_config = LoggingConfig::default();
    let _guard = match init_logging(log_level, &logging_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            process::exit(5);
        }
    };

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        "Aegis - Document Compliance Scanning Engine"
    );

    let exit_code = run(cli).await;
    process::exit(exit_code);
}

async fn run(cli: Cli) -> i32 {
    // init and validate-config handle the configuration file themselves;
    // the other commands need it loaded up front.
    let result = match cli.command {
        Commands::Init(args) => args.execute().await,
        Commands::ValidateConfig(args) => args.execute(&cli.config).await,
        Commands::Scan(args) => match load_or_default_config(&cli.config) {
            Ok(config) => args.execute(&config).await,
            Err(code) => return code,
        },
        Commands::Redact(args) => match load_or_default_config(&cli.config) {
            Ok(config) => args.execute(&config).await,
            Err(code) => return code,
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            eprintln!("❌ {e}");
            1
        }
    }
}

/// Load the configuration file, falling back to defaults when it doesn't
/// exist so `aegis scan --text ...` works without any setup.
fn load_or_default_config(path: &str) -> Result<AegisConfig, i32> {
    if std::path::Path::new(path).exists() {
        load_config(path).map_err(|e| {
            eprintln!("❌ {e}");
            2
        })
    } else {
        tracing::debug!(config_path = %path, "no configuration file, using defaults");
        Ok(AegisConfig::default())
    }
}
