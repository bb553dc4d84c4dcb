//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Aegis using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Aegis - Document Compliance Scanner
#[derive(Parser, Debug)]
#[command(name = "aegis")]
#[command(version, about, long_about = None)]
#[command(author = "Aegis Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "aegis.toml", env = "AEGIS_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "AEGIS_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Scan a document for compliance issues
    Scan(commands::scan::ScanArgs),

    /// Redact PHI from a document without analyzing it
    Redact(commands::redact::RedactArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
