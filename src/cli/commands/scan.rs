//! Scan command implementation
//!
//! Reads a document (file or inline text), runs the full scan pipeline,
//! prints the report, and persists it through the configured store.

use crate::config::AegisConfig;
use crate::domain::{
    ComplianceIssue, ComplianceReport, DocumentId, Finding, RiskLevel, SanitizationResult,
    Severity, Standard, UserId,
};
use crate::scan::{build_summary, ScanEngine, ScanRequest};
use crate::storage::{create_store, ActionEntry};
use chrono::Utc;
use clap::Args;
use serde_json::json;
use std::path::PathBuf;
use uuid::Uuid;

/// Extensions scanned as text; anything else gets the limited report
const TEXT_EXTENSIONS: &[&str] = &["txt", "json", "md"];

/// Arguments for the scan command
#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Document file to scan
    pub file: Option<PathBuf>,

    /// Scan inline text instead of a file
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,

    /// Standards to scan against (comma-separated); defaults to the
    /// configured list
    #[arg(long, value_delimiter = ',')]
    pub standards: Vec<String>,

    /// Document identifier; generated when omitted
    #[arg(long)]
    pub document_id: Option<String>,

    /// Owning user recorded with the stored report
    #[arg(long, default_value = "cli")]
    pub user: String,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip persisting the report
    #[arg(long)]
    pub no_store: bool,
}

impl ScanArgs {
    /// Execute the scan command
    pub async fn execute(&self, config: &AegisConfig) -> anyhow::Result<i32> {
        let document_id = match &self.document_id {
            Some(id) => DocumentId::new(id.clone()).map_err(anyhow::Error::msg)?,
            None => DocumentId::new(format!("doc-{}", Uuid::new_v4())).map_err(anyhow::Error::msg)?,
        };

        let standards: Vec<Standard> = if self.standards.is_empty() {
            config
                .analysis
                .standards
                .iter()
                .map(|s| s.clone().into())
                .collect()
        } else {
            self.standards.iter().map(|s| s.clone().into()).collect()
        };

        let (file_name, text) = match (&self.file, &self.text) {
            (Some(path), None) => {
                let name = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| path.display().to_string());

                if !is_text_file(path) {
                    // Rich scanning only covers text documents; other
                    // formats get a fixed limited report.
                    let report =
                        limited_format_report(&name, document_id.clone(), &standards);
                    self.emit(&report)?;
                    self.persist(config, &report).await;
                    return Ok(0);
                }

                (name, std::fs::read_to_string(path)?)
            }
            (None, Some(text)) => ("Text Input".to_string(), text.clone()),
            _ => {
                println!("❌ Provide a file to scan or --text");
                return Ok(2);
            }
        };

        let engine = ScanEngine::from_config(config).map_err(anyhow::Error::msg)?;
        let request = ScanRequest::new(text, file_name, document_id, standards);

        let report = match engine.scan_document(request).await {
            Ok(report) => report,
            Err(e) if e.is_sanitization_failure() => {
                println!("❌ Scan aborted: {e}");
                println!("   The document could not be safely redacted; no analysis was run.");
                return Ok(3);
            }
            Err(e) => return Err(anyhow::Error::msg(e)),
        };

        self.emit(&report)?;
        self.persist(config, &report).await;

        Ok(0)
    }

    fn emit(&self, report: &ComplianceReport) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(report)?);
            return Ok(());
        }

        println!();
        println!("📋 Compliance Report: {}", report.file_name);
        println!("   Document: {}", report.document_id);
        println!("   Score:    {}%", report.overall_score);
        println!("   Risk:     {}", report.sanitization_result.risk_level);
        println!();
        println!("   {}", report.summary);

        if !report.sanitization_result.removed_patterns.is_empty() {
            println!();
            println!("🔒 Redacted:");
            for entry in &report.sanitization_result.removed_patterns {
                println!("   - {entry}");
            }
        }

        if !report.issues.is_empty() {
            println!();
            println!("⚠️  Issues:");
            for issue in &report.issues {
                println!(
                    "   [{}] {} ({}): {}",
                    issue.severity, issue.title, issue.category, issue.description
                );
            }
        }

        if !report.recommendations.is_empty() {
            println!();
            println!("💡 Recommendations:");
            for recommendation in &report.recommendations {
                println!("   - {recommendation}");
            }
        }

        println!();
        Ok(())
    }

    /// Persist report and action entry; storage failure never fails the scan
    async fn persist(&self, config: &AegisConfig, report: &ComplianceReport) {
        if self.no_store {
            return;
        }

        let store = match create_store(&config.storage) {
            Ok(store) => store,
            Err(e) => {
                tracing::warn!(error = %e, "failed to create report store");
                return;
            }
        };

        let user = match UserId::new(self.user.clone()) {
            Ok(user) => user,
            Err(e) => {
                tracing::warn!(error = %e, "invalid user id, skipping persistence");
                return;
            }
        };

        if let Err(e) = store.save_report(report, &user).await {
            tracing::warn!(error = %e, "failed to store report");
        }

        let entry = ActionEntry::new(
            "compliance_scan",
            json!({
                "document_id": report.document_id.to_string(),
                "document_name": report.file_name,
                "score": report.overall_score,
                "issues_count": report.issues.len(),
            }),
        );
        if let Err(e) = store.log_action(&entry).await {
            tracing::warn!(error = %e, "failed to store audit action");
        }
    }
}

fn is_text_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| TEXT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

/// Fixed report for document formats the scanner can't read as text
fn limited_format_report(
    file_name: &str,
    document_id: DocumentId,
    standards: &[Standard],
) -> ComplianceReport {
    let issue = ComplianceIssue::from_finding(
        Finding::new(
            Severity::Info,
            "File Format Limitation",
            "Advanced scanning available for text files only",
            "Upload documents in text format for comprehensive analysis",
        ),
        Standard::General,
        format!("{document_id}-GENERAL-format"),
    );

    let issues = vec![issue];
    let counts = crate::domain::SeverityCounts::tally(&issues);
    let summary = build_summary(standards, 75, &counts);

    ComplianceReport {
        document_id,
        file_name: file_name.to_string(),
        timestamp: Utc::now(),
        overall_score: 75,
        issues,
        sanitization_result: SanitizationResult {
            sanitized_text: String::new(),
            removed_patterns: vec![],
            risk_level: RiskLevel::Low,
        },
        summary,
        recommendations: vec![
            "Upload documents in text format for comprehensive analysis".to_string()
        ],
    }
}
