//! Audit logger for scan operations

use crate::domain::{ComplianceReport, Standard};
use anyhow::{Context, Result};
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

/// Audit log entry
#[derive(Debug, Serialize)]
struct ScanAuditEntry {
    timestamp: String,
    action: &'static str,
    document_id: String,
    file_name: String,
    standards: Vec<String>,
    overall_score: u8,
    issue_count: usize,
    risk_level: String,
    /// SHA-256 hash of the original document text (never log plaintext)
    document_hash: String,
}

/// Audit logger for compliance scans
pub struct AuditLogger {
    log_path: PathBuf,
    json_format: bool,
    enabled: bool,
}

impl AuditLogger {
    /// Create a new audit logger
    pub fn new(log_path: PathBuf, json_format: bool, enabled: bool) -> Result<Self> {
        if enabled {
            // Ensure parent directory exists
            if let Some(parent) = log_path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create audit log directory: {}", parent.display())
                })?;
            }
        }

        Ok(Self {
            log_path,
            json_format,
            enabled,
        })
    }

    /// Create a logger from the audit configuration section
    pub fn from_config(config: &crate::config::AuditConfig) -> Result<Self> {
        Self::new(config.log_path.clone(), config.json_format, config.enabled)
    }

    /// Log a completed scan
    ///
    /// The original document text is hashed before logging; the audit
    /// trail must never carry unredacted content.
    pub fn log_scan(
        &self,
        report: &ComplianceReport,
        standards: &[Standard],
        original_text: &str,
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }

        let standards: Vec<String> = standards.iter().map(|s| s.name().to_string()).collect();

        let entry = ScanAuditEntry {
            timestamp: report.timestamp.to_rfc3339(),
            action: "compliance_scan",
            document_id: report.document_id.to_string(),
            file_name: report.file_name.clone(),
            standards,
            overall_score: report.overall_score,
            issue_count: report.issues.len(),
            risk_level: report.sanitization_result.risk_level.to_string(),
            document_hash: hash_text(original_text),
        };

        self.write_entry(&entry)
    }

    /// Write an audit entry to the log file
    fn write_entry(&self, entry: &ScanAuditEntry) -> Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .with_context(|| format!("Failed to open audit log: {}", self.log_path.display()))?;

        if self.json_format {
            let json_line =
                serde_json::to_string(entry).context("Failed to serialize audit entry")?;
            writeln!(file, "{json_line}").context("Failed to write audit entry")?;
        } else {
            writeln!(
                file,
                "[{}] {} | Document: {} | Score: {} | Issues: {} | Risk: {}",
                entry.timestamp,
                entry.action,
                entry.document_id,
                entry.overall_score,
                entry.issue_count,
                entry.risk_level
            )
            .context("Failed to write audit entry")?;
        }

        Ok(())
    }
}

/// Hash document text using SHA-256
fn hash_text(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    let result = hasher.finalize();
    format!("{result:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{DocumentId, RiskLevel, SanitizationResult};
    use chrono::Utc;
    use tempfile::tempdir;

    fn report() -> ComplianceReport {
        ComplianceReport {
            document_id: DocumentId::new("doc-123").unwrap(),
            file_name: "intake.txt".to_string(),
            timestamp: Utc::now(),
            overall_score: 85,
            issues: vec![],
            sanitization_result: SanitizationResult {
                sanitized_text: "[SSN_REDACTED]".to_string(),
                removed_patterns: vec!["ssn: 1 instances".to_string()],
                risk_level: RiskLevel::High,
            },
            summary: String::new(),
            recommendations: vec![],
        }
    }

    #[test]
    fn test_hash_is_stable() {
        let h1 = hash_text("patient record");
        let h2 = hash_text("patient record");
        let h3 = hash_text("different record");
        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
    }

    #[test]
    fn test_log_scan_writes_entry() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, true).unwrap();

        logger
            .log_scan(&report(), &[Standard::Hipaa], "SSN 123-45-6789")
            .unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("doc-123"));
        assert!(content.contains("compliance_scan"));
        // Plaintext PHI must never reach the audit trail
        assert!(!content.contains("123-45-6789"));
    }

    #[test]
    fn test_disabled_logger_writes_nothing() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), true, false).unwrap();

        logger.log_scan(&report(), &[Standard::Hipaa], "text").unwrap();
        assert!(!log_path.exists());
    }

    #[test]
    fn test_plain_text_format() {
        let dir = tempdir().unwrap();
        let log_path = dir.path().join("audit.log");
        let logger = AuditLogger::new(log_path.clone(), false, true).unwrap();

        logger.log_scan(&report(), &[Standard::Hipaa], "text").unwrap();

        let content = std::fs::read_to_string(&log_path).unwrap();
        assert!(content.contains("| Document: doc-123 |"));
        assert!(content.contains("Risk: HIGH"));
    }
}
