//! Compliance report data models

use crate::domain::ids::DocumentId;
use crate::domain::issue::{ComplianceIssue, Severity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Risk classification of a sanitized document
///
/// Derived from which pattern classes were found; escalation only, a later
/// check never lowers a level already set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    /// No direct identifiers found
    Low,
    /// Contact-level identifiers (phone, email, address) or heavy
    /// healthcare vocabulary
    Medium,
    /// Government or financial identifiers (SSN, credit card, license)
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW"),
            Self::Medium => write!(f, "MEDIUM"),
            Self::High => write!(f, "HIGH"),
        }
    }
}

/// Result of redacting a document
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SanitizationResult {
    /// Document text with sensitive spans replaced by placeholder tokens
    pub sanitized_text: String,
    /// One `"{type}: {n} instances"` entry per pattern type that matched,
    /// in pattern-table order
    pub removed_patterns: Vec<String>,
    /// Risk classification of the original text
    pub risk_level: RiskLevel,
}

impl SanitizationResult {
    /// True when no sensitive pattern matched
    pub fn is_clean(&self) -> bool {
        self.removed_patterns.is_empty()
    }
}

/// Issue counts by severity
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityCounts {
    pub critical: usize,
    pub warning: usize,
    pub info: usize,
}

impl SeverityCounts {
    /// Tally issues by severity
    pub fn tally(issues: &[ComplianceIssue]) -> Self {
        let mut counts = Self::default();
        for issue in issues {
            match issue.severity {
                Severity::Critical => counts.critical += 1,
                Severity::Warning => counts.warning += 1,
                Severity::Info => counts.info += 1,
            }
        }
        counts
    }
}

/// A finished compliance report
///
/// Created once per scan request and immutable thereafter; persistence is
/// the caller's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// Document the report was produced for
    pub document_id: DocumentId,
    /// Display name of the scanned document
    pub file_name: String,
    /// When the report was synthesized
    pub timestamp: DateTime<Utc>,
    /// Rounded arithmetic mean of all per-standard scores, 0-100
    pub overall_score: u8,
    /// Issues concatenated across standards in request order
    pub issues: Vec<ComplianceIssue>,
    /// Redaction result the analyses ran against
    pub sanitization_result: SanitizationResult,
    /// One auto-generated sentence counting issues by severity
    pub summary: String,
    /// Deduplicated suggestion strings, first-seen order
    pub recommendations: Vec<String>,
}

impl ComplianceReport {
    /// Issue counts by severity
    pub fn severity_counts(&self) -> SeverityCounts {
        SeverityCounts::tally(&self.issues)
    }

    /// True when no issue was found across any standard
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }
}
