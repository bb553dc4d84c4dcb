//! Compliance issue data models

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default confidence for analyzers that cannot estimate one
pub const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Issue severity
///
/// Ordering is `Critical > Warning > Info`, used for triage and for the
/// deduction weights of the scoring function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    /// Informational finding
    Info,
    /// Should be addressed, not immediately dangerous
    Warning,
    /// Regulatory violation requiring immediate attention
    Critical,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Critical => write!(f, "CRITICAL"),
            Self::Warning => write!(f, "WARNING"),
            Self::Info => write!(f, "INFO"),
        }
    }
}

/// Regulatory standard a document is analyzed against
///
/// The set is open: the well-known standards get dedicated variants, and
/// anything else round-trips through [`Standard::Custom`]. A custom
/// standard is analyzed with the keyword fallback only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Standard {
    /// Health Insurance Portability and Accountability Act (US)
    Hipaa,
    /// General Data Protection Regulation (EU)
    Gdpr,
    /// General data privacy and security hygiene
    General,
    /// Any other caller-named standard
    Custom(String),
}

impl Standard {
    /// Canonical uppercase name of the standard
    pub fn name(&self) -> &str {
        match self {
            Self::Hipaa => "HIPAA",
            Self::Gdpr => "GDPR",
            Self::General => "GENERAL",
            Self::Custom(name) => name,
        }
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl From<String> for Standard {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "HIPAA" => Self::Hipaa,
            "GDPR" => Self::Gdpr,
            "GENERAL" => Self::General,
            _ => Self::Custom(s.to_uppercase()),
        }
    }
}

impl From<Standard> for String {
    fn from(s: Standard) -> Self {
        s.name().to_string()
    }
}

impl FromStr for Standard {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s.to_string()))
    }
}

/// A compliance finding as produced by an analyzer
///
/// Findings carry no identifier and no category: both are assigned by the
/// report synthesizer when results are merged, so analyzers stay pure
/// functions of the sanitized text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Finding {
    /// Issue severity
    pub severity: Severity,
    /// Short issue title
    pub title: String,
    /// What was detected
    pub description: String,
    /// Remediation suggestion
    pub suggestion: String,
    /// Confidence in [0, 1]; defaults to [`DEFAULT_CONFIDENCE`]
    pub confidence: f64,
}

impl Finding {
    /// Create a finding with the default confidence
    pub fn new(
        severity: Severity,
        title: impl Into<String>,
        description: impl Into<String>,
        suggestion: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            title: title.into(),
            description: description.into(),
            suggestion: suggestion.into(),
            confidence: DEFAULT_CONFIDENCE,
        }
    }

    /// Set the confidence, clamped to [0, 1]
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }
}

/// A fully-assembled compliance issue inside a report
///
/// Invariant: `id` is unique within its report; every issue belongs to
/// exactly one category and exactly one severity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceIssue {
    /// Opaque unique identifier, assigned at synthesis time
    pub id: String,
    /// Issue severity
    #[serde(rename = "type")]
    pub severity: Severity,
    /// Regulatory standard the issue belongs to
    pub category: Standard,
    /// Short issue title
    pub title: String,
    /// What was detected
    pub description: String,
    /// Remediation suggestion
    pub suggestion: String,
    /// Confidence in [0, 1]
    pub confidence: f64,
}

impl ComplianceIssue {
    /// Assemble an issue from an analyzer finding
    pub fn from_finding(finding: Finding, category: Standard, id: String) -> Self {
        Self {
            id,
            severity: finding.severity,
            category,
            title: finding.title,
            description: finding.description,
            suggestion: finding.suggestion,
            confidence: finding.confidence.clamp(0.0, 1.0),
        }
    }
}
