//! Per-standard compliance analysis
//!
//! Provides the [`Analyzer`] capability the scan engine fans out over, with
//! two variants: the offline [`RuleSetAnalyzer`] and the model-backed
//! [`RemoteAnalyzer`]. Both are pure functions of the sanitized text; a
//! failing analysis never reaches the caller because the engine substitutes
//! the deterministic [`fallback`] for the affected standard.

pub mod fallback;
pub mod remote;
pub mod rules;
pub mod ruleset;
pub mod scoring;

use crate::domain::{AnalysisError, Finding, Standard};
use async_trait::async_trait;

/// Outcome of analyzing one document against one standard
#[derive(Debug, Clone)]
pub struct StandardAnalysis {
    /// Compliance score, 0-100
    pub score: u8,
    /// Findings in analysis order
    pub findings: Vec<Finding>,
    /// Remediation recommendations, may repeat across standards
    pub recommendations: Vec<String>,
}

/// Analyzer capability
///
/// Implementations analyze already-sanitized text against a single named
/// standard. They must be side-effect-free with respect to each other so
/// the engine can run standards concurrently.
#[async_trait]
pub trait Analyzer: Send + Sync {
    /// Analyze sanitized text against one standard
    async fn analyze(
        &self,
        sanitized_text: &str,
        standard: &Standard,
    ) -> Result<StandardAnalysis, AnalysisError>;

    /// Backend name, for logs
    fn name(&self) -> &'static str;
}

// Re-export main types
pub use remote::RemoteAnalyzer;
pub use rules::{Rule, RuleTable};
pub use ruleset::RuleSetAnalyzer;
pub use scoring::deduction_score;
