//! Offline rule-set analyzer
//!
//! Deterministic, fully local analysis against the keyword rule table.
//! Used as the default backend and as the behavioral baseline the richer
//! model-backed analyzer is compared against.

use crate::analysis::rules::RuleTable;
use crate::analysis::scoring::deduction_score;
use crate::analysis::{Analyzer, StandardAnalysis};
use crate::domain::{AnalysisError, Finding, Standard};
use async_trait::async_trait;

/// Rule-set analyzer over a keyword table
pub struct RuleSetAnalyzer {
    table: &'static RuleTable,
}

impl RuleSetAnalyzer {
    /// Create an analyzer over the built-in rule table
    pub fn new() -> Self {
        Self {
            table: RuleTable::builtin(),
        }
    }

    /// Scan text against the rule table
    ///
    /// The text is lower-cased once; tables are walked in severity order
    /// (critical, warning, info) and each table in file order, so the
    /// output ordering is stable across runs.
    pub fn scan(&self, text: &str) -> Vec<Finding> {
        let lower = text.to_lowercase();
        let mut findings = Vec::new();

        for (severity, rules) in self.table.by_severity() {
            for rule in rules {
                if rule.matches(&lower) {
                    findings.push(Finding::new(
                        severity,
                        rule.title.clone(),
                        rule.description.clone(),
                        rule.suggestion.clone(),
                    ));
                }
            }
        }

        findings
    }
}

impl Default for RuleSetAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Analyzer for RuleSetAnalyzer {
    async fn analyze(
        &self,
        sanitized_text: &str,
        _standard: &Standard,
    ) -> Result<StandardAnalysis, AnalysisError> {
        let findings = self.scan(sanitized_text);
        let score = deduction_score(&findings);
        let recommendations = findings.iter().map(|f| f.suggestion.clone()).collect();

        Ok(StandardAnalysis {
            score,
            findings,
            recommendations,
        })
    }

    fn name(&self) -> &'static str {
        "ruleset"
    }
}
