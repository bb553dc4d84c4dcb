//! PHI redaction
//!
//! The redactor is a pure function of its input text: no I/O, no
//! randomness. Each pattern class runs as a separate substitution pass over
//! the progressively redacted text, followed by the identity pass for
//! names, facilities, and chronic conditions.

use crate::domain::{RiskLevel, SanitizationResult};
use crate::sanitize::patterns::PatternRegistry;
use anyhow::Result;
use regex::NoExpand;
use std::sync::Arc;

/// Number of distinct healthcare terms above which a LOW-risk document is
/// reclassified as MEDIUM.
pub const HEALTHCARE_TERM_THRESHOLD: usize = 5;

/// PHI redactor
///
/// Thread-safe; the compiled pattern registry is shared behind an `Arc`.
pub struct Redactor {
    registry: Arc<PatternRegistry>,
}

impl Redactor {
    /// Create a redactor with the built-in pattern catalog
    pub fn new() -> Result<Self> {
        Ok(Self {
            registry: Arc::new(PatternRegistry::builtin()?),
        })
    }

    /// Create a redactor with a custom pattern registry
    pub fn with_registry(registry: PatternRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }

    /// The registry this redactor runs
    pub fn registry(&self) -> &Arc<PatternRegistry> {
        &self.registry
    }

    /// Redact sensitive spans from `text`
    ///
    /// Returns the sanitized text, one `"{type}: {n} instances"` entry per
    /// pattern type that matched, and the risk classification.
    pub fn sanitize(&self, text: &str) -> SanitizationResult {
        let mut sanitized = text.to_owned();
        let mut removed_patterns = Vec::new();
        let mut risk_level = RiskLevel::Low;

        for pattern in self.registry.phi_patterns() {
            let count = pattern.regex.find_iter(&sanitized).count();
            if count == 0 {
                continue;
            }

            removed_patterns.push(format!("{}: {} instances", pattern.name, count));
            sanitized = pattern
                .regex
                .replace_all(&sanitized, NoExpand(&pattern.placeholder))
                .into_owned();

            if let Some(floor) = pattern.risk.floor() {
                risk_level = risk_level.max(floor);
            }
        }

        // Healthcare vocabulary check runs on the pattern-substituted text,
        // counting distinct terms present, and only raises LOW to MEDIUM.
        let term_count = self.healthcare_term_count(&sanitized);
        if term_count > HEALTHCARE_TERM_THRESHOLD && risk_level == RiskLevel::Low {
            risk_level = RiskLevel::Medium;
        }

        for identity in self.registry.identity_patterns() {
            sanitized = identity
                .regex
                .replace_all(&sanitized, NoExpand(&identity.replacement))
                .into_owned();
        }

        SanitizationResult {
            sanitized_text: sanitized,
            removed_patterns,
            risk_level,
        }
    }

    /// Count distinct healthcare terms present in `text`
    fn healthcare_term_count(&self, text: &str) -> usize {
        let lower = text.to_lowercase();
        self.registry
            .healthcare_terms()
            .iter()
            .filter(|term| lower.contains(term.as_str()))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn redactor() -> Redactor {
        Redactor::new().unwrap()
    }

    #[test]
    fn test_redacts_ssn() {
        let result = redactor().sanitize("SSN: 123-45-6789 on file.");
        assert!(result.sanitized_text.contains("[SSN_REDACTED]"));
        assert!(!result.sanitized_text.contains("123-45-6789"));
        assert_eq!(result.removed_patterns, vec!["ssn: 1 instances"]);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_redacts_multiple_instances() {
        let result = redactor().sanitize("Call 555-123-4567 or (555) 987-6543.");
        assert_eq!(result.removed_patterns, vec!["phone: 2 instances"]);
        assert_eq!(result.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn test_clean_text_is_low_risk() {
        let result = redactor().sanitize("The quarterly backup policy was reviewed.");
        assert!(result.removed_patterns.is_empty());
        assert_eq!(result.risk_level, RiskLevel::Low);
        assert!(result.is_clean());
    }

    #[test]
    fn test_ssn_beats_phone_for_risk() {
        let result = redactor().sanitize("SSN 987-65-4321, phone 555-123-4567");
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_identity_pass_patient_name() {
        let result = redactor().sanitize("Patient John Doe was admitted.");
        assert!(result.sanitized_text.contains("[PATIENT_NAME]"));
        assert!(!result.sanitized_text.contains("John Doe"));
    }

    #[test]
    fn test_identity_pass_physician_and_condition() {
        let result = redactor().sanitize("Dr. Jane Smith diagnosed diabetes.");
        assert!(result.sanitized_text.contains("[PHYSICIAN_NAME]"));
        assert!(result.sanitized_text.contains("[MEDICAL_CONDITION]"));
    }

    #[test]
    fn test_healthcare_terms_raise_low_to_medium() {
        let text = "diagnosis prognosis medication dosage prescription symptoms";
        let result = redactor().sanitize(text);
        assert_eq!(result.risk_level, RiskLevel::Medium);
        assert!(result.removed_patterns.is_empty());
    }

    #[test]
    fn test_five_healthcare_terms_stay_low() {
        let text = "diagnosis prognosis medication dosage prescription";
        let result = redactor().sanitize(text);
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_healthcare_terms_never_lower_high() {
        let text = "SSN 123-45-6789 diagnosis prognosis medication dosage prescription symptoms";
        let result = redactor().sanitize(text);
        assert_eq!(result.risk_level, RiskLevel::High);
    }

    #[test]
    fn test_empty_input() {
        let result = redactor().sanitize("");
        assert!(result.sanitized_text.is_empty());
        assert!(result.removed_patterns.is_empty());
        assert_eq!(result.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_deterministic() {
        let text = "Email a@b.com, MRN 12345, 123 Main Street";
        let first = redactor().sanitize(text);
        let second = redactor().sanitize(text);
        assert_eq!(first.sanitized_text, second.sanitized_text);
        assert_eq!(first.removed_patterns, second.removed_patterns);
        assert_eq!(first.risk_level, second.risk_level);
    }
}
