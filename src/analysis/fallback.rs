//! Deterministic keyword fallback analysis
//!
//! Substituted for a standard whose analyzer failed or returned an
//! unparseable result. Intentionally crude: a small per-standard keyword
//! list, 5 points deducted per matched keyword, one INFO finding per
//! keyword. This path never fails.

use crate::analysis::StandardAnalysis;
use crate::domain::{Finding, Severity, Standard, DEFAULT_CONFIDENCE};

const HIPAA_KEYWORDS: &[&str] = &["patient", "medical", "health", "treatment", "diagnosis"];
const GDPR_KEYWORDS: &[&str] = &["personal", "data", "consent", "privacy", "processing"];
const GENERAL_KEYWORDS: &[&str] = &["password", "login", "access", "security", "encryption"];

/// Points deducted per matched fallback keyword
const KEYWORD_DEDUCTION: i32 = 5;

fn keywords_for(standard: &Standard) -> &'static [&'static str] {
    match standard {
        Standard::Hipaa => HIPAA_KEYWORDS,
        Standard::Gdpr => GDPR_KEYWORDS,
        Standard::General => GENERAL_KEYWORDS,
        Standard::Custom(_) => &[],
    }
}

/// Run the keyword fallback for one standard
///
/// Counts occurrences of each keyword in the lower-cased text; every
/// matched keyword deducts five points from a 100 baseline (floored at 0)
/// and emits one INFO finding with the default confidence.
pub fn keyword_fallback(sanitized_text: &str, standard: &Standard) -> StandardAnalysis {
    let lower = sanitized_text.to_lowercase();
    let mut findings = Vec::new();
    let mut score: i32 = 100;

    for keyword in keywords_for(standard) {
        let occurrences = lower.matches(keyword).count();
        if occurrences == 0 {
            continue;
        }

        findings.push(
            Finding::new(
                Severity::Info,
                format!("Contains {keyword} references"),
                format!("Document contains {occurrences} references to {keyword}"),
                format!("Review {keyword} handling for compliance"),
            )
            .with_confidence(DEFAULT_CONFIDENCE),
        );
        score -= KEYWORD_DEDUCTION;
    }

    StandardAnalysis {
        score: score.clamp(0, 100) as u8,
        findings,
        recommendations: vec!["Review document manually for compliance issues".to_string()],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hipaa_keywords_deduct() {
        let analysis = keyword_fallback("The patient received medical treatment.", &Standard::Hipaa);
        // patient, medical, treatment
        assert_eq!(analysis.score, 85);
        assert_eq!(analysis.findings.len(), 3);
        assert!(analysis
            .findings
            .iter()
            .all(|f| f.severity == Severity::Info && f.confidence == DEFAULT_CONFIDENCE));
    }

    #[test]
    fn test_occurrences_counted_in_description() {
        let analysis = keyword_fallback("data, data, and more data", &Standard::Gdpr);
        let finding = &analysis.findings[0];
        assert_eq!(finding.title, "Contains data references");
        assert!(finding.description.contains("3 references"));
        // One keyword matched: a single 5-point deduction regardless of count
        assert_eq!(analysis.score, 95);
    }

    #[test]
    fn test_no_matches_scores_100() {
        let analysis = keyword_fallback("nothing relevant", &Standard::General);
        assert_eq!(analysis.score, 100);
        assert!(analysis.findings.is_empty());
    }

    #[test]
    fn test_custom_standard_has_no_keywords() {
        let analysis = keyword_fallback(
            "patient data everywhere",
            &Standard::Custom("SOC2".to_string()),
        );
        assert_eq!(analysis.score, 100);
        assert!(analysis.findings.is_empty());
    }

    #[test]
    fn test_always_recommends_manual_review() {
        let analysis = keyword_fallback("", &Standard::Hipaa);
        assert_eq!(
            analysis.recommendations,
            vec!["Review document manually for compliance issues".to_string()]
        );
    }

    #[test]
    fn test_never_fails_on_odd_input() {
        let analysis = keyword_fallback("\u{0000}\u{FFFD} patient", &Standard::Hipaa);
        assert_eq!(analysis.score, 95);
    }
}
