//! Report summary templating

use crate::domain::{SeverityCounts, Standard};

/// Build the one-sentence report summary
///
/// Format: `Document analyzed for {standards} compliance. Overall score:
/// {score}%. Found {c} critical, {w} warning, and {i} informational
/// issues.`
pub fn build_summary(standards: &[Standard], overall_score: u8, counts: &SeverityCounts) -> String {
    let joined = standards
        .iter()
        .map(|s| s.name().to_string())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Document analyzed for {joined} compliance. Overall score: {overall_score}%. \
         Found {} critical, {} warning, and {} informational issues.",
        counts.critical, counts.warning, counts.info
    )
}
