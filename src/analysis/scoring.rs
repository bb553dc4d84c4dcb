//! Deduction-based compliance scoring
//!
//! The single authoritative scoring formula: start at 100, deduct per
//! issue by severity, floor at 0. Any analyzer that cannot produce its own
//! numeric score derives one from its findings with this function.

use crate::domain::{Finding, Severity};

/// Points deducted per critical issue
pub const CRITICAL_DEDUCTION: i32 = 15;
/// Points deducted per warning issue
pub const WARNING_DEDUCTION: i32 = 8;
/// Points deducted per informational issue
pub const INFO_DEDUCTION: i32 = 3;

/// Compute the deduction score for a set of findings
///
/// `100 - 15*critical - 8*warning - 3*info`, clamped to `[0, 100]`.
pub fn deduction_score(findings: &[Finding]) -> u8 {
    let mut score: i32 = 100;
    for finding in findings {
        score -= match finding.severity {
            Severity::Critical => CRITICAL_DEDUCTION,
            Severity::Warning => WARNING_DEDUCTION,
            Severity::Info => INFO_DEDUCTION,
        };
    }
    score.clamp(0, 100) as u8
}
