//! Post-hoc sanitization validator
//!
//! Redaction is only trusted after the fact: the validator re-runs every
//! pattern class against both the original and the sanitized text and
//! fails the scan if any class kept its match count. This is the data-leak
//! gate in front of every external analysis call.

use crate::domain::SanitizationError;
use crate::sanitize::patterns::PatternRegistry;

/// Verify that redaction actually reduced every matched pattern class
///
/// A pattern class with a non-zero match count in `original` that is
/// unchanged in `sanitized` means redaction failed for that class.
///
/// # Errors
///
/// Returns [`SanitizationError::LeakDetected`] for the first leaking
/// class, which aborts the whole scan.
pub fn verify_sanitization(
    registry: &PatternRegistry,
    original: &str,
    sanitized: &str,
) -> Result<(), SanitizationError> {
    for pattern in registry.phi_patterns() {
        let before = pattern.regex.find_iter(original).count();
        if before == 0 {
            continue;
        }

        let after = pattern.regex.find_iter(sanitized).count();
        if after == before {
            return Err(SanitizationError::LeakDetected {
                pattern: pattern.name.clone(),
                count: after,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sanitize::redactor::Redactor;

    #[test]
    fn test_valid_sanitization_passes() {
        let redactor = Redactor::new().unwrap();
        let original = "SSN 123-45-6789, email jane@example.org";
        let result = redactor.sanitize(original);

        assert!(verify_sanitization(
            redactor.registry(),
            original,
            &result.sanitized_text
        )
        .is_ok());
    }

    #[test]
    fn test_unchanged_count_fails() {
        let registry = PatternRegistry::builtin().unwrap();
        let original = "SSN 123-45-6789";

        // Sanitized text that still carries the same match count
        let err = verify_sanitization(&registry, original, original).unwrap_err();
        let SanitizationError::LeakDetected { pattern, count } = err;
        assert_eq!(pattern, "ssn");
        assert_eq!(count, 1);
    }

    #[test]
    fn test_clean_text_passes_trivially() {
        let registry = PatternRegistry::builtin().unwrap();
        assert!(verify_sanitization(&registry, "no identifiers here", "no identifiers here").is_ok());
    }

    #[test]
    fn test_partial_redaction_passes_when_count_drops() {
        // One of two SSNs survives: count changed, so the validator accepts.
        // Mirrors the reference semantics of comparing counts, not presence.
        let registry = PatternRegistry::builtin().unwrap();
        let original = "123-45-6789 and 987-65-4321";
        let half_redacted = "[SSN_REDACTED] and 987-65-4321";
        assert!(verify_sanitization(&registry, original, half_redacted).is_ok());
    }
}
