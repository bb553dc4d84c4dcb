//! Per-standard analysis prompts
//!
//! Each well-known standard has a fixed instruction block; the sanitized
//! document is appended to it. Custom standards have no prompt and are
//! analyzed by the keyword fallback instead.

use crate::domain::Standard;

const HIPAA_PROMPT: &str = r#"Analyze the following healthcare document for HIPAA compliance issues. Look for:
1. Unauthorized disclosure of PHI (Protected Health Information)
2. Missing patient consent documentation
3. Inadequate security measures mentioned
4. Improper data handling procedures
5. Missing privacy notices
6. Unauthorized access to medical records
7. Improper disposal of PHI
8. Missing audit trails

Return a JSON response with:
{
  "score": number (0-100),
  "issues": [
    {
      "type": "CRITICAL|WARNING|INFO",
      "category": "HIPAA",
      "title": "string",
      "description": "string",
      "suggestion": "string",
      "confidence": number (0-1)
    }
  ],
  "summary": "string",
  "recommendations": ["string"]
}"#;

const GDPR_PROMPT: &str = r#"Analyze the following document for GDPR compliance issues. Look for:
1. Missing data subject consent
2. Inadequate data processing legal basis
3. Missing privacy notices
4. Inadequate data subject rights
5. Improper data retention policies
6. Missing data protection impact assessments
7. Inadequate security measures
8. Cross-border data transfer issues

Return a JSON response with:
{
  "score": number (0-100),
  "issues": [
    {
      "type": "CRITICAL|WARNING|INFO",
      "category": "GDPR",
      "title": "string",
      "description": "string",
      "suggestion": "string",
      "confidence": number (0-1)
    }
  ],
  "summary": "string",
  "recommendations": ["string"]
}"#;

const GENERAL_PROMPT: &str = r#"Analyze the following document for general data privacy and security compliance issues. Look for:
1. Sensitive data exposure
2. Inadequate access controls
3. Missing encryption requirements
4. Poor data handling practices
5. Security vulnerabilities
6. Compliance gaps

Return a JSON response with:
{
  "score": number (0-100),
  "issues": [
    {
      "type": "CRITICAL|WARNING|INFO",
      "category": "GENERAL",
      "title": "string",
      "description": "string",
      "suggestion": "string",
      "confidence": number (0-1)
    }
  ],
  "summary": "string",
  "recommendations": ["string"]
}"#;

/// Instruction block for a standard, if one exists
pub fn prompt_for(standard: &Standard) -> Option<&'static str> {
    match standard {
        Standard::Hipaa => Some(HIPAA_PROMPT),
        Standard::Gdpr => Some(GDPR_PROMPT),
        Standard::General => Some(GENERAL_PROMPT),
        Standard::Custom(_) => None,
    }
}

/// Full prompt: instruction block plus the sanitized document
pub fn build_prompt(instruction: &str, sanitized_text: &str) -> String {
    format!("{instruction}\n\nDocument to analyze:\n{sanitized_text}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_standards_have_prompts() {
        assert!(prompt_for(&Standard::Hipaa).is_some());
        assert!(prompt_for(&Standard::Gdpr).is_some());
        assert!(prompt_for(&Standard::General).is_some());
    }

    #[test]
    fn test_custom_standard_has_none() {
        assert!(prompt_for(&Standard::Custom("SOC2".to_string())).is_none());
    }

    #[test]
    fn test_build_prompt_appends_document() {
        let prompt = build_prompt("Analyze this.", "[SSN_REDACTED] on file");
        assert!(prompt.starts_with("Analyze this."));
        assert!(prompt.ends_with("[SSN_REDACTED] on file"));
        assert!(prompt.contains("Document to analyze:"));
    }
}
