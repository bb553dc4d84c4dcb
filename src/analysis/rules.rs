//! Keyword rule table
//!
//! The rule table is declarative data: `rules/compliance_rules.toml` is
//! embedded at compile time and parsed once. Table order is significant,
//! it defines the output ordering of issues of the same severity.

use crate::domain::Severity;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::sync::OnceLock;

/// A single keyword rule
///
/// Fires at most once per document when any of its keywords is a substring
/// of the lower-cased text. Title, description, and suggestion are static,
/// not derived from match context.
#[derive(Debug, Clone, Deserialize)]
pub struct Rule {
    /// Lower-case keywords, any of which triggers the rule
    pub keywords: Vec<String>,
    /// Issue title
    pub title: String,
    /// Issue description
    pub description: String,
    /// Remediation suggestion
    pub suggestion: String,
}

impl Rule {
    /// True when any keyword is a substring of the (lower-cased) text
    pub fn matches(&self, lower_text: &str) -> bool {
        self.keywords.iter().any(|kw| lower_text.contains(kw.as_str()))
    }
}

/// Severity-partitioned rule table
#[derive(Debug, Clone, Deserialize)]
pub struct RuleTable {
    /// Critical rules, checked first
    #[serde(default)]
    pub critical: Vec<Rule>,
    /// Warning rules
    #[serde(default)]
    pub warning: Vec<Rule>,
    /// Informational rules, checked last
    #[serde(default)]
    pub info: Vec<Rule>,
}

impl RuleTable {
    /// Parse a rule table from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse compliance rule table TOML")
    }

    /// The built-in rule table, parsed once
    pub fn builtin() -> &'static RuleTable {
        static TABLE: OnceLock<RuleTable> = OnceLock::new();
        TABLE.get_or_init(|| {
            RuleTable::from_toml(include_str!("../../rules/compliance_rules.toml"))
                .expect("embedded rule table must parse")
        })
    }

    /// Rules grouped with their severity, in scan order
    pub fn by_severity(&self) -> [(Severity, &[Rule]); 3] {
        [
            (Severity::Critical, self.critical.as_slice()),
            (Severity::Warning, self.warning.as_slice()),
            (Severity::Info, self.info.as_slice()),
        ]
    }

    /// Total number of rules
    pub fn len(&self) -> usize {
        self.critical.len() + self.warning.len() + self.info.len()
    }

    /// True when the table holds no rules
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_loads() {
        let table = RuleTable::builtin();
        assert_eq!(table.critical.len(), 5);
        assert_eq!(table.warning.len(), 5);
        assert_eq!(table.info.len(), 4);
    }

    #[test]
    fn test_rule_matches_any_keyword() {
        let rule = Rule {
            keywords: vec!["shared password".to_string(), "password is shared".to_string()],
            title: "t".to_string(),
            description: "d".to_string(),
            suggestion: "s".to_string(),
        };
        assert!(rule.matches("the password is shared among staff"));
        assert!(rule.matches("a shared password was found"));
        assert!(!rule.matches("passwords are rotated monthly"));
    }

    #[test]
    fn test_by_severity_order() {
        let table = RuleTable::builtin();
        let groups = table.by_severity();
        assert_eq!(groups[0].0, Severity::Critical);
        assert_eq!(groups[1].0, Severity::Warning);
        assert_eq!(groups[2].0, Severity::Info);
    }

    #[test]
    fn test_missing_sections_default_empty() {
        let table = RuleTable::from_toml(
            r#"
            [[critical]]
            keywords = ["unencrypted"]
            title = "Missing Encryption"
            description = "d"
            suggestion = "s"
            "#,
        )
        .unwrap();
        assert_eq!(table.critical.len(), 1);
        assert!(table.warning.is_empty());
        assert!(table.info.is_empty());
    }
}
