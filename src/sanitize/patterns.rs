//! PHI pattern library
//!
//! Pattern tables are data, not code: the built-in catalog lives in
//! `patterns/phi_patterns.toml` and is embedded at compile time. A
//! deployment can point `sanitization.pattern_library` at a replacement
//! file with the same schema.

use crate::domain::RiskLevel;
use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;
use std::path::Path;

/// Risk contribution of a pattern class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskClass {
    /// Finding this class makes the document HIGH risk
    High,
    /// Finding this class makes the document at least MEDIUM risk
    Medium,
    /// No direct risk contribution
    None,
}

impl RiskClass {
    /// Risk level this class escalates to, if any
    pub fn floor(self) -> Option<RiskLevel> {
        match self {
            Self::High => Some(RiskLevel::High),
            Self::Medium => Some(RiskLevel::Medium),
            Self::None => None,
        }
    }
}

/// Pattern definition as it appears in the TOML catalog
#[derive(Debug, Deserialize)]
struct PatternDefinition {
    name: String,
    regex: String,
    placeholder: String,
    risk: RiskClass,
}

/// Identity-pass definition as it appears in the TOML catalog
#[derive(Debug, Deserialize)]
struct IdentityDefinition {
    regex: String,
    replacement: String,
}

#[derive(Debug, Default, Deserialize)]
struct TermTables {
    healthcare: Vec<String>,
}

/// Pattern library container
#[derive(Debug, Deserialize)]
struct PatternLibrary {
    patterns: Vec<PatternDefinition>,
    #[serde(default)]
    identity: Vec<IdentityDefinition>,
    #[serde(default)]
    terms: TermTables,
}

/// Compiled PHI pattern with metadata
#[derive(Debug, Clone)]
pub struct PhiPattern {
    /// Pattern type name, used in `removedPatterns` entries
    pub name: String,
    /// Compiled regex
    pub regex: Regex,
    /// Replacement token, e.g. `[SSN_REDACTED]`
    pub placeholder: String,
    /// Risk contribution
    pub risk: RiskClass,
}

/// Compiled identity-pass pattern
#[derive(Debug, Clone)]
pub struct IdentityPattern {
    /// Compiled regex
    pub regex: Regex,
    /// Replacement token, e.g. `[PATIENT_NAME]`
    pub replacement: String,
}

/// Pattern registry for PHI redaction
///
/// Pattern order is significant: substitution passes run in catalog order
/// and `removedPatterns` entries are emitted in the same order.
pub struct PatternRegistry {
    patterns: Vec<PhiPattern>,
    identity: Vec<IdentityPattern>,
    healthcare_terms: Vec<String>,
}

impl PatternRegistry {
    /// Create a new pattern registry from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref()).with_context(|| {
            format!(
                "Failed to read pattern library: {}",
                path.as_ref().display()
            )
        })?;

        Self::from_toml(&content)
    }

    /// Create a pattern registry from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        let library: PatternLibrary =
            toml::from_str(content).context("Failed to parse pattern library TOML")?;

        let mut patterns = Vec::with_capacity(library.patterns.len());
        for def in library.patterns {
            let regex = Regex::new(&def.regex)
                .with_context(|| format!("Invalid regex in pattern '{}'", def.name))?;
            patterns.push(PhiPattern {
                name: def.name,
                regex,
                placeholder: def.placeholder,
                risk: def.risk,
            });
        }

        let mut identity = Vec::with_capacity(library.identity.len());
        for def in library.identity {
            let regex = Regex::new(&def.regex)
                .with_context(|| format!("Invalid identity regex for '{}'", def.replacement))?;
            identity.push(IdentityPattern {
                regex,
                replacement: def.replacement,
            });
        }

        // Terms are matched against lower-cased text
        let healthcare_terms = library
            .terms
            .healthcare
            .into_iter()
            .map(|t| t.to_lowercase())
            .collect();

        Ok(Self {
            patterns,
            identity,
            healthcare_terms,
        })
    }

    /// Create the built-in pattern registry
    pub fn builtin() -> Result<Self> {
        let default_toml = include_str!("../../patterns/phi_patterns.toml");
        Self::from_toml(default_toml)
    }

    /// All PHI patterns, in catalog order
    pub fn phi_patterns(&self) -> &[PhiPattern] {
        &self.patterns
    }

    /// Identity-pass patterns, in catalog order
    pub fn identity_patterns(&self) -> &[IdentityPattern] {
        &self.identity
    }

    /// Healthcare vocabulary, lower-cased
    pub fn healthcare_terms(&self) -> &[String] {
        &self.healthcare_terms
    }

    /// Look up a PHI pattern by type name
    pub fn pattern(&self, name: &str) -> Option<&PhiPattern> {
        self.patterns.iter().find(|p| p.name == name)
    }
}
