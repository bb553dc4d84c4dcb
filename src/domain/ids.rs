//! Domain identifier types with validation
//!
//! This module provides newtype wrappers for scan identifiers. Each type
//! ensures type safety and rejects empty identifiers at construction.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Document identifier newtype wrapper
///
/// Identifies the document a compliance report was produced for. The value
/// is caller-supplied (typically a storage path or UUID) and opaque to the
/// scan pipeline, which only threads it into report and issue identifiers.
///
/// # Examples
///
/// ```
/// use aegis::domain::ids::DocumentId;
/// use std::str::FromStr;
///
/// let id = DocumentId::from_str("doc-7d44b88c").unwrap();
/// assert_eq!(id.as_str(), "doc-7d44b88c");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Creates a new DocumentId from a string
    ///
    /// # Errors
    ///
    /// Returns an error if the identifier is empty or whitespace-only.
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("Document ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the document ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes self and returns the inner String
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DocumentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for DocumentId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Owning-user identifier newtype wrapper
///
/// Identifies the user a stored report or audit entry belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    /// Creates a new UserId from a string
    pub fn new(id: impl Into<String>) -> Result<Self, String> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err("User ID cannot be empty".to_string());
        }
        Ok(Self(id))
    }

    /// Returns the user ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for UserId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_id_valid() {
        let id = DocumentId::new("doc-123").unwrap();
        assert_eq!(id.as_str(), "doc-123");
        assert_eq!(id.to_string(), "doc-123");
    }

    #[test]
    fn test_document_id_empty() {
        assert!(DocumentId::new("").is_err());
        assert!(DocumentId::new("   ").is_err());
    }

    #[test]
    fn test_user_id_valid() {
        let id = UserId::new("user-456").unwrap();
        assert_eq!(id.as_str(), "user-456");
    }

    #[test]
    fn test_user_id_empty() {
        assert!(UserId::new("").is_err());
    }

    #[test]
    fn test_from_str() {
        let id: DocumentId = "doc-1".parse().unwrap();
        assert_eq!(id.as_str(), "doc-1");
        assert!("".parse::<DocumentId>().is_err());
    }
}
