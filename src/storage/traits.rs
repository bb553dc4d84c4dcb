//! Storage abstraction traits
//!
//! Persistence is a collaborator, not part of the scan pipeline: the
//! engine returns its report whether or not a store accepts it. These
//! traits define the interface the surrounding application persists
//! through.

use crate::domain::{ComplianceReport, Result, UserId};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-action audit entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActionEntry {
    /// Action name, e.g. `compliance_scan`
    pub action: String,
    /// Arbitrary structured details
    pub details: serde_json::Value,
    /// When the action happened
    pub timestamp: DateTime<Utc>,
}

impl ActionEntry {
    /// Create an entry stamped now
    pub fn new(action: impl Into<String>, details: serde_json::Value) -> Self {
        Self {
            action: action.into(),
            details,
            timestamp: Utc::now(),
        }
    }
}

/// Report store trait
///
/// Implementations persist finished reports and user-action entries.
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Persist a finished report for a user
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be stored.
    async fn save_report(&self, report: &ComplianceReport, user: &UserId) -> Result<()>;

    /// Persist a user-action audit entry
    ///
    /// # Errors
    ///
    /// Returns an error if the entry cannot be stored.
    async fn log_action(&self, entry: &ActionEntry) -> Result<()>;
}
