//! In-memory report store

use crate::domain::{ComplianceReport, Result, UserId};
use crate::storage::traits::{ActionEntry, ReportStore};
use async_trait::async_trait;
use tokio::sync::Mutex;

/// A stored report with its owner
#[derive(Debug, Clone)]
pub struct StoredReport {
    pub user: UserId,
    pub report: ComplianceReport,
}

/// In-memory store, used by tests and one-shot CLI runs
#[derive(Default)]
pub struct MemoryStore {
    reports: Mutex<Vec<StoredReport>>,
    actions: Mutex<Vec<ActionEntry>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of stored reports
    pub async fn reports(&self) -> Vec<StoredReport> {
        self.reports.lock().await.clone()
    }

    /// Snapshot of stored action entries
    pub async fn actions(&self) -> Vec<ActionEntry> {
        self.actions.lock().await.clone()
    }
}

#[async_trait]
impl ReportStore for MemoryStore {
    async fn save_report(&self, report: &ComplianceReport, user: &UserId) -> Result<()> {
        self.reports.lock().await.push(StoredReport {
            user: user.clone(),
            report: report.clone(),
        });
        Ok(())
    }

    async fn log_action(&self, entry: &ActionEntry) -> Result<()> {
        self.actions.lock().await.push(entry.clone());
        Ok(())
    }
}
