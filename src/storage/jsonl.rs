//! JSONL file report store

use crate::domain::{AegisError, ComplianceReport, Result, UserId};
use crate::storage::traits::{ActionEntry, ReportStore};
use async_trait::async_trait;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;

/// Append-only JSONL store
///
/// Reports land in `reports.jsonl`, user actions in `actions.jsonl`, one
/// JSON object per line.
pub struct JsonlStore {
    reports_path: PathBuf,
    actions_path: PathBuf,
}

#[derive(Serialize)]
struct ReportLine<'a> {
    user_id: &'a str,
    #[serde(flatten)]
    report: &'a ComplianceReport,
}

impl JsonlStore {
    /// Create a store rooted at `dir`, creating the directory if needed
    pub fn new(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir).map_err(|e| {
            AegisError::Storage(format!(
                "Failed to create storage directory {}: {e}",
                dir.display()
            ))
        })?;

        Ok(Self {
            reports_path: dir.join("reports.jsonl"),
            actions_path: dir.join("actions.jsonl"),
        })
    }

    async fn append_line(path: &Path, line: String) -> Result<()> {
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await
            .map_err(|e| {
                AegisError::Storage(format!("Failed to open {}: {e}", path.display()))
            })?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| AegisError::Storage(format!("Failed to write {}: {e}", path.display())))?;
        file.write_all(b"\n")
            .await
            .map_err(|e| AegisError::Storage(format!("Failed to write {}: {e}", path.display())))?;

        Ok(())
    }
}

#[async_trait]
impl ReportStore for JsonlStore {
    async fn save_report(&self, report: &ComplianceReport, user: &UserId) -> Result<()> {
        let line = serde_json::to_string(&ReportLine {
            user_id: user.as_str(),
            report,
        })?;
        Self::append_line(&self.reports_path, line).await
    }

    async fn log_action(&self, entry: &ActionEntry) -> Result<()> {
        let line = serde_json::to_string(entry)?;
        Self::append_line(&self.actions_path, line).await
    }
}
