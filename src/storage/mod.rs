//! Report persistence
//!
//! The engine never depends on persistence succeeding; stores are
//! collaborators the surrounding application writes through after a scan
//! returns.

pub mod jsonl;
pub mod memory;
pub mod traits;

use crate::config::{StorageConfig, StorageTarget};
use crate::domain::Result;
use std::sync::Arc;

pub use jsonl::JsonlStore;
pub use memory::{MemoryStore, StoredReport};
pub use traits::{ActionEntry, ReportStore};

/// Create a report store from configuration
pub fn create_store(config: &StorageConfig) -> Result<Arc<dyn ReportStore>> {
    match config.target {
        StorageTarget::Memory => Ok(Arc::new(MemoryStore::new())),
        StorageTarget::Jsonl => Ok(Arc::new(JsonlStore::new(&config.path)?)),
    }
}
