//! Issue identifier generation
//!
//! Issue ids are assigned at synthesis time by an injected generator, so
//! the engine stays deterministic under test: production uses
//! [`RandomIdGenerator`], tests inject [`SequentialIdGenerator`].

use crate::domain::{DocumentId, Standard};
use chrono::Utc;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Issue id source
pub trait IdGenerator: Send + Sync {
    /// Produce the next id for an issue of `standard` within `document_id`
    fn issue_id(&self, document_id: &DocumentId, standard: &Standard) -> String;
}

/// Timestamp-plus-random-suffix id generator
///
/// Ids look like `doc-42-HIPAA-1726592130000-4817`: document id, standard,
/// millisecond timestamp, random suffix.
pub struct RandomIdGenerator;

impl IdGenerator for RandomIdGenerator {
    fn issue_id(&self, document_id: &DocumentId, standard: &Standard) -> String {
        let millis = Utc::now().timestamp_millis();
        let suffix: u32 = rand::thread_rng().gen_range(1000..10000);
        format!("{document_id}-{standard}-{millis}-{suffix}")
    }
}

/// Monotonic counter id generator, for deterministic tests
pub struct SequentialIdGenerator {
    counter: AtomicU64,
}

impl SequentialIdGenerator {
    /// Create a generator counting from 1
    pub fn new() -> Self {
        Self {
            counter: AtomicU64::new(1),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn issue_id(&self, document_id: &DocumentId, standard: &Standard) -> String {
        let n = self.counter.fetch_add(1, Ordering::Relaxed);
        format!("{document_id}-{standard}-{n:04}")
    }
}
