//! Durable session mirror interface.
//!
//! The mirror is a string-keyed, string-valued store scoped to the browsing
//! session. In a web target this is backed by session storage; here it is an
//! injected trait satisfied by SQLite ([`crate::store::sqlite_mirror::SqliteMirror`])
//! or an in-memory map for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::types::errors::MirrorError;

/// Trait defining the durable mirror interface.
pub trait SessionMirror {
    /// Reads the value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, MirrorError>;

    /// Stores `value` under `key`, overwriting any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), MirrorError>;

    /// Removes the value stored under `key`. Removing an absent key is not an error.
    fn remove(&mut self, key: &str) -> Result<(), MirrorError>;
}

/// In-memory mirror.
///
/// Clones share the underlying map and write counter, so a caller can hand
/// one clone to a store and keep another to observe what was written — the
/// write counter backs the idempotent-sampling guarantee (identical
/// consecutive samples must not rewrite the mirror).
#[derive(Debug, Clone, Default)]
pub struct MemoryMirror {
    entries: Arc<Mutex<HashMap<String, String>>>,
    writes: Arc<AtomicU64>,
}

impl MemoryMirror {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of writes performed since construction, across all clones.
    pub fn write_count(&self) -> u64 {
        self.writes.load(Ordering::SeqCst)
    }
}

impl SessionMirror for MemoryMirror {
    fn read(&self, key: &str) -> Result<Option<String>, MirrorError> {
        let entries = self
            .entries
            .lock()
            .map_err(|e| MirrorError::Unavailable(e.to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), MirrorError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| MirrorError::Unavailable(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), MirrorError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| MirrorError::Unavailable(e.to_string()))?;
        entries.remove(key);
        Ok(())
    }
}
