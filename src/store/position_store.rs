//! Position store: the authoritative in-memory map of saved scroll positions.
//!
//! Every mutation is mirrored to the durable session store as one JSON blob of
//! shape `{ "<routeKey>": { "x": _, "y": _, "timestamp": _ } }`. The in-memory
//! map always wins: a failed or corrupt mirror degrades the store to
//! memory-only operation with a logged warning, never a user-visible error.

use std::sync::Arc;

use log::warn;

use crate::runtime::clock::Clock;
use crate::store::mirror::SessionMirror;
use crate::types::{PositionMap, ScrollEntry};

/// Trait defining the position store interface.
pub trait PositionStoreTrait {
    fn get(&self, route_key: &str) -> Option<&ScrollEntry>;
    fn set(&mut self, route_key: &str, x: i64, y: i64);
    fn remove(&mut self, route_key: &str);
    fn load_from_mirror(&mut self);
    fn force_save(&mut self);
    fn snapshot(&self) -> PositionMap;
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool;
}

/// In-memory position map with a best-effort durable mirror.
pub struct PositionStore {
    positions: PositionMap,
    mirror: Box<dyn SessionMirror + Send>,
    mirror_key: String,
    clock: Arc<dyn Clock>,
    mirror_available: bool,
}

impl PositionStore {
    /// Creates an empty store. Call [`PositionStoreTrait::load_from_mirror`]
    /// once at startup to seed it from a previous session.
    pub fn new(mirror: Box<dyn SessionMirror + Send>, mirror_key: &str, clock: Arc<dyn Clock>) -> Self {
        Self {
            positions: PositionMap::new(),
            mirror,
            mirror_key: mirror_key.to_string(),
            clock,
            mirror_available: true,
        }
    }

    /// Whether the durable mirror is still in use (false after a storage failure).
    pub fn mirror_available(&self) -> bool {
        self.mirror_available
    }

    /// Serializes the map and writes it to the mirror.
    ///
    /// On the first failure the store degrades to memory-only for the rest of
    /// the session: one warning, no error surfaced to callers.
    fn sync_mirror(&mut self) {
        if !self.mirror_available {
            return;
        }

        let blob = match serde_json::to_string(&self.positions) {
            Ok(blob) => blob,
            Err(e) => {
                warn!("failed to serialize position map, skipping mirror sync: {}", e);
                return;
            }
        };

        if let Err(e) = self.mirror.write(&self.mirror_key, &blob) {
            warn!("session mirror write failed, continuing in memory only: {}", e);
            self.mirror_available = false;
        }
    }
}

impl PositionStoreTrait for PositionStore {
    /// Returns the saved entry for a route key. No side effects.
    fn get(&self, route_key: &str) -> Option<&ScrollEntry> {
        self.positions.get(route_key)
    }

    /// Saves a position for a route key, capturing the current timestamp.
    ///
    /// Overwrites any existing entry for the key (last-write-wins) and
    /// schedules a mirror write. Negative offsets are clamped to zero.
    fn set(&mut self, route_key: &str, x: i64, y: i64) {
        let entry = ScrollEntry {
            x: x.max(0),
            y: y.max(0),
            timestamp: self.clock.now_ms(),
        };
        self.positions.insert(route_key.to_string(), entry);
        self.sync_mirror();
    }

    /// Drops the entry for a route key and resyncs the mirror.
    ///
    /// Used by the restore read path to garbage-collect stale entries lazily.
    fn remove(&mut self, route_key: &str) {
        if self.positions.remove(route_key).is_some() {
            self.sync_mirror();
        }
    }

    /// Seeds the map from the durable mirror. Called once at startup.
    ///
    /// Entries that fail to parse are discarded individually, so partial
    /// corruption never invalidates the whole map. Read and parse errors are
    /// logged warnings only; they never propagate.
    fn load_from_mirror(&mut self) {
        let blob = match self.mirror.read(&self.mirror_key) {
            Ok(Some(blob)) => blob,
            Ok(None) => return,
            Err(e) => {
                warn!("session mirror read failed, starting in memory only: {}", e);
                self.mirror_available = false;
                return;
            }
        };

        let raw: serde_json::Map<String, serde_json::Value> = match serde_json::from_str(&blob) {
            Ok(raw) => raw,
            Err(e) => {
                warn!("session mirror blob is corrupt, discarding it: {}", e);
                // Memory wins: overwrite the corrupt blob with the (empty) map
                // so the next startup does not re-read it.
                self.sync_mirror();
                return;
            }
        };

        let mut dropped = 0usize;
        for (route_key, value) in raw {
            match serde_json::from_value::<ScrollEntry>(value) {
                Ok(entry) => {
                    self.positions.insert(route_key, entry);
                }
                Err(e) => {
                    warn!("discarding corrupt scroll entry for {}: {}", route_key, e);
                    dropped += 1;
                }
            }
        }

        // Resync the mirror from memory when anything was discarded, so the
        // corrupt entries are gone for good instead of resurfacing on every load.
        if dropped > 0 {
            self.sync_mirror();
        }
    }

    /// Manual mirror resync from memory. Diagnostics surface only.
    fn force_save(&mut self) {
        self.sync_mirror();
    }

    /// Read-only copy of the current map. Diagnostics surface only.
    fn snapshot(&self) -> PositionMap {
        self.positions.clone()
    }

    fn len(&self) -> usize {
        self.positions.len()
    }

    fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
