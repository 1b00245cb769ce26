//! Restore controller: re-applies saved positions on route entry.
//!
//! Per route activation the controller runs lookup → validate → apply.
//! Validation applies the expiry policy; stale entries found on this read
//! path are removed from the store (lazy GC). A valid entry becomes a
//! [`PendingRestore`] stamped with the activation generation — if a newer
//! navigation supersedes it before it is applied, the apply is discarded
//! silently instead of scrolling the wrong page.

use crate::expiry::ExpiryPolicy;
use crate::runtime::viewport::Viewport;
use crate::store::position_store::{PositionStore, PositionStoreTrait};
use crate::types::ScrollOffset;

/// Where the controller stands for the current route activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestorePhase {
    /// No route active.
    Idle,
    /// A valid entry was found; its apply has not happened yet.
    Pending,
    /// No entry, or the entry was stale: the viewport keeps its natural default.
    NoRestore,
    /// Restoration applied; sampling takes over.
    Settled,
}

/// A restore that has been looked up and validated but not yet applied.
#[derive(Debug, Clone)]
pub struct PendingRestore {
    generation: u64,
    route_key: String,
    target: ScrollOffset,
}

impl PendingRestore {
    pub fn route_key(&self) -> &str {
        &self.route_key
    }

    pub fn target(&self) -> ScrollOffset {
        self.target
    }
}

/// Looks up, validates, and applies saved positions per route activation.
pub struct RestoreController {
    expiry: ExpiryPolicy,
    generation: u64,
    phase: RestorePhase,
}

impl RestoreController {
    pub fn new(expiry: ExpiryPolicy) -> Self {
        Self {
            expiry,
            generation: 0,
            phase: RestorePhase::Idle,
        }
    }

    pub fn phase(&self) -> RestorePhase {
        self.phase
    }

    /// Route entry: look up the store and validate freshness.
    ///
    /// Returns a [`PendingRestore`] when a fresh entry exists. Each call bumps
    /// the activation generation, cancelling any pending restore from a
    /// previous activation. Stale entries are removed from the store here.
    pub fn activate(
        &mut self,
        route_key: &str,
        store: &mut PositionStore,
        now_ms: i64,
    ) -> Option<PendingRestore> {
        self.generation += 1;

        let entry = match store.get(route_key) {
            Some(entry) => entry.clone(),
            None => {
                self.phase = RestorePhase::NoRestore;
                return None;
            }
        };

        if self.expiry.is_stale(&entry, now_ms) {
            store.remove(route_key);
            self.phase = RestorePhase::NoRestore;
            return None;
        }

        self.phase = RestorePhase::Pending;
        Some(PendingRestore {
            generation: self.generation,
            route_key: route_key.to_string(),
            target: entry.offset(),
        })
    }

    /// Applies a pending restore to the viewport.
    ///
    /// Returns false (and touches nothing) when the pending restore belongs to
    /// a superseded activation. The target is clamped to the viewport's
    /// current maximum offset, so content that shrank since the position was
    /// saved yields the nearest valid position.
    pub fn apply(&mut self, pending: &PendingRestore, viewport: &mut dyn Viewport) -> bool {
        if pending.generation != self.generation {
            return false;
        }

        let clamped = pending.target.clamp_to(viewport.max_offset());
        viewport.set_offset(clamped);
        self.phase = RestorePhase::Settled;
        true
    }

    /// Route exit: back to idle, cancelling any still-pending restore.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.phase = RestorePhase::Idle;
    }
}
