//! Persistence scheduler: fixed-cadence viewport sampling.
//!
//! Decouples scroll-event volume (hundreds of events per second during a
//! fling) from write volume. The scheduler itself is synchronous and owns no
//! timer; something else calls [`PersistenceScheduler::tick`] at the configured
//! cadence — the tokio driver in `runtime::driver`, or a test loop.

use crate::runtime::viewport::Viewport;
use crate::store::position_store::{PositionStore, PositionStoreTrait};
use crate::types::ScrollOffset;

/// Samples the viewport for the active route and writes changed positions
/// into the store.
///
/// Lifecycle rules:
/// - activating while already active restarts cleanly (the superseded route
///   gets its final flush first);
/// - deactivating performs one forced write regardless of the unchanged
///   guard, so the last true position before navigation is never lost;
/// - deactivating while inactive is a no-op.
#[derive(Debug, Default)]
pub struct PersistenceScheduler {
    route_key: Option<String>,
    last_sample: Option<ScrollOffset>,
}

impl PersistenceScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.route_key.is_some()
    }

    pub fn active_route(&self) -> Option<&str> {
        self.route_key.as_deref()
    }

    /// Begins sampling for a route.
    ///
    /// If another route is still active its final position is flushed first,
    /// so two routes never overlap and entries cannot be cross-written to the
    /// wrong key.
    pub fn activate(&mut self, route_key: &str, store: &mut PositionStore, viewport: &dyn Viewport) {
        if self.is_active() {
            self.deactivate(store, viewport);
        }
        self.route_key = Some(route_key.to_string());
        self.last_sample = None;
    }

    /// One sampling tick: read the viewport, write if the offset changed.
    ///
    /// Repeated identical samples skip the write entirely, so N idle ticks
    /// cost exactly one mirror write. Ticking while inactive is a no-op.
    pub fn tick(&mut self, store: &mut PositionStore, viewport: &dyn Viewport) {
        let Some(route_key) = self.route_key.as_deref() else {
            return;
        };

        let offset = viewport.offset();
        if self.last_sample == Some(offset) {
            return;
        }

        store.set(route_key, offset.x, offset.y);
        self.last_sample = Some(offset);
    }

    /// Stops sampling and performs one final forced write for the route.
    pub fn deactivate(&mut self, store: &mut PositionStore, viewport: &dyn Viewport) {
        let Some(route_key) = self.route_key.take() else {
            return;
        };

        let offset = viewport.offset();
        store.set(&route_key, offset.x, offset.y);
        self.last_sample = None;
    }
}
