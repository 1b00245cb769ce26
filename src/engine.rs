//! Engine core for scrollkeep.
//!
//! Central struct composing the position store, persistence scheduler, and
//! restore controller behind the route-facing API that page components
//! consume. Explicitly constructed and owned — no hidden singleton — so tests
//! build as many independent engines as they need.

use std::sync::Arc;

use crate::config::EngineConfig;
use crate::expiry::ExpiryPolicy;
use crate::restore::{RestoreController, RestorePhase};
use crate::runtime::clock::Clock;
use crate::runtime::viewport::Viewport;
use crate::sampler::PersistenceScheduler;
use crate::store::mirror::SessionMirror;
use crate::store::position_store::{PositionStore, PositionStoreTrait};
use crate::types::PositionMap;

/// Scroll persistence engine for one scrollable surface.
///
/// Data flow: route change → restore lookup and apply → sampler ticks write
/// changed offsets back into the store and its durable mirror → on navigation
/// away, a final forced sample becomes the durable entry for the route key.
pub struct ScrollEngine {
    store: PositionStore,
    sampler: PersistenceScheduler,
    restore: RestoreController,
    clock: Arc<dyn Clock>,
    current_route: Option<String>,
}

impl ScrollEngine {
    /// Creates an engine and seeds the store from the durable mirror.
    pub fn new(config: &EngineConfig, mirror: Box<dyn SessionMirror + Send>, clock: Arc<dyn Clock>) -> Self {
        let mut store = PositionStore::new(mirror, &config.mirror_key, Arc::clone(&clock));
        store.load_from_mirror();

        Self {
            store,
            sampler: PersistenceScheduler::new(),
            restore: RestoreController::new(ExpiryPolicy::new(config.position_ttl_ms)),
            clock,
            current_route: None,
        }
    }

    /// Route entry: restore the saved position (if fresh) and start sampling.
    ///
    /// Any still-active previous route is flushed and stopped first, so two
    /// routes' sampling never overlaps. The restore is applied synchronously,
    /// before the caller paints, so the page never flashes at the default
    /// position. Returns the resulting restore phase.
    pub fn on_route_enter(&mut self, route_key: &str, viewport: &mut dyn Viewport) -> RestorePhase {
        if self.current_route.is_some() {
            self.sampler.deactivate(&mut self.store, viewport);
        }
        self.current_route = Some(route_key.to_string());

        let now_ms = self.clock.now_ms();
        if let Some(pending) = self.restore.activate(route_key, &mut self.store, now_ms) {
            self.restore.apply(&pending, viewport);
        }

        self.sampler.activate(route_key, &mut self.store, viewport);
        self.restore.phase()
    }

    /// One sampling tick for the active route. No-op when no route is active.
    pub fn on_tick(&mut self, viewport: &dyn Viewport) {
        self.sampler.tick(&mut self.store, viewport);
    }

    /// Route exit: final forced sample, then stop sampling.
    pub fn on_route_leave(&mut self, viewport: &dyn Viewport) {
        self.sampler.deactivate(&mut self.store, viewport);
        self.restore.reset();
        self.current_route = None;
    }

    pub fn current_route(&self) -> Option<&str> {
        self.current_route.as_deref()
    }

    pub fn restore_phase(&self) -> RestorePhase {
        self.restore.phase()
    }

    /// Read-only copy of the position map. Diagnostics only.
    pub fn snapshot(&self) -> PositionMap {
        self.store.snapshot()
    }

    /// Manual mirror resync. Diagnostics only.
    pub fn force_save(&mut self) {
        self.store.force_save();
    }

    /// Direct store access, for composition and tests.
    pub fn store(&self) -> &PositionStore {
        &self.store
    }
}
