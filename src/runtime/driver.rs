//! Tokio timer driver for the sampling loop.
//!
//! The engine core is synchronous; this driver supplies the recurring timer,
//! calling [`ScrollEngine::on_tick`] at the configured cadence from a spawned
//! task. Stop is synchronous from the caller's perspective: the shutdown
//! signal is sent and the task handle aborted before `stop` returns, so a
//! superseded route's ticks can never land after the next route starts.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::engine::ScrollEngine;
use crate::runtime::viewport::Viewport;

/// Drives an engine's sampling ticks on a `tokio::time::interval`.
///
/// Starting while already started restarts cleanly; stopping while stopped is
/// a no-op. The driver never leaks its timer task: `stop` (and drop) abort it.
pub struct SamplerDriver {
    engine: Arc<Mutex<ScrollEngine>>,
    viewport: Arc<Mutex<dyn Viewport + Send>>,
    interval_ms: u64,
    shutdown: Option<watch::Sender<bool>>,
    handle: Option<JoinHandle<()>>,
}

impl SamplerDriver {
    pub fn new(
        engine: Arc<Mutex<ScrollEngine>>,
        viewport: Arc<Mutex<dyn Viewport + Send>>,
        interval_ms: u64,
    ) -> Self {
        Self {
            engine,
            viewport,
            interval_ms,
            shutdown: None,
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }

    /// Starts the tick loop. Must be called from within a tokio runtime.
    pub fn start(&mut self) {
        self.stop();

        let (tx, mut rx) = watch::channel(false);
        let engine = Arc::clone(&self.engine);
        let viewport = Arc::clone(&self.viewport);
        let interval_ms = self.interval_ms.max(1);

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_millis(interval_ms));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let Ok(vp) = viewport.lock() else { break };
                        let Ok(mut engine) = engine.lock() else { break };
                        engine.on_tick(&*vp);
                    }
                    changed = rx.changed() => {
                        if changed.is_err() || *rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        self.shutdown = Some(tx);
        self.handle = Some(handle);
    }

    /// Stops the tick loop. Safe to call when already stopped.
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(true);
        }
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

impl Drop for SamplerDriver {
    fn drop(&mut self) {
        self.stop();
    }
}
