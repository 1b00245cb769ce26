use std::sync::Arc;

use scrollkeep::config::EngineConfig;
use scrollkeep::engine::ScrollEngine;
use scrollkeep::restore::RestorePhase;
use scrollkeep::runtime::clock::FakeClock;
use scrollkeep::runtime::viewport::{FakeViewport, Viewport};
use scrollkeep::store::mirror::MemoryMirror;
use scrollkeep::store::position_store::PositionStoreTrait;
use scrollkeep::types::route::route_key;

const TTL: i64 = 3_600_000;

fn config() -> EngineConfig {
    EngineConfig {
        sample_interval_ms: 100,
        position_ttl_ms: TTL,
        mirror_key: "scroll_positions".to_string(),
    }
}

fn engine_with(mirror: MemoryMirror, clock: Arc<FakeClock>) -> ScrollEngine {
    ScrollEngine::new(&config(), Box::new(mirror), clock)
}

#[test]
fn test_scroll_navigate_away_and_back() {
    let clock = Arc::new(FakeClock::new(0));
    let mut engine = engine_with(MemoryMirror::new(), clock.clone());
    let mut viewport = FakeViewport::new(0, 5_000);

    let product = route_key("/produto/42", &[]);

    // Visit, scroll to y=300, wait two sampling intervals.
    engine.on_route_enter(&product, &mut viewport);
    viewport.scroll_to(0, 300);
    engine.on_tick(&viewport);
    clock.advance(100);
    engine.on_tick(&viewport);
    clock.advance(100);
    engine.on_route_leave(&viewport);

    // Elsewhere, the viewport resets to the top.
    engine.on_route_enter("/", &mut viewport);
    assert_eq!(viewport.offset().y, 300); // no entry for "/" yet, stays put
    viewport.scroll_to(0, 0);
    engine.on_route_leave(&viewport);

    // Back within the TTL window: restored to y=300.
    clock.advance(1_000);
    let phase = engine.on_route_enter(&product, &mut viewport);
    assert_eq!(phase, RestorePhase::Settled);
    assert_eq!(viewport.offset().y, 300);
}

#[test]
fn test_return_after_content_shrank_clamps() {
    let clock = Arc::new(FakeClock::new(0));
    let mut engine = engine_with(MemoryMirror::new(), clock);

    let mut viewport = FakeViewport::new(0, 2_000);
    engine.on_route_enter("/lista", &mut viewport);
    viewport.scroll_to(0, 1_000);
    engine.on_route_leave(&viewport);

    let mut shrunk = FakeViewport::new(0, 400);
    let phase = engine.on_route_enter("/lista", &mut shrunk);
    assert_eq!(phase, RestorePhase::Settled);
    assert_eq!(shrunk.offset().y, 400);
}

#[test]
fn test_return_after_ttl_does_not_restore() {
    let clock = Arc::new(FakeClock::new(0));
    let mut engine = engine_with(MemoryMirror::new(), clock.clone());
    let mut viewport = FakeViewport::new(0, 5_000);

    engine.on_route_enter("/p", &mut viewport);
    viewport.scroll_to(0, 300);
    engine.on_route_leave(&viewport);

    clock.advance(TTL + 1);
    viewport.scroll_to(0, 0);
    let phase = engine.on_route_enter("/p", &mut viewport);
    assert_eq!(phase, RestorePhase::NoRestore);
    assert_eq!(viewport.offset().y, 0);
    // The stale entry was garbage-collected on the read path.
    assert!(engine.store().get("/p").is_none());
}

#[test]
fn test_route_change_without_leave_flushes_previous() {
    let clock = Arc::new(FakeClock::new(0));
    let mut engine = engine_with(MemoryMirror::new(), clock);
    let mut viewport = FakeViewport::new(0, 5_000);

    engine.on_route_enter("/a", &mut viewport);
    viewport.scroll_to(0, 300);

    // Direct route switch: /a still gets its final position.
    engine.on_route_enter("/b", &mut viewport);
    assert_eq!(engine.store().get("/a").unwrap().y, 300);
    assert_eq!(engine.current_route(), Some("/b"));
}

#[test]
fn test_positions_survive_engine_restart() {
    let mirror = MemoryMirror::new();
    let clock = Arc::new(FakeClock::new(0));

    {
        let mut engine = engine_with(mirror.clone(), clock.clone());
        let mut viewport = FakeViewport::new(0, 5_000);
        engine.on_route_enter("/p", &mut viewport);
        viewport.scroll_to(0, 620);
        engine.on_route_leave(&viewport);
    }

    // A new engine over the same session mirror seeds from it.
    clock.advance(5_000);
    let mut engine = engine_with(mirror, clock);
    let mut viewport = FakeViewport::new(0, 5_000);
    let phase = engine.on_route_enter("/p", &mut viewport);
    assert_eq!(phase, RestorePhase::Settled);
    assert_eq!(viewport.offset().y, 620);
}

#[test]
fn test_snapshot_and_force_save_debug_surface() {
    let mirror = MemoryMirror::new();
    let clock = Arc::new(FakeClock::new(0));
    let mut engine = engine_with(mirror.clone(), clock);
    let mut viewport = FakeViewport::new(0, 5_000);

    engine.on_route_enter("/a", &mut viewport);
    viewport.scroll_to(0, 100);
    engine.on_tick(&viewport);

    let snap = engine.snapshot();
    assert_eq!(snap.len(), 1);
    assert_eq!(snap["/a"].y, 100);

    let writes = mirror.write_count();
    engine.force_save();
    assert_eq!(mirror.write_count(), writes + 1);
}

#[test]
fn test_idle_engine_ticks_are_noops() {
    let mirror = MemoryMirror::new();
    let clock = Arc::new(FakeClock::new(0));
    let mut engine = engine_with(mirror.clone(), clock);
    let viewport = FakeViewport::new(0, 5_000);

    engine.on_tick(&viewport);
    engine.on_route_leave(&viewport);
    assert!(engine.snapshot().is_empty());
    assert_eq!(mirror.write_count(), 0);
    assert_eq!(engine.current_route(), None);
    assert_eq!(engine.restore_phase(), RestorePhase::Idle);
}
