//! scrollkeep — scroll-position persistence and restoration engine.
//!
//! Entry point: console demo walking the engine through a navigate → scroll →
//! sample → leave → return cycle against a fake viewport and clock.

use std::sync::Arc;

use scrollkeep::config::EngineConfig;
use scrollkeep::engine::ScrollEngine;
use scrollkeep::expiry::ExpiryPolicy;
use scrollkeep::runtime::clock::{Clock, FakeClock};
use scrollkeep::runtime::viewport::{FakeViewport, Viewport};
use scrollkeep::store::mirror::MemoryMirror;
use scrollkeep::store::sqlite_mirror::SqliteMirror;
use scrollkeep::store::SessionMirror;
use scrollkeep::types::route::route_key;
use scrollkeep::types::ScrollEntry;

fn main() {
    println!();
    println!("╔══════════════════════════════════════════════════════════════╗");
    println!("║               scrollkeep v{} — Demo Mode                  ║", env!("CARGO_PKG_VERSION"));
    println!("║   Scroll-position persistence with a durable session mirror  ║");
    println!("╚══════════════════════════════════════════════════════════════╝");
    println!();

    demo_sqlite_mirror();
    demo_save_restore_cycle();
    demo_expiry();
    demo_clamp_on_shrink();

    println!();
    println!("═══════════════════════════════════════════════════════════════");
    println!("  ✅ All components demonstrated successfully!");
    println!("═══════════════════════════════════════════════════════════════");
}

fn section(name: &str) {
    println!("───────────────────────────────────────────────────────────────");
    println!("  📦 {}", name);
    println!("───────────────────────────────────────────────────────────────");
}

fn demo_sqlite_mirror() {
    section("SQLite Session Mirror");

    let mut mirror = SqliteMirror::open_in_memory().expect("Failed to open session mirror");
    mirror
        .write("scroll_positions", r#"{"/":{"x":0,"y":120,"timestamp":0}}"#)
        .expect("write failed");
    let blob = mirror.read("scroll_positions").expect("read failed");
    println!("  Stored and re-read blob: {}", blob.unwrap_or_default());
    println!("  ✓ SqliteMirror + migrations OK");
    println!();
}

fn demo_save_restore_cycle() {
    section("Save / Restore Cycle");

    let clock = Arc::new(FakeClock::new(1_000));
    let config = EngineConfig::default();
    let mut engine = ScrollEngine::new(&config, Box::new(MemoryMirror::new()), clock.clone());
    let mut viewport = FakeViewport::new(0, 5_000);

    let product = route_key("/produto/42", &[]);
    engine.on_route_enter(&product, &mut viewport);
    viewport.scroll_to(0, 300);
    engine.on_tick(&viewport);
    clock.advance(config.sample_interval_ms as i64);
    engine.on_tick(&viewport);
    engine.on_route_leave(&viewport);
    println!("  Scrolled {} to y=300, sampled twice, navigated away", product);

    viewport.scroll_to(0, 0);
    let phase = engine.on_route_enter(&product, &mut viewport);
    println!(
        "  Returned within TTL: phase {:?}, viewport restored to y={}",
        phase,
        viewport.offset().y
    );
    assert_eq!(viewport.offset().y, 300);
    println!("  ✓ ScrollEngine OK");
    println!();
}

fn demo_expiry() {
    section("Expiry Policy");

    let policy = ExpiryPolicy::default();
    let clock = FakeClock::new(0);
    let entry = ScrollEntry {
        x: 0,
        y: 150,
        timestamp: clock.now_ms(),
    };

    clock.advance(policy.ttl_ms() - 1);
    println!(
        "  age {}ms (TTL {}ms): stale = {}",
        entry.age_ms(clock.now_ms()),
        policy.ttl_ms(),
        policy.is_stale(&entry, clock.now_ms())
    );

    clock.advance(2);
    println!(
        "  age {}ms (TTL {}ms): stale = {}",
        entry.age_ms(clock.now_ms()),
        policy.ttl_ms(),
        policy.is_stale(&entry, clock.now_ms())
    );
    println!("  ✓ ExpiryPolicy OK");
    println!();
}

fn demo_clamp_on_shrink() {
    section("Clamp on Content Shrink");

    let clock = Arc::new(FakeClock::new(0));
    let mut engine = ScrollEngine::new(
        &EngineConfig::default(),
        Box::new(MemoryMirror::new()),
        clock,
    );

    let mut viewport = FakeViewport::new(0, 2_000);
    engine.on_route_enter("/lista", &mut viewport);
    viewport.scroll_to(0, 1_000);
    engine.on_route_leave(&viewport);

    // Content shorter on revisit: max offset drops from 2000 to 400.
    let mut shrunk = FakeViewport::new(0, 400);
    let phase = engine.on_route_enter("/lista", &mut shrunk);
    println!(
        "  Saved y=1000, content max now 400: phase {:?}, applied y={}",
        phase,
        shrunk.offset().y
    );
    assert_eq!(shrunk.offset().y, 400);
    println!("  ✓ RestoreController clamp OK");
    println!();
}
