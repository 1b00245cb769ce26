use std::sync::{Arc, Mutex};
use std::time::Duration;

use scrollkeep::config::EngineConfig;
use scrollkeep::engine::ScrollEngine;
use scrollkeep::runtime::clock::SystemClock;
use scrollkeep::runtime::driver::SamplerDriver;
use scrollkeep::runtime::viewport::{FakeViewport, Viewport};
use scrollkeep::store::mirror::MemoryMirror;

fn setup() -> (Arc<Mutex<ScrollEngine>>, Arc<Mutex<FakeViewport>>, SamplerDriver) {
    let engine = Arc::new(Mutex::new(ScrollEngine::new(
        &EngineConfig::default(),
        Box::new(MemoryMirror::new()),
        Arc::new(SystemClock),
    )));
    let viewport = Arc::new(Mutex::new(FakeViewport::new(0, 10_000)));
    let dyn_viewport: Arc<Mutex<dyn Viewport + Send>> = viewport.clone();
    let driver = SamplerDriver::new(engine.clone(), dyn_viewport, 10);
    (engine, viewport, driver)
}

#[tokio::test]
async fn test_driver_samples_scrolled_position() {
    let (engine, viewport, mut driver) = setup();

    {
        let mut engine = engine.lock().unwrap();
        let mut vp = viewport.lock().unwrap();
        engine.on_route_enter("/p", &mut *vp);
    }

    driver.start();
    assert!(driver.is_running());

    viewport.lock().unwrap().scroll_to(0, 250);
    tokio::time::sleep(Duration::from_millis(200)).await;

    driver.stop();
    assert!(!driver.is_running());

    let snap = engine.lock().unwrap().snapshot();
    assert_eq!(snap["/p"].y, 250);
}

#[tokio::test]
async fn test_stop_while_stopped_is_noop() {
    let (_, _, mut driver) = setup();
    driver.stop();
    driver.stop();
    assert!(!driver.is_running());
}

#[tokio::test]
async fn test_start_while_started_restarts_cleanly() {
    let (engine, viewport, mut driver) = setup();

    {
        let mut engine = engine.lock().unwrap();
        let mut vp = viewport.lock().unwrap();
        engine.on_route_enter("/p", &mut *vp);
    }

    driver.start();
    driver.start();
    assert!(driver.is_running());

    viewport.lock().unwrap().scroll_to(0, 90);
    tokio::time::sleep(Duration::from_millis(200)).await;
    driver.stop();

    let snap = engine.lock().unwrap().snapshot();
    assert_eq!(snap["/p"].y, 90);
}

#[tokio::test]
async fn test_no_ticks_after_stop() {
    let (engine, viewport, mut driver) = setup();

    {
        let mut engine = engine.lock().unwrap();
        let mut vp = viewport.lock().unwrap();
        engine.on_route_enter("/p", &mut *vp);
    }

    driver.start();
    viewport.lock().unwrap().scroll_to(0, 100);
    tokio::time::sleep(Duration::from_millis(100)).await;
    driver.stop();

    // Scroll after the driver stopped: the store must not pick it up.
    viewport.lock().unwrap().scroll_to(0, 999);
    tokio::time::sleep(Duration::from_millis(100)).await;

    let snap = engine.lock().unwrap().snapshot();
    assert_eq!(snap["/p"].y, 100);
}
