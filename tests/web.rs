//! Browser-side smoke tests for the core pipeline.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

use heart_tree_canvas::growth::{GrowthParams, SceneBuilder};
use heart_tree_canvas::render::RecordingSurface;
use heart_tree_canvas::scene::SceneSession;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn generation_is_deterministic_in_wasm() {
    let builder = SceneBuilder::new(GrowthParams::default());
    let a = builder.build(1, 800.0, 600.0);
    let b = builder.build(1, 800.0, 600.0);
    assert_eq!(a, b);
}

#[wasm_bindgen_test]
fn session_renders_without_panicking() {
    let mut session = SceneSession::new(800.0, 600.0);
    session.reset(42);

    let mut surface = RecordingSurface::new();
    let total = session.total_time();
    for step in 0..10 {
        session.render_at(&mut surface, step as f64 * total / 9.0);
    }
    assert!(surface.stroke_count() > 0);
}
