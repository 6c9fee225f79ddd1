//! A running scene: generated structure, ambient emitter, clock.
//!
//! All mutation happens from a single execution context, so regeneration
//! is a wholesale replacement: the next frame callback observes either the
//! fully-old or fully-new state, never a mix.

use crate::animation::AnimationClock;
use crate::growth::{GrowthParams, SceneBuilder};
use crate::particles::AmbientHeartSystem;
use crate::render::{painter, Surface};
use crate::scene::Scene;

pub struct SceneSession {
    scene: Scene,
    ambient: AmbientHeartSystem,
    clock: AnimationClock,
    params: GrowthParams,
    width: f64,
    height: f64,
}

impl SceneSession {
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_params(width, height, GrowthParams::default())
    }

    pub fn with_params(width: f64, height: f64, params: GrowthParams) -> Self {
        Self {
            scene: Scene::empty(width, height),
            ambient: AmbientHeartSystem::new(0, width, height),
            clock: AnimationClock::new(),
            params,
            width,
            height,
        }
    }

    /// Discard the previous scene and ambient stream and regenerate from
    /// the given seed.
    pub fn reset(&mut self, seed: u32) {
        self.scene = SceneBuilder::new(self.params).build(seed, self.width, self.height);
        self.ambient = AmbientHeartSystem::new(seed, self.width, self.height);
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn ambient(&self) -> &AmbientHeartSystem {
        &self.ambient
    }

    /// Total growth time of the current scene (ms).
    pub fn total_time(&self) -> f64 {
        self.scene.total_time()
    }

    pub fn start(&mut self, now: f64) {
        self.clock.start(now);
    }

    pub fn stop(&mut self) {
        self.clock.stop();
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Advance the ambient emitter and draw one frame at the given
    /// elapsed time.
    pub fn render_at<S: Surface>(&mut self, surface: &mut S, elapsed: f64) {
        self.ambient.update(elapsed);
        painter::paint(surface, &self.scene, self.ambient.hearts(), elapsed);
    }

    /// One frame of the animation loop. Returns false without drawing if
    /// the clock has been stopped, which lets an in-flight callback turn
    /// into a no-op.
    pub fn frame<S: Surface>(&mut self, surface: &mut S, now: f64) -> bool {
        if !self.clock.is_running() {
            return false;
        }
        let elapsed = self.clock.elapsed(now);
        self.render_at(surface, elapsed);
        true
    }
}
