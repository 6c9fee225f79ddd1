//! Ambient floating hearts.
//!
//! A continuous stream of short-lived decorative hearts drifting up from
//! the lower canvas band, independent of the growth timeline. The emitter
//! owns its own RNG stream so spawning never disturbs structural
//! reproducibility.

use std::f64::consts::TAU;

use crate::animation::{ease, Easing};
use crate::math::Vec2;
use crate::rng::SeededRng;

/// Fraction of life spent fading in.
const FADE_IN_FRAC: f64 = 0.16;
/// Fraction of life spent fading out.
const FADE_OUT_FRAC: f64 = 0.24;

/// Parameters controlling the ambient heart stream
#[derive(Debug, Clone, Copy)]
pub struct EmitterParams {
    /// Delay window before the first batch (ms)
    pub first_delay: (f64, f64),
    /// Window between spawn batches (ms)
    pub interval: (f64, f64),
    /// Largest batch size
    pub max_batch: usize,
    /// Heart lifetime window (ms)
    pub lifetime: (f64, f64),
}

impl Default for EmitterParams {
    fn default() -> Self {
        Self {
            first_delay: (80.0, 260.0),
            interval: (120.0, 520.0),
            max_batch: 3,
            lifetime: (2600.0, 5200.0),
        }
    }
}

/// A single floating heart
#[derive(Debug, Clone, PartialEq)]
pub struct AmbientHeart {
    pub spawn_time: f64,
    pub duration: f64,
    pub origin: Vec2,
    /// Vertical rise distance over the full lifetime
    pub rise: f64,
    /// Horizontal drift amplitude
    pub drift: f64,
    /// Wobble cycles per lifetime
    pub wobble_freq: f64,
    pub phase: f64,
    pub size: f64,
    pub angle: f64,
}

impl AmbientHeart {
    /// Normalized lifetime at the given elapsed scene time. Negative
    /// before the heart is born, >= 1 once expired.
    pub fn life(&self, elapsed: f64) -> f64 {
        (elapsed - self.spawn_time) / self.duration
    }

    /// Position at a normalized life value: ease-out rise with a
    /// sinusoidal horizontal wobble.
    pub fn position(&self, life: f64) -> Vec2 {
        let life = life.clamp(0.0, 1.0);
        Vec2::new(
            self.origin.x + (life * self.wobble_freq * TAU + self.phase).sin() * self.drift,
            self.origin.y - self.rise * ease(life, Easing::OutCubic),
        )
    }

    /// Opacity at a normalized life value. Fade-in and fade-out multiply
    /// so both can apply near the life extremes.
    pub fn opacity(&self, life: f64) -> f64 {
        if !(0.0..1.0).contains(&life) {
            return 0.0;
        }
        let fade_in = (life / FADE_IN_FRAC).min(1.0);
        let fade_out = ((1.0 - life) / FADE_OUT_FRAC).min(1.0);
        fade_in * fade_out
    }
}

/// Emitter state: live hearts, the next spawn deadline, a dedicated RNG.
pub struct AmbientHeartSystem {
    hearts: Vec<AmbientHeart>,
    next_spawn_time: f64,
    rng: SeededRng,
    params: EmitterParams,
    width: f64,
    height: f64,
}

impl AmbientHeartSystem {
    pub fn new(seed: u32, width: f64, height: f64) -> Self {
        Self::with_params(seed, width, height, EmitterParams::default())
    }

    pub fn with_params(seed: u32, width: f64, height: f64, params: EmitterParams) -> Self {
        let mut rng = SeededRng::ambient(seed);
        let next_spawn_time = rng.range(params.first_delay.0, params.first_delay.1);
        Self {
            hearts: Vec::new(),
            next_spawn_time,
            rng,
            params,
            width,
            height,
        }
    }

    pub fn hearts(&self) -> &[AmbientHeart] {
        &self.hearts
    }

    /// Elapsed time at which the next batch is due.
    pub fn next_spawn_time(&self) -> f64 {
        self.next_spawn_time
    }

    /// Advance the emitter to the given elapsed time: spawn every batch
    /// that has come due, then prune expired hearts.
    pub fn update(&mut self, elapsed: f64) {
        while elapsed >= self.next_spawn_time {
            let at = self.next_spawn_time;
            self.spawn_batch(at);
            let (lo, hi) = self.params.interval;
            self.next_spawn_time += self.rng.range(lo, hi);
        }
        self.hearts.retain(|h| h.life(elapsed) < 1.0);
    }

    /// 1-3 hearts along the lower canvas band, each offset by a small
    /// sub-delay within the batch.
    fn spawn_batch(&mut self, at: f64) {
        let count = 1 + (self.rng.next() * self.params.max_batch as f64) as usize;
        let (life_lo, life_hi) = self.params.lifetime;

        for _ in 0..count {
            let origin = Vec2::new(
                self.rng.range(self.width * 0.06, self.width * 0.94),
                self.rng.range(self.height * 0.78, self.height * 0.96),
            );

            self.hearts.push(AmbientHeart {
                spawn_time: at + self.rng.range(0.0, 90.0),
                duration: self.rng.range(life_lo, life_hi),
                origin,
                rise: self.rng.range(self.height * 0.25, self.height * 0.55),
                drift: self.rng.range(10.0, 46.0),
                wobble_freq: self.rng.range(1.5, 3.5),
                phase: self.rng.range(0.0, TAU),
                size: self.rng.range(6.0, 14.0),
                angle: self.rng.range(-0.35, 0.35),
            });
        }
    }
}
