//! Deterministic seeded random number generation.
//!
//! Scene geometry must be reproducible from a single u32 seed across
//! platforms, so the generator advances its state with integer operations
//! only (mulberry32) and derives floats at the output step.

/// Salt applied to the scene seed to derive the ambient emitter's stream.
///
/// The emitter draws from its own generator so that ambient spawning never
/// disturbs structural reproducibility.
pub const AMBIENT_SEED_SALT: u32 = 0x9e37_79b9;

/// Mulberry32 generator producing floats in [0, 1).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u32,
}

impl SeededRng {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// The ambient stream for a scene seed.
    pub fn ambient(seed: u32) -> Self {
        Self::new(seed ^ AMBIENT_SEED_SALT)
    }

    /// Next float in [0, 1).
    pub fn next(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6d2b_79f5);
        let mut r = (self.state ^ (self.state >> 15)).wrapping_mul(self.state | 1);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(r | 61));
        f64::from(r ^ (r >> 14)) / 4_294_967_296.0
    }

    /// Uniform float in [min, max).
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        min + (max - min) * self.next()
    }
}
