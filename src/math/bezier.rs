use super::Vec2;

/// Quadratic Bezier curve: start, control, end
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadBezier {
    pub p0: Vec2,
    pub p1: Vec2,
    pub p2: Vec2,
}

impl QuadBezier {
    pub const fn new(p0: Vec2, p1: Vec2, p2: Vec2) -> Self {
        Self { p0, p1, p2 }
    }

    /// Evaluate the curve at parameter t in [0, 1].
    pub fn point_at(&self, t: f64) -> Vec2 {
        let t = t.clamp(0.0, 1.0);
        let u = 1.0 - t;
        self.p0.scale(u * u) + self.p1.scale(2.0 * u * t) + self.p2.scale(t * t)
    }

    /// Sub-curve covering [0, t] of this curve (de Casteljau split).
    ///
    /// The result is itself a quadratic Bezier, so a partially grown root
    /// can be stroked with a single quadratic path verb.
    pub fn truncated(&self, t: f64) -> QuadBezier {
        let t = t.clamp(0.0, 1.0);
        QuadBezier {
            p0: self.p0,
            p1: self.p0.lerp(&self.p1, t),
            p2: self.point_at(t),
        }
    }

    /// Approximate arc length from uniform parameter sampling.
    pub fn approximate_length(&self, samples: usize) -> f64 {
        let n = samples.max(2);
        (1..n)
            .map(|i| {
                let a = self.point_at((i - 1) as f64 / (n - 1) as f64);
                let b = self.point_at(i as f64 / (n - 1) as f64);
                a.distance(&b)
            })
            .sum()
    }
}
