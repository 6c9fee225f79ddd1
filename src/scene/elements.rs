use crate::math::{QuadBezier, Vec2};

/// One quadratic curve segment of the root system. Immutable once
/// generated.
#[derive(Debug, Clone, PartialEq)]
pub struct RootCurve {
    pub curve: QuadBezier,
    pub width: f64,
    pub color: &'static str,
    /// Draw start relative to scene start (ms)
    pub start: f64,
    /// Draw duration (ms)
    pub duration: f64,
}

impl RootCurve {
    /// End of this curve's draw window.
    pub fn end_time(&self) -> f64 {
        self.start + self.duration
    }
}

/// One straight branch piece. Carries its own absolute coordinates; the
/// tree shape emerges from spatial chaining, not an explicit graph.
#[derive(Debug, Clone, PartialEq)]
pub struct BranchSegment {
    pub from: Vec2,
    pub to: Vec2,
    pub width: f64,
    pub color: &'static str,
    pub start: f64,
    pub duration: f64,
    /// Recursion depth, 0 = trunk
    pub depth: u32,
}

impl BranchSegment {
    pub fn end_time(&self) -> f64 {
        self.start + self.duration
    }
}

/// A heart leaf terminating a branch at max depth.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafHeart {
    pub position: Vec2,
    /// Resting rotation (radians); sway oscillates around it
    pub angle: f64,
    pub size: f64,
    pub start: f64,
    /// Per-heart offset for the pulse and sway oscillators
    pub phase: f64,
}
