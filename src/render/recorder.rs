//! Recording surface for headless verification of frame output.

use super::surface::{GradientStop, Surface};

/// One recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear { width: f64, height: f64 },
    BeginPath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    QuadraticTo { cx: f64, cy: f64, x: f64, y: f64 },
    BezierTo { c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64 },
    Circle { x: f64, y: f64, radius: f64 },
    Ellipse { x: f64, y: f64, rx: f64, ry: f64 },
    ClosePath,
    Fill { color: &'static str },
    Stroke { color: &'static str, width: f64 },
    RadialGradientFill { x0: f64, y0: f64, r0: f64, x1: f64, y1: f64, r1: f64, stops: Vec<GradientStop> },
    FillRect { x: f64, y: f64, w: f64, h: f64, color: &'static str },
    LinearGradientRect { x: f64, y: f64, w: f64, h: f64, x0: f64, y0: f64, x1: f64, y1: f64, stops: Vec<GradientStop> },
    GlobalAlpha { alpha: f64 },
    Save,
    Restore,
    Translate { x: f64, y: f64 },
    Rotate { angle: f64 },
}

/// Captures every drawing call as a [`DrawOp`].
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stroked paths (every root curve and branch segment
    /// issues exactly one).
    pub fn stroke_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Stroke { .. }))
            .count()
    }

    /// Number of radial-gradient fills (hearts and crown decoration).
    pub fn radial_fill_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::RadialGradientFill { .. }))
            .count()
    }

    /// Index of the first op matching the predicate.
    pub fn position_of(&self, pred: impl Fn(&DrawOp) -> bool) -> Option<usize> {
        self.ops.iter().position(pred)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ops.push(DrawOp::Clear { width, height });
    }

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::LineTo { x, y });
    }

    fn quadratic_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ops.push(DrawOp::QuadraticTo { cx, cy, x, y });
    }

    fn bezier_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.ops.push(DrawOp::BezierTo { c1x, c1y, c2x, c2y, x, y });
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        self.ops.push(DrawOp::Circle { x, y, radius });
    }

    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64) {
        self.ops.push(DrawOp::Ellipse { x, y, rx, ry });
    }

    fn close_path(&mut self) {
        self.ops.push(DrawOp::ClosePath);
    }

    fn fill(&mut self, color: &'static str) {
        self.ops.push(DrawOp::Fill { color });
    }

    fn stroke(&mut self, color: &'static str, width: f64) {
        self.ops.push(DrawOp::Stroke { color, width });
    }

    fn fill_radial_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
        stops: &[GradientStop],
    ) {
        self.ops.push(DrawOp::RadialGradientFill {
            x0,
            y0,
            r0,
            x1,
            y1,
            r1,
            stops: stops.to_vec(),
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &'static str) {
        self.ops.push(DrawOp::FillRect { x, y, w, h, color });
    }

    fn fill_rect_linear_gradient(
        &mut self,
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        x0: f64,
        y0: f64,
        x1: f64,
        y1: f64,
        stops: &[GradientStop],
    ) {
        self.ops.push(DrawOp::LinearGradientRect {
            x,
            y,
            w,
            h,
            x0,
            y0,
            x1,
            y1,
            stops: stops.to_vec(),
        });
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ops.push(DrawOp::GlobalAlpha { alpha });
    }

    fn save(&mut self) {
        self.ops.push(DrawOp::Save);
    }

    fn restore(&mut self) {
        self.ops.push(DrawOp::Restore);
    }

    fn translate(&mut self, x: f64, y: f64) {
        self.ops.push(DrawOp::Translate { x, y });
    }

    fn rotate(&mut self, angle: f64) {
        self.ops.push(DrawOp::Rotate { angle });
    }
}
