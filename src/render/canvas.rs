//! Surface backed by a browser 2D canvas context.

use std::f64::consts::TAU;

use web_sys::{CanvasGradient, CanvasRenderingContext2d};

use super::surface::{GradientStop, Surface};

/// Forwards drawing calls to a `CanvasRenderingContext2d`.
///
/// Canvas calls only fail on invalid arguments (negative radii, malformed
/// colors); the painter never produces those, so failures are swallowed
/// rather than threaded through every drawing call.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        ctx.set_line_cap("round");
        Self { ctx }
    }

    fn apply_stops(gradient: &CanvasGradient, stops: &[GradientStop]) {
        for (offset, color) in stops {
            let _ = gradient.add_color_stop(*offset as f32, color);
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn begin_path(&mut self) {
        self.ctx.begin_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn quadratic_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        self.ctx.quadratic_curve_to(cx, cy, x, y);
    }

    fn bezier_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.ctx.bezier_curve_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) {
        let _ = self.ctx.arc(x, y, radius, 0.0, TAU);
    }

    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64) {
        let _ = self.ctx.ellipse(x, y, rx, ry, 0.0, 0.0, TAU);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn fill(&mut self, color: &'static str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
    }

    fn stroke(&mut self, color: &'static str, width: f64) {
        self.ctx.set_stroke_style_str(color);
        self.ctx.set_line_width(width);
        self.ctx.stroke();
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
        if let Ok(gradient) = self.ctx.create_radial_gradient(x0, y0, r0, x1, y1, r1) {
            Self::apply_stops(&gradient, stops);
            self.ctx.set_fill_style_canvas_gradient(&gradient);
            self.ctx.fill();
        }
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &'static str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
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
        let gradient = self.ctx.create_linear_gradient(x0, y0, x1, y1);
        Self::apply_stops(&gradient, stops);
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn save(&mut self) {
        self.ctx.save();
    }

    fn restore(&mut self) {
        self.ctx.restore();
    }

    fn translate(&mut self, x: f64, y: f64) {
        let _ = self.ctx.translate(x, y);
    }

    fn rotate(&mut self, angle: f64) {
        let _ = self.ctx.rotate(angle);
    }
}
