//! Drawing surface abstraction.
//!
//! The painter issues immediate-mode 2D drawing calls through this trait.
//! [`super::CanvasSurface`] forwards them to a browser canvas context;
//! [`super::RecordingSurface`] captures the op stream so the frame output
//! can be asserted on natively.

/// A color stop for gradient fills: (offset in [0, 1], CSS color).
pub type GradientStop = (f64, &'static str);

/// 2D immediate-mode drawing surface.
///
/// Path verbs accumulate into a current path that the next `fill`,
/// `stroke` or `fill_radial_gradient` consumes, mirroring the canvas 2D
/// model.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn quadratic_to(&mut self, cx: f64, cy: f64, x: f64, y: f64);
    fn bezier_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    /// Full circle appended to the current path.
    fn circle(&mut self, x: f64, y: f64, radius: f64);
    /// Full ellipse appended to the current path.
    fn ellipse(&mut self, x: f64, y: f64, rx: f64, ry: f64);
    fn close_path(&mut self);

    fn fill(&mut self, color: &'static str);
    /// Stroke the current path with round caps.
    fn stroke(&mut self, color: &'static str, width: f64);
    /// Fill the current path with a radial gradient.
    fn fill_radial_gradient(
        &mut self,
        x0: f64,
        y0: f64,
        r0: f64,
        x1: f64,
        y1: f64,
        r1: f64,
        stops: &[GradientStop],
    );

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &'static str);
    /// Fill a rect with a linear gradient running along the given line.
    #[allow(clippy::too_many_arguments)]
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
    );

    fn set_global_alpha(&mut self, alpha: f64);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f64, y: f64);
    fn rotate(&mut self, angle: f64);
}
