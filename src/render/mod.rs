pub mod canvas;
pub mod painter;
pub mod recorder;
pub mod surface;

pub use canvas::CanvasSurface;
pub use recorder::{DrawOp, RecordingSurface};
pub use surface::{GradientStop, Surface};
