pub mod bezier;
pub mod vec2;

pub use bezier::QuadBezier;
pub use vec2::Vec2;
