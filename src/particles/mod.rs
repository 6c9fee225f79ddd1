pub mod ambient;

pub use ambient::{AmbientHeart, AmbientHeartSystem, EmitterParams};
