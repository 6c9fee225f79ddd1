pub mod algorithm;

pub use algorithm::{GrowthParams, SceneBuilder};
