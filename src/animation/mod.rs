pub mod clock;
pub mod easing;

pub use clock::AnimationClock;
pub use easing::{ease, out_cubic_inverse, Easing};
