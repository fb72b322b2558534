pub mod constants;
pub mod rng;

pub use constants::*;
pub use rng::{RngManager, PLANE_NOISE_STREAM};
