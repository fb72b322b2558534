pub mod components;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use components::{BodyAccelerations, Plane, PlaneConfig, ServoInputs};
pub use plugins::{PlaneSimPlugin, PlaneSimSet};
