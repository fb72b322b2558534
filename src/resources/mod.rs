pub mod config;
pub mod noise;

pub use config::physics::PhysicsConfig;
pub use noise::{GaussianNoise, NoNoise, NoiseSource, PlaneNoise, SensorNoiseConfig};
