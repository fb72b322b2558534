use bevy::prelude::*;
use nalgebra::Vector3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;
use serde::{Deserialize, Serialize};

use crate::utils::RngManager;

/// Injects sensor noise scaled by a magnitude, typically the throttle level.
pub trait NoiseSource {
    /// Perturbs the body rates and body linear acceleration in proportion to `magnitude`.
    fn add_noise(&mut self, magnitude: f64, gyro: &mut Vector3<f64>, accel_body: &mut Vector3<f64>);
}

/// Standard deviations applied at unit magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SensorNoiseConfig {
    /// Gyro noise (rad/s).
    pub gyro_noise: f64,
    /// Accelerometer noise (m/s²).
    pub accel_noise: f64,
}

impl Default for SensorNoiseConfig {
    fn default() -> Self {
        Self {
            gyro_noise: 0.1_f64.to_radians(),
            accel_noise: 0.3,
        }
    }
}

/// Noise source that leaves everything untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNoise;

impl NoiseSource for NoNoise {
    fn add_noise(&mut self, _magnitude: f64, _gyro: &mut Vector3<f64>, _accel_body: &mut Vector3<f64>) {}
}

/// Zero-mean Gaussian noise from an explicitly seeded generator.
#[derive(Debug, Clone)]
pub struct GaussianNoise {
    config: SensorNoiseConfig,
    rng: ChaCha8Rng,
}

impl GaussianNoise {
    pub fn new(config: SensorNoiseConfig, rng: ChaCha8Rng) -> Self {
        Self { config, rng }
    }

    /// Draws its stream from `manager` so runs with the same master seed repeat.
    pub fn from_manager(config: SensorNoiseConfig, manager: &RngManager) -> Self {
        Self::new(config, manager.plane_noise())
    }

    pub fn config(&self) -> &SensorNoiseConfig {
        &self.config
    }

    fn sample_vector(&mut self) -> Vector3<f64> {
        Vector3::new(
            self.rng.sample(StandardNormal),
            self.rng.sample(StandardNormal),
            self.rng.sample(StandardNormal),
        )
    }
}

impl NoiseSource for GaussianNoise {
    fn add_noise(&mut self, magnitude: f64, gyro: &mut Vector3<f64>, accel_body: &mut Vector3<f64>) {
        let scale = magnitude.abs();
        *gyro += self.sample_vector() * self.config.gyro_noise * scale;
        *accel_body += self.sample_vector() * self.config.accel_noise * scale;
    }
}

/// Noise used by the plane step system.
#[derive(Resource, Debug, Clone, Default)]
pub enum PlaneNoise {
    #[default]
    Disabled,
    Gaussian(GaussianNoise),
}

impl PlaneNoise {
    pub fn seeded(config: SensorNoiseConfig, seed: u64) -> Self {
        PlaneNoise::Gaussian(GaussianNoise::from_manager(config, &RngManager::new(seed)))
    }
}

impl NoiseSource for PlaneNoise {
    fn add_noise(&mut self, magnitude: f64, gyro: &mut Vector3<f64>, accel_body: &mut Vector3<f64>) {
        match self {
            PlaneNoise::Disabled => {}
            PlaneNoise::Gaussian(noise) => noise.add_noise(magnitude, gyro, accel_body),
        }
    }
}
