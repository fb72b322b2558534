use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::ConfigError;
use crate::utils::{DEFAULT_TIMESTEP, GRAVITY, HOVER_THROTTLE};

/// Configuration for the physics system
#[derive(Resource, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Gravitational acceleration magnitude (m/s²).
    pub gravity: f64,
    /// Throttle fraction that holds the vehicle against gravity, used to
    /// scale normalised throttle into thrust.
    pub hover_throttle: f64,
    /// Fixed simulation step (s).
    pub timestep: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            hover_throttle: HOVER_THROTTLE,
            timestep: DEFAULT_TIMESTEP,
        }
    }
}

impl PhysicsConfig {
    /// Thrust per unit normalised throttle for a vehicle of `mass`.
    pub fn thrust_scale(&self, mass: f64) -> f64 {
        mass * self.gravity / self.hover_throttle
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.gravity.is_finite() && self.gravity > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "gravity must be positive, got {}",
                self.gravity
            )));
        }
        if !(self.hover_throttle > 0.0 && self.hover_throttle <= 1.0) {
            return Err(ConfigError::ValidationError(format!(
                "hover throttle must be in (0, 1], got {}",
                self.hover_throttle
            )));
        }
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(ConfigError::ValidationError(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        Ok(())
    }
}
