use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use super::{AerodynamicCoefficients, ConfigError};
use crate::components::ThrustMode;

/// Construction-time description of a fixed-wing vehicle.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaneConfig {
    pub name: String,
    /// Total mass (kg).
    pub mass: f64,
    pub aero_coef: AerodynamicCoefficients,
    pub thrust_mode: ThrustMode,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self::small_uav()
    }
}

impl PlaneConfig {
    pub fn new(
        name: impl Into<String>,
        mass: f64,
        aero_coef: AerodynamicCoefficients,
        thrust_mode: ThrustMode,
    ) -> Self {
        Self {
            name: name.into(),
            mass,
            aero_coef,
            thrust_mode,
        }
    }

    pub fn small_uav() -> Self {
        Self::new(
            "plane",
            1.0,
            AerodynamicCoefficients::small_uav(),
            ThrustMode::Forward,
        )
    }

    /// Small UAV named after a frame string, with reversible thrust when the
    /// frame carries the `-revthrust` tag.
    pub fn for_frame(frame: &str) -> Self {
        Self {
            name: frame.to_string(),
            thrust_mode: ThrustMode::from_frame_name(frame),
            ..Self::small_uav()
        }
    }

    pub fn with_thrust_mode(mut self, thrust_mode: ThrustMode) -> Self {
        self.thrust_mode = thrust_mode;
        self
    }

    /// Rejects values that would make the model divide by zero or go non-finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let geometry = &self.aero_coef.geometry;
        let checks = [
            ("mass", self.mass),
            ("wing_area", geometry.wing_area),
            ("wing_span", geometry.wing_span),
            ("mac", geometry.mac),
            ("oswald", self.aero_coef.drag.oswald),
            ("m_coeff", self.aero_coef.stall.m_coeff),
        ];

        for (name, value) in checks {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::ValidationError(format!(
                    "{} must be positive and finite, got {} in '{}'",
                    name, value, self.name
                )));
            }
        }
        Ok(())
    }
}
