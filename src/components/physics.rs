use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Accelerations produced by one plane step, handed to the integrator.
///
/// Transient: overwritten every tick and never read back by the aerodynamic model.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyAccelerations {
    /// Rotational acceleration in body axes (roll, pitch, yaw).
    pub angular: Vector3<f64>,
    /// Linear acceleration in body axes.
    pub linear: Vector3<f64>,
}

impl BodyAccelerations {
    pub fn new(angular: Vector3<f64>, linear: Vector3<f64>) -> Self {
        Self { angular, linear }
    }

    pub fn is_finite(&self) -> bool {
        self.angular.iter().chain(self.linear.iter()).all(|v| v.is_finite())
    }
}
