use bevy::prelude::*;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::components::SpatialComponent;

/// Sea-level standard density (kg/m³).
pub const SEA_LEVEL_DENSITY: f64 = 1.225;

/// Air-relative flow state seen by the aerodynamic model.
///
/// The body-frame velocity is a cached copy refreshed once per tick by the
/// plane step, so the angles read at the start of a tick describe the state
/// left behind by the previous one.
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirData {
    /// True airspeed, the magnitude of the body-frame velocity (m/s).
    pub true_airspeed: f64,
    /// Angle of attack (α) in radians.
    pub alpha: f64,
    /// Sideslip angle (β) in radians.
    pub beta: f64,
    /// Air density (kg/m³).
    pub density: f64,
    /// Cached body-frame velocity (m/s).
    pub velocity_body: Vector3<f64>,
}

impl Default for AirData {
    /// Still air at sea level.
    fn default() -> Self {
        Self {
            true_airspeed: 0.0,
            alpha: 0.0,
            beta: 0.0,
            density: SEA_LEVEL_DENSITY,
            velocity_body: Vector3::zeros(),
        }
    }
}

impl AirData {
    /// Primes the cached body velocity and angles from the current spatial state.
    pub fn from_spatial(spatial: &SpatialComponent, density: f64) -> Self {
        let mut air_data = Self {
            density,
            ..Default::default()
        };
        air_data.refresh_body_velocity(spatial);
        air_data.update_flow_angles();
        air_data
    }

    /// Recomputes α and β from the cached body velocity.
    pub fn update_flow_angles(&mut self) {
        let v = &self.velocity_body;
        self.alpha = v.z.atan2(v.x);
        self.beta = v.y.atan2(v.x);
    }

    /// Rotates the earth-frame velocity into body axes and updates the airspeed.
    pub fn refresh_body_velocity(&mut self, spatial: &SpatialComponent) {
        self.velocity_body = spatial.velocity_body();
        self.true_airspeed = self.velocity_body.norm();
    }

    /// Dynamic pressure ½ρV² (Pa).
    pub fn dynamic_pressure(&self) -> f64 {
        0.5 * self.density * self.true_airspeed.powi(2)
    }

    /// True when the airspeed is zero to within machine precision.
    pub fn is_still(&self) -> bool {
        self.true_airspeed.abs() < f64::EPSILON
    }
}
