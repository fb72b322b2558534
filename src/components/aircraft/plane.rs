use bevy::prelude::*;
use nalgebra::Vector3;

use crate::components::{
    AerodynamicCoefficients, AirData, BodyAccelerations, ConfigError, ControlDeflections,
    PlaneConfig, ServoInputs, SpatialComponent, ThrustMode,
};
use crate::resources::{NoiseSource, PhysicsConfig};
use crate::systems::aerodynamics::{calculate_aerodynamic_force, calculate_aerodynamic_torque};

/// A fixed-wing vehicle's constant properties and its per-tick force model.
///
/// Everything here is fixed at construction; the kinematic state lives in
/// [`SpatialComponent`] and [`AirData`].
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Plane {
    name: String,
    coefficients: AerodynamicCoefficients,
    mass: f64,
    thrust_scale: f64,
    thrust_mode: ThrustMode,
}

impl Plane {
    /// Builds a plane whose motor holds it level against gravity at the
    /// configured hover throttle.
    ///
    /// Both configurations are validated first, so a constructed plane never
    /// carries a zero mass or an infinite thrust scale into [`Plane::step`].
    pub fn new(config: &PlaneConfig, physics: &PhysicsConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        physics.validate()?;

        let thrust_scale = physics.thrust_scale(config.mass);
        debug!(
            "Plane '{}': mass {} kg, thrust scale {:.3} N, {:?} thrust",
            config.name, config.mass, thrust_scale, config.thrust_mode
        );

        Ok(Self {
            name: config.name.clone(),
            coefficients: config.aero_coef,
            mass: config.mass,
            thrust_scale,
            thrust_mode: config.thrust_mode,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn coefficients(&self) -> &AerodynamicCoefficients {
        &self.coefficients
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Thrust (N) at unit normalised throttle.
    pub fn thrust_scale(&self) -> f64 {
        self.thrust_scale
    }

    pub fn thrust_mode(&self) -> ThrustMode {
        self.thrust_mode
    }

    pub fn controls(&self, servos: &ServoInputs) -> ControlDeflections {
        ControlDeflections::from_servos(servos, self.thrust_mode)
    }

    /// Advances the force model by one tick.
    ///
    /// Flow angles come from the body velocity cached in `air_data`, which is
    /// refreshed from `spatial` only after the force and torque are evaluated.
    /// A change of earth-frame velocity therefore reaches the aerodynamics one
    /// tick later. Noise is applied to the returned linear acceleration and to
    /// `spatial.angular_velocity`.
    pub fn step<N: NoiseSource + ?Sized>(
        &self,
        servos: &ServoInputs,
        spatial: &mut SpatialComponent,
        air_data: &mut AirData,
        noise: &mut N,
    ) -> BodyAccelerations {
        let controls = self.controls(servos);

        air_data.update_flow_angles();

        let force = calculate_aerodynamic_force(
            &self.coefficients,
            air_data,
            &spatial.angular_velocity,
            &controls,
        );
        let angular = calculate_aerodynamic_torque(
            &self.coefficients,
            air_data,
            &spatial.angular_velocity,
            &controls,
            &force,
        );

        trace!(
            "{}: airspeed {:.3} alpha {:.4} beta {:.4} force {:?}",
            self.name,
            air_data.true_airspeed,
            air_data.alpha,
            air_data.beta,
            force
        );

        air_data.refresh_body_velocity(spatial);

        let thrust = controls.throttle * self.thrust_scale;
        let mut linear = Vector3::new(thrust / self.mass, 0.0, 0.0) + force;

        noise.add_noise(
            thrust.abs() / self.thrust_scale,
            &mut spatial.angular_velocity,
            &mut linear,
        );

        BodyAccelerations::new(angular, linear)
    }
}
