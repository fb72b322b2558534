use bevy::prelude::*;

use crate::components::{
    AirData, BodyAccelerations, Plane, PlaneConfig, ServoInputs, SpatialComponent,
    SEA_LEVEL_DENSITY,
};
use crate::resources::{PhysicsConfig, PlaneNoise, SensorNoiseConfig};
use crate::systems::plane_step_system;

/// Plane simulation stages within `FixedUpdate`.
///
/// External integrators should run in `Integration` so they see the
/// accelerations written during `Aerodynamics` on the same tick.
#[derive(Debug, Hash, PartialEq, Eq, Clone, SystemSet)]
pub enum PlaneSimSet {
    Aerodynamics,
    Integration,
}

/// Plugin spawning a single plane and stepping its force model every fixed tick.
///
/// Rigid-body integration is left to the host application.
pub struct PlaneSimPlugin {
    /// Vehicle description, validated before anything is registered.
    config: PlaneConfig,
    physics: PhysicsConfig,
    /// Gaussian sensor noise and its seed; `None` disables noise.
    noise: Option<(SensorNoiseConfig, u64)>,
    initial_state: SpatialComponent,
    density: f64,
}

impl PlaneSimPlugin {
    pub fn new(config: PlaneConfig) -> Self {
        PlaneSimPlugin {
            config,
            physics: PhysicsConfig::default(),
            noise: None,
            initial_state: SpatialComponent::default(),
            density: SEA_LEVEL_DENSITY,
        }
    }

    pub fn with_physics(mut self, physics: PhysicsConfig) -> Self {
        self.physics = physics;
        self
    }

    pub fn with_noise(mut self, noise: SensorNoiseConfig, seed: u64) -> Self {
        self.noise = Some((noise, seed));
        self
    }

    pub fn with_initial_state(mut self, spatial: SpatialComponent) -> Self {
        self.initial_state = spatial;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Spawns the plane entity with its kinematic state primed from `spatial`.
    fn setup_plane(
        mut commands: Commands,
        config: PlaneConfig,
        plane: Plane,
        spatial: SpatialComponent,
        density: f64,
    ) {
        let air_data = AirData::from_spatial(&spatial, density);
        info!(
            "Spawning plane '{}' at airspeed {:.2} m/s",
            config.name, air_data.true_airspeed
        );

        commands.spawn((
            Name::new(config.name.clone()),
            config,
            plane,
            ServoInputs::neutral(),
            spatial,
            air_data,
            BodyAccelerations::default(),
        ));
    }
}

impl Plugin for PlaneSimPlugin {
    fn build(&self, app: &mut App) {
        let plane = match Plane::new(&self.config, &self.physics) {
            Ok(plane) => plane,
            Err(err) => {
                error!("Plane '{}' not added: {}", self.config.name, err);
                return;
            }
        };

        let noise = match self.noise {
            Some((config, seed)) => PlaneNoise::seeded(config, seed),
            None => PlaneNoise::Disabled,
        };

        let config = self.config.clone();
        let physics = self.physics;
        let spatial = self.initial_state.clone();
        let density = self.density;

        app.insert_resource(physics)
            .insert_resource(noise)
            .insert_resource(Time::<Fixed>::from_seconds(physics.timestep))
            .configure_sets(
                FixedUpdate,
                (PlaneSimSet::Aerodynamics, PlaneSimSet::Integration).chain(),
            )
            .add_systems(
                Startup,
                move |commands: Commands| {
                    Self::setup_plane(
                        commands,
                        config.clone(),
                        plane.clone(),
                        spatial.clone(),
                        density,
                    )
                },
            )
            .add_systems(
                FixedUpdate,
                plane_step_system.in_set(PlaneSimSet::Aerodynamics),
            );
    }
}
