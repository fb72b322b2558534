use bevy::prelude::*;
use nalgebra::Vector3;
use plane_sitl::{
    components::{BodyAccelerations, SpatialComponent},
    plugins::PlaneSimSet,
    resources::PhysicsConfig,
};

/// Steady level flight along north.
pub fn create_cruise_spatial(speed: f64) -> SpatialComponent {
    SpatialComponent::level_flight(Vector3::new(0.0, 0.0, -100.0), speed, 0.0)
}

/// Servo frame with the four primary surfaces set and everything else neutral.
pub fn servo_frame(aileron: u16, elevator: u16, throttle: u16, rudder: u16) -> Vec<u16> {
    vec![aileron, elevator, throttle, rudder]
}

/// Accelerations seen by the integration stage on the most recent tick.
#[derive(Resource, Debug, Default)]
pub struct IntegratorLog {
    pub seen: Vec<BodyAccelerations>,
}

/// Forward-Euler integrator standing in for the host's rigid-body solver.
pub fn euler_integrator_system(
    mut query: Query<(&BodyAccelerations, &mut SpatialComponent)>,
    physics: Res<PhysicsConfig>,
    mut log: ResMut<IntegratorLog>,
) {
    let dt = physics.timestep;
    for (accel, mut spatial) in query.iter_mut() {
        log.seen.push(*accel);

        let linear_earth = spatial.attitude * accel.linear;
        spatial.velocity += linear_earth * dt;
        spatial.angular_velocity += accel.angular * dt;
        let velocity = spatial.velocity;
        spatial.position += velocity * dt;
    }
}

/// Registers [`euler_integrator_system`] in the integration stage.
pub fn add_integrator(app: &mut App) {
    app.init_resource::<IntegratorLog>().add_systems(
        FixedUpdate,
        euler_integrator_system.in_set(PlaneSimSet::Integration),
    );
}
