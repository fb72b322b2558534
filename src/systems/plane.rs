use bevy::prelude::*;

use crate::components::{AirData, BodyAccelerations, Plane, ServoInputs, SpatialComponent};
use crate::resources::PlaneNoise;

/// System stepping every plane's force model once per fixed tick.
/// Reads the latest servo outputs, refreshes the cached air data and writes
/// the resulting body accelerations for the integrator to consume.
pub fn plane_step_system(
    mut planes: Query<(
        &Plane,
        &ServoInputs,
        &mut SpatialComponent,
        &mut AirData,
        &mut BodyAccelerations,
    )>,
    mut noise: ResMut<PlaneNoise>,
) {
    for (plane, servos, mut spatial, mut air_data, mut accelerations) in planes.iter_mut() {
        *accelerations = plane.step(servos, &mut spatial, &mut air_data, &mut *noise);

        if !accelerations.is_finite() {
            warn!(
                "{}: non-finite accelerations {:?}, check the supplied state",
                plane.name(),
                *accelerations
            );
        }
    }
}
