use approx::assert_relative_eq;
use nalgebra::Vector3;
use plane_sitl::components::{AirData, BodyAccelerations};

/// Assert that every acceleration component is finite
#[track_caller]
pub fn assert_accelerations_valid(accel: &BodyAccelerations) {
    assert!(
        accel.linear.iter().all(|v| v.is_finite()),
        "Linear acceleration contains non-finite values: {:?}",
        accel.linear
    );
    assert!(
        accel.angular.iter().all(|v| v.is_finite()),
        "Angular acceleration contains non-finite values: {:?}",
        accel.angular
    );
}

/// Assert that cached air data is physically sensible
#[track_caller]
pub fn assert_air_data_valid(air_data: &AirData) {
    assert!(air_data.true_airspeed >= 0.0, "Airspeed must be non-negative");
    assert!(air_data.true_airspeed.is_finite(), "Airspeed must be finite");
    assert!(air_data.alpha.is_finite(), "Alpha is not finite");
    assert!(air_data.beta.is_finite(), "Beta is not finite");
    assert!(air_data.density > 0.0, "Density must be positive");
}

/// Assert that two vectors are approximately equal
#[track_caller]
pub fn assert_vector_eq(actual: &Vector3<f64>, expected: &Vector3<f64>, epsilon: f64) {
    assert_relative_eq!(actual.x, expected.x, epsilon = epsilon);
    assert_relative_eq!(actual.y, expected.y, epsilon = epsilon);
    assert_relative_eq!(actual.z, expected.z, epsilon = epsilon);
}
