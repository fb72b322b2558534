use nalgebra::Vector3;

use crate::components::{AerodynamicCoefficients, AirData, ControlDeflections};
use crate::systems::aerodynamics::{drag_coefficient, lift_coefficient};

/// Calculates the aerodynamic force in the BODY frame.
///
/// Lift and drag are evaluated in wind axes at the current angle of attack and
/// rotated into body x/z. The result is returned as the model's acceleration
/// contribution; mass is not divided out here.
///
/// # Arguments
/// * `coeffs` - Aircraft aerodynamic coefficients and reference geometry.
/// * `air_data` - Airspeed, α, β and density for this tick.
/// * `angular_velocity_body` - Rotational rates in the body frame (p, q, r).
/// * `controls` - Normalised control surface deflections.
///
/// # Returns
/// Zero when the airspeed is exactly zero, otherwise `(Fx, Fy, Fz)`.
pub fn calculate_aerodynamic_force(
    coeffs: &AerodynamicCoefficients,
    air_data: &AirData,
    angular_velocity_body: &Vector3<f64>,
    controls: &ControlDeflections,
) -> Vector3<f64> {
    let alpha = air_data.alpha;
    let beta = air_data.beta;
    let airspeed = air_data.true_airspeed;
    let span = coeffs.geometry.wing_span;
    let chord = coeffs.geometry.mac;

    let c_lift_a = lift_coefficient(coeffs, alpha);
    let c_drag_a = drag_coefficient(coeffs, alpha);
    let c_lift_q = coeffs.lift.c_l_q;
    let c_drag_q = coeffs.drag.c_d_q;

    let (sin_alpha, cos_alpha) = alpha.sin_cos();

    // Wind axes to body axes
    let c_x_a = -c_drag_a * cos_alpha + c_lift_a * sin_alpha;
    let c_x_q = -c_drag_q * cos_alpha + c_lift_q * sin_alpha;
    let c_z_a = -c_drag_a * sin_alpha - c_lift_a * cos_alpha;
    let c_z_q = -c_drag_q * sin_alpha - c_lift_q * cos_alpha;

    let q_bar = air_data.dynamic_pressure() * coeffs.geometry.wing_area;

    if air_data.is_still() {
        return Vector3::zeros();
    }

    let p = angular_velocity_body.x;
    let q = angular_velocity_body.y;
    let r = angular_velocity_body.z;

    let elevator = controls.elevator;
    let c_d_deltae = coeffs.drag.c_d_deltae;
    let c_l_deltae = coeffs.lift.c_l_deltae;
    let side = &coeffs.side_force;

    // Elevator drag grows with deflection magnitude while its lift stays signed
    let fx = q_bar
        * (c_x_a + c_x_q * chord * q / (2.0 * airspeed) - c_d_deltae * cos_alpha * elevator.abs()
            + c_l_deltae * sin_alpha * elevator);
    let fy = q_bar
        * (side.c_y_0
            + side.c_y_beta * beta
            + side.c_y_p * span * p / (2.0 * airspeed)
            + side.c_y_r * span * r / (2.0 * airspeed)
            + side.c_y_deltaa * controls.aileron
            + side.c_y_deltar * controls.rudder);
    let fz = q_bar
        * (c_z_a + c_z_q * chord * q / (2.0 * airspeed) - c_d_deltae * sin_alpha * elevator.abs()
            - c_l_deltae * cos_alpha * elevator);

    Vector3::new(fx, fy, fz)
}
