use nalgebra::Vector3;

use crate::components::{AerodynamicCoefficients, AirData, ControlDeflections};

/// Calculates the aerodynamic moment in the BODY frame, including the moment
/// induced by `force` acting at the centre-of-gravity offset.
///
/// The moment coefficients are zeroed at exactly zero airspeed. The CG term
/// is always added; `force` is itself zero in that case.
pub fn calculate_aerodynamic_torque(
    coeffs: &AerodynamicCoefficients,
    air_data: &AirData,
    angular_velocity_body: &Vector3<f64>,
    controls: &ControlDeflections,
    force: &Vector3<f64>,
) -> Vector3<f64> {
    let alpha = air_data.alpha;
    let beta = air_data.beta;
    let airspeed = air_data.true_airspeed;
    let span = coeffs.geometry.wing_span;
    let chord = coeffs.geometry.mac;

    let p = angular_velocity_body.x;
    let q = angular_velocity_body.y;
    let r = angular_velocity_body.z;

    let q_bar = air_data.dynamic_pressure() * coeffs.geometry.wing_area;

    let moment = if air_data.is_still() {
        Vector3::zeros()
    } else {
        let roll = &coeffs.roll;
        let pitch = &coeffs.pitch;
        let yaw = &coeffs.yaw;

        let la = q_bar
            * span
            * (roll.c_l_0
                + roll.c_l_beta * beta
                + roll.c_l_p * span * p / (2.0 * airspeed)
                + roll.c_l_r * span * r / (2.0 * airspeed)
                + roll.c_l_deltaa * controls.aileron
                + roll.c_l_deltar * controls.rudder);
        let ma = q_bar
            * chord
            * (pitch.c_m_0
                + pitch.c_m_alpha * alpha
                + pitch.c_m_q * chord * q / (2.0 * airspeed)
                + pitch.c_m_deltae * controls.elevator);
        let na = q_bar
            * span
            * (yaw.c_n_0
                + yaw.c_n_beta * beta
                + yaw.c_n_p * span * p / (2.0 * airspeed)
                + yaw.c_n_r * span * r / (2.0 * airspeed)
                + yaw.c_n_deltaa * controls.aileron
                + yaw.c_n_deltar * controls.rudder);

        Vector3::new(la, ma, na)
    };

    moment + cg_offset_moment(&coeffs.cg_offset, force)
}

/// Moment from a force acting at `offset`, i.e. offset × force.
pub fn cg_offset_moment(offset: &Vector3<f64>, force: &Vector3<f64>) -> Vector3<f64> {
    Vector3::new(
        offset.y * force.z - offset.z * force.y,
        -offset.x * force.z + offset.z * force.x,
        -offset.y * force.x + offset.x * force.y,
    )
}
