use std::f64::consts::PI;

use crate::components::AerodynamicCoefficients;

/// Sigmoid stall blend σ(α): 0 in attached flow, 1 when fully stalled.
///
/// Symmetric about α = 0 with transitions centred on ±α0. Evaluated as
/// `1/(1+e⁻) + 1/(1+e⁺) - 1/((1+e⁻)(1+e⁺))` so an overflowing exponential
/// drops its terms to zero instead of producing `inf/inf`.
pub fn stall_blend(coeffs: &AerodynamicCoefficients, alpha: f64) -> f64 {
    let alpha0 = coeffs.stall.alpha_stall;
    let m = coeffs.stall.m_coeff;

    let below = 1.0 + (-m * (alpha - alpha0)).exp();
    let above = 1.0 + (m * (alpha + alpha0)).exp();

    below.recip() + above.recip() - (below * above).recip()
}

/// Lift coefficient blending the linear lift curve with a flat-plate model
/// beyond stall.
pub fn lift_coefficient(coeffs: &AerodynamicCoefficients, alpha: f64) -> f64 {
    let sigmoid = stall_blend(coeffs, alpha);

    let linear = (1.0 - sigmoid) * (coeffs.lift.c_l_0 + coeffs.lift.c_l_alpha * alpha);
    let flat_plate = sigmoid * (2.0 * 1.0_f64.copysign(alpha) * alpha.sin().powi(2) * alpha.cos());

    linear + flat_plate
}

/// Drag coefficient from the parabolic drag polar.
pub fn drag_coefficient(coeffs: &AerodynamicCoefficients, alpha: f64) -> f64 {
    let aspect_ratio = coeffs.geometry.aspect_ratio();
    let c_l = coeffs.lift.c_l_0 + coeffs.lift.c_l_alpha * alpha;

    coeffs.drag.c_d_p + c_l.powi(2) / (PI * coeffs.drag.oswald * aspect_ratio)
}
