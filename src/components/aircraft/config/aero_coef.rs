use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use super::AircraftGeometry;

/// Full stability and control derivative set for the blended-stall plane model.
///
/// Angles are in radians, rates in rad/s. Rate derivatives are applied to the
/// non-dimensional rates (`b·p/2V`, `c·q/2V`, `b·r/2V`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AerodynamicCoefficients {
    pub stall: StallCoefficients,
    pub lift: LiftCoefficients,
    pub drag: DragCoefficients,
    pub side_force: SideForceCoefficients,
    pub roll: RollCoefficients,
    pub pitch: PitchCoefficients,
    pub yaw: YawCoefficients,
    pub geometry: AircraftGeometry,
    /// Body-frame displacement of the centre of gravity from the point the
    /// aerodynamic force and moment are computed about (m).
    pub cg_offset: Vector3<f64>,
}

/// Shape of the sigmoid used to blend attached and stalled lift.
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StallCoefficients {
    /// Stall angle of attack α0 (rad).
    pub alpha_stall: f64,
    /// Blend sharpness M; larger values give a more abrupt stall.
    pub m_coeff: f64,
}

/// Lift coefficients for the pre-stall linear regime
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LiftCoefficients {
    /// Lift coefficient at zero angle of attack.
    pub c_l_0: f64,
    /// Lift curve slope with respect to angle of attack (α).
    pub c_l_alpha: f64,
    /// Lift coefficient due to pitch rate (q).
    pub c_l_q: f64,
    /// Lift coefficient due to elevator deflection.
    pub c_l_deltae: f64,
}

/// Drag coefficients for the quadratic drag polar
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragCoefficients {
    /// Parasitic drag coefficient.
    pub c_d_p: f64,
    /// Drag coefficient due to pitch rate (q).
    pub c_d_q: f64,
    /// Drag coefficient due to elevator deflection magnitude.
    pub c_d_deltae: f64,
    /// Oswald span efficiency factor.
    pub oswald: f64,
}

/// Side force coefficients
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideForceCoefficients {
    /// Side-force coefficient at zero sideslip.
    pub c_y_0: f64,
    /// Side-force coefficient due to sideslip angle (β).
    pub c_y_beta: f64,
    /// Side-force coefficient due to roll rate (p).
    pub c_y_p: f64,
    /// Side-force coefficient due to yaw rate (r).
    pub c_y_r: f64,
    /// Side-force coefficient due to aileron deflection.
    pub c_y_deltaa: f64,
    /// Side-force coefficient due to rudder deflection.
    pub c_y_deltar: f64,
}

/// Roll moment coefficients
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollCoefficients {
    /// Roll moment coefficient at zero sideslip.
    pub c_l_0: f64,
    /// Roll moment coefficient due to sideslip angle (β).
    pub c_l_beta: f64,
    /// Roll moment coefficient due to roll rate (p).
    pub c_l_p: f64,
    /// Roll moment coefficient due to yaw rate (r).
    pub c_l_r: f64,
    /// Roll moment coefficient due to aileron deflection.
    pub c_l_deltaa: f64,
    /// Roll moment coefficient due to rudder deflection.
    pub c_l_deltar: f64,
}

/// Pitch moment coefficients
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PitchCoefficients {
    /// Pitch moment coefficient at zero angle of attack.
    pub c_m_0: f64,
    /// Pitch moment coefficient with respect to angle of attack (α).
    pub c_m_alpha: f64,
    /// Pitch moment coefficient due to pitch rate (q).
    pub c_m_q: f64,
    /// Pitch moment coefficient due to elevator deflection.
    pub c_m_deltae: f64,
}

/// Yaw moment coefficients
#[derive(Default, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YawCoefficients {
    /// Yaw moment coefficient at zero sideslip.
    pub c_n_0: f64,
    /// Yaw moment coefficient due to sideslip angle (β).
    pub c_n_beta: f64,
    /// Yaw moment coefficient due to roll rate (p).
    pub c_n_p: f64,
    /// Yaw moment coefficient due to yaw rate (r).
    pub c_n_r: f64,
    /// Yaw moment coefficient due to aileron deflection.
    pub c_n_deltaa: f64,
    /// Yaw moment coefficient due to rudder deflection.
    pub c_n_deltar: f64,
}

impl AerodynamicCoefficients {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        stall: StallCoefficients,
        lift: LiftCoefficients,
        drag: DragCoefficients,
        side_force: SideForceCoefficients,
        roll: RollCoefficients,
        pitch: PitchCoefficients,
        yaw: YawCoefficients,
        geometry: AircraftGeometry,
        cg_offset: Vector3<f64>,
    ) -> Self {
        AerodynamicCoefficients {
            stall,
            lift,
            drag,
            side_force,
            roll,
            pitch,
            yaw,
            geometry,
            cg_offset,
        }
    }

    /// Small electric UAV (last_letter reference airframe).
    pub fn small_uav() -> Self {
        AerodynamicCoefficients::new(
            StallCoefficients::small_uav(),
            LiftCoefficients::small_uav(),
            DragCoefficients::small_uav(),
            SideForceCoefficients::small_uav(),
            RollCoefficients::small_uav(),
            PitchCoefficients::small_uav(),
            YawCoefficients::small_uav(),
            AircraftGeometry::small_uav(),
            // Nominal x offset is -0.02 but flies too tail heavy by hand.
            Vector3::new(-0.15, 0.0, -0.05),
        )
    }

    /// Every derivative zeroed on the given geometry. The stall blend is kept
    /// from the small UAV so the lift curve stays well defined, and Oswald is
    /// non-zero so the drag polar does not divide by zero.
    pub fn zeroed(geometry: AircraftGeometry) -> Self {
        AerodynamicCoefficients {
            stall: StallCoefficients::small_uav(),
            lift: LiftCoefficients::default(),
            drag: DragCoefficients {
                oswald: 0.9,
                ..Default::default()
            },
            side_force: SideForceCoefficients::default(),
            roll: RollCoefficients::default(),
            pitch: PitchCoefficients::default(),
            yaw: YawCoefficients::default(),
            geometry,
            cg_offset: Vector3::zeros(),
        }
    }
}

impl Default for AerodynamicCoefficients {
    fn default() -> Self {
        Self::small_uav()
    }
}

impl StallCoefficients {
    pub fn small_uav() -> Self {
        StallCoefficients {
            alpha_stall: 0.4712,
            m_coeff: 50.0,
        }
    }
}

impl LiftCoefficients {
    pub fn small_uav() -> Self {
        LiftCoefficients {
            c_l_0: 0.56,
            c_l_alpha: 6.9,
            c_l_q: 0.0,
            c_l_deltae: 0.0,
        }
    }
}

impl DragCoefficients {
    pub fn small_uav() -> Self {
        DragCoefficients {
            c_d_p: 0.1,
            c_d_q: 0.0,
            c_d_deltae: 0.0,
            oswald: 0.9,
        }
    }
}

impl SideForceCoefficients {
    pub fn small_uav() -> Self {
        SideForceCoefficients {
            c_y_0: 0.0,
            c_y_beta: -0.98,
            c_y_p: 0.0,
            c_y_r: 0.0,
            c_y_deltaa: 0.0,
            c_y_deltar: -0.2,
        }
    }
}

impl RollCoefficients {
    pub fn small_uav() -> Self {
        RollCoefficients {
            c_l_0: 0.0,
            c_l_beta: -0.12,
            c_l_p: -1.0,
            c_l_r: 0.14,
            c_l_deltaa: 0.25,
            c_l_deltar: -0.037,
        }
    }
}

impl PitchCoefficients {
    pub fn small_uav() -> Self {
        PitchCoefficients {
            c_m_0: 0.045,
            c_m_alpha: -0.7,
            c_m_q: -20.0,
            c_m_deltae: 1.0,
        }
    }
}

impl YawCoefficients {
    pub fn small_uav() -> Self {
        YawCoefficients {
            c_n_0: 0.0,
            c_n_beta: 0.25,
            c_n_p: 0.022,
            c_n_r: -1.0,
            c_n_deltaa: 0.0,
            c_n_deltar: 0.1,
        }
    }
}
