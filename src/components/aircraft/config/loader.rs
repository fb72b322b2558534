use bevy::prelude::*;
use nalgebra::Vector3;
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use super::{
    AerodynamicCoefficients, AircraftGeometry, DragCoefficients, LiftCoefficients,
    PitchCoefficients, PlaneConfig, RollCoefficients, SideForceCoefficients, StallCoefficients,
    YawCoefficients,
};
use crate::components::ThrustMode;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileError(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),
    #[error("Failed to parse JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Invalid aircraft configuration: {0}")]
    ValidationError(String),
}

/// Flat on-disk layout of a plane definition, using the usual aerospace
/// capitalisation (`c_L` lift, `c_D` drag, `c_Y` side force, `c_l`/`c_m`/`c_n`
/// moments).
///
/// The lift curve, drag polar and stall blend are required. Every other
/// derivative defaults to zero.
#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct RawPlaneConfig {
    /// Aircraft identification
    pub name: String,
    /// Vehicle variant name; a `-revthrust` tag selects reversible thrust
    #[serde(default)]
    pub frame: Option<String>,
    /// Explicit thrust mode, overrides the frame tag
    #[serde(default)]
    pub reverse_thrust: Option<bool>,

    /// Mass properties
    pub mass: f64,

    /// Geometry
    pub wing_area: f64,
    pub wing_span: f64,
    pub mac: f64,

    /// Stall blend
    pub alpha_stall: f64,
    pub m_coeff: f64,

    /// Lift coefficients
    pub c_L_0: f64,
    pub c_L_alpha: f64,
    #[serde(default)]
    pub c_L_q: f64,
    #[serde(default)]
    pub c_L_deltae: f64,

    /// Drag coefficients
    pub c_D_p: f64,
    #[serde(default)]
    pub c_D_q: f64,
    #[serde(default)]
    pub c_D_deltae: f64,
    pub oswald: f64,

    /// Side-force coefficients
    #[serde(default)]
    pub c_Y_0: f64,
    #[serde(default)]
    pub c_Y_beta: f64,
    #[serde(default)]
    pub c_Y_p: f64,
    #[serde(default)]
    pub c_Y_r: f64,
    #[serde(default)]
    pub c_Y_deltaa: f64,
    #[serde(default)]
    pub c_Y_deltar: f64,

    /// Roll coefficients
    #[serde(default)]
    pub c_l_0: f64,
    #[serde(default)]
    pub c_l_beta: f64,
    #[serde(default)]
    pub c_l_p: f64,
    #[serde(default)]
    pub c_l_r: f64,
    #[serde(default)]
    pub c_l_deltaa: f64,
    #[serde(default)]
    pub c_l_deltar: f64,

    /// Pitch coefficients
    #[serde(default)]
    pub c_m_0: f64,
    #[serde(default)]
    pub c_m_alpha: f64,
    #[serde(default)]
    pub c_m_q: f64,
    #[serde(default)]
    pub c_m_deltae: f64,

    /// Yaw coefficients
    #[serde(default)]
    pub c_n_0: f64,
    #[serde(default)]
    pub c_n_beta: f64,
    #[serde(default)]
    pub c_n_p: f64,
    #[serde(default)]
    pub c_n_r: f64,
    #[serde(default)]
    pub c_n_deltaa: f64,
    #[serde(default)]
    pub c_n_deltar: f64,

    /// Centre of gravity offset in body axes (m)
    #[serde(default)]
    pub cg_offset: [f64; 3],
}

impl RawPlaneConfig {
    fn thrust_mode(&self) -> ThrustMode {
        match (self.reverse_thrust, self.frame.as_deref()) {
            (Some(true), _) => ThrustMode::Reversible,
            (Some(false), _) => ThrustMode::Forward,
            (None, Some(frame)) => ThrustMode::from_frame_name(frame),
            (None, None) => ThrustMode::Forward,
        }
    }
}

impl AerodynamicCoefficients {
    pub fn from_raw(raw: &RawPlaneConfig) -> Self {
        AerodynamicCoefficients {
            stall: StallCoefficients {
                alpha_stall: raw.alpha_stall,
                m_coeff: raw.m_coeff,
            },
            lift: LiftCoefficients {
                c_l_0: raw.c_L_0,
                c_l_alpha: raw.c_L_alpha,
                c_l_q: raw.c_L_q,
                c_l_deltae: raw.c_L_deltae,
            },
            drag: DragCoefficients {
                c_d_p: raw.c_D_p,
                c_d_q: raw.c_D_q,
                c_d_deltae: raw.c_D_deltae,
                oswald: raw.oswald,
            },
            side_force: SideForceCoefficients {
                c_y_0: raw.c_Y_0,
                c_y_beta: raw.c_Y_beta,
                c_y_p: raw.c_Y_p,
                c_y_r: raw.c_Y_r,
                c_y_deltaa: raw.c_Y_deltaa,
                c_y_deltar: raw.c_Y_deltar,
            },
            roll: RollCoefficients {
                c_l_0: raw.c_l_0,
                c_l_beta: raw.c_l_beta,
                c_l_p: raw.c_l_p,
                c_l_r: raw.c_l_r,
                c_l_deltaa: raw.c_l_deltaa,
                c_l_deltar: raw.c_l_deltar,
            },
            pitch: PitchCoefficients {
                c_m_0: raw.c_m_0,
                c_m_alpha: raw.c_m_alpha,
                c_m_q: raw.c_m_q,
                c_m_deltae: raw.c_m_deltae,
            },
            yaw: YawCoefficients {
                c_n_0: raw.c_n_0,
                c_n_beta: raw.c_n_beta,
                c_n_p: raw.c_n_p,
                c_n_r: raw.c_n_r,
                c_n_deltaa: raw.c_n_deltaa,
                c_n_deltar: raw.c_n_deltar,
            },
            geometry: AircraftGeometry::new(raw.wing_area, raw.wing_span, raw.mac),
            cg_offset: Vector3::from(raw.cg_offset),
        }
    }
}

impl PlaneConfig {
    pub fn from_raw(raw: &RawPlaneConfig) -> Result<Self, ConfigError> {
        let config = PlaneConfig::new(
            raw.name.clone(),
            raw.mass,
            AerodynamicCoefficients::from_raw(raw),
            raw.thrust_mode(),
        );
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let raw: RawPlaneConfig = serde_yaml::from_str(yaml)?;
        Self::from_raw(&raw)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let raw: RawPlaneConfig = serde_json::from_str(json)?;
        Self::from_raw(&raw)
    }

    /// Loads a plane definition, treating `.json` files as JSON and anything
    /// else as YAML.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json_str(&contents)?
        } else {
            Self::from_yaml_str(&contents)?
        };

        info!(
            "Loaded plane '{}' from {} ({:?} thrust)",
            config.name,
            path.display(),
            config.thrust_mode
        );
        Ok(config)
    }
}
