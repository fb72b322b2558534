pub mod air_data;
pub mod config;
pub mod controls;
pub mod plane;

pub use air_data::{AirData, SEA_LEVEL_DENSITY};
pub use config::{
    AerodynamicCoefficients, AircraftGeometry, ConfigError, DragCoefficients, LiftCoefficients,
    PitchCoefficients, PlaneConfig, RawPlaneConfig, RollCoefficients, SideForceCoefficients,
    StallCoefficients, YawCoefficients,
};
pub use controls::{ControlDeflections, ServoInputs, ThrustMode, SERVO_CHANNELS};
pub use plane::Plane;
