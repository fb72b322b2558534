mod aero_coef;
mod geometry;
mod loader;
mod plane;

pub use aero_coef::{
    AerodynamicCoefficients, DragCoefficients, LiftCoefficients, PitchCoefficients,
    RollCoefficients, SideForceCoefficients, StallCoefficients, YawCoefficients,
};
pub use geometry::AircraftGeometry;
pub use loader::{ConfigError, RawPlaneConfig};
pub use plane::PlaneConfig;
