pub mod aircraft;
pub mod physics;
pub mod spatial;

pub use aircraft::*;
pub use physics::BodyAccelerations;
pub use spatial::SpatialComponent;
