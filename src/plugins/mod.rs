mod plane;

pub use plane::{PlaneSimPlugin, PlaneSimSet};
