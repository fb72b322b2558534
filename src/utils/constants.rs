pub const GRAVITY: f64 = 9.80665; // m/s^2

/// Throttle fraction at which a plane's motor holds it against gravity.
pub const HOVER_THROTTLE: f64 = 0.65;

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 1200.0; // s
