use serde::{Deserialize, Serialize};

/// Reference geometry used to dimensionalise the aerodynamic coefficients.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AircraftGeometry {
    /// The total wing area of the aircraft (m²).
    pub wing_area: f64,
    /// The wingspan of the aircraft (m).
    pub wing_span: f64,
    /// The mean aerodynamic chord of the aircraft (m).
    pub mac: f64,
}

impl AircraftGeometry {
    /// Creates a new `AircraftGeometry` instance with the specified parameters.
    ///
    /// # Arguments
    /// * `wing_area` - The total wing area of the aircraft (m²).
    /// * `wing_span` - The wing span of the aircraft (m).
    /// * `mac` - The mean aerodynamic chord (m).
    pub fn new(wing_area: f64, wing_span: f64, mac: f64) -> Self {
        AircraftGeometry {
            wing_area,
            wing_span,
            mac,
        }
    }

    /// Aspect ratio b²/S.
    pub fn aspect_ratio(&self) -> f64 {
        self.wing_span.powi(2) / self.wing_area
    }

    pub fn small_uav() -> Self {
        Self::new(0.45, 1.88, 0.24)
    }

    /// Unit square wing, handy as a reference for hand-checked numbers.
    pub fn unit() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }
}

impl Default for AircraftGeometry {
    fn default() -> Self {
        Self::small_uav()
    }
}
