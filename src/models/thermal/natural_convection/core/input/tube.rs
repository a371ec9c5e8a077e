//! Tube geometry.

use uom::si::{f64::Length, length::meter};

/// Geometry of the heated vertical tube.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tube {
    /// Outer diameter `D`.
    pub diameter: Length,

    /// Heated length `L`, also the characteristic length for `Gr` and `Nu`.
    pub length: Length,
}

impl Tube {
    /// Creates a tube from its diameter and length in meters.
    #[must_use]
    pub fn from_meters(diameter: f64, length: f64) -> Self {
        Self {
            diameter: Length::new::<meter>(diameter),
            length: Length::new::<meter>(length),
        }
    }
}

impl Default for Tube {
    fn default() -> Self {
        Self::from_meters(0.032, 0.5)
    }
}
