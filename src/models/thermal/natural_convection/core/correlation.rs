//! Empirical Nusselt correlations for a vertical cylinder in free convection.

use std::fmt;

/// Lower limit (exclusive) of the laminar correlation.
const LAMINAR_MIN: f64 = 1e4;

/// Upper limit (exclusive) of the laminar correlation and lower limit
/// (inclusive) of the turbulent one.
const TRANSITION: f64 = 1e9;

/// Upper limit (inclusive) of the turbulent correlation.
const TURBULENT_MAX: f64 = 1e12;

/// Flow regime used to estimate the Nusselt number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Correlation {
    /// `10⁴ < Gr·Pr < 10⁹`: `Nu = 0.59 (Gr·Pr)^0.25`.
    Laminar,

    /// `10⁹ ≤ Gr·Pr ≤ 10¹²`: `Nu = 0.13 (Gr·Pr)^0.33`.
    Turbulent,

    /// `Gr·Pr` is outside both correlations; `Nu` is taken as zero.
    OutOfRange,
}

impl Correlation {
    /// Selects the correlation that applies to a Rayleigh number `Gr·Pr`.
    ///
    /// `NaN` falls out of range.
    #[must_use]
    pub fn select(grashof_prandtl: f64) -> Self {
        if grashof_prandtl > LAMINAR_MIN && grashof_prandtl < TRANSITION {
            Self::Laminar
        } else if (TRANSITION..=TURBULENT_MAX).contains(&grashof_prandtl) {
            Self::Turbulent
        } else {
            Self::OutOfRange
        }
    }

    /// Evaluates the Nusselt number for `Gr·Pr` under this correlation.
    #[must_use]
    pub fn nusselt(self, grashof_prandtl: f64) -> f64 {
        match self {
            Self::Laminar => 0.59 * grashof_prandtl.powf(0.25),
            Self::Turbulent => 0.13 * grashof_prandtl.powf(0.33),
            Self::OutOfRange => 0.0,
        }
    }
}

impl fmt::Display for Correlation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Laminar => "laminar",
            Self::Turbulent => "turbulent",
            Self::OutOfRange => "out of range",
        })
    }
}
