//! Errors raised by an analysis.

use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::Field;

/// Errors caused by user-correctable input.
///
/// Every variant is raised before any derived quantity is computed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The surface temperature list has no entries.
    #[error("enter at least one surface temperature")]
    NoSurfaceTemperatures,

    /// A surface temperature entry is not a number.
    #[error("surface temperature #{position} is not a number: {token:?}", position = .index + 1)]
    InvalidTemperature {
        /// Zero-based position of the entry in the list.
        index: usize,
        /// The offending entry, trimmed.
        token: String,
    },

    /// A surface temperature entry parsed, but to an infinite or NaN value.
    #[error("surface temperature #{position} is not finite: {token:?}", position = .index + 1)]
    NonFiniteTemperature {
        /// Zero-based position of the entry in the list.
        index: usize,
        /// The offending entry, trimmed.
        token: String,
    },

    /// A scalar input lies outside its allowed bounds.
    #[error("{field} is outside its allowed range")]
    OutOfRange { field: Field },

    /// A scalar input violates a numeric constraint, such as positivity.
    #[error("{field} is invalid")]
    Constraint {
        field: Field,
        #[source]
        source: ConstraintError,
    },
}

/// Errors that can occur while analysing a natural convection experiment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NaturalConvectionError {
    /// The inputs were rejected before any computation took place.
    #[error("invalid input")]
    InvalidInput(#[from] InputError),

    /// A derived quantity that appears in a denominator is zero.
    ///
    /// No partial results are produced.
    #[error("division by zero: {0} is zero")]
    DivisionByZero(ZeroDenominator),
}

/// The derived quantity that turned out to be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZeroDenominator {
    /// Average surface temperature equals the ambient temperature.
    TemperatureDifference,
    /// Heat transfer area `π·D·L`.
    Area,
    /// Kinematic viscosity `μ/ρ`.
    KinematicViscosity,
}

impl fmt::Display for ZeroDenominator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::TemperatureDifference => "surface-to-ambient temperature difference",
            Self::Area => "heat transfer area",
            Self::KinematicViscosity => "kinematic viscosity",
        })
    }
}
