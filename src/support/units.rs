//! Extensions to [`uom`].
//!
//! This crate uses [`uom`] for all physical units (e.g., temperature, power,
//! heat transfer coefficients). This module adds what [`uom`] lacks.
//!
//! ## Absolute temperature as an interval
//!
//! [`uom`] keeps absolute temperatures and temperature intervals apart.
//! The [`TemperatureDifference`] trait measures an absolute temperature from
//! 0 K, which is what ideal-gas relations like `β = 1/T` need:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::temperature_interval::kelvin as delta_kelvin;
//! use uom::si::thermodynamic_temperature::degree_celsius;
//! use natural_convection::support::units::TemperatureDifference;
//!
//! let film = ThermodynamicTemperature::new::<degree_celsius>(58.5);
//! let above_zero = film.above_absolute_zero();
//! assert!((above_zero.get::<delta_kelvin>() - 331.65).abs() < 1e-9);
//! ```
//!
//! ## Quantity aliases
//!
//! [`ThermalExpansionCoefficient`] (1/K) and [`KinematicViscosity`] (m²/s)
//! name dimensions that [`uom`] has no dedicated quantity for.

mod quantities;
mod temperature_difference;

pub use quantities::{KinematicViscosity, ThermalExpansionCoefficient};
pub use temperature_difference::TemperatureDifference;
