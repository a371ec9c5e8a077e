//! Electrical heater readings.

use uom::si::{
    electric_current::ampere,
    electric_potential::volt,
    f64::{ElectricCurrent, ElectricPotential},
};

/// Electrical supply to the heating element inside the tube.
///
/// All electrical power is assumed to leave the tube surface by convection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Heater {
    pub voltage: ElectricPotential,
    pub current: ElectricCurrent,
}

impl Heater {
    /// Creates a heater supply from volts and amperes.
    #[must_use]
    pub fn new(volts: f64, amperes: f64) -> Self {
        Self {
            voltage: ElectricPotential::new::<volt>(volts),
            current: ElectricCurrent::new::<ampere>(amperes),
        }
    }
}

impl Default for Heater {
    fn default() -> Self {
        Self::new(90.0, 1.5)
    }
}
