//! Allowed ranges of the scalar inputs.

use uom::si::{
    dynamic_viscosity::pascal_second,
    electric_current::ampere,
    electric_potential::volt,
    f64::{
        DynamicViscosity, ElectricCurrent, ElectricPotential, Length, MassDensity, Ratio,
        ThermalConductivity,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
};

use crate::models::thermal::natural_convection::core::InputError;

use super::Field;

/// A closed interval `[min, max]` of allowed input values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<Q> {
    pub min: Q,
    pub max: Q,
}

impl<Q: PartialOrd> Bounds<Q> {
    #[must_use]
    pub fn new(min: Q, max: Q) -> Self {
        Self { min, max }
    }

    /// Returns `true` if `value` lies within the bounds, endpoints included.
    ///
    /// `NaN` is never contained.
    #[must_use]
    pub fn contains(&self, value: &Q) -> bool {
        *value >= self.min && *value <= self.max
    }

    pub(super) fn check(&self, field: Field, value: &Q) -> Result<(), InputError> {
        if self.contains(value) {
            Ok(())
        } else {
            Err(InputError::OutOfRange { field })
        }
    }
}

/// Allowed ranges for each scalar input.
///
/// The defaults match the ranges offered by the lab's input panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputBounds {
    pub conductivity: Bounds<ThermalConductivity>,
    pub viscosity: Bounds<DynamicViscosity>,
    pub density: Bounds<MassDensity>,
    pub prandtl: Bounds<Ratio>,
    pub diameter: Bounds<Length>,
    pub length: Bounds<Length>,
    pub voltage: Bounds<ElectricPotential>,
    pub current: Bounds<ElectricCurrent>,
    /// Ambient air temperature, in degrees Celsius.
    pub ambient_celsius: Bounds<f64>,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            conductivity: Bounds::new(
                ThermalConductivity::new::<watt_per_meter_kelvin>(0.01),
                ThermalConductivity::new::<watt_per_meter_kelvin>(1.0),
            ),
            viscosity: Bounds::new(
                DynamicViscosity::new::<pascal_second>(1e-6),
                DynamicViscosity::new::<pascal_second>(1e-4),
            ),
            density: Bounds::new(
                MassDensity::new::<kilogram_per_cubic_meter>(0.5),
                MassDensity::new::<kilogram_per_cubic_meter>(2.0),
            ),
            prandtl: Bounds::new(Ratio::new::<ratio>(0.1), Ratio::new::<ratio>(2.0)),
            diameter: Bounds::new(Length::new::<meter>(0.01), Length::new::<meter>(0.2)),
            length: Bounds::new(Length::new::<meter>(0.1), Length::new::<meter>(1.5)),
            voltage: Bounds::new(
                ElectricPotential::new::<volt>(1.0),
                ElectricPotential::new::<volt>(250.0),
            ),
            current: Bounds::new(
                ElectricCurrent::new::<ampere>(0.01),
                ElectricCurrent::new::<ampere>(10.0),
            ),
            ambient_celsius: Bounds::new(10.0, 50.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_included() {
        let bounds = InputBounds::default();

        assert!(bounds.length.contains(&Length::new::<meter>(0.1)));
        assert!(bounds.length.contains(&Length::new::<meter>(1.5)));
        assert!(!bounds.length.contains(&Length::new::<meter>(1.500_001)));

        assert!(bounds.ambient_celsius.contains(&10.0));
        assert!(bounds.ambient_celsius.contains(&50.0));
        assert!(!bounds.ambient_celsius.contains(&50.5));
    }

    #[test]
    fn nan_is_out_of_range() {
        let bounds = Bounds::new(0.0, 1.0);
        assert!(!bounds.contains(&f64::NAN));
        assert_eq!(
            bounds.check(Field::Prandtl, &f64::NAN),
            Err(InputError::OutOfRange {
                field: Field::Prandtl
            })
        );
    }
}
