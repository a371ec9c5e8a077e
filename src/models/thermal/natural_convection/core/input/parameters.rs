//! Inputs of one analysis and their validation.

use num_traits::Zero;
use uom::si::f64::{
    DynamicViscosity, ElectricCurrent, ElectricPotential, Length, MassDensity, Ratio,
    ThermalConductivity,
};

use crate::{
    models::thermal::natural_convection::core::InputError,
    support::constraint::{Constrained, StrictlyPositive},
};

use super::{AirProperties, Field, Heater, InputBounds, SurfaceTemperatures, Tube};

/// Everything the lab needs for one analysis.
///
/// Surface temperatures are kept as the comma-separated text the user
/// typed; parsing is the first step of every analysis. Readings stay in
/// degrees Celsius so `ΔT = Ts - Ta` is taken on the values as entered.
#[derive(Debug, Clone, PartialEq)]
pub struct InputParameters {
    pub air: AirProperties,
    pub tube: Tube,
    pub heater: Heater,

    /// Comma-separated surface temperatures in degrees Celsius.
    pub surface_temperatures: String,

    /// Ambient air temperature in degrees Celsius, as read.
    pub ambient_celsius: f64,
}

impl Default for InputParameters {
    fn default() -> Self {
        Self {
            air: AirProperties::default(),
            tube: Tube::default(),
            heater: Heater::default(),
            surface_temperatures: "85,87,88,86,89".to_owned(),
            ambient_celsius: 30.0,
        }
    }
}

impl InputParameters {
    /// Parses and checks the inputs, in order: surface temperatures,
    /// bounds, then positivity.
    pub(crate) fn validate(&self, bounds: &InputBounds) -> Result<Validated, InputError> {
        let surface_temperatures: SurfaceTemperatures = self.surface_temperatures.parse()?;

        let Self {
            air,
            tube,
            heater,
            ambient_celsius,
            ..
        } = self;

        bounds
            .conductivity
            .check(Field::ThermalConductivity, &air.conductivity)?;
        bounds.viscosity.check(Field::Viscosity, &air.viscosity)?;
        bounds.density.check(Field::Density, &air.density)?;
        bounds.prandtl.check(Field::Prandtl, &air.prandtl)?;
        bounds.diameter.check(Field::Diameter, &tube.diameter)?;
        bounds.length.check(Field::Length, &tube.length)?;
        bounds.voltage.check(Field::Voltage, &heater.voltage)?;
        bounds.current.check(Field::Current, &heater.current)?;
        bounds
            .ambient_celsius
            .check(Field::AmbientTemperature, ambient_celsius)?;

        Ok(Validated {
            conductivity: positive(Field::ThermalConductivity, air.conductivity)?,
            viscosity: positive(Field::Viscosity, air.viscosity)?,
            density: positive(Field::Density, air.density)?,
            prandtl: positive(Field::Prandtl, air.prandtl)?,
            diameter: positive(Field::Diameter, tube.diameter)?,
            length: positive(Field::Length, tube.length)?,
            voltage: positive(Field::Voltage, heater.voltage)?,
            current: positive(Field::Current, heater.current)?,
            surface_temperatures,
            ambient_celsius: *ambient_celsius,
        })
    }
}

fn positive<T: PartialOrd + Zero>(
    field: Field,
    value: T,
) -> Result<Constrained<T, StrictlyPositive>, InputError> {
    StrictlyPositive::new(value).map_err(|source| InputError::Constraint { field, source })
}

/// Inputs that passed parsing, bounds, and positivity checks.
#[derive(Debug, Clone)]
pub(crate) struct Validated {
    pub(crate) conductivity: Constrained<ThermalConductivity, StrictlyPositive>,
    pub(crate) viscosity: Constrained<DynamicViscosity, StrictlyPositive>,
    pub(crate) density: Constrained<MassDensity, StrictlyPositive>,
    pub(crate) prandtl: Constrained<Ratio, StrictlyPositive>,
    pub(crate) diameter: Constrained<Length, StrictlyPositive>,
    pub(crate) length: Constrained<Length, StrictlyPositive>,
    pub(crate) voltage: Constrained<ElectricPotential, StrictlyPositive>,
    pub(crate) current: Constrained<ElectricCurrent, StrictlyPositive>,
    pub(crate) surface_temperatures: SurfaceTemperatures,
    pub(crate) ambient_celsius: f64,
}
