//! Air properties at the film temperature.

use uom::si::{
    dynamic_viscosity::pascal_second,
    f64::{DynamicViscosity, MassDensity, Ratio, ThermalConductivity},
    mass_density::kilogram_per_cubic_meter,
    ratio::ratio,
    thermal_conductivity::watt_per_meter_kelvin,
};

/// Properties of the surrounding air, evaluated at the film temperature.
///
/// The lab takes these as given rather than looking them up. The defaults
/// are typical handbook values for air.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AirProperties {
    /// Thermal conductivity `k`.
    pub conductivity: ThermalConductivity,

    /// Dynamic viscosity `μ`.
    pub viscosity: DynamicViscosity,

    /// Density `ρ`.
    pub density: MassDensity,

    /// Prandtl number `Pr`.
    pub prandtl: Ratio,
}

impl AirProperties {
    /// Creates air properties from SI values.
    ///
    /// Values are checked when the lab runs, not here.
    #[must_use]
    pub fn from_si(conductivity: f64, viscosity: f64, density: f64, prandtl: f64) -> Self {
        Self {
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(conductivity),
            viscosity: DynamicViscosity::new::<pascal_second>(viscosity),
            density: MassDensity::new::<kilogram_per_cubic_meter>(density),
            prandtl: Ratio::new::<ratio>(prandtl),
        }
    }
}

impl Default for AirProperties {
    fn default() -> Self {
        Self::from_si(0.0296, 1.846e-5, 1.1614, 0.707)
    }
}
