//! Results of a natural convection analysis.

use std::fmt;

use uom::si::{
    area::square_meter,
    f64::{Area, HeatTransfer, Power, Ratio, TemperatureInterval, ThermodynamicTemperature},
    heat_transfer::watt_per_square_meter_kelvin,
    power::watt,
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::units::{KinematicViscosity, ThermalExpansionCoefficient};

use super::{CoefficientCurve, Correlation};

/// Quantities derived from one set of inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedResults {
    /// Mean of the measured surface temperatures, `Ts`.
    pub average_surface_temperature: ThermodynamicTemperature,

    /// Mean film temperature `Tf = (Ts + Ta) / 2`.
    pub film_temperature: ThermodynamicTemperature,

    /// Volumetric expansion coefficient `β = 1 / Tf`, with `Tf` in kelvin.
    pub expansion_coefficient: ThermalExpansionCoefficient,

    /// Surface-to-ambient temperature difference `ΔT = Ts - Ta`.
    pub delta_t: TemperatureInterval,

    /// Tube surface area `A = π·D·L`.
    pub area: Area,

    /// Electrical power `q = V·I`.
    pub heat_supplied: Power,

    /// Experimental coefficient `q / (A·ΔT)`.
    pub h_experimental: HeatTransfer,

    /// Kinematic viscosity `ν = μ / ρ`.
    pub kinematic_viscosity: KinematicViscosity,

    /// Grashof number `g·β·ΔT·L³ / ν²`.
    pub grashof: Ratio,

    /// Rayleigh number `Gr·Pr`.
    pub grashof_prandtl: Ratio,

    /// Correlation chosen from `Gr·Pr`.
    pub correlation: Correlation,

    /// Nusselt number from [`correlation`](Self::correlation).
    pub nusselt: Ratio,

    /// Empirical coefficient `Nu·k / L`.
    pub h_empirical: HeatTransfer,
}

impl fmt::Display for DerivedResults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Average Surface Temperature, Ts = {:.2} °C",
            self.average_surface_temperature.get::<degree_celsius>()
        )?;
        writeln!(
            f,
            "Mean Film Temperature, Tf = {:.2} °C",
            self.film_temperature.get::<degree_celsius>()
        )?;
        writeln!(
            f,
            "Heat Supplied, q = {:.2} W",
            self.heat_supplied.get::<watt>()
        )?;
        writeln!(
            f,
            "Heat Transfer Area, A = {:.5} m²",
            self.area.get::<square_meter>()
        )?;
        writeln!(
            f,
            "Temperature Difference, ΔT = {:.2} °C",
            self.delta_t.get::<delta_celsius>()
        )?;
        writeln!(
            f,
            "Experimental Heat Transfer Coefficient, hexp = {:.2} W/m²·K",
            self.h_experimental.get::<watt_per_square_meter_kelvin>()
        )?;
        write!(
            f,
            "Empirical Heat Transfer Coefficient, hemp = {:.2} W/m²·K",
            self.h_empirical.get::<watt_per_square_meter_kelvin>()
        )
    }
}

/// A non-fatal condition worth showing next to the results.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Warning {
    /// `Gr·Pr` is outside both empirical correlations, so `Nu` and the
    /// empirical coefficient were set to zero.
    CorrelationOutOfRange { grashof_prandtl: f64 },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CorrelationOutOfRange { grashof_prandtl } => write!(
                f,
                "Gr.Pr is out of the empirical formula range! (Gr.Pr = {grashof_prandtl:.3e})"
            ),
        }
    }
}

/// Everything produced by one analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub results: DerivedResults,
    pub curve: CoefficientCurve,
    pub warnings: Vec<Warning>,
}
