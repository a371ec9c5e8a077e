//! Names of the scalar inputs, used in error messages.

use std::fmt;

/// Identifies a scalar input in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    ThermalConductivity,
    Viscosity,
    Density,
    Prandtl,
    Diameter,
    Length,
    Voltage,
    Current,
    AmbientTemperature,
}

impl Field {
    /// Returns the label shown next to the input, including its units.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::ThermalConductivity => "Thermal Conductivity of Air (W/m·K)",
            Self::Viscosity => "Dynamic Viscosity of Air (kg/m·s)",
            Self::Density => "Density of Air (kg/m³)",
            Self::Prandtl => "Prandtl Number",
            Self::Diameter => "Diameter of the Tube (m)",
            Self::Length => "Length of the Tube (m)",
            Self::Voltage => "Voltage (V)",
            Self::Current => "Current (A)",
            Self::AmbientTemperature => "Ambient Air Temperature (°C)",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
