//! Parsing of the surface temperature list.

use std::str::FromStr;

use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_celsius};

use crate::models::thermal::natural_convection::core::InputError;

/// Measured tube surface temperatures, in the order they were entered.
///
/// Always holds at least one finite reading.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceTemperatures {
    celsius: Vec<f64>,
}

impl SurfaceTemperatures {
    /// Number of readings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.celsius.len()
    }

    /// Always `false`, since the list is never empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.celsius.is_empty()
    }

    /// Arithmetic mean of the readings as an absolute temperature.
    #[must_use]
    pub fn mean(&self) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_celsius>(self.mean_celsius())
    }

    /// Arithmetic mean of the readings in degrees Celsius.
    ///
    /// Taken on the values as entered, before any conversion to kelvin.
    #[must_use]
    pub fn mean_celsius(&self) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let n = self.celsius.len() as f64;
        self.celsius.iter().sum::<f64>() / n
    }
}

impl FromStr for SurfaceTemperatures {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(InputError::NoSurfaceTemperatures);
        }

        let celsius = s
            .split(',')
            .map(str::trim)
            .enumerate()
            .map(|(index, token)| {
                let value: f64 = token.parse().map_err(|_| InputError::InvalidTemperature {
                    index,
                    token: token.to_owned(),
                })?;
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(InputError::NonFiniteTemperature {
                        index,
                        token: token.to_owned(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { celsius })
    }
}

/// Parses a comma-separated list of surface temperatures in degrees Celsius.
///
/// Whitespace around each entry is ignored. Empty entries are rejected.
///
/// # Errors
///
/// Returns an [`InputError`] naming the first entry that is not a finite number,
/// or [`InputError::NoSurfaceTemperatures`] for a blank list.
pub fn parse_surface_temperatures(text: &str) -> Result<SurfaceTemperatures, InputError> {
    text.parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn parses_default_list() {
        let temps = parse_surface_temperatures("85,87,88,86,89").unwrap();
        assert_eq!(temps.len(), 5);
        assert_relative_eq!(temps.mean_celsius(), 87.0);
        assert_relative_eq!(temps.mean().get::<degree_celsius>(), 87.0, epsilon = 1e-9);
    }

    #[test]
    fn tolerates_whitespace() {
        let temps = parse_surface_temperatures(" 85 ,\t87.5 ,88 ").unwrap();
        assert_relative_eq!(temps.mean_celsius(), 86.833_333_333_333_33, epsilon = 1e-12);
    }

    #[test]
    fn single_reading() {
        let temps = parse_surface_temperatures("42").unwrap();
        assert_eq!(temps.len(), 1);
        assert_eq!(temps.mean_celsius(), 42.0);
    }

    #[test]
    fn identical_readings_average_exactly() {
        let temps = parse_surface_temperatures("30.5,30.5,30.5").unwrap();
        assert_eq!(temps.mean_celsius(), 30.5);
    }

    #[test]
    fn rejects_non_numeric_entry() {
        assert_eq!(
            parse_surface_temperatures("85,abc,88"),
            Err(InputError::InvalidTemperature {
                index: 1,
                token: "abc".into()
            })
        );
    }

    #[test]
    fn rejects_blank_list() {
        assert_eq!(
            parse_surface_temperatures(""),
            Err(InputError::NoSurfaceTemperatures)
        );
        assert_eq!(
            parse_surface_temperatures("  "),
            Err(InputError::NoSurfaceTemperatures)
        );
    }

    #[test]
    fn rejects_empty_entry() {
        assert_eq!(
            parse_surface_temperatures("85,87,"),
            Err(InputError::InvalidTemperature {
                index: 2,
                token: String::new()
            })
        );
    }

    #[test]
    fn rejects_non_finite_entries() {
        assert!(matches!(
            parse_surface_temperatures("85,inf"),
            Err(InputError::NonFiniteTemperature { index: 1, .. })
        ));
        assert!(matches!(
            parse_surface_temperatures("NaN"),
            Err(InputError::NonFiniteTemperature { index: 0, .. })
        ));
    }
}
