use uom::si::{
    f64::{TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::kelvin as delta_kelvin,
    thermodynamic_temperature::kelvin as abs_kelvin,
};

/// Extension trait for turning absolute temperatures into intervals.
///
/// [`uom`] does not allow mixing [`ThermodynamicTemperature`] into general
/// arithmetic. See
/// [#380](https://github.com/iliekturtles/uom/issues/380),
/// [#289](https://github.com/iliekturtles/uom/issues/289),
/// [#403](https://github.com/iliekturtles/uom/issues/403).
///
/// [`TemperatureInterval`]: uom::si::f64::TemperatureInterval
/// [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
pub trait TemperatureDifference {
    /// Returns this temperature measured from absolute zero.
    fn above_absolute_zero(self) -> TemperatureInterval;
}

impl TemperatureDifference for ThermodynamicTemperature {
    fn above_absolute_zero(self) -> TemperatureInterval {
        TemperatureInterval::new::<delta_kelvin>(self.get::<abs_kelvin>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::thermodynamic_temperature::{degree_celsius, degree_fahrenheit};

    #[test]
    fn film_temperature_from_absolute_zero() {
        let film = ThermodynamicTemperature::new::<degree_celsius>(58.5);
        assert_relative_eq!(
            film.above_absolute_zero().get::<delta_kelvin>(),
            331.65,
            epsilon = 1e-9
        );
    }

    #[test]
    fn absolute_zero_is_zero() {
        let zero = ThermodynamicTemperature::new::<abs_kelvin>(0.0);
        assert_eq!(zero.above_absolute_zero().get::<delta_kelvin>(), 0.0);
    }

    #[test]
    fn independent_of_input_unit() {
        let in_c = ThermodynamicTemperature::new::<degree_celsius>(25.0);
        let in_f = ThermodynamicTemperature::new::<degree_fahrenheit>(77.0);
        assert_relative_eq!(
            in_c.above_absolute_zero().get::<delta_kelvin>(),
            in_f.above_absolute_zero().get::<delta_kelvin>(),
            epsilon = 1e-9
        );
    }
}
