//! Heat transfer coefficients of a vertical tube in free convection.
//!
//! The experimental coefficient follows from the measured electrical power
//! and surface temperatures. The empirical coefficient follows from a
//! Nusselt correlation in `Gr·Pr`. Both are computed from scratch on each
//! call; nothing is cached between analyses.

mod correlation;
mod curve;
mod error;
mod input;
mod results;

pub use correlation::Correlation;
pub use curve::{
    CoefficientCurve, CurveConfig, CurvePoint, EMPIRICAL_LABEL, EXPERIMENTAL_LABEL, TITLE,
    X_LABEL, Y_LABEL,
};
pub use error::{InputError, NaturalConvectionError, ZeroDenominator};
pub use input::{
    AirProperties, Bounds, Field, Heater, InputBounds, InputParameters, SurfaceTemperatures,
    Tube, parse_surface_temperatures,
};
pub use results::{Analysis, DerivedResults, Warning};

use std::f64::consts::PI;

use uom::si::{
    acceleration::meter_per_second_squared,
    f64::{
        Acceleration, Area, HeatTransfer, Power, Ratio, TemperatureInterval,
        ThermodynamicTemperature,
    },
    ratio::ratio,
    temperature_interval::degree_celsius as delta_celsius,
    thermodynamic_temperature::degree_celsius,
};

use crate::support::{
    constraint::NonZero,
    units::{KinematicViscosity, TemperatureDifference, ThermalExpansionCoefficient},
};

use input::Validated;

/// Gravitational acceleration used in the Grashof number, m/s².
const GRAVITY: f64 = 9.81;

/// Runs one analysis.
///
/// Inputs are parsed and checked before anything is derived.
///
/// # Errors
///
/// Returns [`NaturalConvectionError::InvalidInput`] for malformed or
/// out-of-range inputs, and [`NaturalConvectionError::DivisionByZero`] when
/// the temperature difference, area, or kinematic viscosity is zero.
pub(super) fn analyze(
    input: &InputParameters,
    bounds: &InputBounds,
    curve: &CurveConfig,
) -> Result<Analysis, NaturalConvectionError> {
    let Validated {
        conductivity,
        viscosity,
        density,
        prandtl,
        diameter,
        length,
        voltage,
        current,
        surface_temperatures,
        ambient_celsius,
    } = input.validate(bounds)?;

    let length = length.into_inner();

    // ΔT and Tf come from the Celsius readings; a kelvin round trip can
    // round a small ΔT to zero.
    let surface_celsius = surface_temperatures.mean_celsius();
    let average_surface_temperature = surface_temperatures.mean();
    let film_temperature =
        ThermodynamicTemperature::new::<degree_celsius>((surface_celsius + ambient_celsius) / 2.0);
    let delta_t = TemperatureInterval::new::<delta_celsius>(surface_celsius - ambient_celsius);
    let expansion_coefficient: ThermalExpansionCoefficient =
        film_temperature.above_absolute_zero().recip();
    let area: Area = diameter.into_inner() * length * PI;
    let heat_supplied: Power = voltage.into_inner() * current.into_inner();

    let delta_t = nonzero(delta_t, ZeroDenominator::TemperatureDifference)?;
    let area = nonzero(area, ZeroDenominator::Area)?;
    let h_experimental: HeatTransfer = heat_supplied / (area * delta_t);

    let kinematic_viscosity: KinematicViscosity = viscosity.into_inner() / density.into_inner();
    let kinematic_viscosity = nonzero(kinematic_viscosity, ZeroDenominator::KinematicViscosity)?;

    let gravity = Acceleration::new::<meter_per_second_squared>(GRAVITY);
    let grashof: Ratio = gravity * expansion_coefficient * delta_t * length * length * length
        / (kinematic_viscosity * kinematic_viscosity);
    let grashof_prandtl: Ratio = grashof * prandtl.into_inner();

    let gr_pr = grashof_prandtl.get::<ratio>();
    let correlation = Correlation::select(gr_pr);
    let nusselt = Ratio::new::<ratio>(correlation.nusselt(gr_pr));
    let h_empirical: HeatTransfer = nusselt * conductivity.into_inner() / length;

    let mut warnings = Vec::new();
    if correlation == Correlation::OutOfRange {
        warnings.push(Warning::CorrelationOutOfRange {
            grashof_prandtl: gr_pr,
        });
    }

    Ok(Analysis {
        results: DerivedResults {
            average_surface_temperature,
            film_temperature,
            expansion_coefficient,
            delta_t,
            area,
            heat_supplied,
            h_experimental,
            kinematic_viscosity,
            grashof,
            grashof_prandtl,
            correlation,
            nusselt,
            h_empirical,
        },
        curve: CoefficientCurve::sweep(curve, heat_supplied, area, h_empirical),
        warnings,
    })
}

fn nonzero<T>(value: T, denominator: ZeroDenominator) -> Result<T, NaturalConvectionError>
where
    T: PartialOrd + num_traits::Zero,
{
    NonZero::new(value)
        .map(|v| v.into_inner())
        .map_err(|_| NaturalConvectionError::DivisionByZero(denominator))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        area::square_meter,
        diffusion_coefficient::square_meter_per_second,
        dynamic_viscosity::pascal_second,
        f64::{DynamicViscosity, Length, MassDensity},
        heat_transfer::watt_per_square_meter_kelvin,
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        power::watt,
        temperature_interval::kelvin as delta_kelvin,
    };

    fn run(input: &InputParameters) -> Result<Analysis, NaturalConvectionError> {
        analyze(input, &InputBounds::default(), &CurveConfig::default())
    }

    fn h(value: HeatTransfer) -> f64 {
        value.get::<watt_per_square_meter_kelvin>()
    }

    #[test]
    fn default_experiment() {
        let analysis = run(&InputParameters::default()).unwrap();
        let r = analysis.results;

        assert_relative_eq!(
            r.average_surface_temperature.get::<degree_celsius>(),
            87.0,
            epsilon = 1e-9
        );
        assert_relative_eq!(r.film_temperature.get::<degree_celsius>(), 58.5, epsilon = 1e-9);
        assert_relative_eq!(
            r.expansion_coefficient.value,
            1.0 / (58.5 + 273.15),
            max_relative = 1e-12
        );
        assert_relative_eq!(r.delta_t.get::<delta_kelvin>(), 57.0, epsilon = 1e-9);
        assert_relative_eq!(
            r.area.get::<square_meter>(),
            0.050_265_482_457_436_69,
            max_relative = 1e-12
        );
        assert_relative_eq!(r.heat_supplied.get::<watt>(), 135.0, max_relative = 1e-12);
        assert_relative_eq!(h(r.h_experimental), 47.11, max_relative = 5e-3);
        assert_relative_eq!(
            h(r.h_experimental),
            47.118_239_731_153_224,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            r.kinematic_viscosity.get::<square_meter_per_second>(),
            1.589_460_995_350_439_2e-5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            r.grashof.get::<ratio>(),
            834_207_565.998_123_9,
            max_relative = 1e-9
        );
        assert_relative_eq!(
            r.grashof_prandtl.get::<ratio>(),
            589_784_749.160_673_5,
            max_relative = 1e-9
        );
        assert_eq!(r.correlation, Correlation::Laminar);
        assert_relative_eq!(
            r.nusselt.get::<ratio>(),
            91.944_423_949_481_49,
            max_relative = 1e-9
        );
        assert_relative_eq!(h(r.h_empirical), 5.443_109_897_809_304, max_relative = 1e-9);
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn long_tube_is_turbulent() {
        let input = InputParameters {
            tube: Tube::from_meters(0.032, 1.5),
            ..InputParameters::default()
        };
        let r = run(&input).unwrap().results;

        assert_eq!(r.correlation, Correlation::Turbulent);
        assert_relative_eq!(
            r.grashof_prandtl.get::<ratio>(),
            15_924_188_227.338_186,
            max_relative = 1e-9
        );
        assert_relative_eq!(h(r.h_empirical), 5.967_916_170_442_851, max_relative = 1e-9);
        assert_relative_eq!(h(r.h_experimental), 15.706_079_910_384_409, max_relative = 1e-9);
    }

    #[test]
    fn low_rayleigh_number_warns_and_zeroes_empirical() {
        let input = InputParameters {
            air: AirProperties::from_si(0.0296, 1e-4, 2.0, 0.1),
            tube: Tube::from_meters(0.032, 0.1),
            surface_temperatures: "35".into(),
            ..InputParameters::default()
        };
        let analysis = run(&input).unwrap();
        let r = analysis.results;

        assert!(r.grashof_prandtl.get::<ratio>() < 1e4);
        assert_eq!(r.correlation, Correlation::OutOfRange);
        assert_eq!(r.nusselt.get::<ratio>(), 0.0);
        assert_eq!(h(r.h_empirical), 0.0);
        assert_eq!(analysis.warnings.len(), 1);
        assert!(matches!(
            analysis.warnings[0],
            Warning::CorrelationOutOfRange { grashof_prandtl } if grashof_prandtl < 1e4
        ));

        // The experimental side is unaffected.
        assert_relative_eq!(h(r.h_experimental), 2_685.739_664_675_733_4, max_relative = 1e-9);
        assert_eq!(h(analysis.curve.reference()), 0.0);
    }

    #[test]
    fn high_rayleigh_number_warns() {
        let input = InputParameters {
            air: AirProperties::from_si(0.0296, 1e-6, 2.0, 0.707),
            tube: Tube::from_meters(0.032, 1.5),
            ..InputParameters::default()
        };
        let analysis = run(&input).unwrap();

        assert!(analysis.results.grashof_prandtl.get::<ratio>() > 1e12);
        assert_eq!(analysis.results.correlation, Correlation::OutOfRange);
        assert_eq!(h(analysis.results.h_empirical), 0.0);
        assert_eq!(analysis.warnings.len(), 1);
    }

    #[test]
    fn surface_at_ambient_divides_by_zero() {
        let input = InputParameters {
            surface_temperatures: "30,30,30".into(),
            ambient_celsius: 30.0,
            ..InputParameters::default()
        };
        assert_eq!(
            run(&input),
            Err(NaturalConvectionError::DivisionByZero(
                ZeroDenominator::TemperatureDifference
            ))
        );
    }

    #[test]
    fn readings_without_exact_kelvin_form_at_ambient_divide_by_zero() {
        let input = InputParameters {
            surface_temperatures: "10.1,10.1".into(),
            ambient_celsius: 10.1,
            ..InputParameters::default()
        };
        assert_eq!(
            run(&input),
            Err(NaturalConvectionError::DivisionByZero(
                ZeroDenominator::TemperatureDifference
            ))
        );
    }

    #[test]
    fn tiny_difference_in_celsius_is_kept() {
        let input = InputParameters {
            surface_temperatures: "30.000000000000004".into(),
            ambient_celsius: 30.0,
            ..InputParameters::default()
        };
        let analysis = run(&input).unwrap();

        assert_relative_eq!(
            analysis.results.delta_t.get::<delta_kelvin>(),
            3.552_713_678_800_501e-15,
            max_relative = 1e-12
        );
        assert!(h(analysis.results.h_experimental) > 0.0);
        assert_eq!(analysis.results.correlation, Correlation::OutOfRange);
    }

    #[test]
    fn vanishing_area_divides_by_zero() {
        let tiny = Length::new::<meter>(1e-200);
        let bounds = InputBounds {
            diameter: Bounds::new(tiny, Length::new::<meter>(0.2)),
            length: Bounds::new(tiny, Length::new::<meter>(1.5)),
            ..InputBounds::default()
        };
        let input = InputParameters {
            tube: Tube::from_meters(1e-200, 1e-200),
            ..InputParameters::default()
        };
        assert_eq!(
            analyze(&input, &bounds, &CurveConfig::default()),
            Err(NaturalConvectionError::DivisionByZero(ZeroDenominator::Area))
        );
    }

    #[test]
    fn vanishing_kinematic_viscosity_divides_by_zero() {
        let bounds = InputBounds {
            viscosity: Bounds::new(
                DynamicViscosity::new::<pascal_second>(1e-300),
                DynamicViscosity::new::<pascal_second>(1e-4),
            ),
            density: Bounds::new(
                MassDensity::new::<kilogram_per_cubic_meter>(0.5),
                MassDensity::new::<kilogram_per_cubic_meter>(1e300),
            ),
            ..InputBounds::default()
        };
        let input = InputParameters {
            air: AirProperties::from_si(0.0296, 1e-300, 1e300, 0.707),
            ..InputParameters::default()
        };
        assert_eq!(
            analyze(&input, &bounds, &CurveConfig::default()),
            Err(NaturalConvectionError::DivisionByZero(
                ZeroDenominator::KinematicViscosity
            ))
        );
    }

    #[test]
    fn averaged_readings_at_ambient_divide_by_zero() {
        let input = InputParameters {
            surface_temperatures: "25,35".into(),
            ..InputParameters::default()
        };
        assert!(matches!(
            run(&input),
            Err(NaturalConvectionError::DivisionByZero(
                ZeroDenominator::TemperatureDifference
            ))
        ));
    }

    #[test]
    fn malformed_temperatures_are_invalid_input() {
        let input = InputParameters {
            surface_temperatures: "85,abc,88".into(),
            ..InputParameters::default()
        };
        assert_eq!(
            run(&input),
            Err(NaturalConvectionError::InvalidInput(
                InputError::InvalidTemperature {
                    index: 1,
                    token: "abc".into()
                }
            ))
        );
    }

    #[test]
    fn surface_colder_than_air() {
        let input = InputParameters {
            surface_temperatures: "20".into(),
            ..InputParameters::default()
        };
        let analysis = run(&input).unwrap();

        assert!(analysis.results.delta_t.get::<delta_kelvin>() < 0.0);
        assert!(h(analysis.results.h_experimental) < 0.0);
        assert_eq!(analysis.results.correlation, Correlation::OutOfRange);
    }

    #[test]
    fn curve_spans_default_sweep() {
        let analysis = run(&InputParameters::default()).unwrap();
        let points = analysis.curve.points();

        assert_eq!(points.len(), 100);
        assert_eq!(points[0].delta_t.get::<delta_kelvin>(), 5.0);
        assert_eq!(points[99].delta_t.get::<delta_kelvin>(), 50.0);

        let q = analysis.results.heat_supplied.get::<watt>();
        let a = analysis.results.area.get::<square_meter>();
        for point in points {
            assert_relative_eq!(
                h(point.h),
                q / (a * point.delta_t.get::<delta_kelvin>()),
                max_relative = 1e-12
            );
        }
        assert_eq!(analysis.curve.reference(), analysis.results.h_empirical);
    }

    #[test]
    fn repeated_analyses_are_identical() {
        let input = InputParameters::default();
        let first = run(&input).unwrap();
        let second = run(&input).unwrap();

        assert_eq!(first, second);
        assert_eq!(
            first.results.h_empirical.value.to_bits(),
            second.results.h_empirical.value.to_bits()
        );
    }
}
