//! Natural convection from a heated vertical tube.
//!
//! Compares the heat transfer coefficient measured in the lab,
//! `h = q / (A·ΔT)`, with the one predicted by an empirical Nusselt
//! correlation, `h = Nu·k / L`.
//!
//! The computational core is in the internal `core` module;
//! [`NaturalConvectionLab`] is the [`twine_core::Model`] adapter.
//!
//! # Example
//!
//! ```
//! use natural_convection::models::thermal::natural_convection::{
//!     InputParameters, NaturalConvectionLab,
//! };
//! use uom::si::heat_transfer::watt_per_square_meter_kelvin;
//!
//! let lab = NaturalConvectionLab::default();
//! let analysis = lab.compute(&InputParameters::default()).unwrap();
//!
//! let h_exp = analysis.results.h_experimental.get::<watt_per_square_meter_kelvin>();
//! assert!((h_exp - 47.12).abs() < 0.01);
//! assert_eq!(analysis.curve.points().len(), 100);
//! ```

mod core;

pub use self::core::{
    AirProperties, Analysis, Bounds, CoefficientCurve, Correlation, CurveConfig, CurvePoint,
    DerivedResults, EMPIRICAL_LABEL, EXPERIMENTAL_LABEL, Field, Heater, InputBounds, InputError,
    InputParameters, NaturalConvectionError, SurfaceTemperatures, TITLE, Tube, Warning,
    X_LABEL, Y_LABEL, ZeroDenominator, parse_surface_temperatures,
};

use twine_core::Model;

/// Analyses natural convection experiments on a heated tube.
///
/// Holds only configuration, so one instance can serve any number of
/// analyses, including concurrent ones.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NaturalConvectionLab {
    bounds: InputBounds,
    curve: CurveConfig,
}

impl NaturalConvectionLab {
    /// Creates a lab with custom input bounds and curve sweep.
    #[must_use]
    pub fn new(bounds: InputBounds, curve: CurveConfig) -> Self {
        Self { bounds, curve }
    }

    #[must_use]
    pub fn bounds(&self) -> &InputBounds {
        &self.bounds
    }

    #[must_use]
    pub fn curve(&self) -> &CurveConfig {
        &self.curve
    }

    /// Computes derived quantities and the coefficient curve for `input`.
    ///
    /// # Errors
    ///
    /// Returns [`NaturalConvectionError::InvalidInput`] if the surface
    /// temperatures cannot be parsed or a scalar input is out of bounds or
    /// not strictly positive, and [`NaturalConvectionError::DivisionByZero`]
    /// if the average surface temperature equals the ambient temperature.
    pub fn compute(&self, input: &InputParameters) -> Result<Analysis, NaturalConvectionError> {
        self::core::analyze(input, &self.bounds, &self.curve)
    }
}

impl Model for NaturalConvectionLab {
    type Input = InputParameters;
    type Output = Analysis;
    type Error = NaturalConvectionError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self.compute(input)
    }
}
