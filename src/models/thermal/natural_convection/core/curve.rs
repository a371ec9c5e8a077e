//! Experimental coefficient swept over a range of temperature differences.

use uom::si::{
    f64::{Area, HeatTransfer, Power, TemperatureInterval},
    temperature_interval::kelvin as delta_kelvin,
};

use crate::support::constraint::{ConstraintResult, StrictlyPositive};

/// Chart title.
pub const TITLE: &str = "hexp vs ΔT";

/// X-axis label.
pub const X_LABEL: &str = "ΔT (°C)";

/// Y-axis label.
pub const Y_LABEL: &str = "Heat Transfer Coefficient (W/m²·K)";

/// Legend label of the swept experimental curve.
pub const EXPERIMENTAL_LABEL: &str = "Experimental";

/// Legend label of the horizontal empirical reference line.
pub const EMPIRICAL_LABEL: &str = "Empirical Hemp";

/// Sweep settings for the coefficient curve.
///
/// Both ends of the sweep are strictly positive so no sample divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveConfig {
    start: TemperatureInterval,
    end: TemperatureInterval,
    samples: usize,
}

impl CurveConfig {
    /// Creates a sweep from `start` to `end` (both included) with `samples` points.
    ///
    /// # Errors
    ///
    /// Returns an error if either end of the sweep is not strictly positive.
    pub fn new(
        start: TemperatureInterval,
        end: TemperatureInterval,
        samples: usize,
    ) -> ConstraintResult<Self> {
        let start = StrictlyPositive::new(start)?.into_inner();
        let end = StrictlyPositive::new(end)?.into_inner();
        Ok(Self {
            start,
            end,
            samples,
        })
    }

    #[must_use]
    pub fn start(&self) -> TemperatureInterval {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> TemperatureInterval {
        self.end
    }

    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Evenly spaced temperature differences over the sweep.
    ///
    /// Zero samples give an empty sweep and one sample gives just `start`.
    /// Otherwise the last sample is exactly `end`.
    #[must_use]
    pub fn delta_ts(&self) -> Vec<TemperatureInterval> {
        let start = self.start.get::<delta_kelvin>();
        let end = self.end.get::<delta_kelvin>();

        match self.samples {
            0 => Vec::new(),
            1 => vec![self.start],
            n => {
                #[allow(clippy::cast_precision_loss)]
                let step = (end - start) / (n - 1) as f64;
                (0..n)
                    .map(|i| {
                        let x = if i == n - 1 {
                            end
                        } else {
                            #[allow(clippy::cast_precision_loss)]
                            let i = i as f64;
                            start + step * i
                        };
                        TemperatureInterval::new::<delta_kelvin>(x)
                    })
                    .collect()
            }
        }
    }
}

impl Default for CurveConfig {
    /// 100 samples from 5 K to 50 K.
    fn default() -> Self {
        Self {
            start: TemperatureInterval::new::<delta_kelvin>(5.0),
            end: TemperatureInterval::new::<delta_kelvin>(50.0),
            samples: 100,
        }
    }
}

/// One sample of the experimental curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurvePoint {
    pub delta_t: TemperatureInterval,
    pub h: HeatTransfer,
}

/// Chart data: the experimental coefficient `q / (A·ΔT)` over a sweep of
/// `ΔT`, with the empirical coefficient as a constant reference line.
///
/// `q` and `A` are those of the analysed experiment; only `ΔT` varies.
#[derive(Debug, Clone, PartialEq)]
pub struct CoefficientCurve {
    points: Vec<CurvePoint>,
    reference: HeatTransfer,
}

impl CoefficientCurve {
    pub(super) fn sweep(
        config: &CurveConfig,
        heat_supplied: Power,
        area: Area,
        reference: HeatTransfer,
    ) -> Self {
        let points = config
            .delta_ts()
            .into_iter()
            .map(|delta_t| CurvePoint {
                delta_t,
                h: heat_supplied / (area * delta_t),
            })
            .collect();

        Self { points, reference }
    }

    /// Samples of the experimental curve, in increasing `ΔT`.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// The empirical coefficient, drawn as a horizontal line.
    #[must_use]
    pub fn reference(&self) -> HeatTransfer {
        self.reference
    }
}
