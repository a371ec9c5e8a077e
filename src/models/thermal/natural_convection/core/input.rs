//! Inputs of an analysis, their allowed ranges, and validation.

mod air;
mod bounds;
mod field;
mod heater;
mod parameters;
mod surface_temperatures;
mod tube;

pub use air::AirProperties;
pub use bounds::{Bounds, InputBounds};
pub use field::Field;
pub use heater::Heater;
pub use parameters::InputParameters;
pub use surface_temperatures::{SurfaceTemperatures, parse_surface_temperatures};
pub use tube::Tube;

pub(crate) use parameters::Validated;
