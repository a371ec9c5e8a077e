//! # Natural Convection
//!
//! Heat transfer coefficients for free convection from a heated vertical
//! tube, built as a [Twine](https://github.com/isentropic-dev/twine) model.
//!
//! A lab run supplies the electrical power to a heater inside the tube, the
//! resulting surface temperatures, and the air properties. The model returns
//! the experimental coefficient, the empirical coefficient from a Nusselt
//! correlation, and chart data comparing the two.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! Modules in [`support`] are public because they're useful, but their APIs
//! are not stable.

pub mod models;
pub mod support;
