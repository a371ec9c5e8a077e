//! Supporting utilities shared by the models in this crate.
//!
//! - [`constraint`]: Type-level numeric invariants such as strict positivity.
//! - [`units`]: Extensions to [`uom`] for quantities it does not provide.

pub mod constraint;
pub mod units;
