//! Type-level numeric constraints checked once, at construction.
//!
//! Lab inputs such as a tube length or a heater current end up in a
//! denominator somewhere. Wrapping them in a [`Constrained`] value records
//! that the check has already happened, so downstream arithmetic can rely
//! on it without re-validating.
//!
//! # Provided constraints
//!
//! - [`NonZero`]: Not equal to zero
//! - [`StrictlyPositive`]: Greater than zero
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper,
//! where `C` is the marker type implementing [`Constraint<T>`].
//! Markers also provide an associated `new()` constructor
//! (e.g., `StrictlyPositive::new(0.5)`).
//!
//! # Extending
//!
//! Custom invariants can be added by implementing [`Constraint<T>`] for a
//! zero-sized marker type.

mod non_zero;
mod strictly_positive;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_zero::NonZero;
pub use strictly_positive::StrictlyPositive;

/// A trait for enforcing numeric invariants at construction time.
///
/// Implement this trait for any marker type representing a numeric constraint,
/// such as [`StrictlyPositive`].
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
}

/// A result type alias to use with [`Constraint`].
pub type ConstraintResult<T, E = ConstraintError> = Result<T, E>;

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use natural_convection::support::constraint::{Constrained, StrictlyPositive};
/// use uom::si::{f64::Length, length::meter};
///
/// let length = Constrained::<_, StrictlyPositive>::new(Length::new::<meter>(0.5)).unwrap();
/// assert_eq!(length.into_inner().get::<meter>(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Returns a reference to the inner unconstrained value.
impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
