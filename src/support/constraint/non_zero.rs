use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-zero (not equal to zero).
///
/// Unlike [`StrictlyPositive`](super::StrictlyPositive), negative values are
/// accepted. A surface colder than the surrounding air still yields a
/// usable, if negative, temperature difference.
///
/// # Examples
///
/// ```
/// use natural_convection::support::constraint::{Constrained, NonZero};
///
/// let x = Constrained::<_, NonZero>::new(57.0).unwrap();
/// assert_eq!(x.into_inner(), 57.0);
///
/// let y = NonZero::new(-3.0).unwrap();
/// assert_eq!(y.into_inner(), -3.0);
///
/// assert!(NonZero::new(0.0).is_err());
/// assert!(NonZero::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NonZero;

impl NonZero {
    /// Constructs a [`Constrained<T, NonZero>`] if the value is not zero.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(value: T) -> Result<Constrained<T, NonZero>, ConstraintError> {
        Constrained::<T, NonZero>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonZero {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Less) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            None => Err(ConstraintError::NotANumber),
        }
    }
}
