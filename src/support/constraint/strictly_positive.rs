use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Geometry, fluid properties, and electrical inputs of the lab all carry
/// this constraint, since each of them divides something further along.
///
/// # Examples
///
/// ```
/// use natural_convection::support::constraint::{Constrained, StrictlyPositive};
///
/// let x = Constrained::<_, StrictlyPositive>::new(0.032).unwrap();
/// assert_eq!(x.into_inner(), 0.032);
///
/// let y = StrictlyPositive::new(1.5).unwrap();
/// assert_eq!(y.into_inner(), 1.5);
///
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(-90.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{
        electric_current::ampere, f64::ElectricCurrent, f64::Length, length::meter,
    };

    #[test]
    fn floats() {
        assert!(Constrained::<f64, StrictlyPositive>::new(0.0296).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-5.0), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn lengths() {
        let length = StrictlyPositive::new(Length::new::<meter>(0.5)).unwrap();
        assert_eq!(length.as_ref().get::<meter>(), 0.5);

        assert!(StrictlyPositive::new(Length::new::<meter>(0.0)).is_err());
        assert!(StrictlyPositive::new(Length::new::<meter>(-0.1)).is_err());
    }

    #[test]
    fn currents() {
        assert!(StrictlyPositive::new(ElectricCurrent::new::<ampere>(1.5)).is_ok());
        assert!(StrictlyPositive::new(ElectricCurrent::new::<ampere>(0.0)).is_err());
    }
}
