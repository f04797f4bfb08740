use core::ops::RangeInclusive;

use crate::{ClosedRange, InvalidRangeError, RangeTrait};

/// Builds a concrete range from its bounds.
///
/// A [RangeSet](crate::RangeSet) never constructs the ranges it stores
/// itself; every merged range comes from its factory. Factories must
/// be deterministic, and must fail if and only if `max < min`.
///
/// Any `Fn(Y, Y) -> Result<T, InvalidRangeError>` is a factory, so
/// wrapping an existing constructor is a one-liner:
///
/// ```
/// use rangeunion::{ClosedRange, Mode, RangeSet};
///
/// let mut set: RangeSet<ClosedRange<u32>, _> =
///     RangeSet::with_factory(ClosedRange::new, Mode::discrete());
/// set.insert_bounds(1u32, 3).unwrap();
/// set.insert_bounds(4, 6).unwrap();
/// assert_eq!(set.iter().count(), 1);
/// ```
pub trait RangeFactory<T: RangeTrait> {
    fn create(&self, min: T::Elem, max: T::Elem) -> Result<T, InvalidRangeError>;
}

impl<T, F> RangeFactory<T> for F
where
    T: RangeTrait,
    F: Fn(T::Elem, T::Elem) -> Result<T, InvalidRangeError>,
{
    fn create(&self, min: T::Elem, max: T::Elem) -> Result<T, InvalidRangeError> {
        self(min, max)
    }
}

/// Factory for [ClosedRange]s.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ClosedRangeFactory;

impl<Y: Ord> RangeFactory<ClosedRange<Y>> for ClosedRangeFactory {
    fn create(&self, min: Y, max: Y) -> Result<ClosedRange<Y>, InvalidRangeError> {
        ClosedRange::new(min, max)
    }
}

/// Factory for the standard library's [RangeInclusive].
///
/// `RangeInclusive` itself happily represents backwards ranges;
/// this factory refuses them like every other factory must.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct InclusiveRangeFactory;

impl<Y: Ord> RangeFactory<RangeInclusive<Y>> for InclusiveRangeFactory {
    fn create(&self, min: Y, max: Y) -> Result<RangeInclusive<Y>, InvalidRangeError> {
        if max < min {
            return Err(InvalidRangeError);
        }
        Ok(min..=max)
    }
}
