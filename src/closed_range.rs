use core::fmt::{self, Debug, Display};
use core::ops::RangeInclusive;

#[cfg(feature = "serde1")]
use serde::{
    de::{Deserialize, Deserializer, Error as _},
    ser::{Serialize, Serializer},
};

use crate::{InvalidRangeError, RangeTrait};

/// A range bounded inclusively below and above, `[min, max]`.
///
/// Unlike [RangeInclusive], a `ClosedRange` can not be backwards:
/// [new](ClosedRange::new) refuses `max < min`, and there is no way
/// to change either bound once it has been built.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClosedRange<Y> {
    min: Y,
    max: Y,
}

impl<Y> ClosedRange<Y>
where
    Y: Ord,
{
    /// Makes a new range covering `min` through `max`, both included.
    pub fn new(min: Y, max: Y) -> Result<Self, InvalidRangeError> {
        if max < min {
            return Err(InvalidRangeError);
        }
        Ok(ClosedRange { min, max })
    }

    /// Makes a range covering the single item `y`.
    pub fn point(y: Y) -> Self
    where
        Y: Clone,
    {
        ClosedRange {
            min: y.clone(),
            max: y,
        }
    }

    pub fn min(&self) -> &Y {
        &self.min
    }

    pub fn max(&self) -> &Y {
        &self.max
    }

    /// Returns `true` if `min <= y <= max`.
    pub fn contains(&self, y: &Y) -> bool {
        *y >= self.min && *y <= self.max
    }

    /// Destructures the range into `(min, max)`.
    pub fn into_inner(self) -> (Y, Y) {
        (self.min, self.max)
    }
}

impl<Y> RangeTrait for ClosedRange<Y>
where
    Y: Ord,
{
    type Elem = Y;

    fn start(&self) -> &Y {
        &self.min
    }

    fn end(&self) -> &Y {
        &self.max
    }
}

impl<Y> TryFrom<RangeInclusive<Y>> for ClosedRange<Y>
where
    Y: Ord,
{
    type Error = InvalidRangeError;

    fn try_from(range: RangeInclusive<Y>) -> Result<Self, Self::Error> {
        let (min, max) = range.into_inner();
        ClosedRange::new(min, max)
    }
}

impl<Y> From<ClosedRange<Y>> for RangeInclusive<Y> {
    fn from(range: ClosedRange<Y>) -> Self {
        range.min..=range.max
    }
}

// Same shape as `RangeInclusive`, so sets of either read alike.
impl<Y: Debug> Debug for ClosedRange<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.min, f)?;
        f.write_str("..=")?;
        Debug::fmt(&self.max, f)
    }
}

impl<Y: Display> Display for ClosedRange<Y> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Min : {} -  Max: {}", self.min, self.max)
    }
}

#[cfg(feature = "serde1")]
impl<Y> Serialize for ClosedRange<Y>
where
    Y: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (&self.min, &self.max).serialize(serializer)
    }
}

#[cfg(feature = "serde1")]
impl<'de, Y> Deserialize<'de> for ClosedRange<Y>
where
    Y: Ord + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (min, max) = <(Y, Y)>::deserialize(deserializer)?;
        ClosedRange::new(min, max).map_err(D::Error::custom)
    }
}

#[cfg(feature = "quickcheck")]
impl<Y> quickcheck::Arbitrary for ClosedRange<Y>
where
    Y: quickcheck::Arbitrary + Ord,
{
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        let a = Y::arbitrary(g);
        let b = Y::arbitrary(g);
        if a <= b {
            ClosedRange { min: a, max: b }
        } else {
            ClosedRange { min: b, max: a }
        }
    }

    fn shrink(&self) -> alloc::boxed::Box<dyn Iterator<Item = Self>> {
        alloc::boxed::Box::new(
            (self.min.clone(), self.max.clone())
                .shrink()
                .filter_map(|(min, max)| ClosedRange::new(min, max).ok()),
        )
    }
}
