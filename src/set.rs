use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

#[cfg(feature = "serde1")]
use serde::ser::{Serialize, SerializeSeq, Serializer};
use tracing::trace;

use crate::factory::{ClosedRangeFactory, RangeFactory};
use crate::region::{self, Plan};
use crate::std_ext::{Mode, StepFns, StepLite, Steps};
use crate::{ClosedRange, InvalidRangeError, RangeTrait};

mod iterators;

pub use iterators::{IntoIter, Iter};

/// A set whose items are stored as closed ranges `[min, max]`.
///
/// Overlapping ranges are coalesced into a single range as they are
/// inserted. In [discrete](Mode::Discrete) mode, ranges that are merely
/// adjacent (the end of one is immediately followed by the start of the
/// other) are coalesced too, so the set always holds the smallest
/// possible number of ranges:
///
/// ```
/// use rangeunion::{ClosedRange, RangeSet};
///
/// let mut discrete = RangeSet::discrete();
/// discrete.insert_bounds(1, 3).unwrap();
/// discrete.insert_bounds(4, 6).unwrap();
/// assert_eq!(discrete.as_slice(), &[ClosedRange::new(1, 6).unwrap()]);
///
/// let mut continuous = RangeSet::continuous();
/// continuous.insert_bounds(1, 3).unwrap();
/// continuous.insert_bounds(4, 6).unwrap();
/// assert_eq!(continuous.len(), 2);
/// ```
///
/// Stored ranges are kept in a vector and every operation scans it
/// linearly, which suits sets holding a modest number of ranges.
///
/// A `RangeSet` does no synchronization of its own. To share one
/// between threads, guard insertions with an exclusive lock and give
/// readers either the same lock or a clone.
#[derive(Clone)]
pub struct RangeSet<T, F = ClosedRangeFactory>
where
    T: RangeTrait,
{
    // Ascending, pairwise disjoint, and in discrete mode
    // pairwise non-adjacent.
    ranges: Vec<T>,
    mode: Mode<T::Elem>,
    factory: F,
}

/// Equivalent to [RangeSet::continuous].
impl<Y> Default for RangeSet<ClosedRange<Y>, ClosedRangeFactory>
where
    Y: Ord + Clone,
{
    fn default() -> Self {
        Self::continuous()
    }
}

impl<Y> RangeSet<ClosedRange<Y>, ClosedRangeFactory>
where
    Y: Ord + Clone,
{
    /// Makes a new empty set that only coalesces overlapping ranges.
    pub fn continuous() -> Self {
        Self::with_factory(ClosedRangeFactory, Mode::Continuous)
    }

    /// Makes a new empty set that also coalesces adjacent ranges,
    /// using `Y`'s own [StepLite] implementation to find neighbours.
    pub fn discrete() -> Self
    where
        Y: StepLite,
    {
        Self::with_factory(ClosedRangeFactory, Mode::discrete())
    }

    /// Makes a new empty discrete set, specifying successor and
    /// predecessor functions defined separately from `Y` itself.
    ///
    /// This is useful as a workaround for Rust's "orphan rules",
    /// which prevent you from implementing `StepLite` for `Y` if `Y`
    /// is a foreign type.
    pub fn new_with_step_fns<S>() -> Self
    where
        S: StepFns<Y>,
    {
        Self::with_factory(ClosedRangeFactory, Mode::Discrete(Steps::of::<S>()))
    }
}

impl<T, F> RangeSet<T, F>
where
    T: RangeTrait,
    T::Elem: Clone,
    F: RangeFactory<T>,
{
    /// Makes a new empty set storing whatever `factory` builds.
    pub fn with_factory(factory: F, mode: Mode<T::Elem>) -> Self {
        RangeSet {
            ranges: Vec::new(),
            mode,
            factory,
        }
    }

    pub fn mode(&self) -> &Mode<T::Elem> {
        &self.mode
    }

    pub fn is_discrete(&self) -> bool {
        self.mode.is_discrete()
    }

    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Number of stored (maximal) ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The stored ranges, in ascending order.
    pub fn as_slice(&self) -> &[T] {
        &self.ranges
    }

    /// Returns a reference to the range covering the given item, if any.
    pub fn get(&self, item: &T::Elem) -> Option<&T> {
        self.ranges.iter().find(|range| range.contains(item))
    }

    /// Returns `true` if any range in the set covers the specified item.
    pub fn contains_point(&self, item: &T::Elem) -> bool {
        self.get(item).is_some()
    }

    /// Returns `true` if every item of `range` is covered by the set.
    ///
    /// Because stored ranges are maximal, that is the case exactly
    /// when a single stored range encloses it.
    pub fn contains_range(&self, range: &T) -> bool {
        self.ranges.iter().any(|stored| stored.encloses(range))
    }

    /// Insert a range into the set.
    ///
    /// If the inserted range overlaps any stored ranges (or, in discrete
    /// mode, is immediately adjacent to them), they are all replaced by a
    /// single range built by the set's factory.
    ///
    /// Fails if `range` is backwards, or if the factory refuses the range
    /// to be stored. Either way the set is left unchanged.
    pub fn insert(&mut self, range: T) -> Result<(), InvalidRangeError> {
        // `RangeInclusive` and friends can be backwards.
        if range.end() < range.start() {
            return Err(InvalidRangeError);
        }
        match region::plan(&self.ranges, &range, self.mode.steps()) {
            Plan::Vacant(slot) => {
                let (min, max) = (range.start().clone(), range.end().clone());
                let fresh = self.factory.create(min, max)?;
                trace!(slot, "inserting range into empty space");
                self.ranges.insert(slot, fresh);
            }
            Plan::Covered(slot) => {
                trace!(slot, "range already covered");
            }
            Plan::Merge { slots, min, max } => {
                // Build before splicing, so a refusal leaves us untouched.
                let merged = self.factory.create(min, max)?;
                let (first, last) = slots.into_inner();
                if first == last {
                    trace!(slot = first, "widening stored range");
                } else {
                    trace!(first, last, "coalescing stored ranges");
                }
                self.ranges[first] = merged;
                self.ranges.drain(first + 1..=last);
            }
        }
        Ok(())
    }

    /// Insert the single item `item`.
    pub fn insert_point(&mut self, item: T::Elem) -> Result<(), InvalidRangeError> {
        let range = self.factory.create(item.clone(), item)?;
        self.insert(range)
    }

    /// Insert the range `[min, max]`, built by the set's factory.
    ///
    /// Fails if `max < min`, leaving the set unchanged.
    pub fn insert_bounds(&mut self, min: T::Elem, max: T::Elem) -> Result<(), InvalidRangeError> {
        let range = self.factory.create(min, max)?;
        self.insert(range)
    }

    /// Insert every range of `other` into this set, in ascending order.
    pub fn union_with<G>(&mut self, other: &RangeSet<T, G>) -> Result<(), InvalidRangeError>
    where
        T: Clone,
    {
        for range in other.ranges.iter() {
            self.insert(range.clone())?;
        }
        Ok(())
    }
}

impl<T, F> RangeSet<T, F>
where
    T: RangeTrait,
{
    /// Gets an iterator over all stored ranges, in ascending order.
    ///
    /// The iterator is double-ended; call `.rev()` on it to walk the
    /// ranges in descending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.ranges.iter())
    }
}

impl<T, F, G> PartialEq<RangeSet<T, G>> for RangeSet<T, F>
where
    T: RangeTrait + PartialEq,
{
    fn eq(&self, other: &RangeSet<T, G>) -> bool {
        self.ranges == other.ranges
    }
}

impl<T, F> Eq for RangeSet<T, F> where T: RangeTrait + Eq {}

// We can't just derive this automatically, because that would
// expose irrelevant (and private) implementation details.
impl<T, F> Debug for RangeSet<T, F>
where
    T: RangeTrait + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// One line per stored range, `Min : <min> -  Max: <max>`.
impl<T, F> Display for RangeSet<T, F>
where
    T: RangeTrait,
    T::Elem: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for range in self.iter() {
            writeln!(f, "Min : {} -  Max: {}", range.start(), range.end())?;
        }
        Ok(())
    }
}

// No `Deserialize`: step functions are not data.
// Load serialized pairs back with `insert_bounds`.
#[cfg(feature = "serde1")]
impl<T, F> Serialize for RangeSet<T, F>
where
    T: RangeTrait,
    T::Elem: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.ranges.len()))?;
        for range in self.iter() {
            seq.serialize_element(&(range.start(), range.end()))?;
        }
        seq.end()
    }
}
