// Stored ranges split the element line into alternating regions:
//
//   region:    0      1      2      3      4
//           ◌ ◌ ◌ ●-----● ◌ ◌ ◌ ●---● ◌ ◌ ◌
//
// Even regions are the empty space before each stored range (and
// after the last one); odd region `2i + 1` is stored range `i`.
// Inserting a range only needs to know which regions its two
// endpoints fall in.

use core::ops::RangeInclusive;

use crate::{RangeTrait, Steps};

/// Which end of the new range is being located.
///
/// In a discrete domain a point can sit in a one-element gap, touching
/// the end of one stored range and the start of the next. The low end
/// of a new range resolves such a point to the earlier neighbour and
/// the high end to the later one, so that both get fused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Endpoint {
    Min,
    Max,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Location {
    pub region: usize,
    // The point is one step before the start of the range in `region`.
    pub touches_left: bool,
    // The point is one step after the end of the range in `region`.
    pub touches_right: bool,
}

impl Location {
    fn empty(region: usize) -> Self {
        Location {
            region,
            touches_left: false,
            touches_right: false,
        }
    }

    fn inside(slot: usize) -> Self {
        Self::empty(2 * slot + 1)
    }

    fn left_of(slot: usize) -> Self {
        Location {
            touches_left: true,
            ..Self::inside(slot)
        }
    }

    fn right_of(slot: usize) -> Self {
        Location {
            touches_right: true,
            ..Self::inside(slot)
        }
    }

    pub fn is_occupied(&self) -> bool {
        self.region % 2 == 1
    }

    // Index of the first stored range at or after this location.
    pub fn slot(&self) -> usize {
        self.region / 2
    }
}

/// Finds the region `point` falls in.
///
/// Without `steps` (continuous domains) a point is either strictly
/// before a stored range, inside it, or the scan moves on. With `steps`
/// every stored range is widened by one element on each side, and a
/// point landing on that widened edge is reported as occupying the range
/// with the matching `touches_*` flag set.
///
/// `next` is only ever applied to a point strictly below some stored
/// start, and `prev` to a point strictly above some stored end, so the
/// extremes of the domain are never stepped past.
pub(crate) fn locate<T>(
    stored: &[T],
    point: &T::Elem,
    steps: Option<&Steps<T::Elem>>,
    endpoint: Endpoint,
) -> Location
where
    T: RangeTrait,
{
    for (slot, range) in stored.iter().enumerate() {
        if point < range.start() {
            if let Some(steps) = steps {
                if steps.next(point) == *range.start() {
                    return Location::left_of(slot);
                }
            }
            return Location::empty(2 * slot);
        }

        if point <= range.end() {
            return Location::inside(slot);
        }

        if let Some(steps) = steps {
            if steps.prev(point) == *range.end() {
                if endpoint == Endpoint::Max {
                    if let Some(following) = stored.get(slot + 1) {
                        if point < following.start() && steps.next(point) == *following.start() {
                            return Location::left_of(slot + 1);
                        }
                    }
                }
                return Location::right_of(slot);
            }
        }
    }

    Location::empty(2 * stored.len())
}

/// What inserting a range does to the stored sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Plan<Y> {
    /// Touches nothing; goes in as-is at this slot.
    Vacant(usize),
    /// Already wholly covered by the range at this slot.
    Covered(usize),
    /// Replace the stored ranges in `slots` with a single range
    /// `[min, max]`.
    Merge {
        slots: RangeInclusive<usize>,
        min: Y,
        max: Y,
    },
}

/// Works out how `new` combines with the (well-formed) `stored` ranges.
pub(crate) fn plan<T>(stored: &[T], new: &T, steps: Option<&Steps<T::Elem>>) -> Plan<T::Elem>
where
    T: RangeTrait,
    T::Elem: Clone,
{
    let from = locate(stored, new.start(), steps, Endpoint::Min);
    let to = locate(stored, new.end(), steps, Endpoint::Max);

    if from.region == to.region {
        if !from.is_occupied() {
            return Plan::Vacant(from.slot());
        }
        if !from.touches_left && !to.touches_right {
            return Plan::Covered(from.slot());
        }
    }

    // Either both endpoints are in the same occupied region, or `to` is
    // strictly after `from`; in both cases `to.region >= 1`.
    let first = from.slot();
    let last = (to.region - 1) / 2;

    let min = if !from.is_occupied() || from.touches_left {
        new.start().clone()
    } else {
        stored[first].start().clone()
    };
    let max = if !to.is_occupied() || to.touches_right {
        new.end().clone()
    } else {
        stored[last].end().clone()
    };

    Plan::Merge {
        slots: first..=last,
        min,
        max,
    }
}
