/*!
[`RangeSet`] is a set data structure whose items are stored as closed
ranges `[min, max]`. Overlapping ranges are coalesced into a single
range as they are inserted, so the set always holds the fewest ranges
that cover exactly the items inserted so far.

Ranges themselves are [`ClosedRange`]s by default, but any type
implementing [`RangeTrait`] can be stored, as long as the set is given
a [`RangeFactory`] that knows how to build one from its bounds. The
standard library's [`RangeInclusive`] works out of the box via
[`InclusiveRangeFactory`].


# Continuous and discrete sets

Whether two ranges that merely _touch_ belong together depends on the
item type:

- If your items represent points on a continuum (e.g. `f64`), then
  `[1.0, 3.0]` and `[4.0, 6.0]` leave a whole interval uncovered between
  them, and must stay apart. Use [`RangeSet::continuous`]: ranges are
  coalesced only when they share at least one item.
- If your items represent discrete objects (integers, `char`s, calendar
  days), then `[1, 3]` and `[4, 6]` together cover everything from 1 to 6,
  and should be stored as a single range. Use [`RangeSet::discrete`],
  which finds neighbouring items through the [`StepLite`] trait.

Adjacent ranges can not be detected simply by testing their ends for
equality, so a discrete set needs _successor_ and _predecessor_
functions for its item type. Where [`StepLite`] can not be implemented
because of Rust's orphan rules, supply them through [`StepFns`] or a
[`Steps`] value instead.


# Example: use with Chrono

```rust
use chrono::NaiveDate;
use rangeunion::{ClosedRange, ClosedRangeFactory, Mode, RangeSet, Steps};

fn tomorrow(day: &NaiveDate) -> NaiveDate {
    day.succ_opt().unwrap_or(*day)
}

fn yesterday(day: &NaiveDate) -> NaiveDate {
    day.pred_opt().unwrap_or(*day)
}

let day = |d| NaiveDate::from_ymd_opt(2019, 1, d).unwrap();
let mut away: RangeSet<ClosedRange<NaiveDate>> = RangeSet::with_factory(
    ClosedRangeFactory,
    Mode::Discrete(Steps::new(tomorrow, yesterday)),
);

away.insert_bounds(day(7), day(11)).unwrap();
away.insert_bounds(day(14), day(18)).unwrap();
// The weekend in between.
away.insert_bounds(day(12), day(13)).unwrap();

assert_eq!(away.len(), 1);
assert_eq!(away.to_string(), "Min : 2019-01-07 -  Max: 2019-01-18\n");
```


## Crate features

By default this crate depends only on _thiserror_ and _tracing_, both
without their standard library features.

If you enable the **serde1** feature it will introduce a dependency on
the _serde_ crate and provide `Serialize` and `Deserialize`
implementations for [`ClosedRange`], and a `Serialize` implementation
for [`RangeSet`]. A set serializes as a sequence of `(min, max)` pairs.

You can enable the **serde1** feature in your _Cargo.toml_ file like so:

```toml
[dependencies]
rangeunion = { version = "0.1", features = ["serde1"] }
```

You can similarly enable support for _quickcheck_ by enabling
the **quickcheck** feature.


## Logging

Every insertion emits a `trace`-level _tracing_ event describing what
it did to the stored ranges. Without a subscriber installed these cost
next to nothing.


## Building without the Rust standard library

This crate can work without the full standard library available
(e.g. when running on bare metal without an operating system)
but relies on the presence of a global allocator &mdash;
i.e. it links the `core` and `alloc` crates, but not `std`.


[`RangeSet`]: crate::RangeSet
[`RangeSet::continuous`]: crate::RangeSet::continuous
[`RangeSet::discrete`]: crate::RangeSet::discrete
[`RangeInclusive`]: core::ops::RangeInclusive

*/

#![no_std]
extern crate alloc;
#[cfg(test)]
extern crate std;

mod closed_range;
mod error;
mod factory;
mod range_trait;
pub(crate) mod region;
pub mod set;
mod std_ext;

#[cfg(test)]
mod dense;

pub use closed_range::ClosedRange;
pub use error::InvalidRangeError;
pub use factory::{ClosedRangeFactory, InclusiveRangeFactory, RangeFactory};
pub use range_trait::RangeTrait;
pub use set::RangeSet;
pub use std_ext::{Mode, StepFns, StepLite, Steps};
