use core::ops::RangeInclusive;

/// A closed range `[start, end]` that a [RangeSet](crate::RangeSet) can store.
///
/// Implementors are values: a stored range is never mutated, and every
/// "change" the set makes produces a new range through its
/// [RangeFactory](crate::RangeFactory). Implementors must uphold
/// `start() <= end()`.
pub trait RangeTrait {
    type Elem: Ord;

    fn start(&self) -> &Self::Elem;
    fn end(&self) -> &Self::Elem;

    fn contains(&self, item: &Self::Elem) -> bool {
        item >= self.start() && item <= self.end()
    }

    fn encloses(&self, other: &Self) -> bool {
        self.start() <= other.start() && other.end() <= self.end()
    }
}

impl<T> RangeTrait for RangeInclusive<T>
where
    T: Ord,
{
    type Elem = T;

    fn start(&self) -> &T {
        RangeInclusive::start(self)
    }

    fn end(&self) -> &T {
        RangeInclusive::end(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_at_both_ends() {
        let range = 3..=5u32;
        assert!(!RangeTrait::contains(&range, &2));
        assert!(RangeTrait::contains(&range, &3));
        assert!(RangeTrait::contains(&range, &5));
        assert!(!RangeTrait::contains(&range, &6));
    }

    #[test]
    fn encloses() {
        assert!((1..=9u32).encloses(&(1..=9)));
        assert!((1..=9u32).encloses(&(3..=4)));
        assert!(!(1..=9u32).encloses(&(0..=4)));
        assert!(!(1..=9u32).encloses(&(5..=10)));
    }
}
