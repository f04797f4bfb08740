use alloc::{collections::BTreeSet, vec::Vec};
use core::ops::RangeInclusive;

// A simple but infeasibly slow and memory-hungry
// version of `RangeSet` for testing.
//
// Only understands `u32` items, so that we don't
// have to be generic over `step`. This is just for
// testing, so it's fine.
//
// Continuous semantics are modelled by storing every item at double
// its value: ranges that share an item then share a stored point,
// while merely adjacent ranges (`..=3` and `4..=`) leave the odd
// point between them empty and so stay apart.
#[derive(Eq, PartialEq, Debug)]
pub struct DenseU32Set {
    points: BTreeSet<u32>,
    scale: u32,
}

impl DenseU32Set {
    pub fn discrete() -> DenseU32Set {
        DenseU32Set {
            points: BTreeSet::new(),
            scale: 1,
        }
    }

    pub fn continuous() -> DenseU32Set {
        DenseU32Set {
            points: BTreeSet::new(),
            scale: 2,
        }
    }

    pub fn insert(&mut self, range: RangeInclusive<u32>) {
        for k in (range.start() * self.scale)..=(range.end() * self.scale) {
            self.points.insert(k);
        }
    }

    pub fn contains(&self, item: u32) -> bool {
        self.points.contains(&(item * self.scale))
    }

    // Coalesce runs of consecutive stored points back into ranges.
    //
    // Vecs are easier to use for assertions than iterators,
    // because you don't have to consume them to compare them.
    pub fn to_vec(&self) -> Vec<RangeInclusive<u32>> {
        let mut runs: Vec<(u32, u32)> = Vec::new();
        for &point in &self.points {
            if let Some((_, end)) = runs.last_mut() {
                if *end + 1 == point {
                    *end = point;
                    continue;
                }
            }
            runs.push((point, point));
        }
        runs.into_iter()
            .map(|(start, end)| (start / self.scale)..=(end / self.scale))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn discrete_model_fuses_adjacent() {
        let mut dense = DenseU32Set::discrete();
        dense.insert(1..=3);
        dense.insert(4..=6);
        assert_eq!(dense.to_vec(), vec![1..=6]);
    }

    #[test]
    fn continuous_model_keeps_adjacent_apart() {
        let mut dense = DenseU32Set::continuous();
        dense.insert(1..=3);
        dense.insert(4..=6);
        dense.insert(6..=7);
        assert_eq!(dense.to_vec(), vec![1..=3, 4..=7]);
        assert!(dense.contains(3));
        assert!(!dense.contains(8));
    }
}
