#![no_main]
use libfuzzer_sys::fuzz_target;

use arbitrary::Arbitrary;
use rangeunion::{ClosedRange, RangeSet};

#[derive(Clone, Debug, Arbitrary)]
enum Op {
    Insert(u8, u8),
    InsertPoint(u8),
}

impl Op {
    fn apply(self, set: &mut RangeSet<ClosedRange<u8>>) {
        match self {
            Op::Insert(a, b) => {
                let _ = set.insert_bounds(a.min(b), a.max(b));
            }
            Op::InsertPoint(p) => set.insert_point(p).unwrap(),
        }
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut set = RangeSet::continuous();
    let mut covered = [false; 256];

    for op in ops {
        match op {
            Op::Insert(a, b) => (a.min(b)..=a.max(b)).for_each(|p| covered[p as usize] = true),
            Op::InsertPoint(p) => covered[p as usize] = true,
        }
        op.clone().apply(&mut set);
    }

    // Stored ranges must be ascending and share no item.
    let mut peek = set.iter().peekable();
    while let Some(range) = peek.next() {
        if let Some(next) = peek.peek() {
            if range.max() >= next.min() {
                panic!()
            }
        }
    }

    for p in 0..=u8::MAX {
        assert_eq!(set.contains_point(&p), covered[p as usize]);
    }
});
