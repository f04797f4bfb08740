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
                let before = set.clone();
                if set.insert_bounds(a, b).is_err() {
                    assert!(b < a);
                    assert_eq!(*set, before);
                }
            }
            Op::InsertPoint(p) => set.insert_point(p).unwrap(),
        }
    }
}

fuzz_target!(|ops: Vec<Op>| {
    let mut set = RangeSet::discrete();

    for op in ops {
        op.apply(&mut set);
    }

    // Stored ranges must be ascending with at least one uncovered
    // item between neighbours.
    let mut peek = set.iter().peekable();
    while let Some(range) = peek.next() {
        if let Some(next) = peek.peek() {
            if *range.max() >= next.min().saturating_sub(1) {
                panic!()
            }
        }
    }
});
