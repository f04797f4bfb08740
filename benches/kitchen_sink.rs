#[macro_use]
extern crate criterion;

use criterion::Criterion;
use rand::prelude::*;

fn kitchen_sink(bounds: &[(i32, i32)]) {
    use rangeunion::{ClosedRange, RangeSet};

    let mut discrete: RangeSet<ClosedRange<i32>> = RangeSet::discrete();
    let mut continuous: RangeSet<ClosedRange<i32>> = RangeSet::continuous();
    // Fold every second range in through a union instead.
    let mut deferred: RangeSet<ClosedRange<i32>> = RangeSet::discrete();
    let mut defer = false;
    for &(min, max) in bounds {
        if defer {
            deferred.insert_bounds(min, max).ok();
        } else {
            discrete.insert_bounds(min, max).ok();
        }
        continuous.insert_bounds(min, max).ok();
        defer = !defer;
    }
    discrete.union_with(&deferred).ok();
    criterion::black_box((discrete, continuous));
}

fn criterion_benchmark(c: &mut Criterion) {
    c.bench_function("kitchen sink", |b| {
        let mut rng = thread_rng();
        let bounds: Vec<(i32, i32)> = (0..1000)
            .map(|_| {
                let start = rng.gen_range(0..1000);
                let end = start + rng.gen_range(0..100);
                (start, end)
            })
            .collect();
        b.iter(|| kitchen_sink(&bounds))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
