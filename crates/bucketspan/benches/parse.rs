//! Parser benchmarks over representative accepted and rejected inputs.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};

use bucketspan::parse_interval;

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_interval");

    for input in ["1s", "250ms", "604800000ms", "1M"] {
        group.bench_function(input, |b| b.iter(|| parse_interval(black_box(input))));
    }

    // Error paths allocate the echoed input.
    for input in ["0.5h", "12M"] {
        group.bench_function(format!("reject/{input}"), |b| {
            b.iter(|| parse_interval(black_box(input)).is_err())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
