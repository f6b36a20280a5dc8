use biguint::BigUInt;

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

/// `u64::MAX * 2^doublings`, built through in-place addition.
fn wide(doublings: u32) -> BigUInt {
    let mut x = BigUInt::new(u64::MAX);
    for _ in 0..doublings {
        let twin = x.copy();
        x.add(&twin);
    }
    x
}

pub fn bench_add(c: &mut Criterion) {
    let a = wide(4096);
    let b = wide(4000);
    c.bench_function("add 4160-bit", |bench| {
        bench.iter(|| {
            let mut x = a.copy();
            x.add(black_box(&b));
            x
        })
    });
}

pub fn bench_subtract(c: &mut Criterion) {
    let a = wide(4096);
    let b = wide(4000);
    c.bench_function("subtract 4160-bit", |bench| {
        bench.iter(|| {
            let mut x = a.copy();
            let _ = x.subtract(black_box(&b));
            x
        })
    });
}

pub fn bench_display(c: &mut Criterion) {
    let a = wide(4096);
    c.bench_function("display 4160-bit", |bench| {
        bench.iter(|| black_box(&a).to_string())
    });
}

criterion_group!(benches, bench_add, bench_subtract, bench_display);
criterion_main!(benches);
