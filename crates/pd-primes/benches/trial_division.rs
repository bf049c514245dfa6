use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn bench_trial_division(c: &mut Criterion) {
    c.bench_function("is_prime_large_prime", |b| {
        b.iter(|| black_box(pd_primes::is_prime(black_box(24_999_983))))
    });

    c.bench_function("enumerate_100k", |b| {
        b.iter(|| black_box(pd_primes::enumerate(black_box(100_000), false).len()))
    });

    c.bench_function("enumerate_parallel_1m", |b| {
        b.iter(|| black_box(pd_primes::enumerate_parallel(black_box(1_000_000)).len()))
    });
}

criterion_group!(benches, bench_trial_division);
criterion_main!(benches);
