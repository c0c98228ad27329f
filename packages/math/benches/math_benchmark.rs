use criterion::{Criterion, criterion_group, criterion_main};
use euler_math::{
    BigUint, big_digit_sum, big_factorial, count_divisors, divisor_count,
    first_triangle_with_divisors_over, Primes,
};
use std::hint::black_box;

fn bench_big_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("bigint");
    group.bench_function("pow_2_1000", |b| {
        b.iter(|| BigUint::from_u32(2).pow(black_box(1000)))
    });
    group.bench_function("factorial_100", |b| b.iter(|| big_factorial(black_box(100))));

    let power = BigUint::from_u32(2).pow(1000);
    group.bench_function("digit_sum_2_1000", |b| b.iter(|| big_digit_sum(black_box(&power))));
    group.finish();
}

fn bench_divisors(c: &mut Criterion) {
    let mut group = c.benchmark_group("divisors");
    let primes: Vec<u64> = Primes::new().take(2_000).collect();
    group.bench_function("trial_division", |b| {
        b.iter(|| divisor_count(black_box(76_576_500)))
    });
    group.bench_function("prime_table", |b| {
        b.iter(|| count_divisors(black_box(76_576_500), &primes))
    });
    group.finish();

    let mut group_search = c.benchmark_group("triangle_search");
    group_search.sample_size(10);
    group_search.bench_function("over_500", |b| {
        b.iter(|| first_triangle_with_divisors_over(black_box(500)))
    });
    group_search.finish();
}

criterion_group!(benches, bench_big_arithmetic, bench_divisors);
criterion_main!(benches);
