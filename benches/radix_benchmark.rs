// ============================================================================
// Fixed-Radix Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Digit Store - packed bit access
// 2. Arithmetic - add/sub/mul across radixes and widths
// 3. Conversion - radix conversion cost by target base
// 4. Expressions - parse once, evaluate many
// ============================================================================

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fixed_radix::prelude::*;

// ============================================================================
// Digit Store Benchmarks
// ============================================================================

fn benchmark_digit_store(c: &mut Criterion) {
    let mut group = c.benchmark_group("digit_store");

    for base in [2u32, 10, 36].iter() {
        let format = NumberFormat::new(*base, 64, 64).unwrap();
        let mut store = DigitStore::new(format);
        for i in 0..format.total_digits() {
            store.write_digit(i, (i as u32 * 7) % base);
        }

        group.bench_with_input(BenchmarkId::new("read_all", base), &store, |b, store| {
            b.iter(|| black_box(store.digits().map(u64::from).sum::<u64>()));
        });
    }

    group.finish();
}

// ============================================================================
// Arithmetic Benchmarks
// ============================================================================

fn benchmark_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");

    for digits in [8usize, 32, 128].iter() {
        let format = NumberFormat::decimal(*digits, *digits);
        let a = FixedRadix::from_f64(format, 12345.678);
        let b = FixedRadix::from_f64(format, -987.125);

        group.bench_with_input(BenchmarkId::new("add", digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.checked_add(b).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("sub", digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.checked_sub(b).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("mul", digits), &(&a, &b), |bench, (a, b)| {
            bench.iter(|| black_box(a.checked_mul(b).unwrap()));
        });
    }

    group.finish();
}

// ============================================================================
// Conversion Benchmarks
// ============================================================================

fn benchmark_conversion(c: &mut Criterion) {
    let mut group = c.benchmark_group("conversion");
    let value = FixedRadix::parse(NumberFormat::decimal(20, 40), "-1234567.8901234567").unwrap();

    for base in [2u32, 16, 36].iter() {
        group.bench_with_input(BenchmarkId::new("with_base", base), base, |b, &base| {
            b.iter(|| black_box(value.with_base(base).unwrap()));
        });
    }

    group.bench_function("render", |b| b.iter(|| black_box(render(&value))));

    group.finish();
}

// ============================================================================
// Expression Benchmarks
// ============================================================================

fn benchmark_expressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("expressions");
    let input = "3x^4-2(x+1)^2+x/7-0.5";

    group.bench_function("parse", |b| b.iter(|| black_box(parse(black_box(input)).unwrap())));

    let expr = parse(input).unwrap();
    let format = NumberFormat::default();
    let x = FixedRadix::parse(format, "1.25").unwrap();
    group.bench_function("evaluate", |b| {
        b.iter(|| black_box(evaluate(&expr, &x).unwrap()));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_digit_store,
    benchmark_arithmetic,
    benchmark_conversion,
    benchmark_expressions
);
criterion_main!(benches);
