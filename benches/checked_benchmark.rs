// ============================================================================
// Checked Number Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Overhead - checked vs native integer arithmetic
// 2. Policies - the same operation under each policy
// 3. Floating - directed rounding on f64
// 4. Text - literal parsing and formatting
// ============================================================================

use checked_number::checked::add_assign_r;
use checked_number::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// ============================================================================
// Overhead Benchmarks
// Cost of the wrapper against plain wrapping arithmetic
// ============================================================================

fn benchmark_integer_overhead(c: &mut Criterion) {
    let mut group = c.benchmark_group("integer_overhead");
    let values: Vec<i64> = (0..1000).map(|i| i * 7919 - 3_000_000).collect();

    group.bench_function("native_wrapping_sum", |b| {
        b.iter(|| {
            let mut acc = 0i64;
            for v in &values {
                acc = acc.wrapping_add(black_box(*v));
            }
            acc
        });
    });

    group.bench_function("checked_sum", |b| {
        b.iter(|| {
            let mut acc = Checked::<i64>::zero();
            for v in &values {
                acc += black_box(*v);
            }
            acc
        });
    });

    group.bench_function("result_code_sum", |b| {
        b.iter(|| {
            let mut acc = Checked::<i64, Transparent>::zero();
            for v in &values {
                let prev = *acc.raw_value();
                black_box(add_assign_r(&mut acc, &prev, black_box(v), RoundingDir::NATIVE));
            }
            acc
        });
    });

    group.finish();
}

// ============================================================================
// Policy Benchmarks
// ============================================================================

fn benchmark_policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policies");

    for width in [8u32, 16, 31].iter() {
        let x = (1i32 << width) - 1;

        group.bench_with_input(BenchmarkId::new("CheckOverflow_mul", width), &x, |b, x| {
            let v = Checked::<i32, CheckOverflow>::new(*x);
            b.iter(|| black_box(v.checked_mul(black_box(&3i32))));
        });

        group.bench_with_input(BenchmarkId::new("Saturating_mul", width), &x, |b, x| {
            let v = Checked::<i32, Saturating>::new(*x);
            b.iter(|| black_box(v * black_box(3i32)));
        });

        group.bench_with_input(BenchmarkId::new("Extended_mul", width), &x, |b, x| {
            let v = Checked::<i32, Extended>::new(*x);
            b.iter(|| black_box(v * black_box(3i32)));
        });
    }

    group.finish();
}

// ============================================================================
// Floating Benchmarks
// ============================================================================

fn benchmark_float_rounding(c: &mut Criterion) {
    let mut group = c.benchmark_group("float_rounding");
    let x = Checked::<f64, Extended>::new(1.0);

    group.bench_function("div_round_up", |b| {
        b.iter(|| black_box(x / black_box(3.0f64)));
    });

    group.bench_function("sqrt_round_up", |b| {
        let two = Checked::<f64, Extended>::new(2.0);
        b.iter(|| black_box(two.checked_sqrt()));
    });

    group.finish();
}

// ============================================================================
// Text Benchmarks
// ============================================================================

fn benchmark_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("text");

    for literal in ["12345", "-16^^7fffffff", "1.5e3", "355/113"].iter() {
        group.bench_with_input(BenchmarkId::new("parse_i64", literal), literal, |b, literal| {
            b.iter(|| black_box(literal.parse::<Checked<i64, Extended>>()));
        });
    }

    let hex = NumericFormat::new().with_base(16).with_base_prefix(true);
    let value = Checked::<i64>::new(0x7fff_ffff_ffff);
    group.bench_function("format_base16", |b| {
        b.iter(|| black_box(value.format_with(&hex)));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_integer_overhead,
    benchmark_policies,
    benchmark_float_rounding,
    benchmark_text,
);
criterion_main!(benches);
