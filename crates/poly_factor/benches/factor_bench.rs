use criterion::{criterion_group, criterion_main, Criterion};
use poly_factor::factorize;
use poly_parser::parse;
use std::hint::black_box;

fn benchmark_parser(c: &mut Criterion) {
    let mut group = c.benchmark_group("parser");

    group.bench_function("parse_dense_quartic", |b| {
        b.iter(|| black_box(parse("3x^4 - 2x^3 + x^2 - 7x + 12").unwrap()))
    });

    group.finish();
}

fn benchmark_factorization(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorize");

    // (x-1)(x-2)(x-3) expanded
    let cubic = parse("x^3 - 6x^2 + 11x - 6").unwrap();
    group.bench_function("cubic_with_three_rational_roots", |b| {
        b.iter(|| black_box(factorize(&cubic).unwrap()))
    });

    // (2x-1)(3x+1)(x+5) expanded: non-monic, fractional roots
    let non_monic = parse("6x^3 + 29x^2 - 6x - 5").unwrap();
    group.bench_function("non_monic_cubic", |b| {
        b.iter(|| black_box(factorize(&non_monic).unwrap()))
    });

    // x^4 + 1 has no rational roots: pure candidate rejection
    let irreducible = parse("x^4 + 1").unwrap();
    group.bench_function("irreducible_quartic", |b| {
        b.iter(|| black_box(factorize(&irreducible).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, benchmark_parser, benchmark_factorization);
criterion_main!(benches);
