//! Benchmarks for the odometer walker and code generator

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use linea_core::Identifier;
use linea_issue::{walk_round, Alphabet, CodeGenerator, Odometer};

fn bench_odometer_advance(c: &mut Criterion) {
    c.bench_function("odometer_advance", |b| {
        let mut odometer =
            Odometer::new(Alphabet::decimal(), "999999999999").unwrap();
        b.iter(|| {
            odometer.advance();
            black_box(odometer.current())
        })
    });
}

fn bench_walk_round_full_cycle(c: &mut Criterion) {
    c.bench_function("walk_round_10k", |b| {
        b.iter(|| walk_round(Alphabet::decimal(), black_box("4217")).unwrap().count())
    });
}

fn bench_generate_against_half_full_space(c: &mut Criterion) {
    let prefix = "9782940199"; // 2 free digits, 100 suffixes
    let generator = CodeGenerator::new(prefix).unwrap();
    let used: Vec<Identifier> = (0..50)
        .map(|n| format!("{prefix}{n:02}").parse().unwrap())
        .collect();

    c.bench_function("generate_half_full", |b| {
        let mut rng = StdRng::seed_from_u64(1);
        b.iter(|| generator.generate(&mut rng, black_box(&used)).unwrap())
    });
}

criterion_group!(
    benches,
    bench_odometer_advance,
    bench_walk_round_full_cycle,
    bench_generate_against_half_full_space
);
criterion_main!(benches);
