//! Criterion benchmarks for the string GA.
//!
//! Measures full runs against targets of increasing length and the cost of
//! a single evaluation pass.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use string_evolver::ga::{GaConfig, GaRunner, Population, Tournament};
use string_evolver::random::create_rng;

fn bench_ga_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_targets");
    group.sample_size(10);

    for target in ["Hi", "Hello world!", "The quick brown fox jumps over the lazy dog"] {
        let config = GaConfig::new(target)
            .with_population_size(200)
            .with_max_generations(50)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(target.len()),
            &config,
            |b, c| {
                b.iter(|| {
                    let result = GaRunner::run(black_box(c)).unwrap();
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &size in &[100, 1000, 10_000] {
        let config = GaConfig::default();
        let target = config.validate().unwrap();
        let mut rng = create_rng(42);
        let population = Population::random(size, target.len(), &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(size), &population, |b, p| {
            b.iter(|| {
                let mut p = p.clone();
                p.evaluate(black_box(&target));
                black_box(p.best_index())
            })
        });
    }
    group.finish();
}

fn bench_tournament(c: &mut Criterion) {
    let config = GaConfig::default();
    let target = config.validate().unwrap();
    let mut rng = create_rng(42);
    let mut population = Population::random(1000, target.len(), &mut rng);
    population.evaluate(&target);
    let tournament = Tournament::new(3);

    c.bench_function("tournament_select_1000", |b| {
        b.iter(|| black_box(tournament.select(population.members(), &mut rng)))
    });
}

criterion_group!(benches, bench_ga_targets, bench_evaluate, bench_tournament);
criterion_main!(benches);
