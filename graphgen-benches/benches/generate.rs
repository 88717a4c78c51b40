//! Sample generation benchmarks.
//!
//! Measures drawing a full sample (node placement plus one Bernoulli trial
//! per candidate pair) and rendering it to edge-list text. Generation cost
//! is dominated by the quadratic pair scan, so sizes grow slowly.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
#![expect(
    clippy::shadow_reuse,
    reason = "Criterion bench_with_input closures rebind parameter names"
)]
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::{SeedableRng, rngs::SmallRng};

use graphgen_benches::{
    error::BenchSetupError,
    fixture::{generator, seeded_sample},
    params::GenerateBenchParams,
};
use graphgen_core::DEFAULT_EDGE_PROBABILITY;

/// Seed used for all sample generation in this benchmark.
const SEED: u64 = 42;

/// Node counts to benchmark.
const NODE_COUNTS: &[usize] = &[100, 1_000, 4_000];

/// Edge probabilities to benchmark.
const EDGE_PROBABILITIES: &[f64] = &[DEFAULT_EDGE_PROBABILITY, 0.01];

fn generate_sample_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("generate_sample");
    group.sample_size(20);

    for &edge_probability in EDGE_PROBABILITIES {
        for &node_count in NODE_COUNTS {
            let params = GenerateBenchParams {
                node_count,
                edge_probability,
                seed: SEED,
            };
            let generator = generator(&params)?;

            group.bench_with_input(
                BenchmarkId::from_parameter(&params),
                &generator,
                |b, generator| {
                    let mut rng = SmallRng::seed_from_u64(SEED);
                    b.iter(|| generator.generate(&mut rng));
                },
            );
        }
    }

    group.finish();
    Ok(())
}

fn render_sample_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("render_sample");

    for &node_count in NODE_COUNTS {
        let params = GenerateBenchParams {
            node_count,
            edge_probability: 0.01,
            seed: SEED,
        };
        let sample = seeded_sample(&params)?;

        group.bench_with_input(
            BenchmarkId::from_parameter(&params),
            &sample,
            |b, sample| {
                b.iter(|| sample.render());
            },
        );
    }

    group.finish();
    Ok(())
}

fn generate_sample(c: &mut Criterion) {
    if let Err(err) = generate_sample_impl(c) {
        panic!("generate_sample benchmark setup failed: {err}");
    }
}

fn render_sample(c: &mut Criterion) {
    if let Err(err) = render_sample_impl(c) {
        panic!("render_sample benchmark setup failed: {err}");
    }
}

criterion_group!(benches, generate_sample, render_sample);
criterion_main!(benches);
