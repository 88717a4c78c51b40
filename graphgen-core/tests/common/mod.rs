//! Helpers shared by the core integration tests.

use graphgen_core::{GeneratorBuilder, GraphSample};
use rand::{SeedableRng, rngs::SmallRng};

/// Generates a seeded sample with the given shape.
pub fn seeded_sample(node_count: usize, probability: f64, seed: u64) -> GraphSample {
    let generator = GeneratorBuilder::new()
        .with_node_count(node_count)
        .with_edge_probability(probability)
        .build()
        .expect("configuration must be valid");
    generator.generate(&mut SmallRng::seed_from_u64(seed))
}

/// Splits a rendered record into its whitespace-separated fields.
pub fn fields(line: &str) -> Vec<&str> {
    line.split_whitespace().collect()
}
