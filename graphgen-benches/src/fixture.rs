//! Seeded samples shared by the benchmarks.

use graphgen_core::{EdgeList, GeneratorBuilder, GraphSample, GraphSampleGenerator};
use rand::{SeedableRng, rngs::SmallRng};

use crate::{error::BenchSetupError, params::GenerateBenchParams};

/// Builds the generator described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when the parameters are rejected.
pub fn generator(params: &GenerateBenchParams) -> Result<GraphSampleGenerator, BenchSetupError> {
    Ok(GeneratorBuilder::new()
        .with_node_count(params.node_count)
        .with_edge_probability(params.edge_probability)
        .build()?)
}

/// Generates the sample described by `params` from its seed.
///
/// # Errors
/// Returns [`BenchSetupError::Generator`] when the parameters are rejected.
pub fn seeded_sample(params: &GenerateBenchParams) -> Result<GraphSample, BenchSetupError> {
    let sample = generator(params)?.generate(&mut SmallRng::seed_from_u64(params.seed));
    Ok(sample)
}

/// Renders a seeded sample and checks that it loads back.
///
/// # Errors
/// Returns [`BenchSetupError`] when generation is rejected or the rendered
/// text does not load.
pub fn seeded_text(params: &GenerateBenchParams) -> Result<String, BenchSetupError> {
    let text = seeded_sample(params)?.render();
    EdgeList::from_reader(text.as_bytes())?;
    Ok(text)
}
