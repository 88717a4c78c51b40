//! Benchmark parameter types.

use std::fmt;

/// Parameters for a generation or load benchmark run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GenerateBenchParams {
    /// Number of nodes in the sample.
    pub node_count: usize,
    /// Probability that a candidate pair becomes an edge.
    pub edge_probability: f64,
    /// Seed for the random source.
    pub seed: u64,
}

impl fmt::Display for GenerateBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.node_count, self.edge_probability)
    }
}
