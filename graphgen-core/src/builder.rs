//! Builder utilities for configuring graph sample generation.
//!
//! Validation happens once in [`GeneratorBuilder::build`], so a
//! [`GraphSampleGenerator`] can never hold an out-of-range probability or a
//! degenerate coordinate extent.

use crate::{
    Result,
    edge::candidate_count,
    error::GeneratorError,
    generator::GraphSampleGenerator,
};

/// Probability with which each candidate pair becomes an edge.
pub const DEFAULT_EDGE_PROBABILITY: f64 = 0.0005;

/// Exclusive upper bound for each coordinate axis.
pub const DEFAULT_COORDINATE_EXTENT: f64 = 100.0;

/// Configures and constructs [`GraphSampleGenerator`] instances.
///
/// # Examples
/// ```
/// use graphgen_core::GeneratorBuilder;
///
/// let generator = GeneratorBuilder::new()
///     .with_node_count(100)
///     .with_edge_probability(0.01)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.node_count(), 100);
/// assert_eq!(generator.candidate_count(), 4_950);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorBuilder {
    node_count: usize,
    edge_probability: f64,
    coordinate_extent: f64,
}

impl Default for GeneratorBuilder {
    fn default() -> Self {
        Self {
            node_count: 0,
            edge_probability: DEFAULT_EDGE_PROBABILITY,
            coordinate_extent: DEFAULT_COORDINATE_EXTENT,
        }
    }
}

impl GeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{DEFAULT_EDGE_PROBABILITY, GeneratorBuilder};
    ///
    /// let builder = GeneratorBuilder::new();
    /// assert_eq!(builder.node_count(), 0);
    /// assert_eq!(builder.edge_probability(), DEFAULT_EDGE_PROBABILITY);
    /// assert_eq!(builder.coordinate_extent(), 100.0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how many nodes each sample contains.
    #[must_use]
    pub const fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Sets the per-pair inclusion probability.
    #[must_use]
    pub const fn with_edge_probability(mut self, probability: f64) -> Self {
        self.edge_probability = probability;
        self
    }

    /// Returns the configured edge probability.
    #[must_use]
    pub const fn edge_probability(&self) -> f64 {
        self.edge_probability
    }

    /// Sets the exclusive upper bound of both coordinate axes.
    #[must_use]
    pub const fn with_coordinate_extent(mut self, extent: f64) -> Self {
        self.coordinate_extent = extent;
        self
    }

    /// Returns the configured coordinate extent.
    #[must_use]
    pub const fn coordinate_extent(&self) -> f64 {
        self.coordinate_extent
    }

    /// Validates the configuration and constructs a [`GraphSampleGenerator`].
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidEdgeProbability`] when the
    /// probability is NaN or outside `[0, 1]`,
    /// [`GeneratorError::InvalidCoordinateExtent`] when the extent is not a
    /// finite positive number, and [`GeneratorError::CandidateOverflow`]
    /// when the node count yields more pairs than `usize` can count.
    ///
    /// # Examples
    /// ```
    /// use graphgen_core::{GeneratorBuilder, GeneratorError};
    ///
    /// let err = GeneratorBuilder::new()
    ///     .with_edge_probability(1.5)
    ///     .build()
    ///     .expect_err("probability above one is rejected");
    /// assert!(matches!(err, GeneratorError::InvalidEdgeProbability { .. }));
    /// ```
    pub fn build(self) -> Result<GraphSampleGenerator> {
        if !(0.0..=1.0).contains(&self.edge_probability) {
            return Err(GeneratorError::InvalidEdgeProbability {
                got: self.edge_probability,
            });
        }
        if !self.coordinate_extent.is_finite() || self.coordinate_extent <= 0.0 {
            return Err(GeneratorError::InvalidCoordinateExtent {
                got: self.coordinate_extent,
            });
        }
        let candidates =
            candidate_count(self.node_count).ok_or(GeneratorError::CandidateOverflow {
                node_count: self.node_count,
            })?;

        Ok(GraphSampleGenerator::from_parts(
            self.node_count,
            self.edge_probability,
            self.coordinate_extent,
            candidates,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::negative(-0.1)]
    #[case::above_one(1.000_001)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn build_rejects_invalid_probability(#[case] probability: f64) {
        let err = GeneratorBuilder::new()
            .with_edge_probability(probability)
            .build()
            .expect_err("probability must be rejected");
        assert!(matches!(err, GeneratorError::InvalidEdgeProbability { .. }));
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::one(1.0)]
    #[case::default(DEFAULT_EDGE_PROBABILITY)]
    fn build_accepts_probability_bounds(#[case] probability: f64) {
        let generator = GeneratorBuilder::new()
            .with_edge_probability(probability)
            .build()
            .expect("probability within bounds");
        assert_eq!(generator.edge_probability(), probability);
    }

    #[rstest]
    #[case::zero(0.0)]
    #[case::negative(-5.0)]
    #[case::nan(f64::NAN)]
    #[case::infinite(f64::INFINITY)]
    fn build_rejects_invalid_extent(#[case] extent: f64) {
        let err = GeneratorBuilder::new()
            .with_coordinate_extent(extent)
            .build()
            .expect_err("extent must be rejected");
        assert!(matches!(err, GeneratorError::InvalidCoordinateExtent { .. }));
    }

    #[test]
    fn build_rejects_candidate_overflow() {
        let err = GeneratorBuilder::new()
            .with_node_count(usize::MAX)
            .build()
            .expect_err("pair count cannot be represented");
        assert_eq!(
            err,
            GeneratorError::CandidateOverflow {
                node_count: usize::MAX
            }
        );
    }

    #[test]
    fn build_carries_configuration() {
        let generator = GeneratorBuilder::new()
            .with_node_count(7)
            .with_edge_probability(0.25)
            .with_coordinate_extent(10.0)
            .build()
            .expect("configuration is valid");
        assert_eq!(generator.node_count(), 7);
        assert_eq!(generator.edge_probability(), 0.25);
        assert_eq!(generator.coordinate_extent(), 10.0);
        assert_eq!(generator.candidate_count(), 21);
    }
}
