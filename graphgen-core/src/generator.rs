//! Random graph sampling.
//!
//! Nodes receive uniform coordinates first, in index order, `x` before `y`.
//! Each candidate pair then consumes exactly one uniform draw in `[0, 1)`
//! and becomes an edge when that draw falls below the edge probability.
//! Keeping the draw order fixed is what makes seeded runs reproducible.

use std::{fmt, io};

use rand::{Rng, distributions::Standard};
use tracing::{Span, debug, field, instrument};

use crate::{
    Result,
    builder::GeneratorBuilder,
    edge::{EmittedEdge, candidate_pairs},
    node::{Coordinate, Node, NodeId},
};

/// Generates random edge-list samples.
///
/// Construct one through [`GeneratorBuilder`]; the generator itself holds
/// no random state, so one instance can serve any number of runs.
///
/// # Examples
/// ```
/// use graphgen_core::GeneratorBuilder;
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let generator = GeneratorBuilder::new()
///     .with_node_count(40)
///     .with_edge_probability(0.1)
///     .build()?;
/// let mut rng = SmallRng::seed_from_u64(7);
/// let sample = generator.generate(&mut rng);
/// assert_eq!(sample.nodes().len(), 40);
/// for edge in sample.edges() {
///     assert!(edge.source.id < edge.target.id);
/// }
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct GraphSampleGenerator {
    node_count: usize,
    edge_probability: f64,
    coordinate_extent: f64,
    candidate_count: usize,
}

impl GraphSampleGenerator {
    pub(crate) const fn from_parts(
        node_count: usize,
        edge_probability: f64,
        coordinate_extent: f64,
        candidate_count: usize,
    ) -> Self {
        Self {
            node_count,
            edge_probability,
            coordinate_extent,
            candidate_count,
        }
    }

    /// Number of nodes in every sample.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Per-pair inclusion probability.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_probability(&self) -> f64 { self.edge_probability }

    /// Exclusive upper bound of both coordinate axes.
    #[must_use]
    #[rustfmt::skip]
    pub const fn coordinate_extent(&self) -> f64 { self.coordinate_extent }

    /// Number of pairs evaluated per sample, `n * (n - 1) / 2`.
    #[must_use]
    #[rustfmt::skip]
    pub const fn candidate_count(&self) -> usize { self.candidate_count }

    /// Draws one sample from `rng`.
    ///
    /// Emitted edges copy their endpoints out of the node sequence, so the
    /// coordinates on every edge are exactly those assigned at generation.
    #[instrument(
        name = "generator.generate",
        level = "debug",
        skip(self, rng),
        fields(
            node_count = self.node_count,
            candidates = self.candidate_count,
            edges = field::Empty,
        ),
    )]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> GraphSample {
        let nodes: Vec<Node> = (0..self.node_count)
            .map(|index| {
                Node::new(
                    NodeId::from_index(index),
                    Coordinate::sample(&mut *rng, self.coordinate_extent),
                )
            })
            .collect();

        let mut edges = Vec::new();
        for candidate in candidate_pairs(self.node_count) {
            let draw: f64 = rng.sample(Standard);
            if draw >= self.edge_probability {
                continue;
            }
            if let Some(edge) = candidate.resolve(&nodes) {
                edges.push(edge);
            }
        }

        Span::current().record("edges", edges.len());
        debug!(edges = edges.len(), "sample generated");
        GraphSample { nodes, edges }
    }

    /// Draws one sample and renders it as edge-list text.
    #[must_use]
    pub fn generate_text<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.generate(rng).render()
    }
}

/// Generates the edge-list text for `node_count` nodes using the default
/// edge probability and coordinate extent.
///
/// # Errors
/// Returns [`crate::GeneratorError::CandidateOverflow`] when `node_count`
/// is too large to enumerate its pairs.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// assert_eq!(graphgen_core::generate(1, &mut rng)?, "");
/// # Ok::<(), graphgen_core::GeneratorError>(())
/// ```
pub fn generate<R: Rng + ?Sized>(node_count: usize, rng: &mut R) -> Result<String> {
    let generator = GeneratorBuilder::new().with_node_count(node_count).build()?;
    Ok(generator.generate_text(rng))
}

/// The outcome of one generation run: the nodes and the edges drawn among
/// them.
///
/// Displays as the edge-list text: one record per edge, joined by `\n`,
/// with no trailing newline.
#[derive(Clone, Debug, PartialEq)]
pub struct GraphSample {
    nodes: Vec<Node>,
    edges: Vec<EmittedEdge>,
}

impl GraphSample {
    /// Nodes in generation order; `nodes()[i].id` is `i + 1`.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Emitted edges in candidate order.
    #[must_use]
    pub fn edges(&self) -> &[EmittedEdge] {
        &self.edges
    }

    /// Number of emitted edges.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when no candidate pair was selected.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Renders the edge-list text.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Streams the edge-list text into `writer`.
    ///
    /// # Errors
    /// Returns any error raised by `writer`.
    pub fn write_to<W: io::Write>(&self, mut writer: W) -> io::Result<()> {
        write!(writer, "{self}")
    }
}

impl fmt::Display for GraphSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut records = self.edges.iter();
        if let Some(first) = records.next() {
            write!(f, "{first}")?;
        }
        for edge in records {
            write!(f, "\n{edge}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand::{SeedableRng, rngs::SmallRng};
    use rstest::rstest;

    fn generator(node_count: usize, probability: f64) -> GraphSampleGenerator {
        GeneratorBuilder::new()
            .with_node_count(node_count)
            .with_edge_probability(probability)
            .build()
            .expect("configuration is valid")
    }

    #[rstest]
    #[case::empty(0)]
    #[case::single(1)]
    fn too_few_nodes_yield_empty_text(#[case] node_count: usize) {
        let mut rng = SmallRng::seed_from_u64(9);
        let sample = generator(node_count, 1.0).generate(&mut rng);
        assert!(sample.is_empty());
        assert_eq!(sample.render(), "");
    }

    #[test]
    fn certain_probability_emits_every_pair_in_order() {
        let mut rng = SmallRng::seed_from_u64(2);
        let sample = generator(4, 1.0).generate(&mut rng);
        let ids: Vec<(usize, usize)> = sample
            .edges()
            .iter()
            .map(|edge| (edge.source.id.get(), edge.target.id.get()))
            .collect();
        assert_eq!(ids, vec![(1, 2), (1, 3), (1, 4), (2, 3), (2, 4), (3, 4)]);
    }

    #[test]
    fn zero_probability_emits_nothing() {
        let mut rng = SmallRng::seed_from_u64(2);
        let sample = generator(60, 0.0).generate(&mut rng);
        assert_eq!(sample.nodes().len(), 60);
        assert!(sample.is_empty());
    }

    #[test]
    fn rendering_joins_records_without_trailing_newline() {
        let mut rng = SmallRng::seed_from_u64(5);
        let sample = generator(3, 1.0).generate(&mut rng);
        let text = sample.render();
        assert_eq!(text.lines().count(), 3);
        assert!(!text.ends_with('\n'));

        let mut streamed = Vec::new();
        sample.write_to(&mut streamed).expect("vec writes succeed");
        assert_eq!(streamed, text.as_bytes());
    }

    #[test]
    fn edges_reuse_generated_coordinates() {
        let mut rng = SmallRng::seed_from_u64(11);
        let sample = generator(12, 0.5).generate(&mut rng);
        for edge in sample.edges() {
            assert_eq!(sample.nodes()[edge.source.id.index()], edge.source);
            assert_eq!(sample.nodes()[edge.target.id.index()], edge.target);
        }
    }
}
