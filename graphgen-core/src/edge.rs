//! Candidate pairs and emitted edge records.
//!
//! A record is one line of six space-separated fields:
//! `id1 x1 y1 id2 x2 y2`, with 1-based ids and coordinates rendered to two
//! decimal places.

use std::{fmt, iter::FusedIterator, str::FromStr};

use crate::{
    error::RecordError,
    node::{Coordinate, Node, NodeId},
};

/// Number of whitespace-separated fields in one edge record.
pub const RECORD_FIELDS: usize = 6;

/// Number of unordered pairs of distinct nodes among `node_count` nodes.
///
/// Returns `None` when the count does not fit in `usize`. The even factor
/// of `n * (n - 1)` is halved before multiplying, so only the final count
/// has to fit.
///
/// # Examples
/// ```
/// use graphgen_core::candidate_count;
///
/// assert_eq!(candidate_count(0), Some(0));
/// assert_eq!(candidate_count(1), Some(0));
/// assert_eq!(candidate_count(100), Some(4_950));
/// ```
#[must_use]
pub const fn candidate_count(node_count: usize) -> Option<usize> {
    let predecessor = node_count.saturating_sub(1);
    if node_count.is_multiple_of(2) {
        (node_count >> 1).checked_mul(predecessor)
    } else {
        node_count.checked_mul(predecessor >> 1)
    }
}

/// An unordered pair of distinct node indices with `left < right`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CandidateEdge {
    /// Zero-based index of the lower endpoint.
    pub left: usize,
    /// Zero-based index of the higher endpoint.
    pub right: usize,
}

impl CandidateEdge {
    /// Looks both endpoints up in `nodes` and copies them into an
    /// [`EmittedEdge`]. Returns `None` if either index is out of range.
    #[must_use]
    pub fn resolve(self, nodes: &[Node]) -> Option<EmittedEdge> {
        let source = nodes.get(self.left)?;
        let target = nodes.get(self.right)?;
        Some(EmittedEdge::new(*source, *target))
    }
}

/// Iterator over every [`CandidateEdge`] among `node_count` nodes, in
/// row-major order: `(0, 1), (0, 2), …, (0, n-1), (1, 2), …, (n-2, n-1)`.
///
/// Created by [`candidate_pairs`].
#[derive(Clone, Debug)]
pub struct CandidatePairs {
    node_count: usize,
    left: usize,
    right: usize,
}

/// Enumerates each unordered pair of distinct indices exactly once.
///
/// # Examples
/// ```
/// use graphgen_core::candidate_pairs;
///
/// let pairs: Vec<(usize, usize)> = candidate_pairs(3)
///     .map(|pair| (pair.left, pair.right))
///     .collect();
/// assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
/// ```
#[must_use]
pub const fn candidate_pairs(node_count: usize) -> CandidatePairs {
    CandidatePairs {
        node_count,
        left: 0,
        right: 1,
    }
}

impl CandidatePairs {
    fn remaining(&self) -> Option<usize> {
        if self.right >= self.node_count {
            return Some(0);
        }
        let current_row = self.node_count - self.right;
        let later_rows = candidate_count(self.node_count - self.left - 1)?;
        current_row.checked_add(later_rows)
    }
}

impl Iterator for CandidatePairs {
    type Item = CandidateEdge;

    fn next(&mut self) -> Option<Self::Item> {
        if self.right >= self.node_count {
            return None;
        }
        let edge = CandidateEdge {
            left: self.left,
            right: self.right,
        };
        self.right += 1;
        if self.right == self.node_count {
            self.left += 1;
            self.right = self.left + 1;
        }
        Some(edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.remaining()
            .map_or((usize::MAX, None), |count| (count, Some(count)))
    }
}

impl FusedIterator for CandidatePairs {}

/// A selected candidate, carrying copies of both endpoints.
///
/// Displays as one edge record.
///
/// # Examples
/// ```
/// use graphgen_core::{Coordinate, EmittedEdge, Node, NodeId};
///
/// let edge = EmittedEdge::new(
///     Node::new(NodeId::from_index(0), Coordinate::new(1.0, 2.5)),
///     Node::new(NodeId::from_index(4), Coordinate::new(30.126, 7.0)),
/// );
/// assert_eq!(edge.to_string(), "1 1.00 2.50 5 30.13 7.00");
///
/// let parsed: EmittedEdge = "1 1.00 2.50 5 30.13 7.00".parse()?;
/// assert_eq!(parsed.target.id.get(), 5);
/// # Ok::<(), graphgen_core::RecordError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EmittedEdge {
    /// Endpoint with the lower generation index.
    pub source: Node,
    /// Endpoint with the higher generation index.
    pub target: Node,
}

impl EmittedEdge {
    /// Creates an edge between two nodes.
    #[must_use]
    pub const fn new(source: Node, target: Node) -> Self {
        Self { source, target }
    }

    /// Euclidean length of the edge.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.source.position.distance_to(self.target.position)
    }
}

impl fmt::Display for EmittedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.target)
    }
}

impl FromStr for EmittedEdge {
    type Err = RecordError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        let [source_id, source_x, source_y, target_id, target_x, target_y] = fields.as_slice()
        else {
            return Err(RecordError::FieldCount {
                found: fields.len(),
            });
        };
        let source = parse_node(source_id, source_x, source_y)?;
        let target = parse_node(target_id, target_x, target_y)?;
        if source.id == target.id {
            return Err(RecordError::SelfLoop { id: source.id });
        }
        Ok(Self { source, target })
    }
}

fn parse_node(id: &str, x: &str, y: &str) -> Result<Node, RecordError> {
    let parsed_id = id
        .parse::<usize>()
        .ok()
        .and_then(NodeId::new)
        .ok_or_else(|| RecordError::InvalidId { raw: id.to_owned() })?;
    let position = Coordinate::new(parse_coordinate(x)?, parse_coordinate(y)?);
    Ok(Node::new(parsed_id, position))
}

fn parse_coordinate(raw: &str) -> Result<f64, RecordError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| RecordError::InvalidCoordinate {
            raw: raw.to_owned(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case::empty(0, 0)]
    #[case::single(1, 0)]
    #[case::pair(2, 1)]
    #[case::hundred(100, 4_950)]
    fn pairs_match_candidate_count(#[case] node_count: usize, #[case] expected: usize) {
        let pairs = candidate_pairs(node_count);
        assert_eq!(pairs.size_hint(), (expected, Some(expected)));
        assert_eq!(pairs.count(), expected);
        assert_eq!(candidate_count(node_count), Some(expected));
    }

    #[test]
    fn pairs_are_ordered_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        for pair in candidate_pairs(25) {
            assert!(pair.left < pair.right);
            assert!(pair.right < 25);
            assert!(seen.insert(pair), "pair {pair:?} yielded twice");
        }
        assert_eq!(seen.len(), 300);
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut pairs = candidate_pairs(5);
        for remaining in (0..10).rev() {
            assert!(pairs.next().is_some());
            assert_eq!(pairs.size_hint(), (remaining, Some(remaining)));
        }
        assert!(pairs.next().is_none());
        assert!(pairs.next().is_none());
    }

    #[test]
    fn candidate_count_reports_overflow() {
        assert_eq!(candidate_count(usize::MAX), None);
    }

    #[rstest]
    #[case::odd(7)]
    #[case::even(10)]
    #[case::large_odd(65_537)]
    #[case::large_even(65_536)]
    fn candidate_count_matches_half_product(#[case] node_count: usize) {
        let expected: usize = (0..node_count).sum();
        assert_eq!(candidate_count(node_count), Some(expected));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn candidate_count_fits_when_only_the_doubled_count_overflows() {
        // 5e9 * (5e9 - 1) exceeds u64 but half of it does not.
        let node_count = 5_000_000_000_usize;
        assert!(node_count.checked_mul(node_count - 1).is_none());
        assert_eq!(
            candidate_count(node_count),
            Some(12_499_999_997_500_000_000)
        );
        assert_eq!(candidate_count(6_074_001_000), Some(18_446_744_070_963_499_500));
        assert_eq!(candidate_count(6_074_001_001), None);
    }

    #[test]
    fn resolve_copies_endpoints() {
        let nodes = [
            Node::new(NodeId::from_index(0), Coordinate::new(1.0, 1.0)),
            Node::new(NodeId::from_index(1), Coordinate::new(4.0, 5.0)),
        ];
        let edge = CandidateEdge { left: 0, right: 1 }
            .resolve(&nodes)
            .expect("both endpoints exist");
        assert_eq!(edge.source, nodes[0]);
        assert_eq!(edge.target, nodes[1]);
        assert_eq!(edge.length(), 5.0);
        assert!(CandidateEdge { left: 0, right: 2 }.resolve(&nodes).is_none());
    }

    #[rstest]
    #[case::too_few("1 0.00 0.00 2 1.00", RecordError::FieldCount { found: 5 })]
    #[case::too_many("1 0 0 2 1 1 9", RecordError::FieldCount { found: 7 })]
    #[case::zero_id("0 0.00 0.00 2 1.00 1.00", RecordError::InvalidId { raw: "0".to_owned() })]
    #[case::negative_id("-1 0.00 0.00 2 1.00 1.00", RecordError::InvalidId { raw: "-1".to_owned() })]
    #[case::bad_coordinate(
        "1 abc 0.00 2 1.00 1.00",
        RecordError::InvalidCoordinate { raw: "abc".to_owned() }
    )]
    #[case::infinite_coordinate(
        "1 0.00 0.00 2 inf 1.00",
        RecordError::InvalidCoordinate { raw: "inf".to_owned() }
    )]
    #[case::self_loop(
        "3 0.00 0.00 3 1.00 1.00",
        RecordError::SelfLoop { id: NodeId::from_index(2) }
    )]
    fn parse_rejects_malformed_records(#[case] line: &str, #[case] expected: RecordError) {
        let err = line
            .parse::<EmittedEdge>()
            .expect_err("record must be rejected");
        assert_eq!(err, expected);
    }

    #[test]
    fn parse_accepts_extra_whitespace() {
        let edge: EmittedEdge = "  4\t10.50 20.25   9 0.00 99.99 "
            .parse()
            .expect("record must parse");
        assert_eq!(edge.source.id.get(), 4);
        assert_eq!(edge.source.position, Coordinate::new(10.5, 20.25));
        assert_eq!(edge.target.id.get(), 9);
        assert_eq!(edge.target.position, Coordinate::new(0.0, 99.99));
    }
}
