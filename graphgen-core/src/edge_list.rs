//! Loading edge-list files back into memory.
//!
//! Reads the same format the generator writes, the way downstream consumers
//! do: one record per line, nodes created on first sight of their id, one
//! undirected edge per record. Unlike a lenient consumer, the loader rejects
//! malformed lines and ids whose coordinates change between records.

use std::{
    collections::{BTreeMap, btree_map::Entry},
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use tracing::{debug, instrument};

use crate::{
    edge::EmittedEdge,
    error::EdgeListError,
    node::{Coordinate, Node, NodeId},
};

/// An edge list loaded from text.
///
/// # Examples
/// ```
/// use graphgen_core::EdgeList;
///
/// let text = "1 0.00 0.00 2 3.00 4.00\n2 3.00 4.00 3 3.00 0.00";
/// let list = EdgeList::from_reader(text.as_bytes())?;
/// assert_eq!(list.node_count(), 3);
/// assert_eq!(list.edge_count(), 2);
/// assert_eq!(list.total_length(), 9.0);
/// # Ok::<(), graphgen_core::EdgeListError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct EdgeList {
    nodes: BTreeMap<NodeId, Coordinate>,
    edges: Vec<EmittedEdge>,
}

impl EdgeList {
    /// Opens `path` and loads it with [`EdgeList::from_reader`].
    ///
    /// # Errors
    /// Returns [`EdgeListError::Open`] when the file cannot be opened, and
    /// any error [`EdgeList::from_reader`] reports.
    #[instrument(name = "edge_list.from_path", err, skip(path), fields(path = %path.display()))]
    pub fn from_path(path: &Path) -> Result<Self, EdgeListError> {
        let file = File::open(path).map_err(|source| EdgeListError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    /// Loads records line by line. Blank lines are skipped.
    ///
    /// # Errors
    /// Returns [`EdgeListError::Read`] on I/O failure,
    /// [`EdgeListError::MalformedRecord`] for a line that is not a record,
    /// and [`EdgeListError::InconsistentNode`] when an id reappears with
    /// different coordinates.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, EdgeListError> {
        let mut list = Self::default();
        for (index, read) in reader.lines().enumerate() {
            let line = index + 1;
            let text = read.map_err(|source| EdgeListError::Read { line, source })?;
            if text.trim().is_empty() {
                continue;
            }
            let edge: EmittedEdge = text
                .parse()
                .map_err(|source| EdgeListError::MalformedRecord { line, source })?;
            list.insert_node(edge.source, line)?;
            list.insert_node(edge.target, line)?;
            list.edges.push(edge);
        }
        debug!(
            nodes = list.node_count(),
            edges = list.edge_count(),
            "edge list loaded"
        );
        Ok(list)
    }

    fn insert_node(&mut self, node: Node, line: usize) -> Result<(), EdgeListError> {
        match self.nodes.entry(node.id) {
            Entry::Vacant(slot) => {
                slot.insert(node.position);
                Ok(())
            }
            Entry::Occupied(slot) if *slot.get() == node.position => Ok(()),
            Entry::Occupied(slot) => Err(EdgeListError::InconsistentNode {
                line,
                id: node.id,
                found: node.position,
                expected: *slot.get(),
            }),
        }
    }

    /// Number of distinct node ids referenced by any record.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of records.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Records in file order.
    #[must_use]
    pub fn edges(&self) -> &[EmittedEdge] {
        &self.edges
    }

    /// Position recorded for `id`, if the id appears in the list.
    #[must_use]
    pub fn position(&self, id: NodeId) -> Option<Coordinate> {
        self.nodes.get(&id).copied()
    }

    /// Highest node id referenced by any record.
    #[must_use]
    pub fn max_node_id(&self) -> Option<NodeId> {
        self.nodes.last_key_value().map(|(id, _)| *id)
    }

    /// Number of ids in `1..=declared` that no record references.
    ///
    /// A generated file only mentions nodes that received at least one
    /// edge, so this recovers how many of the declared nodes were isolated.
    #[must_use]
    pub fn isolated_node_count(&self, declared: usize) -> usize {
        let referenced = NodeId::new(declared)
            .map_or(0, |last| self.nodes.range(..=last).count());
        declared.saturating_sub(referenced)
    }

    /// Sum of the Euclidean lengths of all records.
    #[must_use]
    pub fn total_length(&self) -> f64 {
        self.edges.iter().map(EmittedEdge::length).sum()
    }
}
