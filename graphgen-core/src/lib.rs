//! Random graph sample generation.
//!
//! Produces edge lists over randomly placed nodes for use as pathfinding
//! test input. Each of the `n * (n - 1) / 2` node pairs becomes an edge with
//! a fixed probability; selected pairs are written one per line as
//! `id1 x1 y1 id2 x2 y2`.
//!
//! ```
//! use graphgen_core::{EdgeList, GeneratorBuilder};
//! use rand::{SeedableRng, rngs::SmallRng};
//!
//! let generator = GeneratorBuilder::new()
//!     .with_node_count(200)
//!     .with_edge_probability(0.01)
//!     .build()?;
//! let text = generator.generate_text(&mut SmallRng::seed_from_u64(42));
//! let reloaded = EdgeList::from_reader(text.as_bytes())?;
//! assert!(reloaded.max_node_id().is_none_or(|id| id.get() <= 200));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod edge;
mod edge_list;
mod error;
mod generator;
mod node;
mod output;

pub use crate::{
    builder::{DEFAULT_COORDINATE_EXTENT, DEFAULT_EDGE_PROBABILITY, GeneratorBuilder},
    edge::{
        CandidateEdge, CandidatePairs, EmittedEdge, RECORD_FIELDS, candidate_count,
        candidate_pairs,
    },
    edge_list::EdgeList,
    error::{
        EdgeListError, EdgeListErrorCode, GeneratorError, GeneratorErrorCode, OutputError,
        OutputErrorCode, RecordError, RecordErrorCode, Result,
    },
    generator::{GraphSample, GraphSampleGenerator, generate},
    node::{COORDINATE_PRECISION, Coordinate, Node, NodeId},
    output::{OUTPUT_EXTENSION, WritePolicy, output_path, write_sample},
};
