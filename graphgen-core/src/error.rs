//! Error types for the graphgen core library.
//!
//! Every error enum is paired with a code enum whose string form is stable
//! across releases, so callers can log or match on failures without parsing
//! messages.

use std::{fmt, io, path::PathBuf};

use thiserror::Error;

use crate::node::{Coordinate, NodeId};

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error raised while configuring a [`crate::GraphSampleGenerator`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GeneratorError {
    /// Edge probability must be a finite value in `[0, 1]`.
    #[error("edge probability must be within [0, 1] (got {got})")]
    InvalidEdgeProbability {
        /// The rejected probability.
        got: f64,
    },
    /// Coordinate extent must be finite and strictly positive.
    #[error("coordinate extent must be finite and greater than zero (got {got})")]
    InvalidCoordinateExtent {
        /// The rejected extent.
        got: f64,
    },
    /// The number of candidate pairs does not fit in `usize`.
    #[error("{node_count} nodes produce more candidate pairs than fit in usize")]
    CandidateOverflow {
        /// The requested node count.
        node_count: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GeneratorError`] variants.
    enum GeneratorErrorCode for GeneratorError {
        /// Edge probability outside `[0, 1]`.
        InvalidEdgeProbability => InvalidEdgeProbability { .. } => "GENERATOR_INVALID_EDGE_PROBABILITY",
        /// Non-positive or non-finite coordinate extent.
        InvalidCoordinateExtent => InvalidCoordinateExtent { .. } => "GENERATOR_INVALID_COORDINATE_EXTENT",
        /// Candidate pair count overflow.
        CandidateOverflow => CandidateOverflow { .. } => "GENERATOR_CANDIDATE_OVERFLOW",
    }
}

/// Error raised while parsing a single edge record.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum RecordError {
    /// A record must contain exactly six whitespace-separated fields.
    #[error("expected 6 fields, found {found}")]
    FieldCount {
        /// Number of fields present on the line.
        found: usize,
    },
    /// Node ids are positive decimal integers.
    #[error("invalid node id `{raw}`")]
    InvalidId {
        /// The offending field.
        raw: String,
    },
    /// Coordinates are finite decimal numbers.
    #[error("invalid coordinate `{raw}`")]
    InvalidCoordinate {
        /// The offending field.
        raw: String,
    },
    /// Both endpoints carry the same id.
    #[error("edge connects node {id} to itself")]
    SelfLoop {
        /// The repeated id.
        id: NodeId,
    },
}

define_error_codes! {
    /// Stable codes describing [`RecordError`] variants.
    enum RecordErrorCode for RecordError {
        /// Wrong number of fields.
        FieldCount => FieldCount { .. } => "RECORD_FIELD_COUNT",
        /// Unparseable or zero node id.
        InvalidId => InvalidId { .. } => "RECORD_INVALID_ID",
        /// Unparseable or non-finite coordinate.
        InvalidCoordinate => InvalidCoordinate { .. } => "RECORD_INVALID_COORDINATE",
        /// Record with identical endpoints.
        SelfLoop => SelfLoop { .. } => "RECORD_SELF_LOOP",
    }
}

/// Error raised while loading an edge-list file.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum EdgeListError {
    /// The file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Open {
        /// Path that failed to open.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Reading a line failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// 1-based line number.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line was not a well-formed edge record.
    #[error("line {line}: {source}")]
    MalformedRecord {
        /// 1-based line number.
        line: usize,
        /// Parse failure for the record.
        #[source]
        source: RecordError,
    },
    /// A node id reappeared with different coordinates.
    #[error("line {line}: node {id} is at ({found}) but was first seen at ({expected})")]
    InconsistentNode {
        /// 1-based line number of the conflicting record.
        line: usize,
        /// The node id.
        id: NodeId,
        /// Coordinates on the conflicting line.
        found: Coordinate,
        /// Coordinates recorded when the id was first seen.
        expected: Coordinate,
    },
}

define_error_codes! {
    /// Stable codes describing [`EdgeListError`] variants.
    enum EdgeListErrorCode for EdgeListError {
        /// File could not be opened.
        Open => Open { .. } => "EDGE_LIST_OPEN",
        /// Line could not be read.
        Read => Read { .. } => "EDGE_LIST_READ",
        /// Malformed record.
        MalformedRecord => MalformedRecord { .. } => "EDGE_LIST_MALFORMED_RECORD",
        /// Conflicting coordinates for one id.
        InconsistentNode => InconsistentNode { .. } => "EDGE_LIST_INCONSISTENT_NODE",
    }
}

impl EdgeListError {
    /// Retrieve the inner [`RecordErrorCode`] when a record failed to parse.
    #[must_use]
    pub const fn record_code(&self) -> Option<RecordErrorCode> {
        match self {
            Self::MalformedRecord { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}

/// Error raised while writing a generated sample to disk.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum OutputError {
    /// Exclusive creation was requested and the target already exists.
    #[error("refusing to overwrite existing file `{path}`")]
    AlreadyExists {
        /// The existing target path.
        path: PathBuf,
    },
    /// Creating or writing the file failed.
    #[error("failed to write `{path}`: {source}")]
    Io {
        /// The target path.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
}

define_error_codes! {
    /// Stable codes describing [`OutputError`] variants.
    enum OutputErrorCode for OutputError {
        /// Target already exists.
        AlreadyExists => AlreadyExists { .. } => "OUTPUT_ALREADY_EXISTS",
        /// I/O failure.
        Io => Io { .. } => "OUTPUT_IO",
    }
}

/// Convenient alias for results returned by generator configuration.
pub type Result<T> = core::result::Result<T, GeneratorError>;
