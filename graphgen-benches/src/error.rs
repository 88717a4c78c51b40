//! Benchmark setup error type.
//!
//! Lets fixture builders propagate failures with `?` instead of using
//! `.expect()`.

use graphgen_core::{EdgeListError, GeneratorError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Generator configuration was rejected.
    #[error("generator configuration failed: {0}")]
    Generator(#[from] GeneratorError),
    /// A rendered fixture failed to load back.
    #[error("edge list load failed: {0}")]
    EdgeList(#[from] EdgeListError),
}
