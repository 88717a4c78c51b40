//! Support library for the graphgen CLI binary.
//!
//! Re-exports the CLI module so doctests and unit tests can drive commands
//! with scripted input instead of spawning a subprocess.

pub mod cli;
pub mod logging;
