//! Benchmark support crate for graphgen.
//!
//! Provides parameter types and seeded fixtures used by the Criterion
//! benchmarks for sample generation and edge-list loading.

pub mod error;
pub mod fixture;
pub mod params;
