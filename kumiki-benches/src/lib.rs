//! Benchmark support crate for kumiki.
//!
//! Provides the synthetic graph generator and parameter types used by the
//! Criterion benchmarks of the MST pipeline.

pub mod error;
pub mod params;
pub mod source;
