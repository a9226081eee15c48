//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` instead of `.expect()`.

use kumiki_core::{GraphError, MstError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The generated graph was rejected by the graph model.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// MST computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// A zero value was passed where a non-zero integer was required.
    #[error("expected a non-zero value for {context}")]
    ZeroValue {
        /// A description of the parameter that was unexpectedly zero.
        context: &'static str,
    },
}
