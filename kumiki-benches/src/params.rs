//! Benchmark parameter types.

use std::fmt;

/// Parameters for an MST benchmark run.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Extra random edges added per vertex on top of the spanning path.
    pub extra_degree: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.vertex_count, self.extra_degree)
    }
}
