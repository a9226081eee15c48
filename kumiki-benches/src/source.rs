//! Deterministic synthetic graphs for benchmarks.
//!
//! Each graph is a random spanning tree, so it is always connected, plus a
//! configurable number of extra random edges per vertex.

use kumiki_core::{Graph, VertexId};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for [`synthetic_graph`].
#[derive(Clone, Copy, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices; must be non-zero.
    pub vertex_count: usize,
    /// Extra random edges added per vertex.
    pub extra_degree: usize,
    /// Seed for the random generator.
    pub seed: u64,
}

/// Builds a connected weighted graph from `config`.
///
/// Vertex `i` is named `v{i}`. Weights are drawn uniformly from `[1, 100)`.
/// The same configuration always produces the same graph.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero and
/// propagates graph construction failures.
///
/// # Examples
/// ```
/// use kumiki_benches::source::{SyntheticGraphConfig, synthetic_graph};
///
/// let graph = synthetic_graph(&SyntheticGraphConfig {
///     vertex_count: 10,
///     extra_degree: 2,
///     seed: 7,
/// })?;
/// assert_eq!(graph.vertex_count(), 10);
/// assert_eq!(graph.edge_count(), 9 + 20);
/// # Ok::<(), kumiki_benches::error::BenchSetupError>(())
/// ```
pub fn synthetic_graph(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut graph = Graph::new();
    for index in 0..config.vertex_count {
        graph.add_vertex(format!("v{index}"))?;
    }

    for index in 1..config.vertex_count {
        let parent = rng.gen_range(0..index);
        let weight = rng.gen_range(1.0_f32..100.0);
        graph.add_edge(VertexId::new(parent), VertexId::new(index), weight)?;
    }

    for index in 0..config.vertex_count {
        for _ in 0..config.extra_degree {
            let other = rng.gen_range(0..config.vertex_count);
            let weight = rng.gen_range(1.0_f32..100.0);
            graph.add_edge(VertexId::new(index), VertexId::new(other), weight)?;
        }
    }
    Ok(graph)
}
