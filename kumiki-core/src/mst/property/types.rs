//! Type definitions for MST property-based tests.

use crate::graph::{Graph, VertexId};

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing tie-breaking.
    ManyIdentical,
    /// Random spanning tree plus roughly `0.5n` to `n` extra edges,
    /// including the occasional self-loop.
    Sparse,
    /// Dense graph approaching a complete graph (edge probability 0.7-0.95).
    Dense,
    /// Multiple components with no cross-component edges.
    Disconnected,
}

/// Generated graph together with the parameters that produced it.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Raw `(left, right, weight)` edges in insertion order.
    pub edges: Vec<(usize, usize, f32)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Materialises the fixture as a [`Graph`] with vertices named `v0..`.
    pub(super) fn graph(&self) -> Graph {
        let mut graph = Graph::new();
        for index in 0..self.vertex_count {
            graph
                .add_vertex(format!("v{index}"))
                .expect("generated names are unique");
        }
        for &(left, right, weight) in &self.edges {
            graph
                .add_edge(VertexId::new(left), VertexId::new(right), weight)
                .expect("generated edges are valid");
        }
        graph
    }

    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len()
        )
    }
}
