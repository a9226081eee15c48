use kumiki_core::{Graph, VertexId};

/// Builds a graph with the given vertex names and `(left, right, weight)`
/// edges referring to positions in `names`.
#[must_use]
pub fn graph_from(names: &[&str], edges: &[(usize, usize, f32)]) -> Graph {
    let mut graph = Graph::new();
    for name in names {
        graph.add_vertex(*name).expect("names are unique");
    }
    for &(left, right, weight) in edges {
        graph
            .add_edge(VertexId::new(left), VertexId::new(right), weight)
            .expect("edge is valid");
    }
    graph
}

/// The four-vertex square with one diagonal used across the suites.
#[must_use]
pub fn square_with_diagonal() -> Graph {
    graph_from(
        &["A", "B", "C", "D"],
        &[(0, 1, 1.0), (1, 2, 2.0), (2, 3, 3.0), (3, 0, 4.0), (0, 2, 5.0)],
    )
}
