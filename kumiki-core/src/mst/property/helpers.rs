//! Shared helper functions for MST property-based tests.

use crate::graph::Arc;

/// Path-compressing find for union-find verification.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Sums arc weights as `f64` for lossless accumulation.
pub(super) fn total_weight_f64(arcs: &[Arc]) -> f64 {
    arcs.iter().map(|arc| f64::from(arc.weight())).sum()
}

/// Counts connected components of the raw fixture edges.
pub(super) fn count_components(vertex_count: usize, edges: &[(usize, usize, f32)]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for &(left, right, _) in edges {
        let ra = find_root(&mut parent, left);
        let rb = find_root(&mut parent, right);
        if ra != rb {
            parent[rb] = ra;
            components -= 1;
        }
    }
    components
}
