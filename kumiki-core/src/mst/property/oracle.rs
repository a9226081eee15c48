//! Sequential Kruskal oracle for MST property verification.
//!
//! A deliberately plain implementation: sort every non-loop edge by weight,
//! then accept edges that join two different components. All minimum
//! spanning trees of a graph share the same multiset of weights, so the
//! total weight is comparable with the driver even when ties are broken
//! differently.

use super::helpers::find_root;

/// Result of the sequential Kruskal oracle.
#[derive(Clone, Debug)]
pub(super) struct SequentialMstResult {
    /// Total weight of the spanning forest, accumulated as `f64`.
    pub total_weight: f64,
    /// Number of edges in the spanning forest.
    pub edge_count: usize,
    /// Number of connected components after construction.
    pub component_count: usize,
}

/// Computes a minimum spanning forest using sequential Kruskal.
pub(super) fn sequential_kruskal(
    vertex_count: usize,
    edges: &[(usize, usize, f32)],
) -> SequentialMstResult {
    let mut sorted: Vec<(usize, usize, f32)> = edges
        .iter()
        .copied()
        .filter(|&(left, right, weight)| {
            left != right && left < vertex_count && right < vertex_count && weight.is_finite()
        })
        .collect();
    sorted.sort_by(|a, b| a.2.total_cmp(&b.2));

    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut rank: Vec<usize> = vec![0; vertex_count];
    let mut result = SequentialMstResult {
        total_weight: 0.0,
        edge_count: 0,
        component_count: vertex_count,
    };

    for (left, right, weight) in sorted {
        let ra = find_root(&mut parent, left);
        let rb = find_root(&mut parent, right);
        if ra == rb {
            continue;
        }
        union_by_rank(&mut parent, &mut rank, ra, rb);
        result.total_weight += f64::from(weight);
        result.edge_count += 1;
        result.component_count -= 1;
    }
    result
}

/// Union by rank, breaking ties by smaller index.
fn union_by_rank(parent: &mut [usize], rank: &mut [usize], a: usize, b: usize) {
    let (root, child) = match rank[a].cmp(&rank[b]) {
        std::cmp::Ordering::Greater => (a, b),
        std::cmp::Ordering::Less => (b, a),
        std::cmp::Ordering::Equal if a <= b => (a, b),
        std::cmp::Ordering::Equal => (b, a),
    };
    parent[child] = root;
    if rank[root] == rank[child] {
        rank[root] += 1;
    }
}
