//! Configured entry point that runs the full pipeline on a [`Graph`].
//!
//! [`SolverBuilder`] collects options, [`Solver`] validates the input graph,
//! builds the registry and drives it to a single tree.

use tracing::{instrument, warn};

use crate::{
    error::{MstError, Result},
    graph::Graph,
    mst::{self, MinimumSpanningTree},
    registry::PartialTreeList,
};

/// Configures and constructs [`Solver`] instances.
///
/// # Examples
/// ```
/// use kumiki_core::SolverBuilder;
///
/// let solver = SolverBuilder::new().with_invariant_checks(true).build();
/// assert!(solver.invariant_checks());
/// ```
#[derive(Clone, Debug, Default)]
pub struct SolverBuilder {
    invariant_checks: bool,
}

impl SolverBuilder {
    /// Creates a builder with invariant checks disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables the partition check after every merge.
    ///
    /// The check walks every vertex, so it turns each merge into an `O(V)`
    /// step. Useful for debugging and tests.
    #[must_use]
    pub fn with_invariant_checks(mut self, enabled: bool) -> Self {
        self.invariant_checks = enabled;
        self
    }

    /// Returns whether invariant checks are enabled.
    #[must_use]
    #[rustfmt::skip]
    pub fn invariant_checks(&self) -> bool { self.invariant_checks }

    /// Builds a [`Solver`] from the current configuration.
    #[must_use]
    pub fn build(self) -> Solver {
        Solver {
            invariant_checks: self.invariant_checks,
        }
    }
}

/// Computes minimum spanning trees with a fixed configuration.
///
/// # Examples
/// ```
/// use kumiki_core::{Graph, Solver};
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex("A")?;
/// let b = graph.add_vertex("B")?;
/// let c = graph.add_vertex("C")?;
/// graph.add_edge(a, b, 2.0)?;
/// graph.add_edge(b, c, 1.0)?;
///
/// let tree = Solver::default().solve(&graph)?;
/// assert_eq!(tree.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Solver {
    invariant_checks: bool,
}

impl Solver {
    /// Returns whether the partition is verified after every merge.
    #[must_use]
    #[rustfmt::skip]
    pub fn invariant_checks(&self) -> bool { self.invariant_checks }

    /// Computes the minimum spanning tree of `graph`.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] for a graph without vertices and
    /// [`MstError::Disconnected`] when the graph has more than one
    /// component. With invariant checks enabled, a broken partition surfaces
    /// as [`MstError::InvariantViolation`].
    #[instrument(
        name = "core.solve",
        err,
        skip(self, graph),
        fields(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            invariant_checks = self.invariant_checks,
        ),
    )]
    pub fn solve(&self, graph: &Graph) -> Result<MinimumSpanningTree> {
        if graph.is_empty() {
            warn!("graph has no vertices, returning error");
            return Err(MstError::EmptyGraph);
        }
        let mut list = PartialTreeList::initialize(graph);
        if self.invariant_checks {
            list.check_partition()?;
        }
        mst::drive(&mut list, self.invariant_checks)
    }
}

/// Computes the minimum spanning tree of `graph` with default settings.
///
/// # Errors
/// See [`Solver::solve`].
pub fn minimum_spanning_tree(graph: &Graph) -> Result<MinimumSpanningTree> {
    Solver::default().solve(graph)
}
