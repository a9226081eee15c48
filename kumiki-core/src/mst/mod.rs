//! Incremental partial-tree minimum spanning tree (MST) construction.
//!
//! Every vertex starts as its own [`PartialTree`] seeded with its incident
//! arcs. The driver repeatedly takes the tree at the front of the registry,
//! pops its cheapest candidate arcs until one leads to another registered
//! tree, absorbs that tree and requeues the result at the back. Arcs whose
//! endpoints already share a tree are discarded as they surface. The loop
//! ends once a single tree remains.

use tracing::{debug, info, instrument, trace, warn};

use crate::{
    error::MstError,
    graph::{Arc, Graph},
    partial_tree::PartialTree,
    registry::PartialTreeList,
};

/// Arcs selected for a minimum spanning tree, in the order they were
/// accepted.
///
/// # Examples
/// ```
/// use kumiki_core::{Graph, minimum_spanning_tree};
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex("A")?;
/// let b = graph.add_vertex("B")?;
/// let c = graph.add_vertex("C")?;
/// graph.add_edge(a, b, 1.0)?;
/// graph.add_edge(b, c, 2.0)?;
/// graph.add_edge(a, c, 5.0)?;
///
/// let tree = minimum_spanning_tree(&graph)?;
/// assert_eq!(tree.len(), 2);
/// assert_eq!(tree.total_weight(), 3.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MinimumSpanningTree {
    arcs: Vec<Arc>,
}

impl MinimumSpanningTree {
    /// Returns the accepted arcs.
    #[must_use]
    #[rustfmt::skip]
    pub fn arcs(&self) -> &[Arc] { &self.arcs }

    /// Consumes the tree and returns its arcs.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_arcs(self) -> Vec<Arc> { self.arcs }

    /// Returns the number of accepted arcs.
    #[must_use]
    #[rustfmt::skip]
    pub fn len(&self) -> usize { self.arcs.len() }

    /// Returns `true` when no arc was accepted.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_empty(&self) -> bool { self.arcs.is_empty() }

    /// Sums the arc weights in `f64`.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.arcs.iter().map(|arc| f64::from(arc.weight())).sum()
    }
}

/// Builds the registry of single-vertex trees for `graph`.
///
/// Shorthand for [`PartialTreeList::initialize`].
#[must_use]
pub fn initialize(graph: &Graph) -> PartialTreeList {
    PartialTreeList::initialize(graph)
}

/// Merges the trees of `list` until one remains and returns the arcs used.
///
/// A registry holding at most one tree yields an empty result, so draining an
/// already merged registry a second time is harmless.
///
/// # Errors
/// Returns [`MstError::Disconnected`] when a tree exhausts its candidate arcs
/// while other trees are still registered. The exhausted tree is appended
/// back first, so `list` still partitions the vertex set. Returns
/// [`MstError::InvariantViolation`] if a merge finds corrupted links.
///
/// # Examples
/// ```
/// use kumiki_core::{Graph, execute, initialize};
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex("A")?;
/// let b = graph.add_vertex("B")?;
/// graph.add_edge(a, b, 4.0)?;
///
/// let mut list = initialize(&graph);
/// let tree = execute(&mut list)?;
/// assert_eq!(tree.len(), 1);
/// assert_eq!(list.size(), 1);
/// assert!(execute(&mut list)?.is_empty());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "core.execute",
    err,
    skip(list),
    fields(components = list.size()),
)]
pub fn execute(list: &mut PartialTreeList) -> Result<MinimumSpanningTree, MstError> {
    drive(list, false)
}

/// Runs the merge loop, optionally verifying the partition after each merge.
pub(crate) fn drive(
    list: &mut PartialTreeList,
    check_invariants: bool,
) -> Result<MinimumSpanningTree, MstError> {
    let mut arcs = Vec::with_capacity(list.size().saturating_sub(1));
    while list.size() > 1 {
        let mut tree = list.remove()?;
        let Some(arc) = absorb_cheapest_neighbour(&mut tree, list)? else {
            let error = MstError::Disconnected {
                root: tree.root(),
                component_vertices: tree.vertex_count(),
                remaining_components: list.size(),
            };
            list.append(tree);
            warn!(%error, "candidate arcs exhausted before the graph was spanned");
            return Err(error);
        };
        let root = tree.root();
        list.append(tree);
        debug!(
            %root,
            v1 = %arc.v1(),
            v2 = %arc.v2(),
            weight = arc.weight(),
            remaining = list.size(),
            "partial trees merged"
        );
        if check_invariants {
            list.check_partition()?;
        }
        arcs.push(arc);
    }

    let tree = MinimumSpanningTree { arcs };
    info!(
        arcs = tree.len(),
        total_weight = tree.total_weight(),
        "minimum spanning tree completed"
    );
    Ok(tree)
}

/// Pops arcs from `tree` until one reaches another registered tree, then
/// merges that tree in. Returns `None` once the heap runs dry.
fn absorb_cheapest_neighbour(
    tree: &mut PartialTree,
    list: &mut PartialTreeList,
) -> Result<Option<Arc>, MstError> {
    while let Some(arc) = tree.arcs_mut().delete_min() {
        let other = list
            .remove_tree_containing(arc.v1())
            .or_else(|| list.remove_tree_containing(arc.v2()));
        match other {
            Some(other) => {
                tree.merge(other, list.links_mut())?;
                return Ok(Some(arc));
            }
            None => trace!(
                v1 = %arc.v1(),
                v2 = %arc.v2(),
                weight = arc.weight(),
                "internal arc discarded"
            ),
        }
    }
    Ok(None)
}

#[cfg(test)]
mod property;
