//! One connected component of the spanning tree under construction.

use crate::{
    error::MstError,
    graph::{Arc, Graph, VertexId},
    heap::MinHeap,
    union_find::UnionLinks,
};

/// A component identified by its union-find root, together with the arcs
/// incident to its vertices that have not been examined yet.
///
/// The heap may hold arcs that became internal through earlier merges; the
/// driver discards them lazily when they surface.
#[derive(Clone, Debug)]
pub struct PartialTree {
    root: VertexId,
    arcs: MinHeap<Arc>,
    vertex_count: usize,
}

impl PartialTree {
    /// Creates a single-vertex tree with no candidate arcs.
    #[must_use]
    pub fn new(root: VertexId) -> Self {
        Self {
            root,
            arcs: MinHeap::new(),
            vertex_count: 1,
        }
    }

    /// Creates a single-vertex tree seeded with every arc incident to
    /// `vertex` in `graph`.
    ///
    /// # Examples
    /// ```
    /// use kumiki_core::{Graph, PartialTree};
    ///
    /// let mut graph = Graph::new();
    /// let a = graph.add_vertex("A")?;
    /// let b = graph.add_vertex("B")?;
    /// let c = graph.add_vertex("C")?;
    /// graph.add_edge(a, b, 3.0)?;
    /// graph.add_edge(a, c, 1.0)?;
    ///
    /// let mut tree = PartialTree::from_vertex(&graph, a);
    /// assert_eq!(tree.root(), a);
    /// assert_eq!(tree.arcs().len(), 2);
    /// assert_eq!(tree.arcs_mut().delete_min().map(|arc| arc.v2()), Some(c));
    /// # Ok::<(), kumiki_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn from_vertex(graph: &Graph, vertex: VertexId) -> Self {
        let neighbors = graph.neighbors(vertex);
        let mut arcs = MinHeap::with_capacity(neighbors.len());
        for neighbor in neighbors {
            arcs.insert(Arc::new(vertex, neighbor.vertex(), neighbor.weight()));
        }
        Self {
            root: vertex,
            arcs,
            vertex_count: 1,
        }
    }

    /// Returns the union-find root representing this tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn root(&self) -> VertexId { self.root }

    /// Returns the number of vertices covered by this tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the candidate arc heap.
    #[must_use]
    #[rustfmt::skip]
    pub const fn arcs(&self) -> &MinHeap<Arc> { &self.arcs }

    /// Returns the candidate arc heap for extraction.
    #[rustfmt::skip]
    pub const fn arcs_mut(&mut self) -> &mut MinHeap<Arc> { &mut self.arcs }

    /// Absorbs `other` into this tree.
    ///
    /// `other`'s root is linked beneath this tree's root and all of its
    /// candidate arcs move into this tree's heap.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] when either root is no longer
    /// a union-find root or both trees share a root. `self` and the links are
    /// left untouched in that case.
    pub fn merge(&mut self, other: Self, links: &mut UnionLinks) -> Result<(), MstError> {
        links.link(other.root, self.root)?;
        self.arcs.merge(other.arcs);
        self.vertex_count += other.vertex_count;
        Ok(())
    }

    /// Returns `true` when `vertex` resolves to this tree's root.
    ///
    /// # Panics
    /// Panics if `vertex` is not tracked by `links`.
    #[must_use]
    pub fn contains_vertex(&self, vertex: VertexId, links: &UnionLinks) -> bool {
        links.find_root(vertex) == self.root
    }
}
