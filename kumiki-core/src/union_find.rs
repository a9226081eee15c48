//! Parent links tracking which partial tree each vertex belongs to.
//!
//! Every vertex owns one slot holding the id of its parent. A vertex whose
//! slot points at itself is a root and represents one partial tree. Merging
//! two trees writes a single slot; lookups walk the chain without
//! compressing it, so the structure is never mutated by a query.

use crate::{error::MstError, graph::VertexId};

/// Union-find parent array indexed by [`VertexId`].
///
/// # Examples
/// ```
/// use kumiki_core::{UnionLinks, VertexId};
///
/// let mut links = UnionLinks::new(3);
/// let (a, b, c) = (VertexId::new(0), VertexId::new(1), VertexId::new(2));
/// links.link(c, b)?;
/// links.link(b, a)?;
/// assert_eq!(links.find_root(c), a);
/// assert_eq!(links.depth(c), 2);
/// assert!(links.link(a, c).is_err());
/// # Ok::<(), kumiki_core::MstError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnionLinks {
    parent: Vec<VertexId>,
}

impl UnionLinks {
    /// Creates links for `vertex_count` vertices, each its own root.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            parent: (0..vertex_count).map(VertexId::new).collect(),
        }
    }

    /// Returns the number of tracked vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` when no vertices are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the direct parent of `vertex`, or `None` for unknown ids.
    #[must_use]
    pub fn parent(&self, vertex: VertexId) -> Option<VertexId> {
        self.parent.get(vertex.index()).copied()
    }

    /// Returns `true` when `vertex` is tracked and is its own parent.
    #[must_use]
    pub fn is_root(&self, vertex: VertexId) -> bool {
        self.parent(vertex) == Some(vertex)
    }

    /// Follows parent links from `vertex` until reaching a root.
    ///
    /// # Panics
    /// Panics if `vertex` is not tracked by these links.
    #[must_use]
    pub fn find_root(&self, vertex: VertexId) -> VertexId {
        let mut current = vertex;
        loop {
            let parent = self.parent[current.index()];
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    /// Returns the number of links between `vertex` and its root.
    ///
    /// # Panics
    /// Panics if `vertex` is not tracked by these links.
    #[must_use]
    pub fn depth(&self, vertex: VertexId) -> usize {
        let mut current = vertex;
        let mut depth = 0;
        while self.parent[current.index()] != current {
            current = self.parent[current.index()];
            depth += 1;
        }
        depth
    }

    /// Hangs the root `child` beneath the root `parent`.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] when either vertex is not a
    /// tracked root or both name the same vertex.
    pub fn link(&mut self, child: VertexId, parent: VertexId) -> Result<(), MstError> {
        if !self.is_root(parent) {
            return Err(MstError::InvariantViolation {
                invariant: "link target must be a root",
                vertex: parent.index(),
            });
        }
        if !self.is_root(child) || child == parent {
            return Err(MstError::InvariantViolation {
                invariant: "linked vertex must be a distinct root",
                vertex: child.index(),
            });
        }
        self.parent[child.index()] = parent;
        Ok(())
    }
}
