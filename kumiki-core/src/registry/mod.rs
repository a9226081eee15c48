//! Circular registry of the partial trees that have not been merged yet.
//!
//! Trees sit in a ring of nodes stored in an index arena. `rear` marks the
//! logical tail and `rear.next` the front, so appending behind the tail and
//! removing from the front are both `O(1)`. Nodes also carry a `prev` link,
//! which keeps splicing out an arbitrary node `O(1)` once the scan in
//! [`PartialTreeList::remove_tree_containing`] has found it. Vacated slots are
//! reused by later appends.
//!
//! The registry also owns the [`UnionLinks`] shared by all of its trees,
//! since membership queries must resolve vertices against every registered
//! root.

use tracing::{debug, instrument};

use crate::{
    error::MstError,
    graph::{Graph, VertexId},
    partial_tree::PartialTree,
    union_find::UnionLinks,
};

#[derive(Clone, Debug)]
struct RingNode {
    tree: Option<PartialTree>,
    next: usize,
    prev: usize,
}

/// Circular collection of [`PartialTree`]s.
///
/// # Examples
/// ```
/// use kumiki_core::{PartialTree, PartialTreeList, VertexId};
///
/// let mut list = PartialTreeList::new(3);
/// for index in 0..3 {
///     list.append(PartialTree::new(VertexId::new(index)));
/// }
/// assert_eq!(list.size(), 3);
///
/// let middle = list.remove_tree_containing(VertexId::new(1));
/// assert_eq!(middle.map(|tree| tree.root()), Some(VertexId::new(1)));
/// assert_eq!(list.remove()?.root(), VertexId::new(0));
/// assert_eq!(list.size(), 1);
/// # Ok::<(), kumiki_core::MstError>(())
/// ```
#[derive(Clone, Debug)]
pub struct PartialTreeList {
    nodes: Vec<RingNode>,
    vacant: Vec<usize>,
    rear: Option<usize>,
    size: usize,
    links: UnionLinks,
}

impl PartialTreeList {
    /// Creates an empty registry whose trees may cover `vertex_count`
    /// vertices.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self {
            nodes: Vec::new(),
            vacant: Vec::new(),
            rear: None,
            size: 0,
            links: UnionLinks::new(vertex_count),
        }
    }

    /// Builds one single-vertex tree per vertex of `graph`, each seeded with
    /// its incident arcs, and appends them in vertex order.
    #[must_use]
    #[instrument(
        name = "core.initialize",
        skip(graph),
        fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
    )]
    pub fn initialize(graph: &Graph) -> Self {
        let mut list = Self::new(graph.vertex_count());
        list.nodes.reserve(graph.vertex_count());
        for (vertex, _) in graph.vertices() {
            list.append(PartialTree::from_vertex(graph, vertex));
        }
        debug!(trees = list.size(), "partial tree list initialised");
        list
    }

    /// Adds `tree` behind the current tail and makes it the new tail.
    pub fn append(&mut self, tree: PartialTree) {
        let index = self.allocate(tree);
        match self.rear {
            None => {
                self.nodes[index].next = index;
                self.nodes[index].prev = index;
            }
            Some(rear) => {
                let front = self.nodes[rear].next;
                self.nodes[index].next = front;
                self.nodes[index].prev = rear;
                self.nodes[rear].next = index;
                self.nodes[front].prev = index;
            }
        }
        self.rear = Some(index);
        self.size += 1;
    }

    /// Removes and returns the tree at the front of the ring.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyCollection`] when the registry is empty.
    pub fn remove(&mut self) -> Result<PartialTree, MstError> {
        let rear = self.rear.ok_or(MstError::EmptyCollection)?;
        let front = self.nodes[rear].next;
        self.unlink(front)
    }

    /// Removes and returns the first tree, scanning from the front, that
    /// contains `vertex`.
    ///
    /// Not finding one is routine: the driver uses it to recognise arcs whose
    /// endpoints both belong to the tree it is currently draining.
    ///
    /// # Panics
    /// Panics if `vertex` is not tracked by [`Self::links`].
    pub fn remove_tree_containing(&mut self, vertex: VertexId) -> Option<PartialTree> {
        let rear = self.rear?;
        let mut cursor = self.nodes[rear].next;
        for _ in 0..self.size {
            let node = &self.nodes[cursor];
            let found = node
                .tree
                .as_ref()
                .is_some_and(|tree| tree.contains_vertex(vertex, &self.links));
            if found {
                return self.unlink(cursor).ok();
            }
            cursor = node.next;
        }
        None
    }

    /// Returns the number of registered trees.
    #[must_use]
    #[rustfmt::skip]
    pub const fn size(&self) -> usize { self.size }

    /// Returns `true` when no tree is registered.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_empty(&self) -> bool { self.size == 0 }

    /// Returns the union-find links shared by the registered trees.
    #[must_use]
    #[rustfmt::skip]
    pub const fn links(&self) -> &UnionLinks { &self.links }

    /// Returns the union-find links for merging trees taken out of the
    /// registry.
    #[rustfmt::skip]
    pub const fn links_mut(&mut self) -> &mut UnionLinks { &mut self.links }

    /// Iterates over the registered trees in ring order, starting at the
    /// front.
    #[must_use]
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            list: self,
            cursor: self.rear.map(|rear| self.nodes[rear].next),
            rest: self.size,
        }
    }

    /// Verifies that the registered trees partition every tracked vertex.
    ///
    /// Each registered root must be a distinct union-find root, and every
    /// vertex must resolve to one of them.
    ///
    /// # Errors
    /// Returns [`MstError::InvariantViolation`] naming the first offending
    /// vertex.
    pub fn check_partition(&self) -> Result<(), MstError> {
        let mut registered = vec![false; self.links.len()];
        for tree in self {
            let root = tree.root();
            if !self.links.is_root(root) {
                return Err(MstError::InvariantViolation {
                    invariant: "registered tree root must be a union-find root",
                    vertex: root.index(),
                });
            }
            if std::mem::replace(&mut registered[root.index()], true) {
                return Err(MstError::InvariantViolation {
                    invariant: "each root must be registered exactly once",
                    vertex: root.index(),
                });
            }
        }
        for index in 0..self.links.len() {
            let root = self.links.find_root(VertexId::new(index));
            if !registered[root.index()] {
                return Err(MstError::InvariantViolation {
                    invariant: "every vertex must belong to a registered tree",
                    vertex: index,
                });
            }
        }
        Ok(())
    }

    fn allocate(&mut self, tree: PartialTree) -> usize {
        let node = RingNode {
            tree: Some(tree),
            next: 0,
            prev: 0,
        };
        if let Some(index) = self.vacant.pop() {
            self.nodes[index] = node;
            index
        } else {
            self.nodes.push(node);
            self.nodes.len() - 1
        }
    }

    /// Splices `index` out of the ring and returns its tree.
    fn unlink(&mut self, index: usize) -> Result<PartialTree, MstError> {
        let tree = self.nodes[index]
            .tree
            .take()
            .ok_or(MstError::InvariantViolation {
                invariant: "ring node must hold a tree",
                vertex: index,
            })?;

        if self.size == 1 {
            self.rear = None;
        } else {
            let RingNode { next, prev, .. } = self.nodes[index];
            self.nodes[prev].next = next;
            self.nodes[next].prev = prev;
            if self.rear == Some(index) {
                self.rear = Some(prev);
            }
        }
        self.nodes[index].next = index;
        self.nodes[index].prev = index;
        self.vacant.push(index);
        self.size -= 1;
        Ok(tree)
    }
}

/// Iterator over the trees of a [`PartialTreeList`] in ring order.
///
/// The walk length is fixed to the size observed when the iterator was
/// created.
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    list: &'a PartialTreeList,
    cursor: Option<usize>,
    rest: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a PartialTree;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest == 0 {
            return None;
        }
        let node = &self.list.nodes[self.cursor?];
        self.cursor = Some(node.next);
        self.rest -= 1;
        node.tree.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rest, Some(self.rest))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a PartialTreeList {
    type Item = &'a PartialTree;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
