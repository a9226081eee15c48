//! Weighted undirected graph model consumed by the MST engine.
//!
//! Vertices live in an arena and are addressed by [`VertexId`]. Each vertex
//! owns a read-only adjacency list; the engine reads it once while seeding
//! the partial trees and never mutates it. Union-find state is kept apart in
//! [`crate::UnionLinks`].

mod parse;

use std::{cmp::Ordering, collections::HashMap, fmt};

use crate::error::GraphError;

pub use self::parse::{GraphParseError, GraphParseErrorCode, parse_graph};

/// Stable index of a vertex within its [`Graph`].
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw arena index.
    ///
    /// # Examples
    /// ```
    /// use kumiki_core::VertexId;
    ///
    /// assert_eq!(VertexId::new(3).index(), 3);
    /// ```
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw arena index.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(self) -> usize { self.0 }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// One adjacency entry: the neighbouring vertex and the connecting weight.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    vertex: VertexId,
    weight: f32,
}

impl Neighbor {
    /// Returns the neighbouring vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> VertexId { self.vertex }

    /// Returns the weight of the connecting edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f32 { self.weight }
}

/// A named vertex and its adjacency list.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    name: String,
    neighbors: Vec<Neighbor>,
}

impl Vertex {
    /// Returns the vertex name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the adjacency list in insertion order.
    #[must_use]
    pub fn neighbors(&self) -> &[Neighbor] {
        &self.neighbors
    }
}

/// An undirected weighted edge between two vertices.
///
/// Arcs order by weight using [`f32::total_cmp`]; equal weights fall back to
/// the canonical endpoint pair so that selection is deterministic. Two arcs
/// describing the same edge from opposite endpoints therefore compare equal.
#[derive(Clone, Copy, Debug)]
pub struct Arc {
    v1: VertexId,
    v2: VertexId,
    weight: f32,
}

impl Arc {
    /// Creates an arc between `v1` and `v2`.
    #[must_use]
    pub const fn new(v1: VertexId, v2: VertexId, weight: f32) -> Self {
        Self { v1, v2, weight }
    }

    /// Returns the first endpoint as supplied at construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v1(&self) -> VertexId { self.v1 }

    /// Returns the second endpoint as supplied at construction.
    #[must_use]
    #[rustfmt::skip]
    pub const fn v2(&self) -> VertexId { self.v2 }

    /// Returns the arc weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f32 { self.weight }

    /// Returns the endpoints as `(min, max)`.
    ///
    /// # Examples
    /// ```
    /// use kumiki_core::{Arc, VertexId};
    ///
    /// let arc = Arc::new(VertexId::new(4), VertexId::new(1), 2.5);
    /// assert_eq!(arc.endpoints(), (VertexId::new(1), VertexId::new(4)));
    /// ```
    #[must_use]
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        if self.v1 <= self.v2 {
            (self.v1, self.v2)
        } else {
            (self.v2, self.v1)
        }
    }
}

impl PartialEq for Arc {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Arc {}

impl Ord for Arc {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.endpoints().cmp(&other.endpoints()))
    }
}

impl PartialOrd for Arc {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Weighted undirected graph stored as an arena of vertices.
///
/// # Examples
/// ```
/// use kumiki_core::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex("A")?;
/// let b = graph.add_vertex("B")?;
/// graph.add_edge(a, b, 1.5)?;
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.neighbors(b)[0].vertex(), a);
/// # Ok::<(), kumiki_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    by_name: HashMap<String, VertexId>,
    edge_count: usize,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex called `name` and returns its id.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when the name is already used.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> Result<VertexId, GraphError> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(GraphError::DuplicateVertex { name });
        }
        let id = VertexId::new(self.vertices.len());
        self.by_name.insert(name.clone(), id);
        self.vertices.push(Vertex {
            name,
            neighbors: Vec::new(),
        });
        Ok(id)
    }

    /// Adds an undirected edge, recording it in both adjacency lists.
    ///
    /// Self-loops are accepted; the engine always classifies them as internal
    /// arcs.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either endpoint is not part
    /// of the graph and [`GraphError::NonFiniteWeight`] for NaN or infinite
    /// weights.
    pub fn add_edge(
        &mut self,
        left: VertexId,
        right: VertexId,
        weight: f32,
    ) -> Result<(), GraphError> {
        for vertex in [left, right] {
            if vertex.index() >= self.vertices.len() {
                return Err(GraphError::UnknownVertex {
                    vertex: vertex.index(),
                    vertex_count: self.vertices.len(),
                });
            }
        }
        if !weight.is_finite() {
            return Err(GraphError::NonFiniteWeight {
                left: left.index(),
                right: right.index(),
                weight,
            });
        }

        self.vertices[left.index()].neighbors.push(Neighbor {
            vertex: right,
            weight,
        });
        if left != right {
            self.vertices[right.index()].neighbors.push(Neighbor {
                vertex: left,
                weight,
            });
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Returns the vertex stored under `id`.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.get(id.index())
    }

    /// Looks up a vertex id by name.
    #[must_use]
    pub fn vertex_by_name(&self, name: &str) -> Option<VertexId> {
        self.by_name.get(name).copied()
    }

    /// Returns the name of `id`, or `None` for ids outside the graph.
    #[must_use]
    pub fn name(&self, id: VertexId) -> Option<&str> {
        self.vertex(id).map(Vertex::name)
    }

    /// Returns the adjacency list of `id` (empty for unknown ids).
    #[must_use]
    pub fn neighbors(&self, id: VertexId) -> &[Neighbor] {
        self.vertex(id).map(Vertex::neighbors).unwrap_or_default()
    }

    /// Iterates over all vertices in id order.
    pub fn vertices(&self) -> impl ExactSizeIterator<Item = (VertexId, &Vertex)> {
        self.vertices
            .iter()
            .enumerate()
            .map(|(index, vertex)| (VertexId::new(index), vertex))
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of undirected edges added so far.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns `true` when the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}
