//! Kumiki core library.
//!
//! Computes minimum spanning trees by repeatedly merging partial trees held
//! in a circular registry. Start with [`minimum_spanning_tree`] or a
//! configured [`Solver`]; [`initialize`] and [`execute`] expose the two
//! phases separately.

mod error;
mod graph;
mod heap;
mod mst;
mod partial_tree;
mod registry;
mod solver;
#[cfg(test)]
mod test_utils;
mod union_find;

pub use crate::{
    error::{GraphError, GraphErrorCode, MstError, MstErrorCode, Result},
    graph::{
        Arc, Graph, GraphParseError, GraphParseErrorCode, Neighbor, Vertex, VertexId, parse_graph,
    },
    heap::MinHeap,
    mst::{MinimumSpanningTree, execute, initialize},
    partial_tree::PartialTree,
    registry::{Iter, PartialTreeList},
    solver::{Solver, SolverBuilder, minimum_spanning_tree},
    union_find::UnionLinks,
};
