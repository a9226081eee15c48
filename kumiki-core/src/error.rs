//! Error types for the Kumiki core library.
//!
//! Defines the error enums exposed by the public API together with their
//! stable machine-readable codes.

use thiserror::Error;

use crate::graph::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::core::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// Errors returned while computing a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MstError {
    /// A tree was requested from an empty [`crate::PartialTreeList`].
    #[error("partial tree list is empty")]
    EmptyCollection,
    /// The caller requested an MST for a graph without vertices.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// A component ran out of candidate arcs before reaching the others.
    #[error(
        "graph is disconnected: component rooted at {root} ({component_vertices} vertices) \
         has no arc to the {remaining_components} remaining component(s)"
    )]
    Disconnected {
        /// Root of the component whose candidate heap was exhausted.
        root: VertexId,
        /// Number of vertices covered by that component.
        component_vertices: usize,
        /// Number of other components still registered.
        remaining_components: usize,
    },
    /// An internal invariant was violated, indicating a logic error.
    #[error("MST invariant violated: {invariant} (vertex {vertex})")]
    InvariantViolation {
        /// Name of the violated invariant to assist debugging.
        invariant: &'static str,
        /// Vertex (or arena slot) index that exposed the violation.
        vertex: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// A tree was requested from an empty partial tree list.
        EmptyCollection => EmptyCollection => "MST_EMPTY_COLLECTION",
        /// The caller requested an MST for a graph without vertices.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// A component ran out of candidate arcs before reaching the others.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED_GRAPH",
        /// An internal invariant was violated.
        InvariantViolation => InvariantViolation { .. } => "MST_INVARIANT_VIOLATION",
    }
}

/// Errors raised while building a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum GraphError {
    /// A vertex with the same name already exists.
    #[error("vertex `{name}` is already defined")]
    DuplicateVertex {
        /// The repeated vertex name.
        name: String,
    },
    /// An edge referenced a vertex id that is not present in the graph.
    #[error("edge references vertex {vertex}, but vertex_count is {vertex_count}")]
    UnknownVertex {
        /// The invalid vertex index.
        vertex: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// Index of the first endpoint.
        left: usize,
        /// Index of the second endpoint.
        right: usize,
        /// The rejected weight.
        weight: f32,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex with the same name already exists.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
        /// An edge referenced a vertex id that is not present in the graph.
        UnknownVertex => UnknownVertex { .. } => "GRAPH_UNKNOWN_VERTEX",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
    }
}

/// Convenient result alias for MST operations.
pub type Result<T, E = MstError> = core::result::Result<T, E>;
