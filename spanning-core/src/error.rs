//! Error types for the spanning core library.
//!
//! Only inputs outside the builder's contract produce errors. A graph that is
//! not connected from the start vertex is a normal outcome, reported through
//! [`crate::Outcome`] instead.

use std::fmt;

use thiserror::Error;

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

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
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

/// Errors returned while building a minimum spanning tree.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MstError {
    /// The caller requested an MST for a graph without vertices.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// An edge referenced a vertex that is not present in the graph.
    #[error("edge references vertex {node}, but the graph has {node_count} vertices")]
    InvalidNodeId {
        /// The invalid vertex referenced by an edge.
        node: usize,
        /// The number of vertices in the graph.
        node_count: usize,
    },
    /// The start vertex is not present in the graph.
    #[error("start vertex {start} is out of range for a graph with {node_count} vertices")]
    InvalidStart {
        /// The requested start vertex.
        start: usize,
        /// The number of vertices in the graph.
        node_count: usize,
    },
    /// The adjacency matrix for this many vertices cannot be allocated.
    #[error("a graph with {node_count} vertices is too large to store")]
    GraphTooLarge {
        /// The requested number of vertices.
        node_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight {weight}")]
    NonFiniteWeight {
        /// The first endpoint as provided.
        left: usize,
        /// The second endpoint as provided.
        right: usize,
        /// The offending weight.
        weight: f64,
    },
}

define_error_codes! {
    /// Stable codes describing [`MstError`] variants.
    enum MstErrorCode for MstError {
        /// The graph has no vertices.
        EmptyGraph => EmptyGraph => "EMPTY_GRAPH",
        /// An edge referenced a vertex outside the graph.
        InvalidNodeId => InvalidNodeId { .. } => "INVALID_NODE_ID",
        /// The start vertex lies outside the graph.
        InvalidStart => InvalidStart { .. } => "INVALID_START",
        /// The adjacency matrix could not be allocated.
        GraphTooLarge => GraphTooLarge { .. } => "GRAPH_TOO_LARGE",
        /// An edge weight was NaN or infinite.
        NonFiniteWeight => NonFiniteWeight { .. } => "NON_FINITE_WEIGHT",
    }
}

/// Convenient result alias for MST construction.
pub type Result<T> = core::result::Result<T, MstError>;
