//! Spanning core library.
//!
//! Grows a minimum spanning tree from a start vertex with Prim's algorithm
//! and records every step: the vertex added, what it cost, the edges that
//! cross the tree boundary, and the tree accumulated so far.
//!
//! Selection breaks ties on the lowest vertex index and relaxation only
//! replaces an attachment on strict improvement, so identical inputs always
//! produce identical traces.
//!
//! # Examples
//! ```
//! use spanning_core::{Edge, build};
//!
//! let edges = [
//!     Edge::new(0, 1, 4.0),
//!     Edge::new(0, 2, 1.0),
//!     Edge::new(2, 3, 2.0),
//!     Edge::new(1, 3, 6.0),
//! ];
//! let tree = build(4, &edges, 0)?;
//! assert_eq!(tree.total_weight(), 7.0);
//! let order: Vec<usize> = tree.steps().iter().map(|step| step.vertex()).collect();
//! assert_eq!(order, [0, 2, 3, 1]);
//! # Ok::<(), spanning_core::MstError>(())
//! ```

mod error;
mod graph;
mod prim;
mod tree;

#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{MstError, MstErrorCode, Result},
    graph::{AdjacencyMatrix, Edge},
    prim::{CandidateEdge, PrimBuilder, Step, TreeEdge, build},
    tree::{Outcome, SpanningTree},
};
