//! Weighted undirected graph input and its dense adjacency matrix.

use tracing::{debug, instrument};

use crate::{MstError, Result};

/// One weighted undirected edge `(source, target, weight)` as supplied by a
/// caller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    weight: f64,
}

impl Edge {
    /// Creates an edge between `source` and `target`.
    ///
    /// Orientation carries no meaning; `Edge::new(1, 0, w)` describes the
    /// same connection as `Edge::new(0, 1, w)`.
    #[must_use]
    pub const fn new(source: usize, target: usize, weight: f64) -> Self {
        Self {
            source,
            target,
            weight,
        }
    }

    /// Returns the first endpoint as provided.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as provided.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    fn validate(&self, node_count: usize) -> Result<()> {
        for node in [self.source, self.target] {
            if node >= node_count {
                return Err(MstError::InvalidNodeId { node, node_count });
            }
        }
        if !self.weight.is_finite() {
            return Err(MstError::NonFiniteWeight {
                left: self.source,
                right: self.target,
                weight: self.weight,
            });
        }
        Ok(())
    }
}

/// Dense symmetric adjacency matrix mapping vertex pairs to an optional
/// weight.
///
/// Parallel edges collapse to their cheapest instance and self loops are
/// dropped. The matrix is immutable once built.
///
/// # Examples
/// ```
/// use spanning_core::{AdjacencyMatrix, Edge};
///
/// let graph = AdjacencyMatrix::from_edges(2, &[Edge::new(0, 1, 5.0), Edge::new(1, 0, 2.0)])?;
/// assert_eq!(graph.weight(0, 1), Some(2.0));
/// assert_eq!(graph.weight(1, 0), Some(2.0));
/// # Ok::<(), spanning_core::MstError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct AdjacencyMatrix {
    vertex_count: usize,
    weights: Vec<Option<f64>>,
}

impl AdjacencyMatrix {
    /// Builds the matrix for `vertex_count` vertices from `edges`.
    ///
    /// # Errors
    /// Returns [`MstError::EmptyGraph`] when `vertex_count == 0`,
    /// [`MstError::InvalidNodeId`] when an endpoint is `>= vertex_count` and
    /// [`MstError::NonFiniteWeight`] when a weight is NaN or infinite.
    #[instrument(name = "graph.from_edges", level = "debug", err, skip(edges))]
    pub fn from_edges<'a>(
        vertex_count: usize,
        edges: impl IntoIterator<Item = &'a Edge>,
    ) -> Result<Self> {
        if vertex_count == 0 {
            return Err(MstError::EmptyGraph);
        }

        let mut matrix = Self {
            vertex_count,
            weights: empty_cells(vertex_count)?,
        };
        let mut accepted = 0_usize;
        for edge in edges {
            edge.validate(vertex_count)?;
            if edge.source == edge.target {
                continue;
            }
            matrix.keep_cheapest(edge.source, edge.target, edge.weight);
            accepted += 1;
        }

        debug!(vertex_count, accepted, "adjacency matrix built");
        Ok(matrix)
    }

    fn keep_cheapest(&mut self, left: usize, right: usize, weight: f64) {
        let cheaper = self.weight(left, right).is_none_or(|current| weight < current);
        if cheaper {
            for index in [self.index(left, right), self.index(right, left)] {
                self.weights[index] = Some(weight);
            }
        }
    }

    const fn index(&self, row: usize, column: usize) -> usize {
        row * self.vertex_count + column
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the weight of the edge between `left` and `right`, or `None`
    /// when the pair is not connected or either vertex is out of range.
    #[must_use]
    pub fn weight(&self, left: usize, right: usize) -> Option<f64> {
        if left >= self.vertex_count || right >= self.vertex_count {
            return None;
        }
        self.weights.get(self.index(left, right)).copied().flatten()
    }

    /// Iterates the neighbours of `vertex` in ascending order with their
    /// edge weights.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.vertex_count).filter_map(move |other| Some((other, self.weight(vertex, other)?)))
    }

    /// Returns the number of distinct undirected edges retained.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        (0..self.vertex_count)
            .map(|vertex| self.neighbours(vertex).filter(|&(other, _)| other > vertex).count())
            .sum()
    }
}

/// Allocates `vertex_count²` empty cells without aborting on overflow or
/// allocation failure.
fn empty_cells(vertex_count: usize) -> Result<Vec<Option<f64>>> {
    let too_large = || MstError::GraphTooLarge {
        node_count: vertex_count,
    };
    let cells = vertex_count.checked_mul(vertex_count).ok_or_else(too_large)?;
    let mut weights = Vec::new();
    weights.try_reserve_exact(cells).map_err(|_| too_large())?;
    weights.resize(cells, None);
    Ok(weights)
}
