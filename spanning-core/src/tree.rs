//! The result of a Prim build: parent pointers, total weight and trace.

use crate::{Step, TreeEdge};

/// How a build terminated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    /// Every vertex joined the tree.
    Completed,
    /// The component reachable from the start vertex was exhausted before
    /// every vertex joined the tree.
    Disconnected {
        /// Number of vertices that joined the tree.
        reached: usize,
    },
}

/// A minimum spanning tree rooted at the start vertex, or the tree of the
/// component reachable from it when the graph is not connected.
///
/// # Examples
/// ```
/// use spanning_core::{Edge, Outcome, build};
///
/// let tree = build(4, &[Edge::new(0, 1, 1.0), Edge::new(2, 3, 1.0)], 0)?;
/// assert_eq!(tree.outcome(), Outcome::Disconnected { reached: 2 });
/// assert_eq!(tree.parent(1), Some(0));
/// assert_eq!(tree.parent(2), None);
/// # Ok::<(), spanning_core::MstError>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    start: usize,
    parents: Vec<Option<usize>>,
    edges: Vec<TreeEdge>,
    total_weight: f64,
    steps: Vec<Step>,
    outcome: Outcome,
}

impl SpanningTree {
    pub(crate) fn new(
        start: usize,
        parents: Vec<Option<usize>>,
        edges: Vec<TreeEdge>,
        steps: Vec<Step>,
        outcome: Outcome,
    ) -> Self {
        let total_weight = edges.iter().map(TreeEdge::weight).sum();
        Self {
            start,
            parents,
            edges,
            total_weight,
            steps,
            outcome,
        }
    }

    /// Returns the vertex the tree was grown from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn start(&self) -> usize { self.start }

    /// Returns the number of vertices in the input graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.parents.len()
    }

    /// Returns the parent of every vertex; `None` for the start vertex and
    /// for vertices the build never reached.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[Option<usize>] { &self.parents }

    /// Returns the parent of `vertex`, or `None` when it has none or is out
    /// of range.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied().flatten()
    }

    /// Returns the tree edges `(parent[v], v, weight)` ordered by `v`.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge] { &self.edges }

    /// Returns the sum of the tree edge weights.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the step trace in execution order.
    #[must_use]
    #[rustfmt::skip]
    pub fn steps(&self) -> &[Step] { &self.steps }

    /// Returns how the build terminated.
    #[must_use]
    #[rustfmt::skip]
    pub const fn outcome(&self) -> Outcome { self.outcome }

    /// Returns the number of vertices that joined the tree.
    #[must_use]
    pub fn reached(&self) -> usize {
        self.steps.len()
    }

    /// Returns `true` when every vertex joined the tree.
    #[must_use]
    pub fn is_spanning(&self) -> bool {
        self.outcome == Outcome::Completed
    }
}
