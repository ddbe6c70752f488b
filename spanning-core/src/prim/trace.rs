//! Per-step records produced while the tree grows.

/// An edge crossing the tree boundary: `from` is already in the tree, `to`
/// is not.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateEdge {
    pub(crate) from: usize,
    pub(crate) to: usize,
    pub(crate) weight: f64,
}

impl CandidateEdge {
    /// Returns the endpoint inside the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn from(&self) -> usize { self.from }

    /// Returns the endpoint outside the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn to(&self) -> usize { self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// A parent link `parent -> child` in the (partial) spanning tree.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TreeEdge {
    pub(crate) parent: usize,
    pub(crate) child: usize,
    pub(crate) weight: f64,
}

impl TreeEdge {
    /// Creates a tree edge.
    #[must_use]
    pub const fn new(parent: usize, child: usize, weight: f64) -> Self {
        Self {
            parent,
            child,
            weight,
        }
    }

    /// Returns the vertex the child attaches to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn parent(&self) -> usize { self.parent }

    /// Returns the attached vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn child(&self) -> usize { self.child }

    /// Returns the weight of the attaching edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// Everything observable about one iteration of Prim's algorithm.
///
/// `candidates` is captured after the chosen vertex joins the tree and
/// before relaxation; `tree`, `running_total` and `keys` after relaxation.
/// Candidates are listed by tree vertex ascending, then by outside vertex
/// ascending. Tree edges are listed by child ascending.
#[derive(Clone, Debug, PartialEq)]
pub struct Step {
    pub(crate) index: usize,
    pub(crate) vertex: usize,
    pub(crate) cost: f64,
    pub(crate) candidates: Vec<CandidateEdge>,
    pub(crate) tree: Vec<TreeEdge>,
    pub(crate) running_total: f64,
    pub(crate) keys: Vec<Option<f64>>,
}

impl Step {
    /// Returns the 1-based step number.
    #[must_use]
    #[rustfmt::skip]
    pub const fn index(&self) -> usize { self.index }

    /// Returns the vertex added to the tree in this step.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> usize { self.vertex }

    /// Returns the key of the vertex when it was selected: the weight of the
    /// edge attaching it to the tree, or `0` for the start vertex.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> f64 { self.cost }

    /// Returns the edges crossing the tree boundary at this step.
    #[must_use]
    #[rustfmt::skip]
    pub fn candidates(&self) -> &[CandidateEdge] { &self.candidates }

    /// Returns every defined parent link after this step.
    #[must_use]
    #[rustfmt::skip]
    pub fn tree(&self) -> &[TreeEdge] { &self.tree }

    /// Returns the sum of the weights in [`Step::tree`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn running_total(&self) -> f64 { self.running_total }

    /// Returns each vertex's key after this step; `None` stands for an
    /// infinite key.
    #[must_use]
    #[rustfmt::skip]
    pub fn keys(&self) -> &[Option<f64>] { &self.keys }
}
