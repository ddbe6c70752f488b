//! Fixture and weight distribution types for Prim property tests.

use crate::Edge;

/// How edge weights are assigned during graph generation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Continuous weights in `[0.1, 100.0)`, almost surely distinct.
    Unique,
    /// Small integer weights drawn from `1..=3`, stressing both tie rules.
    ManyIdentical,
    /// Integer weights in `-20..=20`.
    Negative,
    /// Two or more components with no edges between them.
    Disconnected,
    /// Every pair appears several times with different weights.
    Parallel,
}

impl WeightDistribution {
    pub(super) const ALL: [Self; 5] = [
        Self::Unique,
        Self::ManyIdentical,
        Self::Negative,
        Self::Disconnected,
        Self::Parallel,
    ];
}

/// A generated graph together with the start vertex to grow from.
#[derive(Clone, Debug)]
pub(super) struct PrimFixture {
    /// Number of vertices in the graph.
    pub node_count: usize,
    /// Generated edges, possibly with parallel duplicates.
    pub edges: Vec<Edge>,
    /// Vertex the build starts from.
    pub start: usize,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}
