//! Benchmark support crate for spanning.
//!
//! Generates seeded random graphs and the parameter types Criterion uses to
//! label each run.

use std::fmt;

use rand::{Rng, SeedableRng, rngs::SmallRng};
use spanning_core::Edge;
use thiserror::Error;

/// Errors raised while preparing benchmark inputs.
#[derive(Debug, Error, PartialEq)]
pub enum BenchSetupError {
    /// A graph needs at least one vertex.
    #[error("vertex count must be positive")]
    ZeroVertices,
    /// Density is a probability.
    #[error("density {density} is outside (0, 1]")]
    InvalidDensity {
        /// The rejected density.
        density: f64,
    },
    /// The builder rejected the generated graph.
    #[error(transparent)]
    Core(#[from] spanning_core::MstError),
}

/// Shape of a generated graph.
#[derive(Clone, Copy, Debug)]
pub struct GraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Probability that any vertex pair outside the backbone is joined.
    pub density: f64,
    /// RNG seed.
    pub seed: u64,
}

/// Parameters for a builder benchmark run.
#[derive(Clone, Debug)]
pub struct PrimBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Edge density used to generate it.
    pub density: f64,
}

impl fmt::Display for PrimBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},p={}", self.vertex_count, self.density)
    }
}

/// Generates a connected graph: a random spanning path plus each remaining
/// pair with probability `density`. Weights are drawn from `1.0..100.0`.
///
/// # Errors
/// Returns [`BenchSetupError`] for an empty graph or a density outside
/// `(0, 1]`.
pub fn generate_graph(config: &GraphConfig) -> Result<Vec<Edge>, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroVertices);
    }
    if !(config.density > 0.0 && config.density <= 1.0) {
        return Err(BenchSetupError::InvalidDensity {
            density: config.density,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut edges: Vec<Edge> = (1..config.vertex_count)
        .map(|vertex| {
            let earlier = rng.gen_range(0..vertex);
            Edge::new(earlier, vertex, rng.gen_range(1.0..100.0))
        })
        .collect();
    for left in 0..config.vertex_count {
        for right in (left + 1)..config.vertex_count {
            if rng.gen_bool(config.density) {
                edges.push(Edge::new(left, right, rng.gen_range(1.0..100.0)));
            }
        }
    }
    Ok(edges)
}
