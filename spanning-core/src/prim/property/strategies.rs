//! Graph generators for Prim property tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so a failing proptest
//! case can be replayed from its `(distribution, seed)` pair.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{PrimFixture, WeightDistribution};

/// Smallest generated graph.
const MIN_NODES: usize = 1;
/// Largest generated graph; the builder is quadratic per step.
const MAX_NODES: usize = 24;

/// Samples a distribution and a seed, then generates the fixture.
pub(super) fn prim_fixture_strategy() -> impl Strategy<Value = PrimFixture> {
    let distribution = proptest::sample::select(WeightDistribution::ALL.to_vec());
    (distribution, any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> PrimFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let edges = match distribution {
        WeightDistribution::Unique => random_pairs(rng, node_count, 0.3, |r| r.gen_range(0.1..100.0)),
        WeightDistribution::ManyIdentical => {
            random_pairs(rng, node_count, 0.5, |r| f64::from(r.gen_range(1_u8..=3)))
        }
        WeightDistribution::Negative => {
            random_pairs(rng, node_count, 0.3, |r| f64::from(r.gen_range(-20_i8..=20)))
        }
        WeightDistribution::Disconnected => disconnected(rng, node_count),
        WeightDistribution::Parallel => parallel(rng, node_count),
    };
    let start = rng.gen_range(0..node_count);
    PrimFixture {
        node_count,
        edges,
        start,
        distribution,
    }
}

/// Adds each unordered pair with probability `density`, orienting it
/// randomly.
fn random_pairs(
    rng: &mut SmallRng,
    node_count: usize,
    density: f64,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            if rng.gen_bool(density) {
                let value = weight(rng);
                edges.push(oriented(rng, left, right, value));
            }
        }
    }
    edges
}

/// Splits the vertices into contiguous blocks and only connects vertices
/// within the same block.
fn disconnected(rng: &mut SmallRng, node_count: usize) -> Vec<Edge> {
    let blocks = rng.gen_range(2..=4_usize);
    let block_of = |vertex: usize| vertex * blocks / node_count;
    let mut edges = Vec::new();
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            if block_of(left) == block_of(right) && rng.gen_bool(0.6) {
                let value = rng.gen_range(0.5..50.0);
                edges.push(oriented(rng, left, right, value));
            }
        }
    }
    edges
}

/// Emits every sampled pair between two and four times with independent
/// weights, in random order.
fn parallel(rng: &mut SmallRng, node_count: usize) -> Vec<Edge> {
    let mut edges = Vec::new();
    for left in 0..node_count {
        for right in (left + 1)..node_count {
            if rng.gen_bool(0.4) {
                for _ in 0..rng.gen_range(2..=4) {
                    let value = f64::from(rng.gen_range(1_u8..=9));
                    edges.push(oriented(rng, left, right, value));
                }
            }
        }
    }
    for index in (1..edges.len()).rev() {
        let other = rng.gen_range(0..=index);
        edges.swap(index, other);
    }
    edges
}

fn oriented(rng: &mut SmallRng, left: usize, right: usize, weight: f64) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(left, right, weight)
    } else {
        Edge::new(right, left, weight)
    }
}
