//! Property runners shared by the proptest and rstest entry points.
//!
//! Each runner takes a generated fixture, builds the tree and checks one
//! family of invariants with `prop_assert!`, so it can be driven both from
//! `proptest!` and from fixed-seed rstest cases.

use proptest::prelude::*;
use proptest::test_runner::TestCaseResult;

use crate::{AdjacencyMatrix, Outcome, SpanningTree, build};

use super::oracle::kruskal_component;
use super::types::PrimFixture;

/// Relative tolerance for comparing sums accumulated in different orders.
const WEIGHT_TOLERANCE: f64 = 1e-9;

fn build_fixture(fixture: &PrimFixture) -> Result<SpanningTree, TestCaseError> {
    build(fixture.node_count, &fixture.edges, fixture.start)
        .map_err(|err| TestCaseError::fail(format!("build failed for {fixture:?}: {err}")))
}

fn matrix(fixture: &PrimFixture) -> Result<AdjacencyMatrix, TestCaseError> {
    AdjacencyMatrix::from_edges(fixture.node_count, &fixture.edges)
        .map_err(|err| TestCaseError::fail(format!("matrix failed for {fixture:?}: {err}")))
}

fn close(left: f64, right: f64) -> bool {
    (left - right).abs() <= WEIGHT_TOLERANCE * left.abs().max(right.abs()).max(1.0)
}

/// The total weight matches Kruskal on the start vertex's component, and the
/// build reaches exactly that component.
pub(super) fn run_oracle_equivalence_property(fixture: &PrimFixture) -> TestCaseResult {
    let tree = build_fixture(fixture)?;
    let oracle = kruskal_component(fixture.node_count, &fixture.edges, fixture.start);

    prop_assert!(
        close(tree.total_weight(), oracle.total_weight),
        "prim total {} differs from kruskal total {} ({:?})",
        tree.total_weight(),
        oracle.total_weight,
        fixture.distribution,
    );
    prop_assert_eq!(tree.reached(), oracle.component_size);
    prop_assert_eq!(tree.is_spanning(), oracle.component_size == fixture.node_count);
    Ok(())
}

/// At most one step per vertex, each vertex selected once, parents point at
/// vertices selected earlier, and the start vertex has no parent.
pub(super) fn run_structural_property(fixture: &PrimFixture) -> TestCaseResult {
    let tree = build_fixture(fixture)?;
    let steps = tree.steps();
    prop_assert!(steps.len() <= fixture.node_count);
    prop_assert_eq!(steps.first().map(|step| step.vertex()), Some(fixture.start));
    prop_assert_eq!(tree.parent(fixture.start), None);

    let mut order = vec![None; fixture.node_count];
    for (position, step) in steps.iter().enumerate() {
        prop_assert_eq!(step.index(), position + 1);
        prop_assert!(order[step.vertex()].is_none(), "vertex selected twice");
        order[step.vertex()] = Some(position);
    }

    for (vertex, parent) in tree.parents().iter().enumerate() {
        match (parent, order[vertex]) {
            (Some(parent), Some(position)) => {
                let parent_position = order[*parent];
                prop_assert!(parent_position.is_some_and(|earlier| earlier < position));
            }
            (None, Some(_)) => prop_assert_eq!(vertex, fixture.start),
            (Some(_), None) => prop_assert!(false, "unreached vertex {} has a parent", vertex),
            (None, None) => {}
        }
    }

    match tree.outcome() {
        Outcome::Completed => prop_assert_eq!(steps.len(), fixture.node_count),
        Outcome::Disconnected { reached } => {
            prop_assert_eq!(reached, steps.len());
            prop_assert!(reached < fixture.node_count);
        }
    }
    Ok(())
}

/// Keys never increase before selection and never change afterwards.
pub(super) fn run_frontier_monotonic_property(fixture: &PrimFixture) -> TestCaseResult {
    let tree = build_fixture(fixture)?;
    let mut selected = vec![false; fixture.node_count];
    let mut previous: Option<&[Option<f64>]> = None;

    for step in tree.steps() {
        if let Some(before) = previous {
            for (vertex, (old, new)) in before.iter().zip(step.keys()).enumerate() {
                match (old, new) {
                    (Some(old), Some(new)) if selected[vertex] => prop_assert_eq!(old, new),
                    (Some(old), Some(new)) => prop_assert!(new <= old),
                    (Some(_), None) => prop_assert!(false, "key of {} became infinite", vertex),
                    (None, _) => {}
                }
            }
        }
        selected[step.vertex()] = true;
        previous = Some(step.keys());
    }
    Ok(())
}

/// Each step selects a minimum key, breaking ties on the lowest index, and
/// its cost is that key.
pub(super) fn run_selection_property(fixture: &PrimFixture) -> TestCaseResult {
    let tree = build_fixture(fixture)?;
    let mut selected = vec![false; fixture.node_count];
    let mut keys: Vec<Option<f64>> = vec![None; fixture.node_count];
    if let Some(slot) = keys.get_mut(fixture.start) {
        *slot = Some(0.0);
    }

    for step in tree.steps() {
        let chosen = step.vertex();
        prop_assert_eq!(keys[chosen], Some(step.cost()));
        for (vertex, key) in keys.iter().enumerate() {
            let Some(key) = key else { continue };
            if selected[vertex] || vertex == chosen {
                continue;
            }
            prop_assert!(*key >= step.cost());
            if *key == step.cost() {
                prop_assert!(vertex > chosen, "tie at {} lost to {}", vertex, chosen);
            }
        }
        selected[chosen] = true;
        keys = step.keys().to_vec();
    }
    Ok(())
}

/// Snapshots and the final total agree with an independent summation over
/// the adjacency matrix.
pub(super) fn run_weight_bookkeeping_property(fixture: &PrimFixture) -> TestCaseResult {
    let tree = build_fixture(fixture)?;
    let graph = matrix(fixture)?;

    let mut expected = 0.0;
    for (vertex, parent) in tree.parents().iter().enumerate() {
        if let Some(parent) = parent {
            let weight = graph.weight(*parent, vertex);
            prop_assert!(weight.is_some(), "parent link {}-{} is not an edge", parent, vertex);
            expected += weight.unwrap_or_default();
        }
    }
    prop_assert!(close(tree.total_weight(), expected));

    for step in tree.steps() {
        let snapshot: f64 = step.tree().iter().map(|edge| edge.weight()).sum();
        prop_assert!(close(step.running_total(), snapshot));
        for candidate in step.candidates() {
            prop_assert_eq!(graph.weight(candidate.from(), candidate.to()), Some(candidate.weight()));
        }
    }
    if let Some(last) = tree.steps().last() {
        prop_assert!(close(last.running_total(), tree.total_weight()));
    }
    Ok(())
}

/// Two builds on the same input are indistinguishable.
pub(super) fn run_idempotence_property(fixture: &PrimFixture) -> TestCaseResult {
    let first = build_fixture(fixture)?;
    let second = build_fixture(fixture)?;
    prop_assert_eq!(first, second);
    Ok(())
}
