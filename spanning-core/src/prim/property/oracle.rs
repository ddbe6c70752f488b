//! Sequential Kruskal oracle for Prim property verification.
//!
//! Kruskal's minimum spanning forest restricted to the start vertex's
//! component is a minimum spanning tree of that component, which is exactly
//! what Prim grows. Only the total weight and size are compared; with tied
//! weights the two algorithms may legitimately pick different edges.

use crate::Edge;

/// Minimum spanning tree of the component containing the start vertex.
#[derive(Clone, Debug)]
pub(super) struct OracleTree {
    /// Sum of the tree edge weights.
    pub total_weight: f64,
    /// Number of vertices in the start vertex's component.
    pub component_size: usize,
}

/// Runs Kruskal over `edges` and keeps the component holding `start`.
pub(super) fn kruskal_component(node_count: usize, edges: &[Edge], start: usize) -> OracleTree {
    let mut sorted: Vec<&Edge> = edges
        .iter()
        .filter(|edge| edge.source() != edge.target())
        .collect();
    sorted.sort_by(|left, right| left.weight().total_cmp(&right.weight()));

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut accepted = Vec::new();
    for edge in sorted {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left != right {
            parent[right] = left;
            accepted.push(*edge);
        }
    }

    let root = find_root(&mut parent, start);
    let total_weight: f64 = accepted
        .iter()
        .filter(|edge| find_root(&mut parent, edge.source()) == root)
        .map(Edge::weight)
        .sum();
    let component_size = (0..node_count)
        .filter(|&vertex| find_root(&mut parent, vertex) == root)
        .count();

    OracleTree {
        total_weight,
        component_size,
    }
}

/// Path-halving find.
fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn oracle_matches_hand_computed_tree() {
        let edges = [
            Edge::new(0, 1, 4.0),
            Edge::new(0, 2, 1.0),
            Edge::new(2, 3, 2.0),
            Edge::new(1, 3, 6.0),
        ];
        let tree = kruskal_component(4, &edges, 3);
        assert_eq!(tree.total_weight, 7.0);
        assert_eq!(tree.component_size, 4);
    }

    #[test]
    fn oracle_ignores_other_components() {
        let edges = [Edge::new(0, 1, 2.0), Edge::new(2, 3, 9.0)];
        let tree = kruskal_component(5, &edges, 1);
        assert_eq!(tree.total_weight, 2.0);
        assert_eq!(tree.component_size, 2);
    }
}
