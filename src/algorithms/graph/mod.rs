//! Graph traversals over a fixed, directed, weighted 7-node fixture
//!
//! The fixture is static data: every graph algorithm starts at [`START`] and
//! ignores the input it is handed. Step `indices` hold node ids, and node
//! transitions are carried by [`NodeMark`](crate::step::NodeMark):
//!
//! - `Visited` exactly once per reachable node, when it is first discovered
//! - `Active` when the traversal returns to (or re-processes) a node
//! - `Finished` once all of the node's outgoing edges were handled

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

use rustc_hash::FxHashMap;
use serde::Serialize;

/// A fixture node with its canvas position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Node {
    pub id: usize,
    pub x: u16,
    pub y: u16,
    pub label: &'static str,
}

/// A directed, weighted fixture edge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
    pub weight: u64,
}

/// Outgoing edge as seen from its source node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbor {
    pub node: usize,
    pub weight: u64,
}

pub type Adjacency = FxHashMap<usize, Vec<Neighbor>>;

/// Every traversal starts here
pub const START: usize = 0;

pub const NODES: [Node; 7] = [
    Node { id: 0, x: 250, y: 50, label: "0" },
    Node { id: 1, x: 150, y: 150, label: "1" },
    Node { id: 2, x: 350, y: 150, label: "2" },
    Node { id: 3, x: 50, y: 250, label: "3" },
    Node { id: 4, x: 200, y: 250, label: "4" },
    Node { id: 5, x: 300, y: 250, label: "5" },
    Node { id: 6, x: 450, y: 250, label: "6" },
];

pub const EDGES: [Edge; 7] = [
    Edge { source: 0, target: 1, weight: 4 },
    Edge { source: 0, target: 2, weight: 2 },
    Edge { source: 1, target: 3, weight: 5 },
    Edge { source: 1, target: 4, weight: 1 },
    Edge { source: 2, target: 5, weight: 3 },
    Edge { source: 2, target: 6, weight: 8 },
    // cross edge
    Edge { source: 4, target: 5, weight: 2 },
];

/// Adjacency list keyed by source node, neighbors in edge-list order.
/// Every node has an entry, possibly empty.
pub fn adjacency() -> Adjacency {
    let mut adj: Adjacency = NODES.iter().map(|n| (n.id, Vec::new())).collect();
    for edge in &EDGES {
        adj.entry(edge.source).or_default().push(Neighbor {
            node: edge.target,
            weight: edge.weight,
        });
    }
    adj
}

/// Neighbors of `node`, empty for unknown ids
pub(crate) fn neighbors(adj: &Adjacency, node: usize) -> &[Neighbor] {
    adj.get(&node).map(Vec::as_slice).unwrap_or(&[])
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::step::{NodeMark, Step};
    use rustc_hash::FxHashMap;

    /// How many `Visited` marks each node received
    pub fn visited_counts(steps: &[Step]) -> FxHashMap<usize, usize> {
        let mut counts = FxHashMap::default();
        for step in steps.iter().filter(|s| s.mark == Some(NodeMark::Visited)) {
            for &node in &step.indices {
                *counts.entry(node).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjacency_is_directed() {
        let adj = adjacency();
        assert_eq!(adj.len(), NODES.len());
        let from_zero: Vec<usize> = neighbors(&adj, 0).iter().map(|n| n.node).collect();
        assert_eq!(from_zero, vec![1, 2]);
        assert!(neighbors(&adj, 5).is_empty());
        assert!(neighbors(&adj, 99).is_empty());
    }
}
