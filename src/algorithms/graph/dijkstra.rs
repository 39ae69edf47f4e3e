use super::{adjacency, neighbors, NODES, START};
use crate::algorithms::{
    Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::{NodeMark, Step};
use rustc_hash::FxHashSet;
use std::collections::BTreeMap;

pub static DIJKSTRA: Algorithm = Algorithm {
    name: "Dijkstra's Algorithm",
    category: Category::Graph,
    input: InputKind::Graph,
    description: "Finds the shortest path from a source node to every other node in a \
                  graph with non-negative weights.",
    complexity: Complexity {
        time: "O((V + E) log V)",
        space: "O(V)",
    },
    code: r#"fn dijkstra(graph: &Graph, start: usize) -> Vec<Option<u64>> {
    let mut dist = vec![None; graph.len()];
    let mut frontier = vec![(start, 0)];
    let mut done = FxHashSet::default();
    dist[start] = Some(0);

    while !frontier.is_empty() {
        frontier.sort_by_key(|&(_, d)| d);
        let (node, d) = frontier.remove(0);
        if !done.insert(node) {
            continue;
        }
        for edge in &graph[node] {
            let candidate = d + edge.weight;
            if dist[edge.node].map_or(true, |cur| candidate < cur) {
                dist[edge.node] = Some(candidate);
                frontier.push((edge.node, candidate));
            }
        }
    }
    dist
}"#,
    run,
};

/// Frontier entry of the simulated priority queue
#[derive(Debug, Clone, Copy)]
struct Entry {
    node: usize,
    dist: u64,
}

/// Distances keyed by node id; `None` is infinity
type Distances = BTreeMap<usize, Option<u64>>;

fn queue_nodes(frontier: &[Entry]) -> Vec<usize> {
    frontier.iter().map(|e| e.node).collect()
}

fn run(_input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let adj = adjacency();
    let mut steps = Vec::new();
    let mut distances: Distances = NODES.iter().map(|n| (n.id, None)).collect();
    distances.insert(START, Some(0));
    let mut frontier = vec![Entry { node: START, dist: 0 }];
    let mut done = FxHashSet::default();

    steps.push(
        Step::highlight(format!(
            "Initialize distances. Start node {} is 0, others infinity.",
            START
        ))
        .with_indices([START])
        .with_line(5)
        .with_var("distances", &distances)
        .with_var("queue", queue_nodes(&frontier)),
    );

    while !frontier.is_empty() {
        // Stable re-sort keeps equal distances in insertion order
        frontier.sort_by_key(|e| e.dist);
        let Entry { node, dist } = frontier.remove(0);

        if !done.insert(node) {
            steps.push(
                Step::variable(format!("Skipping stale entry for node {} ({})", node, dist))
                    .with_indices([node])
                    .with_line(11)
                    .with_var("distances", &distances)
                    .with_var("queue", queue_nodes(&frontier)),
            );
            continue;
        }

        steps.push(
            Step::highlight(format!("Processing node {} with distance {}", node, dist))
                .with_indices([node])
                .with_line(9)
                .with_mark(NodeMark::Visited)
                .with_var("distances", &distances)
                .with_var("queue", queue_nodes(&frontier)),
        );

        for edge in neighbors(&adj, node) {
            steps.push(
                Step::comparison(format!(
                    "Checking neighbor {} (weight {})",
                    edge.node, edge.weight
                ))
                .with_indices([edge.node])
                .with_line(14)
                .with_var("distances", &distances)
                .with_var("queue", queue_nodes(&frontier)),
            );

            let candidate = dist + edge.weight;
            let current = distances.get(&edge.node).copied().flatten();
            if current.map_or(true, |cur| candidate < cur) {
                distances.insert(edge.node, Some(candidate));
                frontier.push(Entry {
                    node: edge.node,
                    dist: candidate,
                });
                steps.push(
                    Step::overwrite(format!(
                        "Updated distance for {} to {}",
                        edge.node, candidate
                    ))
                    .with_indices([edge.node])
                    .with_line(16)
                    .with_var("distances", &distances)
                    .with_var("queue", queue_nodes(&frontier)),
                );
            }
        }

        steps.push(
            Step::highlight(format!("Settled node {}", node))
                .with_indices([node])
                .with_line(19)
                .with_mark(NodeMark::Finished)
                .with_var("distances", &distances)
                .with_var("queue", queue_nodes(&frontier)),
        );
    }

    Ok(AlgorithmResult::new(steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::graph::test_support::visited_counts;
    use crate::step::StepKind;

    fn distance_of(step: &Step, node: usize) -> Option<u64> {
        step.var("distances")
            .and_then(|d| d.get(node.to_string()))
            .and_then(|v| v.as_u64())
    }

    #[test]
    fn test_final_distances() {
        let result = DIJKSTRA.run(&AlgorithmInput::Graph).unwrap();
        let last = result.steps.last().unwrap();
        let expected = [0, 4, 2, 9, 5, 5, 10];
        for (node, &want) in expected.iter().enumerate() {
            assert_eq!(distance_of(last, node), Some(want), "node {}", node);
        }
    }

    #[test]
    fn test_relaxed_distances_never_increase() {
        let result = DIJKSTRA.run(&AlgorithmInput::Graph).unwrap();
        for node in 0..NODES.len() {
            let mut best: Option<u64> = None;
            for step in &result.steps {
                if let Some(d) = distance_of(step, node) {
                    if let Some(prev) = best {
                        assert!(d <= prev, "node {} went from {} to {}", node, prev, d);
                    }
                    best = Some(d);
                }
            }
        }
    }

    #[test]
    fn test_relaxation_of_node_five() {
        let result = DIJKSTRA.run(&AlgorithmInput::Graph).unwrap();
        let updates: Vec<&str> = result
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Overwrite && s.indices == [5])
            .map(|s| s.description.as_str())
            .collect();
        // 0 -> 2 -> 5 reaches 5 first; 0 -> 1 -> 4 -> 5 ties and never improves it
        assert_eq!(updates, vec!["Updated distance for 5 to 5"]);
    }

    #[test]
    fn test_settles_each_node_once() {
        let result = DIJKSTRA.run(&AlgorithmInput::Graph).unwrap();
        let counts = visited_counts(&result.steps);
        assert_eq!(counts.len(), NODES.len());
        assert!(counts.values().all(|&c| c == 1));
    }

    #[test]
    fn test_unreached_distance_serializes_as_null() {
        let result = DIJKSTRA.run(&AlgorithmInput::Graph).unwrap();
        let first = &result.steps[0];
        assert!(first.var("distances").unwrap()["6"].is_null());
    }
}
