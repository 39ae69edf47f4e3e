use super::{adjacency, neighbors, START};
use crate::algorithms::{
    Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::{NodeMark, Step};
use rustc_hash::FxHashSet;
use std::collections::VecDeque;

pub static BFS: Algorithm = Algorithm {
    name: "Breadth-First Search",
    category: Category::Graph,
    input: InputKind::Graph,
    description: "Explores all neighbors of a node before moving on to the next level.",
    complexity: Complexity {
        time: "O(V + E)",
        space: "O(V)",
    },
    code: r#"fn bfs(graph: &Graph, start: usize) {
    let mut queue = VecDeque::from([start]);
    let mut visited = FxHashSet::default();
    visited.insert(start);

    while let Some(node) = queue.pop_front() {
        // process node
        for edge in &graph[node] {
            if visited.insert(edge.node) {
                queue.push_back(edge.node);
            }
        }
    }
}"#,
    run,
};

fn run(_input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let adj = adjacency();
    let mut steps = Vec::new();
    let mut queue = VecDeque::from([START]);
    let mut visited = FxHashSet::default();
    visited.insert(START);

    steps.push(
        Step::highlight(format!("Starting BFS from node {}", START))
            .with_indices([START])
            .with_line(2)
            .with_mark(NodeMark::Visited)
            .with_var("queue", &queue),
    );

    while let Some(node) = queue.pop_front() {
        steps.push(
            Step::highlight(format!("Processing node {}", node))
                .with_indices([node])
                .with_line(6)
                .with_mark(NodeMark::Active)
                .with_var("queue", &queue),
        );

        for edge in neighbors(&adj, node) {
            steps.push(
                Step::comparison(format!("Checking neighbor {}", edge.node))
                    .with_indices([edge.node])
                    .with_line(9)
                    .with_var("queue", &queue),
            );
            if visited.insert(edge.node) {
                queue.push_back(edge.node);
                steps.push(
                    Step::highlight(format!("Visited {} and added to queue", edge.node))
                        .with_indices([edge.node])
                        .with_line(10)
                        .with_mark(NodeMark::Visited)
                        .with_var("queue", &queue),
                );
            }
        }

        steps.push(
            Step::highlight(format!("Finished processing {}", node))
                .with_indices([node])
                .with_line(7)
                .with_mark(NodeMark::Finished)
                .with_var("queue", &queue),
        );
    }

    Ok(AlgorithmResult::new(steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::graph::test_support::visited_counts;
    use crate::algorithms::graph::NODES;

    #[test]
    fn test_visits_each_node_once() {
        let result = BFS.run(&AlgorithmInput::Graph).unwrap();
        let counts = visited_counts(&result.steps);
        assert_eq!(counts.len(), NODES.len());
        assert!(counts.values().all(|&c| c == 1));
    }

    #[test]
    fn test_level_order() {
        let result = BFS.run(&AlgorithmInput::Graph).unwrap();
        let order: Vec<usize> = result
            .steps
            .iter()
            .filter(|s| s.mark == Some(NodeMark::Active))
            .map(|s| s.indices[0])
            .collect();
        assert_eq!(order, vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_every_step_has_queue() {
        let result = BFS.run(&AlgorithmInput::Graph).unwrap();
        assert!(result.steps.iter().all(|s| s.var("queue").is_some()));
        let last = result.steps.last().unwrap();
        assert_eq!(last.var("queue").unwrap(), &serde_json::json!([]));
    }

    #[test]
    fn test_input_is_ignored() {
        let a = BFS.run(&AlgorithmInput::Graph).unwrap();
        let b = BFS.run(&AlgorithmInput::Array(vec![1, 2, 3])).unwrap();
        assert_eq!(a, b);
    }
}
