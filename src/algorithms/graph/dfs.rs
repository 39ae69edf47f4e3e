use super::{adjacency, neighbors, Adjacency, START};
use crate::algorithms::{
    Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::{NodeMark, Step};
use rustc_hash::FxHashSet;

pub static DFS: Algorithm = Algorithm {
    name: "Depth-First Search",
    category: Category::Graph,
    input: InputKind::Graph,
    description: "Explores as far as possible along each branch before backtracking.",
    complexity: Complexity {
        time: "O(V + E)",
        space: "O(V)",
    },
    code: r#"fn dfs(graph: &Graph, node: usize, visited: &mut FxHashSet<usize>) {
    visited.insert(node);
    // process node
    for edge in &graph[node] {
        if !visited.contains(&edge.node) {
            dfs(graph, edge.node, visited);
        }
    }
}"#,
    run,
};

/// Recursion state threaded through the traversal
struct Walk<'a> {
    adj: &'a Adjacency,
    visited: FxHashSet<usize>,
    // mirrors the call stack for rendering only
    stack: Vec<usize>,
    steps: Vec<Step>,
}

impl Walk<'_> {
    fn traverse(&mut self, node: usize) {
        self.visited.insert(node);
        self.stack.push(node);
        self.steps.push(
            Step::highlight(format!("Visiting node {}", node))
                .with_indices([node])
                .with_line(2)
                .with_mark(NodeMark::Visited)
                .with_var("stack", &self.stack),
        );

        for edge in neighbors(self.adj, node) {
            self.steps.push(
                Step::comparison(format!("Checking neighbor {}", edge.node))
                    .with_indices([edge.node])
                    .with_line(5)
                    .with_var("stack", &self.stack),
            );
            if !self.visited.contains(&edge.node) {
                self.traverse(edge.node);
                self.steps.push(
                    Step::highlight(format!("Backtracked to node {}", node))
                        .with_indices([node])
                        .with_line(6)
                        .with_mark(NodeMark::Active)
                        .with_var("stack", &self.stack),
                );
            }
        }

        self.stack.pop();
        self.steps.push(
            Step::highlight(format!("Finished processing node {}", node))
                .with_indices([node])
                .with_line(9)
                .with_mark(NodeMark::Finished)
                .with_var("stack", &self.stack),
        );
    }
}

fn run(_input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let adj = adjacency();
    let mut walk = Walk {
        adj: &adj,
        visited: FxHashSet::default(),
        stack: Vec::new(),
        steps: Vec::new(),
    };
    walk.traverse(START);
    Ok(AlgorithmResult::new(walk.steps))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::graph::test_support::visited_counts;
    use crate::algorithms::graph::NODES;

    #[test]
    fn test_visits_each_node_once() {
        let result = DFS.run(&AlgorithmInput::Graph).unwrap();
        let counts = visited_counts(&result.steps);
        assert_eq!(counts.len(), NODES.len());
        assert!(counts.values().all(|&c| c == 1));
    }

    #[test]
    fn test_preorder() {
        let result = DFS.run(&AlgorithmInput::Graph).unwrap();
        let order: Vec<usize> = result
            .steps
            .iter()
            .filter(|s| s.mark == Some(NodeMark::Visited))
            .map(|s| s.indices[0])
            .collect();
        assert_eq!(order, vec![0, 1, 3, 4, 5, 2, 6]);
    }

    #[test]
    fn test_stack_mirrors_recursion() {
        let result = DFS.run(&AlgorithmInput::Graph).unwrap();
        let visit_five = result
            .steps
            .iter()
            .find(|s| s.description == "Visiting node 5")
            .unwrap();
        assert_eq!(visit_five.var("stack").unwrap(), &serde_json::json!([0, 1, 4, 5]));
        let last = result.steps.last().unwrap();
        assert_eq!(last.var("stack").unwrap(), &serde_json::json!([]));
        assert_eq!(last.mark, Some(NodeMark::Finished));
    }

    #[test]
    fn test_backtrack_after_each_child() {
        let result = DFS.run(&AlgorithmInput::Graph).unwrap();
        let backtracks = result
            .steps
            .iter()
            .filter(|s| s.description.starts_with("Backtracked to node"))
            .count();
        // one per tree edge
        assert_eq!(backtracks, NODES.len() - 1);
    }
}
