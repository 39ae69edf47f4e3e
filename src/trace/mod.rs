//! Recorded traces and display-state reconstruction
//!
//! A [`Trace`] is one finished `run`: the steps, the input they were produced
//! from and the final array. The viewer never re-runs the algorithm to move
//! around; it asks the trace for the [`DisplayState`] at a position instead.
//!
//! Positions are `Option<usize>`: `None` is "before any step" and indices past
//! the end clamp to the last step.

use crate::algorithms::graph::NODES;
use crate::algorithms::{Algorithm, AlgorithmInput, Category};
use crate::errors::TraceError;
use crate::step::{apply_mutation, NodeMark, Step, StepKind, Variables};
use serde::Serialize;
use tracing::debug;

/// Render status of one graph node at a trace position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    Unvisited,
    Visited,
    Finished,
    /// Being processed by the current step
    Active,
    /// Examined as a neighbor by the current step
    Checking,
}

/// What a renderer needs to draw one trace position
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayState {
    /// Sorting and searching: the primary array at this position
    Array {
        values: Vec<i64>,
        variables: Option<Variables>,
    },
    /// Graph traversals: one status per fixture node
    Graph {
        nodes: Vec<NodeStatus>,
        variables: Option<Variables>,
    },
    /// DP and greedy: the current step's snapshot is the whole state
    Snapshot { variables: Option<Variables> },
}

/// An immutable, fully recorded run of one algorithm
#[derive(Debug, Clone)]
pub struct Trace {
    algorithm: &'static Algorithm,
    input: AlgorithmInput,
    steps: Vec<Step>,
    sorted_array: Option<Vec<i64>>,
    payload_size: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct TraceDump<'a> {
    algorithm: &'static str,
    category: Category,
    input: &'a AlgorithmInput,
    steps: &'a [Step],
    #[serde(skip_serializing_if = "Option::is_none")]
    sorted_array: Option<&'a [i64]>,
}

impl Trace {
    /// Run `algorithm` on `input` and keep the result
    pub fn record(algorithm: &'static Algorithm, input: AlgorithmInput) -> Result<Self, TraceError> {
        let result = algorithm.run(&input)?;
        let payload_size = result.steps.iter().map(Step::estimated_size).sum();
        debug!(
            algorithm = algorithm.name,
            steps = result.steps.len(),
            payload_size,
            "recorded trace"
        );
        Ok(Trace {
            algorithm,
            input,
            steps: result.steps,
            sorted_array: result.sorted_array,
            payload_size,
        })
    }

    pub fn algorithm(&self) -> &'static Algorithm {
        self.algorithm
    }

    pub fn input(&self) -> &AlgorithmInput {
        &self.input
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn sorted_array(&self) -> Option<&[i64]> {
        self.sorted_array.as_deref()
    }

    /// Estimated bytes held by all steps
    pub fn payload_size(&self) -> usize {
        self.payload_size
    }

    /// Clamp a position into the trace; `None` stays `None`
    pub fn clamp(&self, position: Option<usize>) -> Option<usize> {
        let last = self.steps.len().checked_sub(1)?;
        position.map(|p| p.min(last))
    }

    pub fn step(&self, position: Option<usize>) -> Option<&Step> {
        self.clamp(position).and_then(|p| self.steps.get(p))
    }

    pub fn display_state(&self, position: Option<usize>) -> DisplayState {
        let position = self.clamp(position);
        let variables = self.step(position).and_then(|s| s.variables.clone());
        match self.algorithm.category {
            Category::Sorting | Category::Searching => DisplayState::Array {
                values: self.array_at(position),
                variables,
            },
            Category::Graph => DisplayState::Graph {
                nodes: self.node_states(position),
                variables,
            },
            Category::Dp | Category::Greedy => DisplayState::Snapshot { variables },
        }
    }

    /// Primary array after the step at `position`.
    ///
    /// Starts from the newest `array_state` checkpoint at or before the position
    /// (or the original input) and replays mutation steps forward from there.
    pub fn array_at(&self, position: Option<usize>) -> Vec<i64> {
        let original = self.input.as_array().unwrap_or(&[]).to_vec();
        let Some(position) = self.clamp(position) else {
            return original;
        };

        let checkpoint = self.steps[..=position]
            .iter()
            .enumerate()
            .rev()
            .find_map(|(i, s)| s.array_state.as_ref().map(|arr| (i, arr)));

        let (mut values, from) = match checkpoint {
            Some((i, arr)) => (arr.clone(), i + 1),
            None => (original, 0),
        };
        for step in &self.steps[from..=position] {
            apply_mutation(&mut values, step);
        }
        values
    }

    /// Per-node status at `position`, indexed by node id
    pub fn node_states(&self, position: Option<usize>) -> Vec<NodeStatus> {
        let mut nodes = vec![NodeStatus::Unvisited; NODES.len()];
        let Some(position) = self.clamp(position) else {
            return nodes;
        };

        for step in &self.steps[..=position] {
            let status = match step.mark {
                Some(NodeMark::Visited) | Some(NodeMark::Active) => NodeStatus::Visited,
                Some(NodeMark::Finished) => NodeStatus::Finished,
                None => continue,
            };
            for &node in &step.indices {
                if let Some(slot) = nodes.get_mut(node) {
                    *slot = status;
                }
            }
        }

        let current = &self.steps[position];
        let overlay = match (current.kind, current.mark) {
            (_, Some(NodeMark::Finished)) => None,
            (StepKind::Comparison | StepKind::Overwrite, _) => Some(NodeStatus::Checking),
            (StepKind::Highlight, _) => Some(NodeStatus::Active),
            _ => None,
        };
        if let Some(overlay) = overlay {
            for &node in &current.indices {
                if let Some(slot) = nodes.get_mut(node) {
                    *slot = overlay;
                }
            }
        }
        nodes
    }

    /// Apply every `swap`/`overwrite` step to the original input, ignoring
    /// checkpoints
    pub fn replay_mutations(&self) -> Vec<i64> {
        let mut values = self.input.as_array().unwrap_or(&[]).to_vec();
        for step in &self.steps {
            apply_mutation(&mut values, step);
        }
        values
    }

    /// JSON document with the algorithm name, input, steps and final array
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&TraceDump {
            algorithm: self.algorithm.name,
            category: self.algorithm.category,
            input: &self.input,
            steps: &self.steps,
            sorted_array: self.sorted_array.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::graph::bfs::BFS;
    use crate::algorithms::greedy::coin_change::COIN_CHANGE;
    use crate::algorithms::searching::binary::BINARY_SEARCH;
    use crate::algorithms::sorting::bubble::BUBBLE_SORT;
    use crate::algorithms::sorting::heap::HEAP_SORT;

    fn array_trace(algo: &'static Algorithm, input: Vec<i64>) -> Trace {
        Trace::record(algo, AlgorithmInput::Array(input)).unwrap()
    }

    #[test]
    fn test_before_first_step_shows_input() {
        let trace = array_trace(&BUBBLE_SORT, vec![3, 1, 2]);
        assert_eq!(trace.array_at(None), vec![3, 1, 2]);
        assert!(trace.step(None).is_none());
    }

    #[test]
    fn test_last_step_shows_sorted_array() {
        let trace = array_trace(&HEAP_SORT, vec![5, 9, 1, 7, 3]);
        let last = Some(trace.len() - 1);
        assert_eq!(trace.array_at(last), vec![1, 3, 5, 7, 9]);
        assert_eq!(trace.sorted_array(), Some(&[1, 3, 5, 7, 9][..]));
    }

    #[test]
    fn test_out_of_range_position_clamps() {
        let trace = array_trace(&BUBBLE_SORT, vec![2, 1]);
        assert_eq!(trace.clamp(Some(10_000)), Some(trace.len() - 1));
        assert_eq!(trace.array_at(Some(10_000)), vec![1, 2]);
    }

    #[test]
    fn test_checkpoint_matches_plain_replay() {
        let input = vec![8, 3, 5, 1, 9, 2];
        let trace = array_trace(&HEAP_SORT, input.clone());
        let mut replayed = input;
        for (i, step) in trace.steps().iter().enumerate() {
            apply_mutation(&mut replayed, step);
            assert_eq!(trace.array_at(Some(i)), replayed, "position {}", i);
        }
    }

    #[test]
    fn test_binary_search_displays_sorted_copy() {
        let trace = array_trace(&BINARY_SEARCH, vec![9, 4, 7, 1]);
        assert_eq!(trace.array_at(Some(0)), vec![1, 4, 7, 9]);
        // before the first step the viewer still shows the caller's array
        assert_eq!(trace.array_at(None), vec![9, 4, 7, 1]);
    }

    #[test]
    fn test_graph_node_states() {
        let trace = Trace::record(&BFS, AlgorithmInput::Graph).unwrap();
        let DisplayState::Graph { nodes, variables } = trace.display_state(None) else {
            panic!("expected graph state");
        };
        assert!(nodes.iter().all(|&s| s == NodeStatus::Unvisited));
        assert!(variables.is_none());

        // step 0 visits and highlights the start node
        assert_eq!(trace.node_states(Some(0))[0], NodeStatus::Active);

        let end = trace.node_states(Some(trace.len() - 1));
        assert!(end.iter().all(|&s| s == NodeStatus::Finished));
    }

    #[test]
    fn test_graph_comparison_marks_checking() {
        let trace = Trace::record(&BFS, AlgorithmInput::Graph).unwrap();
        let idx = trace
            .steps()
            .iter()
            .position(|s| s.kind == StepKind::Comparison)
            .unwrap();
        let neighbor = trace.steps()[idx].indices[0];
        assert_eq!(trace.node_states(Some(idx))[neighbor], NodeStatus::Checking);
    }

    #[test]
    fn test_snapshot_state_for_greedy() {
        let trace = Trace::record(
            &COIN_CHANGE,
            AlgorithmInput::Coins {
                coins: vec![5, 1],
                target: 7,
            },
        )
        .unwrap();
        let DisplayState::Snapshot { variables } = trace.display_state(Some(0)) else {
            panic!("expected snapshot state");
        };
        assert_eq!(variables.unwrap()["remaining"], 7);
    }

    #[test]
    fn test_json_dump_has_camel_case_keys() {
        let trace = array_trace(&BUBBLE_SORT, vec![2, 1]);
        let json: serde_json::Value = serde_json::from_str(&trace.to_json().unwrap()).unwrap();
        assert_eq!(json["algorithm"], "Bubble Sort");
        assert_eq!(json["sortedArray"], serde_json::json!([1, 2]));
        assert_eq!(json["input"]["kind"], "array");
    }

    #[test]
    fn test_payload_size_counts_snapshots() {
        let small = array_trace(&BUBBLE_SORT, vec![2, 1]);
        let large = array_trace(&BUBBLE_SORT, vec![9, 8, 7, 6, 5, 4, 3, 2, 1]);
        assert!(small.payload_size() > 0);
        assert!(large.payload_size() > small.payload_size());
    }
}
