//! Instrumented algorithm descriptors
//!
//! Each algorithm is a static [`Algorithm`] record: metadata for the viewer,
//! a literal source listing whose line numbers the emitted steps refer to, and
//! a pure `run` function that produces the whole trace eagerly.
//!
//! - [`sorting`]: bubble, selection, insertion, merge, quick, heap, counting, radix
//! - [`searching`]: linear and binary search
//! - [`graph`]: BFS, DFS and Dijkstra over the fixed graph fixture
//! - [`dp`]: longest common subsequence and 0/1 knapsack
//! - [`greedy`]: activity selection and coin change
//!
//! `run` never mutates its input and always returns the same steps for the
//! same input.

pub mod dp;
pub mod graph;
pub mod greedy;
pub mod searching;
pub mod sorting;

use crate::errors::TraceError;
use crate::step::Step;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Algorithm family; decides which input shape and which viewer layout apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Sorting,
    Searching,
    Graph,
    #[serde(rename = "DP")]
    Dp,
    Greedy,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Sorting,
        Category::Searching,
        Category::Graph,
        Category::Dp,
        Category::Greedy,
    ];

    /// Whether the primary display is an integer array rebuilt by replay
    pub fn is_array_based(self) -> bool {
        matches!(self, Category::Sorting | Category::Searching)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Sorting => "Sorting",
            Category::Searching => "Searching",
            Category::Graph => "Graph",
            Category::Dp => "DP",
            Category::Greedy => "Greedy",
        };
        write!(f, "{}", name)
    }
}

/// Free-text asymptotic costs shown next to the listing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

/// A 0/1 knapsack item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub weight: usize,
    pub value: u64,
}

/// A half-open activity interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub start: u32,
    pub end: u32,
}

/// Shape of input an algorithm accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Array,
    Strings,
    Knapsack,
    Activities,
    Coins,
    Graph,
}

impl InputKind {
    pub fn name(self) -> &'static str {
        match self {
            InputKind::Array => "array",
            InputKind::Strings => "strings",
            InputKind::Knapsack => "knapsack",
            InputKind::Activities => "activities",
            InputKind::Coins => "coins",
            InputKind::Graph => "graph",
        }
    }
}

/// Input handed to [`Algorithm::run`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "lowercase")]
pub enum AlgorithmInput {
    Array(Vec<i64>),
    Strings { first: String, second: String },
    Knapsack { items: Vec<Item>, capacity: usize },
    Activities(Vec<Activity>),
    Coins { coins: Vec<u64>, target: u64 },
    Graph,
}

impl AlgorithmInput {
    pub fn kind(&self) -> InputKind {
        match self {
            AlgorithmInput::Array(_) => InputKind::Array,
            AlgorithmInput::Strings { .. } => InputKind::Strings,
            AlgorithmInput::Knapsack { .. } => InputKind::Knapsack,
            AlgorithmInput::Activities(_) => InputKind::Activities,
            AlgorithmInput::Coins { .. } => InputKind::Coins,
            AlgorithmInput::Graph => InputKind::Graph,
        }
    }

    /// The original primary array, if this input has one
    pub fn as_array(&self) -> Option<&[i64]> {
        match self {
            AlgorithmInput::Array(values) => Some(values),
            _ => None,
        }
    }
}

/// Everything one `run` produced
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AlgorithmResult {
    pub steps: Vec<Step>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sorted_array: Option<Vec<i64>>,
}

impl AlgorithmResult {
    pub fn new(steps: Vec<Step>) -> Self {
        AlgorithmResult {
            steps,
            sorted_array: None,
        }
    }

    pub fn with_array(steps: Vec<Step>, array: Vec<i64>) -> Self {
        AlgorithmResult {
            steps,
            sorted_array: Some(array),
        }
    }
}

pub type RunFn = fn(&AlgorithmInput) -> Result<AlgorithmResult, TraceError>;

/// Static descriptor of one instrumented algorithm
#[derive(Debug, Clone, Copy)]
pub struct Algorithm {
    pub name: &'static str,
    pub category: Category,
    /// Input shape `run` accepts; graph algorithms ignore theirs
    pub input: InputKind,
    pub description: &'static str,
    pub complexity: Complexity,
    /// Source listing; `Step::line_number` is a 1-based line in this text
    pub code: &'static str,
    pub run: RunFn,
}

impl Algorithm {
    pub fn run(&self, input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
        (self.run)(input)
    }

    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }

    pub(crate) fn mismatch(&self, input: &AlgorithmInput) -> TraceError {
        TraceError::InputMismatch {
            algorithm: self.name.to_string(),
            expected: self.input.name(),
            got: input.kind().name(),
        }
    }
}

/// Borrow the array payload or report a mismatch for `algorithm`
pub(crate) fn expect_array<'a>(
    algorithm: &Algorithm,
    input: &'a AlgorithmInput,
) -> Result<&'a [i64], TraceError> {
    input.as_array().ok_or_else(|| algorithm.mismatch(input))
}

/// Ordered, validated set of algorithm descriptors
#[derive(Debug, Clone)]
pub struct Registry {
    algorithms: Vec<&'static Algorithm>,
}

impl Registry {
    /// Build a registry, rejecting duplicate names and empty listings
    pub fn new(algorithms: Vec<&'static Algorithm>) -> Result<Self, TraceError> {
        let mut seen = FxHashSet::default();
        for algo in &algorithms {
            if algo.name.trim().is_empty() {
                return Err(TraceError::InvalidDescriptor {
                    name: algo.name.to_string(),
                    message: "empty name".to_string(),
                });
            }
            if !seen.insert(algo.name) {
                return Err(TraceError::InvalidDescriptor {
                    name: algo.name.to_string(),
                    message: "duplicate name".to_string(),
                });
            }
            if algo.code.trim().is_empty() {
                return Err(TraceError::InvalidDescriptor {
                    name: algo.name.to_string(),
                    message: "empty source listing".to_string(),
                });
            }
        }
        Ok(Registry { algorithms })
    }

    /// All seventeen built-in algorithms, grouped by category
    pub fn standard() -> Self {
        Registry {
            algorithms: vec![
                &sorting::bubble::BUBBLE_SORT,
                &sorting::selection::SELECTION_SORT,
                &sorting::insertion::INSERTION_SORT,
                &sorting::merge::MERGE_SORT,
                &sorting::quick::QUICK_SORT,
                &sorting::heap::HEAP_SORT,
                &sorting::counting::COUNTING_SORT,
                &sorting::radix::RADIX_SORT,
                &searching::linear::LINEAR_SEARCH,
                &searching::binary::BINARY_SEARCH,
                &graph::bfs::BFS,
                &graph::dfs::DFS,
                &graph::dijkstra::DIJKSTRA,
                &dp::lcs::LCS,
                &dp::knapsack::KNAPSACK,
                &greedy::activity::ACTIVITY_SELECTION,
                &greedy::coin_change::COIN_CHANGE,
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.algorithms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.algorithms.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'static Algorithm> {
        self.algorithms.get(index).copied()
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.algorithms.iter().position(|a| a.name == name)
    }

    pub fn find(&self, name: &str) -> Result<&'static Algorithm, TraceError> {
        self.position(name)
            .and_then(|idx| self.get(idx))
            .ok_or_else(|| TraceError::UnknownAlgorithm(name.to_string()))
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &'static Algorithm> + '_ {
        self.algorithms
            .iter()
            .copied()
            .filter(move |a| a.category == category)
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static Algorithm> + '_ {
        self.algorithms.iter().copied()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_is_valid() {
        let standard = Registry::standard();
        let validated = Registry::new(standard.iter().collect()).unwrap();
        assert_eq!(validated.len(), 17);
    }

    #[test]
    fn test_category_counts() {
        let registry = Registry::standard();
        let count = |c| registry.by_category(c).count();
        assert_eq!(count(Category::Sorting), 8);
        assert_eq!(count(Category::Searching), 2);
        assert_eq!(count(Category::Graph), 3);
        assert_eq!(count(Category::Dp), 2);
        assert_eq!(count(Category::Greedy), 2);
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = Registry::new(vec![
            &sorting::bubble::BUBBLE_SORT,
            &sorting::bubble::BUBBLE_SORT,
        ])
        .unwrap_err();
        assert!(matches!(err, TraceError::InvalidDescriptor { .. }));
    }

    #[test]
    fn test_unknown_name() {
        let registry = Registry::standard();
        assert_eq!(
            registry.find("Bogo Sort").unwrap_err(),
            TraceError::UnknownAlgorithm("Bogo Sort".to_string())
        );
        assert_eq!(registry.find("Heap Sort").unwrap().category, Category::Sorting);
    }

    #[test]
    fn test_wrong_input_is_mismatch() {
        let err = sorting::bubble::BUBBLE_SORT
            .run(&AlgorithmInput::Graph)
            .unwrap_err();
        assert!(matches!(err, TraceError::InputMismatch { expected: "array", .. }));
    }

    #[test]
    fn test_input_kinds_match_categories() {
        for algo in Registry::standard().iter() {
            match algo.category {
                Category::Sorting | Category::Searching => assert_eq!(algo.input, InputKind::Array),
                Category::Graph => assert_eq!(algo.input, InputKind::Graph),
                Category::Dp => assert!(matches!(algo.input, InputKind::Strings | InputKind::Knapsack)),
                Category::Greedy => {
                    assert!(matches!(algo.input, InputKind::Activities | InputKind::Coins))
                }
            }
        }
    }

    #[test]
    fn test_line_numbers_within_listing() {
        let registry = Registry::standard();
        let input_for = |algo: &Algorithm| match algo.input {
            InputKind::Array => AlgorithmInput::Array(vec![42, 5, 17, 42, 3, 99, 0, 12]),
            InputKind::Graph => AlgorithmInput::Graph,
            InputKind::Strings => AlgorithmInput::Strings {
                first: "ABCBDAB".to_string(),
                second: "BDCABA".to_string(),
            },
            InputKind::Knapsack => AlgorithmInput::Knapsack {
                items: vec![
                    Item { id: 1, weight: 1, value: 1 },
                    Item { id: 2, weight: 3, value: 4 },
                ],
                capacity: 4,
            },
            InputKind::Activities => AlgorithmInput::Activities(vec![
                Activity { id: 1, start: 1, end: 3 },
                Activity { id: 2, start: 2, end: 5 },
            ]),
            InputKind::Coins => AlgorithmInput::Coins {
                coins: vec![1, 5, 10, 25],
                target: 41,
            },
        };

        for algo in registry.iter() {
            let result = algo.run(&input_for(algo)).unwrap();
            assert!(!result.steps.is_empty(), "{} produced no steps", algo.name);
            for step in &result.steps {
                let line = step.line_number.unwrap_or(1);
                assert!(
                    line >= 1 && line <= algo.line_count(),
                    "{}: line {} outside listing",
                    algo.name,
                    line
                );
            }
        }
    }
}
