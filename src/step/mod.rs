//! Step record model
//!
//! Every instrumented algorithm emits a flat, ordered list of [`Step`]s. A step
//! is one renderable unit of execution: what kind of operation happened, which
//! primary-array positions it touched, which source line it corresponds to,
//! and (optionally) a full snapshot of auxiliary state at that instant.
//!
//! # Snapshot semantics
//!
//! - `variables` holds [`serde_json::Value`]s built from owned data when the
//!   step is emitted, so later mutation of the algorithm's working state can
//!   never reach back into a recorded step.
//! - `array_state` is the primary array *after* the step's own mutation. A
//!   renderer can jump straight to any step carrying one.
//! - `mark` is the typed graph-state tag. Renderers read node status from it
//!   instead of parsing `description`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Auxiliary-state snapshot keyed by variable name
pub type Variables = Map<String, Value>;

/// Semantic tag of a step, used by renderers to pick colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Comparison,
    Swap,
    Overwrite,
    Highlight,
    Auxiliary,
    Variable,
}

impl StepKind {
    /// Whether replaying this kind changes the primary array
    pub fn is_mutation(self) -> bool {
        matches!(self, StepKind::Swap | StepKind::Overwrite)
    }

    pub fn label(self) -> &'static str {
        match self {
            StepKind::Comparison => "compare",
            StepKind::Swap => "swap",
            StepKind::Overwrite => "write",
            StepKind::Highlight => "highlight",
            StepKind::Auxiliary => "aux",
            StepKind::Variable => "vars",
        }
    }
}

/// Graph-node transition carried by graph traversal steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeMark {
    /// First time the node is discovered (emitted once per node)
    Visited,
    /// The node is being processed (again)
    Active,
    /// All of the node's edges have been handled
    Finished,
}

/// One observable unit of algorithm execution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    #[serde(rename = "type")]
    pub kind: StepKind,
    pub indices: Vec<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variables: Option<Variables>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub array_state: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mark: Option<NodeMark>,
}

impl Step {
    pub fn new(kind: StepKind, description: impl Into<String>) -> Self {
        Step {
            kind,
            indices: Vec::new(),
            values: None,
            line_number: None,
            variables: None,
            description: description.into(),
            array_state: None,
            mark: None,
        }
    }

    pub fn comparison(description: impl Into<String>) -> Self {
        Self::new(StepKind::Comparison, description)
    }

    pub fn swap(description: impl Into<String>) -> Self {
        Self::new(StepKind::Swap, description)
    }

    pub fn overwrite(description: impl Into<String>) -> Self {
        Self::new(StepKind::Overwrite, description)
    }

    pub fn highlight(description: impl Into<String>) -> Self {
        Self::new(StepKind::Highlight, description)
    }

    pub fn auxiliary(description: impl Into<String>) -> Self {
        Self::new(StepKind::Auxiliary, description)
    }

    pub fn variable(description: impl Into<String>) -> Self {
        Self::new(StepKind::Variable, description)
    }

    pub fn with_indices(mut self, indices: impl IntoIterator<Item = usize>) -> Self {
        self.indices = indices.into_iter().collect();
        self
    }

    pub fn with_values(mut self, values: impl IntoIterator<Item = i64>) -> Self {
        self.values = Some(values.into_iter().collect());
        self
    }

    pub fn with_line(mut self, line: usize) -> Self {
        self.line_number = Some(line);
        self
    }

    /// Attach one snapshot value; serialization happens here so the step owns a copy
    pub fn with_var(mut self, name: &str, value: impl Serialize) -> Self {
        let value = serde_json::to_value(value).unwrap_or(Value::Null);
        self.variables
            .get_or_insert_with(Map::new)
            .insert(name.to_string(), value);
        self
    }

    pub fn with_array_state(mut self, array: &[i64]) -> Self {
        self.array_state = Some(array.to_vec());
        self
    }

    pub fn with_mark(mut self, mark: NodeMark) -> Self {
        self.mark = Some(mark);
        self
    }

    /// Look up a snapshot value by name
    pub fn var(&self, name: &str) -> Option<&Value> {
        self.variables.as_ref().and_then(|vars| vars.get(name))
    }

    /// Rough payload size in bytes, used for trace memory accounting
    pub fn estimated_size(&self) -> usize {
        let base = std::mem::size_of::<Step>() + self.description.len();
        let indices = self.indices.len() * std::mem::size_of::<usize>();
        let values = self.values.as_ref().map_or(0, |v| v.len() * 8);
        let array = self.array_state.as_ref().map_or(0, |v| v.len() * 8);
        // Serialized length is a fair proxy for nested JSON snapshots
        let vars = self
            .variables
            .as_ref()
            .map_or(0, |vars| vars.iter().map(|(k, v)| k.len() + v.to_string().len()).sum());
        base + indices + values + array + vars
    }
}

/// Apply a mutation step to an array in place.
///
/// `swap`/`overwrite` steps with `values` write `values[k]` to `indices[k]`; a
/// `swap` without values exchanges its first two indices. Out-of-range indices
/// are ignored.
pub fn apply_mutation(array: &mut [i64], step: &Step) {
    if !step.kind.is_mutation() {
        return;
    }
    match &step.values {
        Some(values) => {
            for (&idx, &value) in step.indices.iter().zip(values) {
                if let Some(slot) = array.get_mut(idx) {
                    *slot = value;
                }
            }
        }
        None if step.kind == StepKind::Swap => {
            if let [a, b, ..] = step.indices[..] {
                if a < array.len() && b < array.len() {
                    array.swap(a, b);
                }
            }
        }
        None => {}
    }
}
