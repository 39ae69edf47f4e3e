use crate::algorithms::{
    expect_array, Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::config::LINEAR_SEARCH_TARGET;
use crate::errors::TraceError;
use crate::step::Step;

pub static LINEAR_SEARCH: Algorithm = Algorithm {
    name: "Linear Search",
    category: Category::Searching,
    input: InputKind::Array,
    description: "Checks each element in order until the target is found or the array ends.",
    complexity: Complexity {
        time: "O(n)",
        space: "O(1)",
    },
    code: r#"fn linear_search(arr: &[i64], target: i64) -> Option<usize> {
    for (i, &x) in arr.iter().enumerate() {
        if x == target {
            return Some(i);
        }
    }
    None
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let arr = expect_array(&LINEAR_SEARCH, input)?.to_vec();
    let target = LINEAR_SEARCH_TARGET;
    let mut steps = vec![Step::variable(format!("Searching for target: {}", target))
        .with_line(1)
        .with_array_state(&arr)
        .with_var("target", target)];

    for (i, &x) in arr.iter().enumerate() {
        steps.push(
            Step::comparison(format!("Checking index {}: is {} == {}?", i, x, target))
                .with_indices([i])
                .with_line(3)
                .with_var("target", target),
        );
        if x == target {
            steps.push(
                Step::highlight(format!("Found target {} at index {}!", target, i))
                    .with_indices([i])
                    .with_line(4)
                    .with_var("target", target)
                    .with_var("found", i),
            );
            return Ok(AlgorithmResult::with_array(steps, arr));
        }
    }

    steps.push(
        Step::highlight(format!("Target {} not found in array", target))
            .with_line(7)
            .with_var("target", target),
    );
    Ok(AlgorithmResult::with_array(steps, arr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;

    #[test]
    fn test_stops_at_first_match() {
        let result = LINEAR_SEARCH
            .run(&AlgorithmInput::Array(vec![5, 42, 9, 42]))
            .unwrap();
        let comparisons = result
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Comparison)
            .count();
        assert_eq!(comparisons, 2);
        let last = result.steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Highlight);
        assert_eq!(last.indices, vec![1]);
    }

    #[test]
    fn test_absent_target_scans_everything() {
        let input = vec![1, 2, 3];
        let result = LINEAR_SEARCH.run(&AlgorithmInput::Array(input.clone())).unwrap();
        let last = result.steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Highlight);
        assert!(last.indices.is_empty());
        assert_eq!(result.steps.len(), 1 + input.len() + 1);
        assert_eq!(result.sorted_array, Some(input));
    }
}
