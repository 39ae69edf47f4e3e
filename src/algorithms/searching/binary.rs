use crate::algorithms::{
    expect_array, Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::Step;

pub static BINARY_SEARCH: Algorithm = Algorithm {
    name: "Binary Search",
    category: Category::Searching,
    input: InputKind::Array,
    description: "Searches a sorted array by repeatedly halving the interval that can still \
                  contain the target.",
    complexity: Complexity {
        time: "O(log n)",
        space: "O(1)",
    },
    code: r#"fn binary_search(arr: &[i64], target: i64) -> Option<usize> {
    let mut left = 0isize;
    let mut right = arr.len() as isize - 1;
    while left <= right {
        let mid = (left + right) / 2;
        let value = arr[mid as usize];
        if value == target {
            return Some(mid as usize);
        }
        if value < target {
            left = mid + 1;
        } else {
            right = mid - 1;
        }
    }
    None
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let mut arr = expect_array(&BINARY_SEARCH, input)?.to_vec();
    arr.sort_unstable();
    let mut steps = Vec::new();

    // The middle element of the sorted copy is always present
    let Some(&target) = arr.get(arr.len() / 2) else {
        steps.push(
            Step::variable("Array is empty, nothing to search")
                .with_line(16)
                .with_array_state(&arr),
        );
        return Ok(AlgorithmResult::with_array(steps, arr));
    };

    steps.push(
        Step::variable(format!("Sorted array for Binary Search. Target: {}", target))
            .with_line(1)
            .with_array_state(&arr)
            .with_var("target", target),
    );

    let mut left: isize = 0;
    let mut right: isize = arr.len() as isize - 1;

    while left <= right {
        let mid = (left + right) / 2;
        let value = arr[mid as usize];
        let range = |step: Step| {
            step.with_array_state(&arr)
                .with_var("target", target)
                .with_var("left", left)
                .with_var("right", right)
                .with_var("mid", mid)
        };

        steps.push(range(
            Step::highlight(format!(
                "Checking range [{}, {}]. Mid: {} ({})",
                left, right, mid, value
            ))
            .with_indices([left as usize, right as usize, mid as usize])
            .with_line(5),
        ));

        if value == target {
            steps.push(range(
                Step::highlight(format!("Found target {} at index {}!", target, mid))
                    .with_indices([mid as usize])
                    .with_line(8),
            ));
            break;
        }

        if value < target {
            steps.push(range(
                Step::comparison(format!("{} < {}, searching right half", value, target))
                    .with_indices([mid as usize])
                    .with_line(11),
            ));
            left = mid + 1;
        } else {
            steps.push(range(
                Step::comparison(format!("{} > {}, searching left half", value, target))
                    .with_indices([mid as usize])
                    .with_line(13),
            ));
            right = mid - 1;
        }
    }

    Ok(AlgorithmResult::with_array(steps, arr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::StepKind;

    fn found_index(input: Vec<i64>) -> (Vec<i64>, usize) {
        let result = BINARY_SEARCH.run(&AlgorithmInput::Array(input)).unwrap();
        let last = result.steps.last().unwrap().clone();
        assert_eq!(last.kind, StepKind::Highlight);
        assert_eq!(last.indices.len(), 1);
        (result.sorted_array.unwrap(), last.indices[0])
    }

    #[test]
    fn test_finds_median_of_sorted_copy() {
        let (sorted, idx) = found_index(vec![50, 10, 40, 20, 30]);
        assert_eq!(sorted, vec![10, 20, 30, 40, 50]);
        assert_eq!(sorted[idx], 30);
    }

    #[test]
    fn test_duplicates() {
        let (sorted, idx) = found_index(vec![7, 7, 7, 1, 7, 9]);
        assert_eq!(sorted[idx], sorted[sorted.len() / 2]);
    }

    #[test]
    fn test_every_step_shows_searched_array() {
        let result = BINARY_SEARCH
            .run(&AlgorithmInput::Array(vec![9, 3, 6, 1]))
            .unwrap();
        for step in &result.steps {
            assert_eq!(step.array_state.as_deref(), Some(&[1, 3, 6, 9][..]));
        }
    }

    #[test]
    fn test_empty_array() {
        let result = BINARY_SEARCH.run(&AlgorithmInput::Array(vec![])).unwrap();
        assert_eq!(result.steps.len(), 1);
        assert_eq!(result.sorted_array, Some(vec![]));
    }
}
