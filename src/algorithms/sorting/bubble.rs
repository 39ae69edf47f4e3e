use super::{sorted_step, traced_swap};
use crate::algorithms::{
    expect_array, Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::Step;

pub static BUBBLE_SORT: Algorithm = Algorithm {
    name: "Bubble Sort",
    category: Category::Sorting,
    input: InputKind::Array,
    description: "Repeatedly steps through the list, compares adjacent elements and swaps them \
                  if they are in the wrong order.",
    complexity: Complexity {
        time: "O(n²)",
        space: "O(1)",
    },
    code: r#"fn bubble_sort(arr: &mut [i64]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
            }
        }
    }
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let mut arr = expect_array(&BUBBLE_SORT, input)?.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            steps.push(
                Step::comparison(format!("Comparing {} and {}", arr[j], arr[j + 1]))
                    .with_indices([j, j + 1])
                    .with_line(5),
            );
            if arr[j] > arr[j + 1] {
                let description = format!("Swapping {} and {}", arr[j], arr[j + 1]);
                traced_swap(&mut steps, &mut arr, j, j + 1, description, 6);
            }
        }
        let last = n - i - 1;
        steps.push(
            Step::highlight(format!("{} is now in its sorted position", arr[last]))
                .with_indices([last])
                .with_line(3),
        );
    }

    steps.push(sorted_step(n, 10));
    Ok(AlgorithmResult::with_array(steps, arr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::{check_sort, CASES};
    use crate::step::StepKind;

    #[test]
    fn test_sorts_cases() {
        for case in CASES {
            check_sort(&BUBBLE_SORT, case);
        }
    }

    #[test]
    fn test_sorted_input_has_no_swaps() {
        let result = BUBBLE_SORT
            .run(&AlgorithmInput::Array(vec![1, 2, 3, 4]))
            .unwrap();
        assert!(result.steps.iter().all(|s| s.kind != StepKind::Swap));
        let comparisons = result
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Comparison)
            .count();
        assert_eq!(comparisons, 6);
    }

    #[test]
    fn test_swap_precedes_values() {
        let result = BUBBLE_SORT.run(&AlgorithmInput::Array(vec![2, 1])).unwrap();
        let swap = result.steps.iter().find(|s| s.kind == StepKind::Swap).unwrap();
        assert_eq!(swap.indices, vec![0, 1]);
        assert_eq!(swap.values, Some(vec![1, 2]));
    }
}
