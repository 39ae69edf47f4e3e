use super::{sorted_step, traced_swap};
use crate::algorithms::{
    expect_array, Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::Step;

pub static SELECTION_SORT: Algorithm = Algorithm {
    name: "Selection Sort",
    category: Category::Sorting,
    input: InputKind::Array,
    description: "Repeatedly finds the minimum element of the unsorted part and moves it to \
                  the front.",
    complexity: Complexity {
        time: "O(n²)",
        space: "O(1)",
    },
    code: r#"fn selection_sort(arr: &mut [i64]) {
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            if arr[j] < arr[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            arr.swap(i, min_idx);
        }
    }
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let mut arr = expect_array(&SELECTION_SORT, input)?.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        steps.push(
            Step::highlight(format!(
                "Current position: {}. Assuming minimum is {}",
                i, arr[i]
            ))
            .with_indices([i])
            .with_line(4),
        );

        for j in i + 1..n {
            steps.push(
                Step::comparison(format!(
                    "Comparing {} with current minimum {}",
                    arr[j], arr[min_idx]
                ))
                .with_indices([j, min_idx])
                .with_line(6),
            );
            if arr[j] < arr[min_idx] {
                min_idx = j;
                steps.push(
                    Step::highlight(format!("New minimum found: {}", arr[min_idx]))
                        .with_indices([min_idx])
                        .with_line(7),
                );
            }
        }

        if min_idx != i {
            let description = format!("Swapping {} with minimum {}", arr[i], arr[min_idx]);
            traced_swap(&mut steps, &mut arr, i, min_idx, description, 11);
        }

        steps.push(
            Step::highlight(format!("{} is now sorted", arr[i]))
                .with_indices([i])
                .with_line(3),
        );
    }

    steps.push(sorted_step(n, 14));
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
            check_sort(&SELECTION_SORT, case);
        }
    }

    #[test]
    fn test_at_most_one_swap_per_pass() {
        let input = vec![5, 4, 3, 2, 1, 0];
        let result = SELECTION_SORT.run(&AlgorithmInput::Array(input)).unwrap();
        let swaps = result
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Swap)
            .count();
        assert!(swaps <= 5);
    }
}
