use super::{sorted_step, traced_swap};
use crate::algorithms::{
    expect_array, Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::Step;

pub static QUICK_SORT: Algorithm = Algorithm {
    name: "Quick Sort",
    category: Category::Sorting,
    input: InputKind::Array,
    description: "Divide and conquer: picks the last element as pivot, partitions the range \
                  around it (Lomuto) and recurses on both sides.",
    complexity: Complexity {
        time: "O(n log n)",
        space: "O(log n)",
    },
    code: r#"fn quick_sort(arr: &mut [i64], lo: usize, hi: usize) {
    if lo < hi {
        let p = partition(arr, lo, hi);
        if p > 0 {
            quick_sort(arr, lo, p - 1);
        }
        quick_sort(arr, p + 1, hi);
    }
}

fn partition(arr: &mut [i64], lo: usize, hi: usize) -> usize {
    let pivot = arr[hi];
    let mut i = lo;
    for j in lo..hi {
        if arr[j] < pivot {
            arr.swap(i, j);
            i += 1;
        }
    }
    arr.swap(i, hi);
    i
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let mut arr = expect_array(&QUICK_SORT, input)?.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    if n > 0 {
        sort_range(&mut steps, &mut arr, 0, n - 1);
    }

    steps.push(sorted_step(n, 9));
    Ok(AlgorithmResult::with_array(steps, arr))
}

fn sort_range(steps: &mut Vec<Step>, arr: &mut [i64], lo: usize, hi: usize) {
    if lo < hi {
        let p = partition(steps, arr, lo, hi);
        if p > 0 {
            sort_range(steps, arr, lo, p - 1);
        }
        sort_range(steps, arr, p + 1, hi);
    }
}

fn partition(steps: &mut Vec<Step>, arr: &mut [i64], lo: usize, hi: usize) -> usize {
    let pivot = arr[hi];
    let mut i = lo;

    steps.push(
        Step::highlight(format!("Pivot chosen: {}", pivot))
            .with_indices([hi])
            .with_line(12)
            .with_var("pivot", pivot),
    );

    for j in lo..hi {
        steps.push(
            Step::comparison(format!("Comparing {} < {}", arr[j], pivot))
                .with_indices([j, hi])
                .with_line(15)
                .with_var("pivot", pivot),
        );
        if arr[j] < pivot {
            let description = format!("Swapping {} and {}", arr[i], arr[j]);
            traced_swap(steps, arr, i, j, description, 16);
            i += 1;
        }
    }

    let description = format!("Placing pivot {} at correct position {}", pivot, i);
    traced_swap(steps, arr, i, hi, description, 20);
    steps.push(
        Step::highlight(format!("{} is now in its sorted position", pivot))
            .with_indices([i])
            .with_line(21),
    );
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::{check_sort, CASES};
    use crate::step::StepKind;

    #[test]
    fn test_sorts_cases() {
        for case in CASES {
            check_sort(&QUICK_SORT, case);
        }
    }

    #[test]
    fn test_pivot_highlight_precedes_partition() {
        let result = QUICK_SORT
            .run(&AlgorithmInput::Array(vec![3, 1, 2]))
            .unwrap();
        let first = &result.steps[0];
        assert_eq!(first.kind, StepKind::Highlight);
        assert_eq!(first.indices, vec![2]);
        assert_eq!(first.description, "Pivot chosen: 2");
        assert_eq!(result.steps[1].kind, StepKind::Comparison);
    }
}
