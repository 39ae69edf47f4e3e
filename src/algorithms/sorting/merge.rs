use super::sorted_step;
use crate::algorithms::{
    expect_array, Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::Step;

pub static MERGE_SORT: Algorithm = Algorithm {
    name: "Merge Sort",
    category: Category::Sorting,
    input: InputKind::Array,
    description: "Divide and conquer: splits the array in halves, sorts each half recursively \
                  and merges the two sorted halves.",
    complexity: Complexity {
        time: "O(n log n)",
        space: "O(n)",
    },
    code: r#"fn merge_sort(arr: &mut [i64], lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }
    let mid = (lo + hi) / 2;
    merge_sort(arr, lo, mid);
    merge_sort(arr, mid + 1, hi);
    merge(arr, lo, mid, hi);
}

fn merge(arr: &mut [i64], lo: usize, mid: usize, hi: usize) {
    let left = arr[lo..=mid].to_vec();
    let right = arr[mid + 1..=hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        arr[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        arr[k] = right[j];
        j += 1;
        k += 1;
    }
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let mut arr = expect_array(&MERGE_SORT, input)?.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    if n > 0 {
        sort_range(&mut steps, &mut arr, 0, n - 1);
    }

    steps.push(sorted_step(n, 9));
    Ok(AlgorithmResult::with_array(steps, arr))
}

fn sort_range(steps: &mut Vec<Step>, arr: &mut [i64], lo: usize, hi: usize) {
    if lo >= hi {
        return;
    }
    let mid = (lo + hi) / 2;

    steps.push(
        Step::highlight(format!("Dividing: Left [{}-{}]", lo, mid))
            .with_indices(lo..=mid)
            .with_line(6),
    );
    sort_range(steps, arr, lo, mid);

    steps.push(
        Step::highlight(format!("Dividing: Right [{}-{}]", mid + 1, hi))
            .with_indices(mid + 1..=hi)
            .with_line(7),
    );
    sort_range(steps, arr, mid + 1, hi);

    merge(steps, arr, lo, mid, hi);
}

/// Stable merge of `arr[lo..=mid]` and `arr[mid+1..=hi]`; ties take the left run
fn merge(steps: &mut Vec<Step>, arr: &mut [i64], lo: usize, mid: usize, hi: usize) {
    let left = arr[lo..=mid].to_vec();
    let right = arr[mid + 1..=hi].to_vec();
    let (mut i, mut j, mut k) = (0, 0, lo);

    let place = |steps: &mut Vec<Step>, k: usize, value: i64, description: String, line| {
        steps.push(
            Step::overwrite(description)
                .with_indices([k])
                .with_values([value])
                .with_line(line)
                .with_var("left", &left)
                .with_var("right", &right),
        );
    };

    while i < left.len() && j < right.len() {
        steps.push(
            Step::comparison(format!("Comparing {} and {}", left[i], right[j]))
                .with_indices([lo + i, mid + 1 + j])
                .with_line(16)
                .with_var("left", &left)
                .with_var("right", &right),
        );
        if left[i] <= right[j] {
            place(steps, k, left[i], format!("Placing {} at index {}", left[i], k), 17);
            arr[k] = left[i];
            i += 1;
        } else {
            place(steps, k, right[j], format!("Placing {} at index {}", right[j], k), 20);
            arr[k] = right[j];
            j += 1;
        }
        k += 1;
    }

    while i < left.len() {
        place(
            steps,
            k,
            left[i],
            format!("Placing remaining {} at index {}", left[i], k),
            26,
        );
        arr[k] = left[i];
        i += 1;
        k += 1;
    }

    while j < right.len() {
        place(
            steps,
            k,
            right[j],
            format!("Placing remaining {} at index {}", right[j], k),
            31,
        );
        arr[k] = right[j];
        j += 1;
        k += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::{check_sort, CASES};
    use crate::step::StepKind;

    #[test]
    fn test_sorts_cases() {
        for case in CASES {
            check_sort(&MERGE_SORT, case);
        }
    }

    #[test]
    fn test_halves_announced_before_merge() {
        let result = MERGE_SORT.run(&AlgorithmInput::Array(vec![2, 1])).unwrap();
        let kinds: Vec<_> = result.steps.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                StepKind::Highlight,
                StepKind::Highlight,
                StepKind::Comparison,
                StepKind::Overwrite,
                StepKind::Overwrite,
                StepKind::Highlight,
            ]
        );
        assert_eq!(result.steps[0].indices, vec![0]);
        assert_eq!(result.steps[1].indices, vec![1]);
    }

    #[test]
    fn test_tie_takes_left_run() {
        let result = MERGE_SORT.run(&AlgorithmInput::Array(vec![3, 3])).unwrap();
        let first_write = result
            .steps
            .iter()
            .find(|s| s.kind == StepKind::Overwrite)
            .unwrap();
        assert_eq!(first_write.line_number, Some(17));
    }
}
