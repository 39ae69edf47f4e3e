use super::sorted_step;
use crate::algorithms::{
    expect_array, Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::Step;

pub static HEAP_SORT: Algorithm = Algorithm {
    name: "Heap Sort",
    category: Category::Sorting,
    input: InputKind::Array,
    description: "Builds a max-heap in place, then repeatedly moves the root to the end of the \
                  unsorted region and restores the heap.",
    complexity: Complexity {
        time: "O(n log n)",
        space: "O(1)",
    },
    code: r#"fn heap_sort(arr: &mut [i64]) {
    let n = arr.len();
    for i in (0..n / 2).rev() {
        heapify(arr, n, i);
    }
    for end in (1..n).rev() {
        arr.swap(0, end);
        heapify(arr, end, 0);
    }
}

fn heapify(arr: &mut [i64], n: usize, i: usize) {
    let mut largest = i;
    let (l, r) = (2 * i + 1, 2 * i + 2);
    if l < n && arr[l] > arr[largest] {
        largest = l;
    }
    if r < n && arr[r] > arr[largest] {
        largest = r;
    }
    if largest != i {
        arr.swap(i, largest);
        heapify(arr, n, largest);
    }
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let mut arr = expect_array(&HEAP_SORT, input)?.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    for i in (0..n / 2).rev() {
        heapify(&mut steps, &mut arr, n, i);
    }

    for end in (1..n).rev() {
        let (max, last) = (arr[0], arr[end]);
        arr.swap(0, end);
        steps.push(
            Step::swap(format!("Moving max element {} to end (index {})", max, end))
                .with_indices([0, end])
                .with_values([last, max])
                .with_line(7)
                .with_array_state(&arr)
                .with_var("heapSize", end),
        );
        steps.push(
            Step::highlight(format!("{} is sorted", arr[end]))
                .with_indices([end])
                .with_line(7)
                .with_array_state(&arr)
                .with_var("heapSize", end),
        );
        heapify(&mut steps, &mut arr, end, 0);
    }

    steps.push(sorted_step(n, 10).with_array_state(&arr));
    Ok(AlgorithmResult::with_array(steps, arr))
}

fn heapify(steps: &mut Vec<Step>, arr: &mut [i64], n: usize, i: usize) {
    let mut largest = i;
    let (l, r) = (2 * i + 1, 2 * i + 2);

    let children: Vec<String> = [l, r]
        .iter()
        .filter(|&&c| c < n)
        .map(|c| c.to_string())
        .collect();
    steps.push(
        Step::comparison(format!(
            "Heapifying node {}. Checking children {}",
            i,
            if children.is_empty() {
                "(none)".to_string()
            } else {
                children.join(", ")
            }
        ))
        .with_indices([i, l, r].into_iter().filter(|&idx| idx < n))
        .with_line(15)
        .with_array_state(arr)
        .with_var("heapSize", n),
    );

    if l < n && arr[l] > arr[largest] {
        largest = l;
    }
    if r < n && arr[r] > arr[largest] {
        largest = r;
    }

    if largest != i {
        let (parent, child) = (arr[i], arr[largest]);
        arr.swap(i, largest);
        steps.push(
            Step::swap(format!("Swapping {} with larger child {}", parent, child))
                .with_indices([i, largest])
                .with_values([child, parent])
                .with_line(22)
                .with_array_state(arr)
                .with_var("heapSize", n),
        );
        heapify(steps, arr, n, largest);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::sorting::test_support::{check_sort, CASES};
    use crate::step::{apply_mutation, StepKind};

    #[test]
    fn test_sorts_cases() {
        for case in CASES {
            check_sort(&HEAP_SORT, case);
        }
    }

    #[test]
    fn test_every_step_carries_array_state() {
        let result = HEAP_SORT
            .run(&AlgorithmInput::Array(vec![4, 10, 3, 5, 1]))
            .unwrap();
        assert!(result.steps.iter().all(|s| s.array_state.is_some()));
    }

    #[test]
    fn test_array_state_matches_replay() {
        let input = vec![9, 2, 7, 4, 4, 8, 1];
        let result = HEAP_SORT.run(&AlgorithmInput::Array(input.clone())).unwrap();
        let mut replayed = input;
        for step in &result.steps {
            apply_mutation(&mut replayed, step);
            assert_eq!(step.array_state.as_ref(), Some(&replayed));
        }
    }

    #[test]
    fn test_heapify_lists_in_range_children() {
        let result = HEAP_SORT
            .run(&AlgorithmInput::Array(vec![1, 2, 3, 4]))
            .unwrap();
        // n = 4: bottom-up build starts at node 1 whose only child is 3
        let first = &result.steps[0];
        assert_eq!(first.kind, StepKind::Comparison);
        assert_eq!(first.indices, vec![1, 3]);
    }
}
