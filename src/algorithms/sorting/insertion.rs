use super::sorted_step;
use crate::algorithms::{
    expect_array, Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::Step;

pub static INSERTION_SORT: Algorithm = Algorithm {
    name: "Insertion Sort",
    category: Category::Sorting,
    input: InputKind::Array,
    description: "Builds the sorted array one item at a time by shifting larger elements right \
                  and inserting each key into place.",
    complexity: Complexity {
        time: "O(n²)",
        space: "O(1)",
    },
    code: r#"fn insertion_sort(arr: &mut [i64]) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let mut arr = expect_array(&INSERTION_SORT, input)?.to_vec();
    let n = arr.len();
    let mut steps = Vec::new();

    for i in 1..n {
        let key = arr[i];
        let mut j = i;
        steps.push(
            Step::highlight(format!("Selected key {} at index {}", key, i))
                .with_indices([i])
                .with_line(3)
                .with_var("key", key),
        );

        while j > 0 {
            steps.push(
                Step::comparison(format!("Comparing {} > {}", arr[j - 1], key))
                    .with_indices([j - 1, j])
                    .with_line(5)
                    .with_var("key", key),
            );
            if arr[j - 1] <= key {
                break;
            }
            steps.push(
                Step::overwrite(format!("Moving {} to index {}", arr[j - 1], j))
                    .with_indices([j])
                    .with_values([arr[j - 1]])
                    .with_line(6)
                    .with_var("key", key),
            );
            arr[j] = arr[j - 1];
            j -= 1;
        }

        steps.push(
            Step::overwrite(format!("Inserted key {} at index {}", key, j))
                .with_indices([j])
                .with_values([key])
                .with_line(9)
                .with_var("key", key),
        );
        arr[j] = key;
    }

    steps.push(sorted_step(n, 11));
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
            check_sort(&INSERTION_SORT, case);
        }
    }

    #[test]
    fn test_failing_comparison_is_recorded() {
        // One comparison per key on sorted input, each ending the inner loop
        let result = INSERTION_SORT
            .run(&AlgorithmInput::Array(vec![1, 2, 3]))
            .unwrap();
        let comparisons: Vec<_> = result
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Comparison)
            .map(|s| s.indices.clone())
            .collect();
        assert_eq!(comparisons, vec![vec![0, 1], vec![1, 2]]);
    }
}
