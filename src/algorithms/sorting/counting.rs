use super::{check_range, key_offset, max_key, shifted};
use crate::algorithms::{
    expect_array, Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::config::MAX_COUNTING_RANGE;
use crate::errors::TraceError;
use crate::step::Step;

pub static COUNTING_SORT: Algorithm = Algorithm {
    name: "Counting Sort",
    category: Category::Sorting,
    input: InputKind::Array,
    description: "Non-comparison sort: counts occurrences of each value, turns the counts into \
                  positions with a prefix sum and places elements stably from the end.",
    complexity: Complexity {
        time: "O(n + k)",
        space: "O(k)",
    },
    code: r#"fn counting_sort(arr: &mut [i64]) {
    let max = arr.iter().copied().max().unwrap_or(0).max(0) as usize;
    let mut count = vec![0usize; max + 1];
    let mut output = vec![0i64; arr.len()];
    for &x in arr.iter() {
        count[x as usize] += 1;
    }
    for i in 1..=max {
        count[i] += count[i - 1];
    }
    for &x in arr.iter().rev() {
        count[x as usize] -= 1;
        output[count[x as usize]] = x;
    }
    arr.copy_from_slice(&output);
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let mut arr = expect_array(&COUNTING_SORT, input)?.to_vec();
    let n = arr.len();
    let offset = key_offset(&arr);
    let max = max_key(&arr, offset);
    check_range(&COUNTING_SORT, max, MAX_COUNTING_RANGE)?;

    let key = |x: i64| shifted(x, offset) as usize;
    let mut count = vec![0usize; max as usize + 1];
    let mut output = vec![0i64; n];
    let mut steps = Vec::new();

    steps.push(
        Step::variable("Initializing count array and output array")
            .with_line(3)
            .with_var("count", &count)
            .with_var("output", &output)
            .with_var("offset", offset),
    );

    for i in 0..n {
        let x = arr[i];
        steps.push(
            Step::highlight(format!("Counting occurrences of {}", x))
                .with_indices([i])
                .with_line(5)
                .with_var("count", &count)
                .with_var("output", &output),
        );
        count[key(x)] += 1;
        steps.push(
            Step::variable(format!("Incremented count for {} to {}", x, count[key(x)]))
                .with_indices([i])
                .with_line(6)
                .with_var("count", &count)
                .with_var("output", &output),
        );
    }

    for i in 1..count.len() {
        count[i] += count[i - 1];
        steps.push(
            Step::variable(format!(
                "Added count[{}] to count[{}], now {}",
                i - 1,
                i,
                count[i]
            ))
            .with_line(9)
            .with_var("count", &count)
            .with_var("output", &output),
        );
    }

    for i in (0..n).rev() {
        let x = arr[i];
        let pos = count[key(x)] - 1;
        steps.push(
            Step::highlight(format!("Placing {} at index {} in output array", x, pos))
                .with_indices([i])
                .with_line(12)
                .with_var("count", &count)
                .with_var("output", &output),
        );
        count[key(x)] -= 1;
        output[pos] = x;
        steps.push(
            Step::auxiliary(format!("Placed {} and decremented count", x))
                .with_indices([i])
                .with_line(13)
                .with_var("count", &count)
                .with_var("output", &output),
        );
    }

    for i in 0..n {
        arr[i] = output[i];
        steps.push(
            Step::overwrite(format!(
                "Copying sorted value {} back to original array",
                output[i]
            ))
            .with_indices([i])
            .with_values([output[i]])
            .with_line(15)
            .with_array_state(&arr)
            .with_var("count", &count)
            .with_var("output", &output),
        );
    }

    steps.push(super::sorted_step(n, 16).with_array_state(&arr));
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
            check_sort(&COUNTING_SORT, case);
        }
    }

    #[test]
    fn test_negative_values_are_shifted() {
        check_sort(&COUNTING_SORT, &[3, -2, 0, -7, 3]);
    }

    #[test]
    fn test_count_array_sized_max_plus_one() {
        let result = COUNTING_SORT
            .run(&AlgorithmInput::Array(vec![3, 1, 3]))
            .unwrap();
        let count = result.steps[0].var("count").unwrap().as_array().unwrap();
        assert_eq!(count.len(), 4);
    }

    #[test]
    fn test_empty_input_uses_max_zero() {
        let result = COUNTING_SORT.run(&AlgorithmInput::Array(vec![])).unwrap();
        let count = result.steps[0].var("count").unwrap().as_array().unwrap();
        assert_eq!(count.len(), 1);
        assert_eq!(result.sorted_array, Some(vec![]));
    }

    #[test]
    fn test_output_fill_scans_from_end() {
        let result = COUNTING_SORT
            .run(&AlgorithmInput::Array(vec![2, 0, 1]))
            .unwrap();
        let placed: Vec<usize> = result
            .steps
            .iter()
            .filter(|s| s.kind == StepKind::Auxiliary)
            .map(|s| s.indices[0])
            .collect();
        assert_eq!(placed, vec![2, 1, 0]);
    }

    #[test]
    fn test_ends_with_sorted_highlight() {
        let result = COUNTING_SORT
            .run(&AlgorithmInput::Array(vec![4, 1, 3]))
            .unwrap();
        let last = result.steps.last().unwrap();
        assert_eq!(last.kind, StepKind::Highlight);
        assert_eq!(last.description, "Array is sorted");
        assert_eq!(last.indices, vec![0, 1, 2]);
        assert_eq!(last.array_state, Some(vec![1, 3, 4]));
    }

    #[test]
    fn test_huge_range_rejected() {
        let err = COUNTING_SORT
            .run(&AlgorithmInput::Array(vec![0, i64::MAX]))
            .unwrap_err();
        assert!(matches!(err, TraceError::RangeTooLarge { .. }));
    }
}
