use super::{key_offset, max_key, shifted};
use crate::algorithms::{
    expect_array, Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::Step;

pub static RADIX_SORT: Algorithm = Algorithm {
    name: "Radix Sort",
    category: Category::Sorting,
    input: InputKind::Array,
    description: "Sorts numbers digit by digit, least significant digit first, with a stable \
                  counting sort over ten buckets per pass.",
    complexity: Complexity {
        time: "O(nk)",
        space: "O(n + k)",
    },
    code: r#"fn radix_sort(arr: &mut [i64]) {
    let max = arr.iter().copied().max().unwrap_or(0).max(0);
    let mut exp = 1;
    while max / exp > 0 {
        sort_by_digit(arr, exp);
        exp *= 10;
    }
}

fn sort_by_digit(arr: &mut [i64], exp: i64) {
    let digit = |x: i64| ((x / exp) % 10) as usize;
    let mut count = [0usize; 10];
    let mut output = vec![0i64; arr.len()];
    for &x in arr.iter() {
        count[digit(x)] += 1;
    }
    for d in 1..10 {
        count[d] += count[d - 1];
    }
    for &x in arr.iter().rev() {
        count[digit(x)] -= 1;
        output[count[digit(x)]] = x;
    }
    arr.copy_from_slice(&output);
}"#,
    run,
};

const BASE: u64 = 10;

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let mut arr = expect_array(&RADIX_SORT, input)?.to_vec();
    let offset = key_offset(&arr);
    let max = max_key(&arr, offset);
    let mut steps = Vec::new();

    let mut exp: u64 = 1;
    while max / exp > 0 {
        sort_by_digit(&mut steps, &mut arr, exp, offset);
        match exp.checked_mul(BASE) {
            Some(next) => exp = next,
            None => break,
        }
    }

    steps.push(super::sorted_step(arr.len(), 8).with_array_state(&arr));
    Ok(AlgorithmResult::with_array(steps, arr))
}

fn sort_by_digit(steps: &mut Vec<Step>, arr: &mut [i64], exp: u64, offset: i64) {
    let digit = |x: i64| ((shifted(x, offset) / exp) % BASE) as usize;
    let mut count = [0usize; BASE as usize];
    let mut output = vec![0i64; arr.len()];
    let mut buckets: Vec<Vec<i64>> = vec![Vec::new(); BASE as usize];

    steps.push(
        Step::variable(format!("Sorting by digit place: {}", exp))
            .with_line(5)
            .with_var("currentDigit", exp)
            .with_var("buckets", &buckets)
            .with_var("count", count),
    );

    for (i, &x) in arr.iter().enumerate() {
        let d = digit(x);
        count[d] += 1;
        buckets[d].push(x);
        steps.push(
            Step::highlight(format!("Moving {} to bucket {}", x, d))
                .with_indices([i])
                .with_line(15)
                .with_var("currentDigit", exp)
                .with_var("buckets", &buckets)
                .with_var("count", count),
        );
    }

    for d in 1..count.len() {
        count[d] += count[d - 1];
    }
    steps.push(
        Step::variable("Prefix sums give each bucket's end position")
            .with_line(18)
            .with_var("currentDigit", exp)
            .with_var("buckets", &buckets)
            .with_var("count", count),
    );

    for &x in arr.iter().rev() {
        let d = digit(x);
        count[d] -= 1;
        output[count[d]] = x;
    }

    for i in 0..arr.len() {
        arr[i] = output[i];
        steps.push(
            Step::overwrite(format!("Collecting {} back from buckets", arr[i]))
                .with_indices([i])
                .with_values([arr[i]])
                .with_line(24)
                .with_array_state(arr)
                .with_var("currentDigit", exp)
                .with_var("buckets", &buckets),
        );
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
            check_sort(&RADIX_SORT, case);
        }
    }

    #[test]
    fn test_negative_values_are_shifted() {
        check_sort(&RADIX_SORT, &[-15, 250, 3, -1, 0, 3]);
    }

    #[test]
    fn test_one_pass_per_digit() {
        let result = RADIX_SORT
            .run(&AlgorithmInput::Array(vec![170, 45, 75, 90, 802, 24, 2, 66]))
            .unwrap();
        let passes: Vec<_> = result
            .steps
            .iter()
            .filter(|s| s.description.starts_with("Sorting by digit place"))
            .map(|s| s.var("currentDigit").unwrap().as_u64().unwrap())
            .collect();
        assert_eq!(passes, vec![1, 10, 100]);
    }

    #[test]
    fn test_buckets_snapshot_before_collect() {
        let result = RADIX_SORT
            .run(&AlgorithmInput::Array(vec![21, 12, 11]))
            .unwrap();
        let first_collect = result
            .steps
            .iter()
            .find(|s| s.kind == StepKind::Overwrite)
            .unwrap();
        let buckets = first_collect.var("buckets").unwrap();
        assert_eq!(buckets[1], serde_json::json!([21, 11]));
        assert_eq!(buckets[2], serde_json::json!([12]));
    }

    #[test]
    fn test_all_zero_input_has_no_passes() {
        let result = RADIX_SORT
            .run(&AlgorithmInput::Array(vec![0, 0, 0]))
            .unwrap();
        assert_eq!(result.steps.len(), 1);
    }
}
