use super::zero_table;
use crate::algorithms::{
    Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::Step;

pub static LCS: Algorithm = Algorithm {
    name: "Longest Common Subsequence",
    category: Category::Dp,
    input: InputKind::Strings,
    description: "Finds the longest subsequence present in both strings.",
    complexity: Complexity {
        time: "O(m * n)",
        space: "O(m * n)",
    },
    code: r#"fn lcs(a: &[char], b: &[char]) -> usize {
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0; n + 1]; m + 1];

    for i in 1..=m {
        for j in 1..=n {
            if a[i - 1] == b[j - 1] {
                dp[i][j] = dp[i - 1][j - 1] + 1;
            } else {
                dp[i][j] = dp[i - 1][j].max(dp[i][j - 1]);
            }
        }
    }
    dp[m][n]
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let AlgorithmInput::Strings { first, second } = input else {
        return Err(LCS.mismatch(input));
    };
    let a: Vec<char> = first.chars().collect();
    let b: Vec<char> = second.chars().collect();
    let (m, n) = (a.len(), b.len());
    let mut table: Vec<Vec<usize>> = zero_table(m, n);
    let mut steps = Vec::new();

    let strings = |step: Step| step.with_var("first", first).with_var("second", second);

    steps.push(strings(
        Step::variable("Initializing DP table with zeros")
            .with_line(3)
            .with_var("table", &table),
    ));

    for i in 1..=m {
        for j in 1..=n {
            let (c1, c2) = (a[i - 1], b[j - 1]);
            let matched = c1 == c2;
            steps.push(strings(
                Step::comparison(format!("Comparing {} (Row {}) and {} (Col {})", c1, i, c2, j))
                    .with_line(7)
                    .with_var("table", &table)
                    .with_var("i", i)
                    .with_var("j", j)
                    .with_var("match", matched),
            ));

            let step = if matched {
                table[i][j] = table[i - 1][j - 1] + 1;
                Step::overwrite(format!(
                    "Match! 1 + diagonal ({}) = {}",
                    table[i - 1][j - 1],
                    table[i][j]
                ))
                .with_line(8)
            } else {
                table[i][j] = table[i - 1][j].max(table[i][j - 1]);
                Step::overwrite(format!(
                    "No match. Max of top ({}) and left ({}) = {}",
                    table[i - 1][j],
                    table[i][j - 1],
                    table[i][j]
                ))
                .with_line(10)
            };
            steps.push(strings(
                step.with_var("table", &table)
                    .with_var("i", i)
                    .with_var("j", j)
                    .with_var("match", matched),
            ));
        }
    }

    let (mut i, mut j) = (m, n);
    let mut path = Vec::new();
    let mut found = Vec::new();
    while i > 0 && j > 0 {
        path.push([i, j]);
        steps.push(strings(
            Step::highlight(format!("Backtracking at [{}, {}]", i, j))
                .with_line(14)
                .with_var("table", &table)
                .with_var("i", i)
                .with_var("j", j)
                .with_var("path", &path),
        ));
        if a[i - 1] == b[j - 1] {
            found.push(a[i - 1]);
            i -= 1;
            j -= 1;
        } else if table[i - 1][j] > table[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }
    path.push([i, j]);
    found.reverse();
    let subsequence: String = found.into_iter().collect();

    steps.push(strings(
        Step::highlight(format!("LCS Found: {}", subsequence))
            .with_line(14)
            .with_var("table", &table)
            .with_var("path", &path)
            .with_var("lcs", &subsequence),
    ));

    Ok(AlgorithmResult::new(steps))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_lcs(first: &str, second: &str) -> AlgorithmResult {
        LCS.run(&AlgorithmInput::Strings {
            first: first.to_string(),
            second: second.to_string(),
        })
        .unwrap()
    }

    fn is_subsequence(needle: &str, haystack: &str) -> bool {
        let mut rest = haystack.chars();
        needle.chars().all(|c| rest.any(|h| h == c))
    }

    #[test]
    fn test_classic_pair() {
        let result = run_lcs("ABCBDAB", "BDCABA");
        let last = result.steps.last().unwrap();
        assert_eq!(last.var("table").unwrap()[7][6], 4);

        let lcs = last.var("lcs").unwrap().as_str().unwrap();
        assert_eq!(lcs.len(), 4);
        assert!(is_subsequence(lcs, "ABCBDAB"));
        assert!(is_subsequence(lcs, "BDCABA"));
    }

    #[test]
    fn test_table_snapshot_per_cell() {
        let result = run_lcs("AB", "B");
        let overwrites: Vec<_> = result
            .steps
            .iter()
            .filter(|s| s.description.starts_with("Match") || s.description.starts_with("No match"))
            .collect();
        assert_eq!(overwrites.len(), 2);
        // first cell written, second not yet
        assert_eq!(overwrites[0].var("table").unwrap(), &serde_json::json!([[0, 0], [0, 0], [0, 0]]));
        assert_eq!(overwrites[1].var("table").unwrap(), &serde_json::json!([[0, 0], [0, 0], [0, 1]]));
    }

    #[test]
    fn test_empty_string() {
        let result = run_lcs("", "ABC");
        assert_eq!(result.steps.len(), 2);
        let last = result.steps.last().unwrap();
        assert_eq!(last.var("lcs").unwrap(), "");
        assert_eq!(last.var("path").unwrap(), &serde_json::json!([[0, 3]]));
    }

    #[test]
    fn test_wrong_input() {
        let err = LCS.run(&AlgorithmInput::Array(vec![1])).unwrap_err();
        assert!(matches!(err, TraceError::InputMismatch { expected: "strings", .. }));
    }
}
