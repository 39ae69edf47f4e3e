use super::zero_table;
use crate::algorithms::{
    Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind, Item,
};
use crate::errors::TraceError;
use crate::step::Step;

pub static KNAPSACK: Algorithm = Algorithm {
    name: "0/1 Knapsack",
    category: Category::Dp,
    input: InputKind::Knapsack,
    description: "Maximizes the total value of items packed into a knapsack of fixed capacity, \
                  taking each item at most once.",
    complexity: Complexity {
        time: "O(N * W)",
        space: "O(N * W)",
    },
    code: r#"fn knapsack(items: &[Item], capacity: usize) -> u64 {
    let n = items.len();
    let mut dp = vec![vec![0; capacity + 1]; n + 1];

    for i in 1..=n {
        let item = items[i - 1];
        for w in 1..=capacity {
            if item.weight <= w {
                let include = item.value + dp[i - 1][w - item.weight];
                dp[i][w] = include.max(dp[i - 1][w]);
            } else {
                dp[i][w] = dp[i - 1][w];
            }
        }
    }
    dp[n][capacity]
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let AlgorithmInput::Knapsack { items, capacity } = input else {
        return Err(KNAPSACK.mismatch(input));
    };
    let items: &[Item] = items;
    if let Some(item) = items.iter().find(|item| item.weight == 0) {
        return Err(TraceError::InvalidInput {
            algorithm: KNAPSACK.name.to_string(),
            message: format!("item {} has weight 0; weights must be positive", item.id),
        });
    }
    let capacity = *capacity;
    let n = items.len();
    let mut table: Vec<Vec<u64>> = zero_table(n, capacity);
    let mut steps = Vec::new();

    let context = |step: Step| step.with_var("items", items).with_var("capacity", capacity);

    steps.push(context(
        Step::variable("Initializing DP table")
            .with_line(3)
            .with_var("table", &table),
    ));

    for i in 1..=n {
        let item = items[i - 1];
        for w in 1..=capacity {
            steps.push(context(
                Step::comparison(format!(
                    "Item {} (W:{}, V:{}) at Capacity {}",
                    item.id, item.weight, item.value, w
                ))
                .with_line(8)
                .with_var("table", &table)
                .with_var("i", i)
                .with_var("w", w),
            ));

            let step = if item.weight <= w {
                let include = item.value + table[i - 1][w - item.weight];
                let exclude = table[i - 1][w];
                table[i][w] = include.max(exclude);
                Step::overwrite(format!(
                    "Max(Include: {}, Exclude: {}) = {}",
                    include, exclude, table[i][w]
                ))
                .with_line(10)
            } else {
                table[i][w] = table[i - 1][w];
                Step::overwrite(format!("Too heavy. Exclude: {}", table[i][w])).with_line(12)
            };
            steps.push(context(
                step.with_var("table", &table)
                    .with_var("i", i)
                    .with_var("w", w),
            ));
        }
    }

    let (mut i, mut w) = (n, capacity);
    let mut path = Vec::new();
    let mut chosen = Vec::new();
    while i > 0 && w > 0 {
        path.push([i, w]);
        steps.push(context(
            Step::highlight(format!("Backtracking at Item {}, Capacity {}", i, w))
                .with_line(16)
                .with_var("table", &table)
                .with_var("i", i)
                .with_var("w", w)
                .with_var("path", &path),
        ));
        if table[i][w] != table[i - 1][w] {
            let item = items[i - 1];
            chosen.push(item.id);
            w -= item.weight;
        }
        i -= 1;
    }
    path.push([i, w]);
    chosen.reverse();

    let listed: Vec<String> = chosen.iter().map(|id| id.to_string()).collect();
    steps.push(context(
        Step::highlight(format!("Chosen Items: {}", listed.join(", ")))
            .with_line(16)
            .with_var("table", &table)
            .with_var("path", &path)
            .with_var("chosenItems", &chosen),
    ));

    Ok(AlgorithmResult::new(steps))
}
