use crate::algorithms::{
    Algorithm, AlgorithmInput, AlgorithmResult, Category, Complexity, InputKind,
};
use crate::errors::TraceError;
use crate::step::Step;
use std::collections::BTreeMap;

pub static COIN_CHANGE: Algorithm = Algorithm {
    name: "Counting Money",
    category: Category::Greedy,
    input: InputKind::Coins,
    description: "Makes change for a target amount greedily, always taking as many of the \
                  largest remaining denomination as fit.",
    complexity: Complexity {
        time: "O(N) where N is the number of denominations",
        space: "O(1)",
    },
    code: r#"fn coin_change(coins: &mut [u64], target: u64) -> BTreeMap<u64, u64> {
    let mut remaining = target;
    let mut selected = BTreeMap::new();
    coins.sort_unstable_by(|a, b| b.cmp(a));

    for &coin in coins.iter() {
        if coin <= remaining {
            let count = remaining / coin;
            remaining -= count * coin;
            selected.insert(coin, count);
        }
    }
    selected
}"#,
    run,
};

fn run(input: &AlgorithmInput) -> Result<AlgorithmResult, TraceError> {
    let AlgorithmInput::Coins { coins, target } = input else {
        return Err(COIN_CHANGE.mismatch(input));
    };
    if coins.contains(&0) {
        return Err(TraceError::InvalidInput {
            algorithm: COIN_CHANGE.name.to_string(),
            message: "coin denominations must be positive".to_string(),
        });
    }

    let target = *target;
    let mut remaining = target;
    let mut selected: BTreeMap<u64, u64> = coins.iter().map(|&c| (c, 0)).collect();
    let mut steps = vec![Step::variable(format!("Target amount: {}", target))
        .with_line(2)
        .with_var("remaining", remaining)
        .with_var("selectedCoins", &selected)];

    let mut sorted = coins.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));

    for coin in sorted {
        steps.push(
            Step::comparison(format!("Checking coin denomination: {}", coin))
                .with_line(7)
                .with_var("remaining", remaining)
                .with_var("currentCoin", coin)
                .with_var("selectedCoins", &selected),
        );
        if coin <= remaining {
            let count = remaining / coin;
            remaining -= count * coin;
            selected.insert(coin, count);
            steps.push(
                Step::highlight(format!(
                    "Selected {} coin(s) of value {}. Remaining: {}",
                    count, coin, remaining
                ))
                .with_line(10)
                .with_var("remaining", remaining)
                .with_var("currentCoin", coin)
                .with_var("selectedCoins", &selected)
                .with_var("addedCount", count),
            );
        }
    }

    steps.push(
        Step::variable(format!("Finished! Remaining amount: {}", remaining))
            .with_line(13)
            .with_var("remaining", remaining)
            .with_var("selectedCoins", &selected),
    );

    Ok(AlgorithmResult::new(steps))
}
