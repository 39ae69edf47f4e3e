//! Seeded random inputs for every input kind
//!
//! Generation is driven by a [`ChaCha8Rng`] so a fixed seed reproduces the same
//! arrays, strings and item sets on every platform.

use crate::algorithms::{Activity, AlgorithmInput, InputKind, Item};
use crate::config::InputConfig;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// RNG seeded from `seed`, or from OS entropy when absent
pub fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// Fresh random input of the requested kind
pub fn generate(kind: InputKind, config: &InputConfig, rng: &mut ChaCha8Rng) -> AlgorithmInput {
    match kind {
        InputKind::Array => AlgorithmInput::Array(random_array(config, rng)),
        InputKind::Strings => AlgorithmInput::Strings {
            first: random_string(config.string_len, rng),
            second: random_string(config.string_len, rng),
        },
        InputKind::Knapsack => AlgorithmInput::Knapsack {
            items: random_items(config, rng),
            capacity: rng.gen_range(config.capacity_range()),
        },
        InputKind::Activities => AlgorithmInput::Activities(random_activities(config, rng)),
        InputKind::Coins => AlgorithmInput::Coins {
            coins: config.coins.clone(),
            target: rng.gen_range(config.target_range()),
        },
        InputKind::Graph => AlgorithmInput::Graph,
    }
}

pub fn random_array(config: &InputConfig, rng: &mut ChaCha8Rng) -> Vec<i64> {
    (0..config.array_len)
        .map(|_| rng.gen_range(config.value_range()))
        .collect()
}

/// Uppercase A-Z string
pub fn random_string(len: usize, rng: &mut ChaCha8Rng) -> String {
    (0..len).map(|_| char::from(rng.gen_range(b'A'..=b'Z'))).collect()
}

pub fn random_items(config: &InputConfig, rng: &mut ChaCha8Rng) -> Vec<Item> {
    (1..=config.item_count as u32)
        .map(|id| Item {
            id,
            weight: rng.gen_range(config.weight_range()),
            value: rng.gen_range(config.item_value_range()),
        })
        .collect()
}

pub fn random_activities(config: &InputConfig, rng: &mut ChaCha8Rng) -> Vec<Activity> {
    (1..=config.activity_count as u32)
        .map(|id| {
            let start = rng.gen_range(0..config.activity_start_max);
            let duration = rng.gen_range(config.duration_range());
            Activity {
                id,
                start,
                end: start.saturating_add(duration),
            }
        })
        .collect()
}
