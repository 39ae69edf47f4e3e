//! Runtime configuration
//!
//! Everything here has a default, so the viewer runs without a config file.
//! A JSON file passed with `--config` may override any subset of fields:
//!
//! ```json
//! { "intervalMs": 250, "input": { "arrayLen": 12, "seed": 7 } }
//! ```

use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;
use std::time::Duration;

/// Target value Linear Search looks for
pub const LINEAR_SEARCH_TARGET: i64 = 42;

/// Largest shifted key span counting sort will allocate a count array for
pub const MAX_COUNTING_RANGE: u64 = 1_000_000;

/// Fastest autoplay interval
pub const MIN_INTERVAL: Duration = Duration::from_millis(50);

/// Slowest autoplay interval
pub const MAX_INTERVAL: Duration = Duration::from_millis(3000);

/// Step applied by the speed up / slow down keys
pub const INTERVAL_STEP: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Autoplay interval in milliseconds
    pub interval_ms: u64,
    /// Algorithm selected at startup, by name
    pub algorithm: Option<String>,
    pub input: InputConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            interval_ms: 500,
            algorithm: None,
            input: InputConfig::default(),
        }
    }
}

impl Config {
    /// Load a config file, filling omitted fields with defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let display = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: display.clone(),
            source,
        })?;
        let config: Config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: display,
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms).clamp(MIN_INTERVAL, MAX_INTERVAL)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.input.validate()
    }
}

/// Bounds for randomly generated inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InputConfig {
    pub array_len: usize,
    pub value_min: i64,
    pub value_max: i64,
    /// Length of both LCS strings
    pub string_len: usize,
    pub item_count: usize,
    pub weight_min: usize,
    pub weight_max: usize,
    pub item_value_min: u64,
    pub item_value_max: u64,
    pub capacity_min: usize,
    pub capacity_max: usize,
    pub activity_count: usize,
    /// Activity starts are drawn from `0..activity_start_max`
    pub activity_start_max: u32,
    pub duration_min: u32,
    pub duration_max: u32,
    pub coins: Vec<u64>,
    pub target_min: u64,
    pub target_max: u64,
    /// Fixed seed for reproducible inputs; entropy when absent
    pub seed: Option<u64>,
}

impl Default for InputConfig {
    fn default() -> Self {
        InputConfig {
            array_len: 20,
            value_min: 5,
            value_max: 104,
            string_len: 8,
            item_count: 5,
            weight_min: 1,
            weight_max: 8,
            item_value_min: 5,
            item_value_max: 24,
            capacity_min: 10,
            capacity_max: 19,
            activity_count: 8,
            activity_start_max: 15,
            duration_min: 1,
            duration_max: 5,
            coins: vec![1, 5, 10, 25],
            target_min: 1,
            target_max: 99,
            seed: None,
        }
    }
}

impl InputConfig {
    pub fn value_range(&self) -> RangeInclusive<i64> {
        self.value_min..=self.value_max
    }

    pub fn weight_range(&self) -> RangeInclusive<usize> {
        self.weight_min..=self.weight_max
    }

    pub fn item_value_range(&self) -> RangeInclusive<u64> {
        self.item_value_min..=self.item_value_max
    }

    pub fn capacity_range(&self) -> RangeInclusive<usize> {
        self.capacity_min..=self.capacity_max
    }

    pub fn duration_range(&self) -> RangeInclusive<u32> {
        self.duration_min..=self.duration_max
    }

    pub fn target_range(&self) -> RangeInclusive<u64> {
        self.target_min..=self.target_max
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        fn ordered<T: PartialOrd + std::fmt::Display>(
            field: &'static str,
            lo: T,
            hi: T,
        ) -> Result<(), ConfigError> {
            if lo > hi {
                return Err(ConfigError::Invalid {
                    field,
                    message: format!("minimum {} exceeds maximum {}", lo, hi),
                });
            }
            Ok(())
        }

        ordered("value", self.value_min, self.value_max)?;
        ordered("weight", self.weight_min, self.weight_max)?;
        ordered("itemValue", self.item_value_min, self.item_value_max)?;
        ordered("capacity", self.capacity_min, self.capacity_max)?;
        ordered("duration", self.duration_min, self.duration_max)?;
        ordered("target", self.target_min, self.target_max)?;

        if self.weight_min == 0 {
            return Err(ConfigError::Invalid {
                field: "weightMin",
                message: "knapsack item weights must be positive".to_string(),
            });
        }
        if self.coins.is_empty() || self.coins.contains(&0) {
            return Err(ConfigError::Invalid {
                field: "coins",
                message: "denominations must be a non-empty list of positive values".to_string(),
            });
        }
        if self.activity_start_max == 0 {
            return Err(ConfigError::Invalid {
                field: "activityStartMax",
                message: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
