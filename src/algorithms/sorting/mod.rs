//! Instrumented sorting algorithms
//!
//! All sorts take [`AlgorithmInput::Array`](super::AlgorithmInput::Array), work
//! on a private copy, and return the sorted copy as `sorted_array`.
//!
//! Emission contract shared by every sort:
//! - a `comparison` step immediately before each value comparison
//! - a `swap` step immediately before each exchange, `values` holding the
//!   post-swap contents in `indices` order
//! - `highlight` steps for positions that became final
//! - `overwrite` steps (with `values`, plus `array_state` for bulk copies)
//!   for every other write to the primary array
//!
//! Replaying only the `swap`/`overwrite` steps against the input therefore
//! rebuilds the sorted array.

pub mod bubble;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;

use crate::algorithms::Algorithm;
use crate::errors::TraceError;
use crate::step::Step;

/// Key shift that makes every value non-negative: `min(0, min(arr))`
pub(crate) fn key_offset(arr: &[i64]) -> i64 {
    arr.iter().copied().min().unwrap_or(0).min(0)
}

/// Value of `x` relative to `offset`; never negative when `offset <= x`
pub(crate) fn shifted(x: i64, offset: i64) -> u64 {
    (i128::from(x) - i128::from(offset)) as u64
}

/// Largest shifted key; an empty array counts as 0
pub(crate) fn max_key(arr: &[i64], offset: i64) -> u64 {
    arr.iter().map(|&x| shifted(x, offset)).max().unwrap_or(0)
}

/// Reject key ranges whose count array would not fit comfortably in memory
pub(crate) fn check_range(algorithm: &Algorithm, max: u64, limit: u64) -> Result<(), TraceError> {
    if max >= limit {
        return Err(TraceError::RangeTooLarge {
            algorithm: algorithm.name.to_string(),
            range: max.saturating_add(1),
            limit,
        });
    }
    Ok(())
}

/// Closing step every sort emits once the whole array is final
pub(crate) fn sorted_step(len: usize, line: usize) -> Step {
    Step::highlight("Array is sorted")
        .with_indices(0..len)
        .with_line(line)
}

/// Swap two cells, emitting the swap step first
pub(crate) fn traced_swap(
    steps: &mut Vec<Step>,
    arr: &mut [i64],
    a: usize,
    b: usize,
    description: String,
    line: usize,
) {
    steps.push(
        Step::swap(description)
            .with_indices([a, b])
            .with_values([arr[b], arr[a]])
            .with_line(line),
    );
    arr.swap(a, b);
}
