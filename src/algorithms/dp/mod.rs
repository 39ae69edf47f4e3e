//! Dynamic programming over 2-D tables
//!
//! Both algorithms snapshot the whole table under `table` on every step so any
//! position of the trace renders without replay. Backtracking walks from the
//! bottom-right cell and carries the visited cells under `path`.

pub mod knapsack;
pub mod lcs;

/// A `(rows + 1) x (cols + 1)` zero table
pub(crate) fn zero_table<T: Clone + Default>(rows: usize, cols: usize) -> Vec<Vec<T>> {
    vec![vec![T::default(); cols + 1]; rows + 1]
}
