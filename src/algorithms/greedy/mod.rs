//! Greedy algorithms
//!
//! Neither touches a primary array; every step carries the full running
//! selection so a timeline or coin tally renders from the current step alone.

pub mod activity;
pub mod coin_change;
