//! # Introduction
//!
//! algotrace runs classic algorithms in instrumented form. Instead of only
//! returning a result, each one records a complete, replayable trace of
//! discrete steps that a terminal UI built with
//! [ratatui](https://docs.rs/ratatui) scrubs forward and backward while
//! highlighting the matching line of the algorithm's listing.
//!
//! ## Pipeline
//!
//! ```text
//! Input → Algorithm::run → Steps → Trace → DisplayState → TUI
//! ```
//!
//! 1. [`step`]: the step record every algorithm emits.
//! 2. [`algorithms`]: seventeen static descriptors (sorting, searching,
//!    graph, DP, greedy) and the [`algorithms::Registry`] holding them.
//! 3. [`trace`]: a recorded run plus reconstruction of the array, graph or
//!    table state at any position.
//! 4. [`playback`]: the single owner of the current position, on a timer or
//!    by command.
//! 5. [`session`]: selected algorithm, input, trace and playback together.
//! 6. [`input`] and [`config`]: seeded random inputs and their bounds.
//! 7. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod algorithms;
pub mod config;
pub mod errors;
pub mod input;
pub mod playback;
pub mod session;
pub mod step;
pub mod trace;
pub mod ui;
