//! Instrumented searching algorithms
//!
//! Both searches take [`AlgorithmInput::Array`](super::AlgorithmInput::Array)
//! and report the array they actually searched as `sorted_array`, so a viewer
//! never pairs a target with the wrong array.

pub mod binary;
pub mod linear;
