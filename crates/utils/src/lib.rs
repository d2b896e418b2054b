//! Shared utilities for stepwise pipelines
//!
//! This crate holds what the composition core deliberately leaves out: the
//! tracing setup used by binaries, and a set of ordinary fallible operations
//! (file reading, decoding, parsing, randomness) that serve as pipeline steps.

pub mod ops;
pub mod steps;
pub mod tracing;

pub use ops::*;
pub use steps::{by_name, parse_pipeline, Payload, STEP_NAMES};
