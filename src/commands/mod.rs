//! Command implementations.
//!
//! - **gate**: collect coverage, summarize it and check it against thresholds

pub mod gate;

pub use gate::{build_source, evaluate_source, gate_coverage, GateOptions, GateOutcome};
