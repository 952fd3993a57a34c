//! Engine configuration and constants.
//!
//! This module provides:
//! - Operational constants (timeouts, limits)
//! - Tunable scoring configuration (weights, thresholds, vocabularies)
//! - Logging option types

mod constants;
mod scoring;
mod types;

pub use constants::*;
pub use scoring::{EngineConfig, ProbeTimeouts, ScoringWeights, Thresholds};
pub use types::{LogFormat, LogLevel};
