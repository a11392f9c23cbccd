//! Simulation configuration.

use serde::{Deserialize, Serialize};

/// Reward returned when an already-finished job is dispatched.
pub const DEFAULT_INVALID_DISPATCH_PENALTY: f64 = -1.0;

/// Tunable simulation parameters.
///
/// Deserializes with defaults for missing fields, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Reward for dispatching a job with no remaining operations.
    pub invalid_dispatch_penalty: f64,
}

impl SimulationConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the invalid-dispatch penalty.
    pub fn with_invalid_dispatch_penalty(mut self, penalty: f64) -> Self {
        self.invalid_dispatch_penalty = penalty;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            invalid_dispatch_penalty: DEFAULT_INVALID_DISPATCH_PENALTY,
        }
    }
}
