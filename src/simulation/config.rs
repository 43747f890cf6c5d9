//! Driver configuration.

use serde::{Deserialize, Serialize};

/// Default number of process rows the input form offers.
pub const DEFAULT_MAX_ROWS: usize = 5;

/// Settings for a [`super::Simulator`].
///
/// Missing fields fall back to their defaults when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Maximum raw rows accepted per request (blank rows included).
    pub max_rows: usize,
}

impl SimulatorConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of raw rows.
    pub fn with_max_rows(mut self, max_rows: usize) -> Self {
        self.max_rows = max_rows;
        self
    }
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}
