//! Error types for simulation requests.
//!
//! Every failure is returned as a structured [`SimulationError`]; its
//! `Display` text is meant to be shown to the end user as-is.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SimulationError>;

/// Why a simulation request was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimulationError {
    /// A field is malformed or out of range (bad integer, empty name,
    /// non-positive quantum, duplicate process name, ...).
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// No valid processes were supplied.
    #[error("Please enter at least one process.")]
    EmptyInput,
    /// The policy identifier is not one of the supported algorithms.
    #[error("Unknown scheduling policy '{0}'. Valid: FCFS, SJN, SRT, RoundRobin")]
    UnknownPolicy(String),
}

impl SimulationError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = SimulationError::invalid("quantum must be positive");
        assert_eq!(e.to_string(), "Invalid input: quantum must be positive");

        assert_eq!(
            SimulationError::EmptyInput.to_string(),
            "Please enter at least one process."
        );

        let e = SimulationError::UnknownPolicy("Bogus".into());
        assert!(e.to_string().contains("'Bogus'"));
    }
}
