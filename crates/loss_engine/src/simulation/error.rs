//! Error types for simulation setup and execution.

use thiserror::Error;

/// Configuration error for the coordinator or a request.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Worker count outside valid range [1, MAX_WORKERS].
    #[error("Invalid worker count {0}: must be in range [1, {max}]", max = super::config::MAX_WORKERS)]
    InvalidWorkerCount(usize),

    /// Requested zero simulation years.
    #[error("Invalid year count {0}: at least one simulation year is required")]
    InvalidYearCount(u64),
}

/// Failure of a simulation run.
///
/// Once a request is validated a run cannot fail numerically; the only
/// failure is a model with nothing to simulate.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// The request contains no zones.
    #[error("Simulation model has no zones")]
    EmptyModel,
}
