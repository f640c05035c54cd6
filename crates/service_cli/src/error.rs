//! CLI error types.

use loss_engine::simulation::{ConfigError as EngineConfigError, SimulationError};
use loss_engine::zone::ZoneError;
use thiserror::Error;

/// CLI result alias.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the user by `gethurricaneloss`.
#[derive(Debug, Error)]
pub enum CliError {
    /// Wrong number of positional parameters.
    #[error("Wrong number of parameters: expected 6, got {given}")]
    ArgumentCount {
        /// Number of positional parameters supplied.
        given: usize,
    },

    /// A model parameter failed to parse or is out of range.
    #[error("Invalid argument {value} for {name}: {reason}")]
    ParameterParse {
        /// Human-readable parameter name.
        name: &'static str,
        /// The raw value as typed.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The sample count failed to parse or is out of range.
    #[error("Invalid number of samples {value}: {reason}")]
    SampleCount {
        /// The raw value as typed.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// Zone construction rejected the parameters.
    #[error("Model error: {0}")]
    Model(#[from] ZoneError),

    /// Engine configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] EngineConfigError),

    /// The simulation could not produce a loss.
    #[error("Failed to calculate the loss. Please check your params.")]
    Simulation(#[from] SimulationError),

    /// Writing the report failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Whether the usage text should follow the error message.
    pub fn shows_usage(&self) -> bool {
        matches!(
            self,
            Self::ArgumentCount { .. } | Self::ParameterParse { .. } | Self::SampleCount { .. }
        )
    }
}
