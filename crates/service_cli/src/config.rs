//! Runtime configuration for the CLI.
//!
//! The worker budget and log level come from flags or environment
//! variables and are resolved once, before any simulation starts.

use loss_engine::simulation::{ConfigError as EngineConfigError, ExecutionConfig};
use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Builds the engine configuration, detecting the worker budget from the
/// hardware unless `workers` overrides it.
pub fn execution_config(workers: Option<usize>) -> Result<ExecutionConfig, EngineConfigError> {
    match workers {
        Some(workers) => ExecutionConfig::builder().workers(workers).build(),
        None => Ok(ExecutionConfig::detect()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!("INFO".parse::<LogLevel>().unwrap(), LogLevel::Info);
        assert_eq!("trace".parse::<LogLevel>().unwrap(), LogLevel::Trace);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_log_level_default() {
        assert_eq!(LogLevel::default(), LogLevel::Warn);
        assert_eq!(LogLevel::default().to_string(), "warn");
    }

    #[test]
    fn test_execution_config_override() {
        let config = execution_config(Some(3)).unwrap();
        assert_eq!(config.workers(), 3);
        assert_eq!(config.seed(), None);
    }

    #[test]
    fn test_execution_config_rejects_zero_workers() {
        assert!(execution_config(Some(0)).is_err());
    }

    #[test]
    fn test_execution_config_detected() {
        assert!(execution_config(None).unwrap().workers() >= 1);
    }
}
