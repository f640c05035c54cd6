//! Error types for zone construction.

use thiserror::Error;

use crate::distributions::DistributionError;

/// Zone validation error.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ZoneError {
    /// A parameter is outside its valid range.
    #[error("Invalid zone parameter '{name}': {value} ({reason})")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Why the value was rejected.
        reason: &'static str,
    },

    /// A sampler rejected the parameters.
    #[error(transparent)]
    Distribution(#[from] DistributionError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ZoneError::InvalidParameter {
            name: "loss_mean",
            value: -3.0,
            reason: "must be positive",
        };
        let msg = err.to_string();
        assert!(msg.contains("loss_mean"));
        assert!(msg.contains("-3"));
    }

    #[test]
    fn test_from_distribution_error() {
        let err: ZoneError = DistributionError::InvalidRate { rate: -1.0 }.into();
        assert!(matches!(err, ZoneError::Distribution(_)));
    }
}
