//! Error types for sampler construction.

use thiserror::Error;

/// Invalid distribution parameter.
///
/// # Examples
/// ```
/// use loss_engine::distributions::DistributionError;
///
/// let err = DistributionError::InvalidMean { mean: -1.0 };
/// assert!(err.to_string().contains("mean"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DistributionError {
    /// Landfall rate is negative or not finite.
    #[error("Invalid landfall rate: λ = {rate} (must be finite and non-negative)")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Loss mean is non-positive or not finite.
    #[error("Invalid loss mean: {mean} (must be finite and positive)")]
    InvalidMean {
        /// The rejected mean
        mean: f64,
    },

    /// Loss standard deviation is negative or not finite.
    #[error("Invalid loss stddev: {stddev} (must be finite and non-negative)")]
    InvalidStdDev {
        /// The rejected standard deviation
        stddev: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DistributionError::InvalidRate { rate: -0.5 };
        assert!(err.to_string().contains("-0.5"));

        let err = DistributionError::InvalidStdDev { stddev: f64::NAN };
        assert!(err.to_string().contains("stddev"));
    }
}
