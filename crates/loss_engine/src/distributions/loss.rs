//! Log-normal economic loss per landfall.
//!
//! The user configures the loss distribution by its mean `m` and standard
//! deviation `s`. The underlying Gaussian parameters follow from moment
//! matching:
//!
//! ```text
//! γ = 1 + s² / m²
//! μ = ln(m / √γ)
//! σ = √(ln γ)
//! ```
//!
//! so that `exp(N(μ, σ))` has mean `m` and standard deviation `s`.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::error::DistributionError;

/// Location and scale of the Gaussian underlying the loss distribution.
///
/// Derived once per zone; never recomputed per sample.
///
/// # Examples
///
/// ```rust
/// use loss_engine::distributions::LossParameters;
///
/// let params = LossParameters::from_moments(1.0, 0.0).unwrap();
/// assert_eq!(params.location(), 0.0);
/// assert_eq!(params.scale(), 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LossParameters {
    gamma: f64,
    location: f64,
    scale: f64,
}

impl LossParameters {
    /// Derives location/scale from the desired loss mean and standard deviation.
    ///
    /// # Errors
    ///
    /// - [`DistributionError::InvalidMean`] if `mean` is not finite and positive
    /// - [`DistributionError::InvalidStdDev`] if `stddev` is negative or not finite
    pub fn from_moments(mean: f64, stddev: f64) -> Result<Self, DistributionError> {
        if !mean.is_finite() || mean <= 0.0 {
            return Err(DistributionError::InvalidMean { mean });
        }
        if !stddev.is_finite() || stddev < 0.0 {
            return Err(DistributionError::InvalidStdDev { stddev });
        }

        // Ratio first; squaring each side alone under/overflows at extreme scales.
        let cv = stddev / mean;
        let gamma = 1.0 + cv * cv;
        if !gamma.is_finite() {
            return Err(DistributionError::InvalidStdDev { stddev });
        }
        let location = (mean / gamma.sqrt()).ln();
        let scale = gamma.ln().sqrt();

        Ok(Self {
            gamma,
            location,
            scale,
        })
    }

    /// Returns γ = 1 + s²/m².
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// Returns μ, the mean of the underlying Gaussian.
    #[inline]
    pub fn location(&self) -> f64 {
        self.location
    }

    /// Returns σ, the standard deviation of the underlying Gaussian.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Mean of the log-normal implied by (μ, σ): `exp(μ + σ²/2)`.
    #[inline]
    pub fn implied_mean(&self) -> f64 {
        (self.location + 0.5 * self.scale * self.scale).exp()
    }

    /// Standard deviation of the log-normal implied by (μ, σ).
    #[inline]
    pub fn implied_stddev(&self) -> f64 {
        let s2 = self.scale * self.scale;
        ((s2.exp() - 1.0) * (2.0 * self.location + s2).exp()).sqrt()
    }
}

/// Log-normal loss sampler.
///
/// Draws `z ~ N(location, scale)` and returns `exp(z)`, which is always
/// strictly positive.
///
/// # Examples
///
/// ```rust
/// use loss_engine::distributions::{LossParameters, LossSampler};
/// use loss_engine::rng::SimRng;
///
/// let params = LossParameters::from_moments(2.0, 1.0).unwrap();
/// let sampler = LossSampler::new(params).unwrap();
/// let mut rng = SimRng::from_seed(42);
///
/// assert!(sampler.sample(&mut rng) > 0.0);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct LossSampler {
    params: LossParameters,
    normal: Normal<f64>,
}

impl LossSampler {
    /// Creates a sampler from pre-derived parameters.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidStdDev`] if the Gaussian rejects
    /// the scale.
    pub fn new(params: LossParameters) -> Result<Self, DistributionError> {
        let normal = Normal::new(params.location, params.scale)
            .map_err(|_| DistributionError::InvalidStdDev { stddev: params.scale })?;
        Ok(Self { params, normal })
    }

    /// Convenience constructor from loss mean and standard deviation.
    ///
    /// # Errors
    ///
    /// See [`LossParameters::from_moments`].
    pub fn from_moments(mean: f64, stddev: f64) -> Result<Self, DistributionError> {
        LossParameters::from_moments(mean, stddev).and_then(Self::new)
    }

    /// Returns the derived Gaussian parameters.
    #[inline]
    pub fn params(&self) -> &LossParameters {
        &self.params
    }

    /// Draws one economic loss.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.normal.sample(rng).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SimRng;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_moments() {
        // m = s = 1 ⇒ γ = 2, μ = ln(1/√2), σ = √(ln 2)
        let params = LossParameters::from_moments(1.0, 1.0).unwrap();

        assert_relative_eq!(params.gamma(), 2.0, epsilon = 1e-15);
        assert_relative_eq!(params.location(), -0.5 * 2.0_f64.ln(), epsilon = 1e-15);
        assert_relative_eq!(params.scale(), 2.0_f64.ln().sqrt(), epsilon = 1e-15);
    }

    #[test]
    fn test_implied_moments_round_trip() {
        let params = LossParameters::from_moments(3.5, 2.25).unwrap();

        assert_relative_eq!(params.implied_mean(), 3.5, max_relative = 1e-12);
        assert_relative_eq!(params.implied_stddev(), 2.25, max_relative = 1e-12);
    }

    #[test]
    fn test_rejects_invalid_mean() {
        assert!(matches!(
            LossParameters::from_moments(0.0, 1.0),
            Err(DistributionError::InvalidMean { .. })
        ));
        assert!(matches!(
            LossParameters::from_moments(-2.0, 1.0),
            Err(DistributionError::InvalidMean { .. })
        ));
        assert!(matches!(
            LossParameters::from_moments(f64::INFINITY, 1.0),
            Err(DistributionError::InvalidMean { .. })
        ));
    }

    #[test]
    fn test_rejects_overflowing_dispersion() {
        assert!(matches!(
            LossParameters::from_moments(1e-200, 1e200),
            Err(DistributionError::InvalidStdDev { .. })
        ));
    }

    #[test]
    fn test_extreme_magnitudes_accepted() {
        for (mean, stddev) in [(1e-200, 0.0), (1e-200, 1e-200), (1e200, 1e200), (1e160, 5e159)] {
            let params = LossParameters::from_moments(mean, stddev)
                .unwrap_or_else(|e| panic!("({}, {}) rejected: {}", mean, stddev, e));

            assert!(params.gamma().is_finite());
            assert_relative_eq!(params.implied_mean(), mean, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_rejects_invalid_stddev() {
        assert!(matches!(
            LossParameters::from_moments(1.0, -0.1),
            Err(DistributionError::InvalidStdDev { .. })
        ));
        assert!(matches!(
            LossParameters::from_moments(1.0, f64::NAN),
            Err(DistributionError::InvalidStdDev { .. })
        ));
    }

    #[test]
    fn test_zero_stddev_is_point_mass() {
        let sampler = LossSampler::from_moments(4.2, 0.0).unwrap();
        assert_eq!(sampler.params().scale(), 0.0);

        let mut rng = SimRng::from_seed(11);
        for _ in 0..1_000 {
            assert_relative_eq!(sampler.sample(&mut rng), 4.2, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_samples_strictly_positive() {
        let sampler = LossSampler::from_moments(1.0, 10.0).unwrap();
        let mut rng = SimRng::from_seed(5);

        for _ in 0..10_000 {
            assert!(sampler.sample(&mut rng) > 0.0);
        }
    }

    #[test]
    fn test_sample_mean_matches_configured_mean() {
        let sampler = LossSampler::from_moments(2.0, 1.0).unwrap();
        let mut rng = SimRng::from_seed(42);
        let n = 200_000;

        let mean = (0..n).map(|_| sampler.sample(&mut rng)).sum::<f64>() / n as f64;

        // Standard error is 1/√n ≈ 0.0022
        assert!((mean - 2.0).abs() < 0.02, "Sample mean {}", mean);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_scale_non_negative_and_location_identity(
                mean in 1e-6..1e6_f64,
                stddev in 0.0..1e6_f64,
            ) {
                let params = LossParameters::from_moments(mean, stddev).unwrap();

                prop_assert!(params.scale() >= 0.0);
                prop_assert!(params.gamma() >= 1.0);

                let expected = mean / params.gamma().sqrt();
                let actual = params.location().exp();
                prop_assert!(
                    (actual - expected).abs() <= 1e-12 * expected.max(1.0),
                    "exp(location) = {} but mean/sqrt(gamma) = {}",
                    actual,
                    expected
                );
            }
        }
    }
}
