//! Annual landfall event counts.

use rand::Rng;
use rand_distr::{Distribution, Poisson};

use super::error::DistributionError;

/// Poisson sampler for the number of landfalls in one simulated year.
///
/// A rate of exactly zero is accepted and always yields zero events.
///
/// # Examples
///
/// ```rust
/// use loss_engine::distributions::EventCountSampler;
/// use loss_engine::rng::SimRng;
///
/// let sampler = EventCountSampler::new(1.5).unwrap();
/// let mut rng = SimRng::from_seed(42);
/// let _events: u64 = sampler.sample(&mut rng);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct EventCountSampler {
    rate: f64,
    /// `None` when the rate is zero; `Poisson` rejects λ = 0.
    poisson: Option<Poisson<f64>>,
}

impl EventCountSampler {
    /// Creates a sampler with mean `rate` events per year.
    ///
    /// # Errors
    ///
    /// Returns [`DistributionError::InvalidRate`] if `rate` is negative or
    /// not finite.
    pub fn new(rate: f64) -> Result<Self, DistributionError> {
        if !rate.is_finite() || rate < 0.0 {
            return Err(DistributionError::InvalidRate { rate });
        }

        let poisson = if rate > 0.0 {
            Some(Poisson::new(rate).map_err(|_| DistributionError::InvalidRate { rate })?)
        } else {
            None
        };

        Ok(Self { rate, poisson })
    }

    /// Returns the annual landfall rate.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Draws the number of landfalls for one year.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        match &self.poisson {
            Some(poisson) => poisson.sample(rng) as u64,
            None => 0,
        }
    }
}
