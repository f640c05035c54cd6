//! Hurricane zones.
//!
//! A [`Zone`] is an independent geographic loss-generating region. It owns
//! its validated [`ZoneParameters`], the moment-matched loss parameters and
//! the prepared samplers. Zones are immutable and `Sync`; each worker turns a
//! shared zone into a [`ZoneSimulator`] bound to the worker's own random
//! stream.
//!
//! ```text
//! Zone
//! ├── ZoneParameters    (rate, mean, stddev)
//! ├── EventCountSampler (Poisson)
//! └── LossSampler       (log-normal, derived once)
//!         │
//!         ▼ Zone::simulator(rng)
//! ZoneSimulator         (one per worker)
//! ```

mod error;
mod params;
mod simulator;

pub use error::ZoneError;
pub use params::ZoneParameters;
pub use simulator::ZoneSimulator;

use crate::distributions::{EventCountSampler, LossParameters, LossSampler};
use crate::rng::SimRng;

/// A geographic zone with prepared event-count and loss samplers.
#[derive(Clone, Debug)]
pub struct Zone {
    name: Option<String>,
    params: ZoneParameters,
    events: EventCountSampler,
    losses: LossSampler,
}

impl Zone {
    /// Builds a zone and derives its loss distribution parameters.
    ///
    /// # Errors
    ///
    /// Returns [`ZoneError::Distribution`] if a sampler rejects the
    /// parameters.
    pub fn new(params: ZoneParameters) -> Result<Self, ZoneError> {
        let events = EventCountSampler::new(params.landfall_rate())?;
        let losses = LossSampler::from_moments(params.loss_mean(), params.loss_stddev())?;

        Ok(Self {
            name: None,
            params,
            events,
            losses,
        })
    }

    /// Attaches a display name used in logs and reports.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Returns the zone's display name, if any.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the zone's validated parameters.
    #[inline]
    pub fn params(&self) -> &ZoneParameters {
        &self.params
    }

    /// Returns the derived Gaussian parameters of the loss distribution.
    #[inline]
    pub fn loss_params(&self) -> &LossParameters {
        self.losses.params()
    }

    /// Binds the zone's samplers to a private random stream.
    #[inline]
    pub fn simulator(&self, rng: SimRng) -> ZoneSimulator {
        ZoneSimulator::new(self.events, self.losses, rng)
    }

    /// Expected annual loss of this zone, `rate × mean`.
    #[inline]
    pub fn expected_annual_loss(&self) -> f64 {
        self.params.landfall_rate() * self.params.loss_mean()
    }
}
