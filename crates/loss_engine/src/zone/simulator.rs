//! Per-worker year-by-year loss simulation for one zone.

use crate::distributions::{EventCountSampler, LossSampler};
use crate::rng::SimRng;

/// Simulates consecutive years of one zone on a private random stream.
///
/// Obtained from [`Zone::simulator`](super::Zone::simulator).
///
/// # Examples
///
/// ```rust
/// use loss_engine::rng::SimRng;
/// use loss_engine::zone::{Zone, ZoneParameters};
///
/// let zone = Zone::new(ZoneParameters::new(1.0, 1.0, 1.0).unwrap()).unwrap();
/// let mut sim = zone.simulator(SimRng::from_seed(42));
///
/// let total = sim.calculate(1_000);
/// assert!(total > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct ZoneSimulator {
    events: EventCountSampler,
    losses: LossSampler,
    rng: SimRng,
}

impl ZoneSimulator {
    pub(crate) fn new(events: EventCountSampler, losses: LossSampler, rng: SimRng) -> Self {
        Self {
            events,
            losses,
            rng,
        }
    }

    /// Simulates `years` years and returns the total loss (not averaged).
    ///
    /// Each year draws an event count, then one loss per event. Years with
    /// no events contribute zero.
    pub fn calculate(&mut self, years: u64) -> f64 {
        let mut total_loss = 0.0;

        for _ in 0..years {
            let n_events = self.events.sample(&mut self.rng);

            let mut year_loss = 0.0;
            for _ in 0..n_events {
                year_loss += self.losses.sample(&mut self.rng);
            }
            total_loss += year_loss;
        }

        total_loss
    }
}
