//! Per-zone sampling distributions.
//!
//! - [`EventCountSampler`]: Poisson number of landfalls per simulated year
//! - [`LossSampler`]: log-normal economic loss per landfall
//! - [`LossParameters`]: moment matching from (mean, stddev) to the
//!   location/scale of the underlying Gaussian
//!
//! Samplers are immutable and `Copy`. The random stream is passed in on
//! every draw, so one sampler can serve any number of workers as long as
//! each worker brings its own generator.

mod error;
mod event_count;
mod loss;

pub use error::DistributionError;
pub use event_count::EventCountSampler;
pub use loss::{LossParameters, LossSampler};
