//! # Loss Engine
//!
//! Monte Carlo estimator for the expected annual economic loss caused by
//! hurricane landfalls across independent geographic zones.
//!
//! ## Model
//!
//! For every zone and every simulated year:
//! - the number of landfalling hurricanes is drawn from a Poisson
//!   distribution with the zone's annual landfall rate;
//! - every landfall draws one economic loss from a log-normal distribution
//!   whose mean and standard deviation match the zone's configuration.
//!
//! The estimate is the total simulated loss over all zones divided by the
//! number of simulated years, i.e. zones are additive contributors to one
//! combined annual loss.
//!
//! ## Module Structure
//!
//! - [`rng`]: seeded PRNG wrapper with per-worker stream derivation
//! - [`distributions`]: event-count and loss samplers, moment matching
//! - [`zone`]: zone parameters and the per-worker [`ZoneSimulator`]
//! - [`simulation`]: work partitioning, parallel dispatch and aggregation
//!
//! ## Usage Example
//!
//! ```rust
//! use loss_engine::simulation::{ExecutionConfig, SimulationCoordinator, SimulationRequest};
//! use loss_engine::zone::{Zone, ZoneParameters};
//!
//! let florida = Zone::new(ZoneParameters::new(1.0, 1.0, 1.0).unwrap()).unwrap();
//! let gulf = Zone::new(ZoneParameters::new(1.0, 1.0, 1.0).unwrap()).unwrap();
//!
//! let config = ExecutionConfig::builder().workers(4).build().unwrap();
//! let coordinator = SimulationCoordinator::new(config);
//!
//! let request = SimulationRequest::new(vec![florida, gulf], 10_000).unwrap();
//! let result = coordinator.run(&request).unwrap();
//! assert!(result.mean_annual_loss > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod distributions;
pub mod rng;
pub mod simulation;
pub mod zone;

// Re-export commonly used items for convenience
pub use distributions::{DistributionError, EventCountSampler, LossParameters, LossSampler};
pub use rng::SimRng;
pub use simulation::{
    ConfigError, ExecutionConfig, ExecutionMode, PartialResult, PartitionPlan,
    SimulationCoordinator, SimulationError, SimulationRequest, SimulationResult,
};
pub use zone::{Zone, ZoneError, ZoneParameters, ZoneSimulator};
