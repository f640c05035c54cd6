//! Monte Carlo orchestration.
//!
//! The [`SimulationCoordinator`] turns a [`SimulationRequest`] into a single
//! mean annual loss:
//!
//! ```text
//! SimulationCoordinator
//! ├── ExecutionConfig   (worker count, optional master seed)
//! ├── PartitionPlan     (years per worker, last worker takes the remainder)
//! └── Orchestration
//!     ├── one SimRng stream per work unit
//!     ├── ZoneSimulator::calculate() on a rayon pool
//!     └── aggregate: Σ partial sums / total_years
//! ```
//!
//! # Aggregation
//!
//! The summed loss across all zones is divided by `total_years` only. Zones
//! are additive contributors to one combined annual loss, so the result is
//! the expected annual loss of the whole portfolio, not a per-zone average.
//!
//! # Example
//!
//! ```rust
//! use loss_engine::simulation::{
//!     ExecutionConfig, ExecutionMode, SimulationCoordinator, SimulationRequest,
//! };
//! use loss_engine::zone::{Zone, ZoneParameters};
//!
//! let zone = Zone::new(ZoneParameters::new(0.5, 2.0, 1.0).unwrap()).unwrap();
//! let request = SimulationRequest::new(vec![zone], 10_000).unwrap();
//!
//! let config = ExecutionConfig::builder().workers(1).build().unwrap();
//! let result = SimulationCoordinator::new(config).run(&request).unwrap();
//!
//! assert_eq!(result.mode, ExecutionMode::Sequential);
//! assert!(result.mean_annual_loss.is_finite());
//! ```

pub mod config;
pub mod coordinator;
pub mod error;
pub mod partition;
pub mod result;

pub use config::{
    detect_workers, ExecutionConfig, ExecutionConfigBuilder, DEFAULT_YEARS, MAX_WORKERS,
    PARALLEL_THRESHOLD, RESERVED_WORKERS,
};
pub use coordinator::{SimulationCoordinator, SimulationRequest};
pub use error::{ConfigError, SimulationError};
pub use partition::{PartitionPlan, WorkUnit};
pub use result::{ExecutionMode, PartialResult, SimulationResult};
