//! Execution configuration.
//!
//! The worker count is an explicit value, computed once at startup and
//! passed to the coordinator. Nothing in a run reads hardware state.

use super::error::ConfigError;

/// Default number of simulated years.
pub const DEFAULT_YEARS: u64 = 1_000_000;

/// Cores left free when deriving the worker count from the hardware.
pub const RESERVED_WORKERS: usize = 2;

/// Below this many workers the simulation runs sequentially.
pub const PARALLEL_THRESHOLD: usize = 2;

/// Maximum number of workers allowed.
pub const MAX_WORKERS: usize = 4096;

/// Worker count derived from the detected hardware parallelism.
///
/// Logical CPUs minus [`RESERVED_WORKERS`], floored at one.
pub fn detect_workers() -> usize {
    num_cpus::get().saturating_sub(RESERVED_WORKERS).max(1)
}

/// Execution configuration for [`SimulationCoordinator`](super::SimulationCoordinator).
///
/// Use [`ExecutionConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use loss_engine::simulation::ExecutionConfig;
///
/// let config = ExecutionConfig::builder()
///     .workers(8)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.workers(), 8);
/// assert!(config.is_parallel());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Total worker budget shared by all zones.
    workers: usize,
    /// Master seed; `None` draws from OS entropy on every run.
    seed: Option<u64>,
}

impl ExecutionConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> ExecutionConfigBuilder {
        ExecutionConfigBuilder::default()
    }

    /// Configuration using the detected hardware parallelism.
    pub fn detect() -> Self {
        Self {
            workers: detect_workers().min(MAX_WORKERS),
            seed: None,
        }
    }

    /// Returns the worker budget.
    #[inline]
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Returns the master seed, if fixed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Whether runs are dispatched to a worker pool.
    #[inline]
    pub fn is_parallel(&self) -> bool {
        self.workers >= PARALLEL_THRESHOLD
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWorkerCount`] if `workers` is 0 or
    /// greater than [`MAX_WORKERS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.workers == 0 || self.workers > MAX_WORKERS {
            return Err(ConfigError::InvalidWorkerCount(self.workers));
        }
        Ok(())
    }
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self::detect()
    }
}

/// Builder for [`ExecutionConfig`].
#[derive(Clone, Debug, Default)]
pub struct ExecutionConfigBuilder {
    workers: Option<usize>,
    seed: Option<u64>,
}

impl ExecutionConfigBuilder {
    /// Sets the worker budget. Defaults to [`detect_workers`].
    #[inline]
    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Fixes the master seed so that runs are repeatable.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the worker count is invalid.
    pub fn build(self) -> Result<ExecutionConfig, ConfigError> {
        let config = ExecutionConfig {
            workers: self.workers.unwrap_or_else(detect_workers),
            seed: self.seed,
        };

        config.validate()?;
        Ok(config)
    }
}
