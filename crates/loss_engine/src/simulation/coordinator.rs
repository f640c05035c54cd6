//! Simulation coordinator.
//!
//! # Overview
//!
//! The [`SimulationCoordinator`] coordinates:
//! 1. Partitioning of the requested years (via [`PartitionPlan`])
//! 2. Random stream derivation, one private [`SimRng`] per work unit
//! 3. Dispatch of [`ZoneSimulator::calculate`](crate::zone::ZoneSimulator::calculate)
//!    on a dedicated rayon pool
//! 4. Single-threaded aggregation of the partial sums
//!
//! Work units never share generator state. Streams are derived up front
//! from a master generator, so a fixed master seed reproduces a run
//! regardless of how the pool schedules the units.

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuildError, ThreadPoolBuilder};
use tracing::{debug, info, warn};

use super::config::ExecutionConfig;
use super::error::{ConfigError, SimulationError};
use super::partition::{PartitionPlan, WorkUnit};
use super::result::{ExecutionMode, PartialResult, SimulationResult};
use crate::rng::SimRng;
use crate::zone::Zone;

/// Zones to simulate and the number of years per zone.
///
/// Immutable for the duration of a run.
#[derive(Clone, Debug)]
pub struct SimulationRequest {
    zones: Vec<Zone>,
    total_years: u64,
}

impl SimulationRequest {
    /// Creates a request.
    ///
    /// An empty zone list is accepted here and reported by
    /// [`SimulationCoordinator::run`] as [`SimulationError::EmptyModel`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidYearCount`] if `total_years` is zero.
    pub fn new(zones: Vec<Zone>, total_years: u64) -> Result<Self, ConfigError> {
        if total_years == 0 {
            return Err(ConfigError::InvalidYearCount(total_years));
        }
        Ok(Self { zones, total_years })
    }

    /// Returns the zones in request order.
    #[inline]
    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Returns the number of simulated years per zone.
    #[inline]
    pub fn total_years(&self) -> u64 {
        self.total_years
    }
}

/// Monte Carlo coordinator.
///
/// # Examples
///
/// ```rust
/// use loss_engine::simulation::{ExecutionConfig, SimulationCoordinator, SimulationRequest};
/// use loss_engine::zone::{Zone, ZoneParameters};
///
/// let zones = vec![
///     Zone::new(ZoneParameters::new(1.0, 1.0, 1.0).unwrap()).unwrap(),
///     Zone::new(ZoneParameters::new(1.0, 1.0, 1.0).unwrap()).unwrap(),
/// ];
/// let request = SimulationRequest::new(zones, 50_000).unwrap();
///
/// let config = ExecutionConfig::builder().workers(4).build().unwrap();
/// let result = SimulationCoordinator::new(config).run(&request).unwrap();
///
/// assert_eq!(result.plan.workers_per_zone(), 2);
/// assert!(result.mean_annual_loss > 0.0);
/// ```
#[derive(Clone, Debug)]
pub struct SimulationCoordinator {
    config: ExecutionConfig,
}

impl SimulationCoordinator {
    /// Creates a coordinator with the given execution configuration.
    pub fn new(config: ExecutionConfig) -> Self {
        Self { config }
    }

    /// Returns the execution configuration.
    #[inline]
    pub fn config(&self) -> &ExecutionConfig {
        &self.config
    }

    /// Estimates the combined mean annual loss of all zones in `request`.
    ///
    /// Runs on a worker pool when the configured worker budget reaches the
    /// parallel threshold, otherwise sequentially.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::EmptyModel`] if the request has no zones.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationResult, SimulationError> {
        if self.config.is_parallel() {
            self.run_parallel(request)
        } else {
            self.run_sequential(request)
        }
    }

    /// Simulates every zone for all requested years on the calling thread.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::EmptyModel`] if the request has no zones.
    pub fn run_sequential(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SimulationError> {
        ensure_zones(request)?;

        let plan = PartitionPlan::sequential(request.total_years(), request.zones().len());
        let mut master = self.master_rng();
        debug!(
            total_years = plan.total_years(),
            zones = plan.zone_count(),
            "Running sequential simulation"
        );

        let partials = plan
            .units()
            .map(|unit| simulate_unit(request.zones(), unit, master.spawn_stream()))
            .collect();

        Ok(finish(plan, ExecutionMode::Sequential, partials))
    }

    /// Partitions the requested years across the worker budget and runs the
    /// work units on a dedicated thread pool.
    ///
    /// Falls back to [`run_sequential`](Self::run_sequential) if the pool
    /// cannot be created.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::EmptyModel`] if the request has no zones.
    pub fn run_parallel(
        &self,
        request: &SimulationRequest,
    ) -> Result<SimulationResult, SimulationError> {
        ensure_zones(request)?;

        let pool = match self.build_pool() {
            Ok(pool) => pool,
            Err(err) => {
                warn!(error = %err, "Failed to build worker pool; running sequentially");
                return self.run_sequential(request);
            }
        };

        let plan = PartitionPlan::new(
            request.total_years(),
            request.zones().len(),
            self.config.workers(),
        );
        info!(
            total_years = plan.total_years(),
            workers_per_zone = plan.workers_per_zone(),
            years_per_worker = plan.years_per_worker(),
            years_last_worker = plan.years_last_worker(),
            "{}",
            plan
        );

        let mut master = self.master_rng();
        let units: Vec<(WorkUnit, SimRng)> = plan
            .units()
            .map(|unit| (unit, master.spawn_stream()))
            .collect();

        let zones = request.zones();
        let partials: Vec<PartialResult> = pool.install(|| {
            units
                .into_par_iter()
                .map(|(unit, rng)| simulate_unit(zones, unit, rng))
                .collect()
        });

        Ok(finish(plan, ExecutionMode::Parallel, partials))
    }

    fn master_rng(&self) -> SimRng {
        match self.config.seed() {
            Some(seed) => SimRng::from_seed(seed),
            None => SimRng::from_entropy(),
        }
    }

    fn build_pool(&self) -> Result<ThreadPool, ThreadPoolBuildError> {
        ThreadPoolBuilder::new()
            .num_threads(self.config.workers())
            .thread_name(|index| format!("loss-worker-{}", index))
            .build()
    }
}

fn ensure_zones(request: &SimulationRequest) -> Result<(), SimulationError> {
    if request.zones().is_empty() {
        warn!("Simulation requested without zones");
        return Err(SimulationError::EmptyModel);
    }
    Ok(())
}

fn simulate_unit(zones: &[Zone], unit: WorkUnit, rng: SimRng) -> PartialResult {
    let summed_loss = zones[unit.zone_index].simulator(rng).calculate(unit.years);

    PartialResult {
        zone_index: unit.zone_index,
        worker_index: unit.worker_index,
        years_covered: unit.years,
        summed_loss,
    }
}

fn finish(
    plan: PartitionPlan,
    mode: ExecutionMode,
    partials: Vec<PartialResult>,
) -> SimulationResult {
    let result = SimulationResult::aggregate(plan, mode, partials);
    debug!(
        mode = ?result.mode,
        units = result.partials.len(),
        mean_annual_loss = result.mean_annual_loss,
        "Aggregated partial results"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zone::ZoneParameters;

    fn unit_zone() -> Zone {
        Zone::new(ZoneParameters::new(1.0, 1.0, 1.0).unwrap()).unwrap()
    }

    fn coordinator(workers: usize, seed: u64) -> SimulationCoordinator {
        let config = ExecutionConfig::builder()
            .workers(workers)
            .seed(seed)
            .build()
            .unwrap();
        SimulationCoordinator::new(config)
    }

    #[test]
    fn test_request_rejects_zero_years() {
        let result = SimulationRequest::new(vec![unit_zone()], 0);
        assert!(matches!(result, Err(ConfigError::InvalidYearCount(0))));
    }

    #[test]
    fn test_empty_model_sequential_and_parallel() {
        for years in [1, 1_000, 1_000_000] {
            let request = SimulationRequest::new(Vec::new(), years).unwrap();

            assert_eq!(
                coordinator(1, 0).run(&request),
                Err(SimulationError::EmptyModel)
            );
            assert_eq!(
                coordinator(8, 0).run(&request),
                Err(SimulationError::EmptyModel)
            );
        }
    }

    #[test]
    fn test_single_worker_runs_sequentially() {
        let request = SimulationRequest::new(vec![unit_zone(), unit_zone()], 1_000).unwrap();
        let result = coordinator(1, 3).run(&request).unwrap();

        assert_eq!(result.mode, ExecutionMode::Sequential);
        assert_eq!(result.partials.len(), 2);
        assert_eq!(result.zone_years(0), 1_000);
        assert_eq!(result.zone_years(1), 1_000);
    }

    #[test]
    fn test_parallel_partials_cover_every_zone() {
        let request = SimulationRequest::new(vec![unit_zone(), unit_zone()], 10_001).unwrap();
        let result = coordinator(6, 3).run(&request).unwrap();

        assert_eq!(result.mode, ExecutionMode::Parallel);
        assert_eq!(result.plan.workers_per_zone(), 3);
        assert_eq!(result.partials.len(), 6);
        assert_eq!(result.zone_years(0), 10_001);
        assert_eq!(result.zone_years(1), 10_001);

        let last = result
            .partials
            .iter()
            .find(|p| p.zone_index == 0 && p.worker_index == 2)
            .unwrap();
        assert_eq!(last.years_covered, 3_335);
    }

    #[test]
    fn test_fixed_seed_reproduces_parallel_run() {
        let request = SimulationRequest::new(vec![unit_zone(), unit_zone()], 20_000).unwrap();

        let a = coordinator(4, 1234).run(&request).unwrap();
        let b = coordinator(4, 1234).run(&request).unwrap();

        assert_eq!(a.mean_annual_loss, b.mean_annual_loss);
        assert_eq!(a.partials, b.partials);
    }

    #[test]
    fn test_workers_get_distinct_streams() {
        let request = SimulationRequest::new(vec![unit_zone()], 10_000).unwrap();
        let result = coordinator(2, 99).run(&request).unwrap();

        assert_eq!(result.partials.len(), 2);
        assert_ne!(result.partials[0].summed_loss, result.partials[1].summed_loss);
    }

    #[test]
    fn test_zero_rate_zone_contributes_nothing() {
        let silent = Zone::new(ZoneParameters::new(0.0, 1.0, 1.0).unwrap()).unwrap();
        let request = SimulationRequest::new(vec![silent, unit_zone()], 10_000).unwrap();

        let result = coordinator(4, 5).run(&request).unwrap();

        assert_eq!(result.zone_mean_annual_loss(0), 0.0);
        assert!(result.zone_mean_annual_loss(1) > 0.0);
    }
}
