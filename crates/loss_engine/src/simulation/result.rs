//! Simulation results.

use super::partition::PartitionPlan;

/// How a run was executed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExecutionMode {
    /// Every zone simulated on the calling thread.
    Sequential,
    /// Work units dispatched to a worker pool.
    Parallel,
}

/// Summed loss of one work unit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PartialResult {
    /// Index of the zone in the request.
    pub zone_index: usize,
    /// Index of the worker within its zone.
    pub worker_index: usize,
    /// Number of years the worker simulated.
    pub years_covered: u64,
    /// Total loss over those years.
    pub summed_loss: f64,
}

/// Outcome of a simulation run.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    /// Expected annual loss summed over all zones.
    pub mean_annual_loss: f64,
    /// Number of simulated years per zone.
    pub total_years: u64,
    /// Execution strategy that produced the result.
    pub mode: ExecutionMode,
    /// Partitioning used for the run.
    pub plan: PartitionPlan,
    /// One entry per work unit, ordered by zone then worker.
    pub partials: Vec<PartialResult>,
}

impl SimulationResult {
    /// Builds the result by aggregating partial sums.
    ///
    /// The divisor is `total_years`, not `total_years × zone_count`.
    pub(crate) fn aggregate(
        plan: PartitionPlan,
        mode: ExecutionMode,
        partials: Vec<PartialResult>,
    ) -> Self {
        let total_years = plan.total_years();
        let summed: f64 = partials.iter().map(|p| p.summed_loss).sum();

        Self {
            mean_annual_loss: summed / total_years as f64,
            total_years,
            mode,
            plan,
            partials,
        }
    }

    /// Contribution of one zone to the mean annual loss.
    pub fn zone_mean_annual_loss(&self, zone_index: usize) -> f64 {
        let summed: f64 = self
            .partials
            .iter()
            .filter(|p| p.zone_index == zone_index)
            .map(|p| p.summed_loss)
            .sum();
        summed / self.total_years as f64
    }

    /// Years covered by the workers of one zone.
    pub fn zone_years(&self, zone_index: usize) -> u64 {
        self.partials
            .iter()
            .filter(|p| p.zone_index == zone_index)
            .map(|p| p.years_covered)
            .sum()
    }
}
