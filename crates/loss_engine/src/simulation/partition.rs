//! Static partitioning of simulation years across workers.
//!
//! Every zone receives the same number of workers. All but the last worker
//! of a zone simulate `total_years / workers_per_zone` years; the last one
//! also absorbs `total_years % workers_per_zone`. For every zone the slices
//! cover exactly `total_years` with no gap and no overlap.

use std::fmt;

/// One (zone, worker) slice of the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WorkUnit {
    /// Index of the zone in the request.
    pub zone_index: usize,
    /// Index of the worker within its zone.
    pub worker_index: usize,
    /// Number of years this unit simulates.
    pub years: u64,
}

/// Assignment of simulation years to workers.
///
/// # Examples
///
/// ```rust
/// use loss_engine::simulation::PartitionPlan;
///
/// // 10 workers over 2 zones: 5 workers per zone
/// let plan = PartitionPlan::new(1_000_003, 2, 10);
///
/// assert_eq!(plan.workers_per_zone(), 5);
/// assert_eq!(plan.years_per_worker(), 200_000);
/// assert_eq!(plan.years_last_worker(), 200_003);
/// assert_eq!(plan.zone_years(), 1_000_003);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartitionPlan {
    total_years: u64,
    zone_count: usize,
    workers_per_zone: usize,
    years_per_worker: u64,
    years_last_worker: u64,
}

impl PartitionPlan {
    /// Splits `total_years` for each of `zone_count` zones across a budget
    /// of `workers` workers.
    ///
    /// `workers_per_zone` is `workers / zone_count`, clamped to at least one.
    pub fn new(total_years: u64, zone_count: usize, workers: usize) -> Self {
        let workers_per_zone = (workers / zone_count.max(1)).max(1);
        let divisor = workers_per_zone as u64;
        let years_per_worker = total_years / divisor;
        let years_last_worker = years_per_worker + total_years % divisor;

        Self {
            total_years,
            zone_count,
            workers_per_zone,
            years_per_worker,
            years_last_worker,
        }
    }

    /// One worker per zone covering all years.
    pub fn sequential(total_years: u64, zone_count: usize) -> Self {
        Self::new(total_years, zone_count, zone_count)
    }

    /// Returns the number of years simulated for every zone.
    #[inline]
    pub fn total_years(&self) -> u64 {
        self.total_years
    }

    /// Returns the number of zones.
    #[inline]
    pub fn zone_count(&self) -> usize {
        self.zone_count
    }

    /// Returns the number of workers assigned to each zone.
    #[inline]
    pub fn workers_per_zone(&self) -> usize {
        self.workers_per_zone
    }

    /// Returns the years simulated by every worker except the last of a zone.
    #[inline]
    pub fn years_per_worker(&self) -> u64 {
        self.years_per_worker
    }

    /// Returns the years simulated by the last worker of a zone.
    #[inline]
    pub fn years_last_worker(&self) -> u64 {
        self.years_last_worker
    }

    /// Total number of work units across all zones.
    #[inline]
    pub fn unit_count(&self) -> usize {
        self.zone_count * self.workers_per_zone
    }

    /// Years assigned to worker `worker_index` of any zone.
    #[inline]
    pub fn worker_years(&self, worker_index: usize) -> u64 {
        if worker_index + 1 == self.workers_per_zone {
            self.years_last_worker
        } else {
            self.years_per_worker
        }
    }

    /// Sum of the years assigned to the workers of one zone.
    pub fn zone_years(&self) -> u64 {
        (0..self.workers_per_zone).map(|w| self.worker_years(w)).sum()
    }

    /// Iterates over all work units, zone by zone.
    pub fn units(&self) -> impl Iterator<Item = WorkUnit> + '_ {
        (0..self.zone_count).flat_map(move |zone_index| {
            (0..self.workers_per_zone).map(move |worker_index| WorkUnit {
                zone_index,
                worker_index,
                years: self.worker_years(worker_index),
            })
        })
    }
}

impl fmt::Display for PartitionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "number of years={}; threads per zone={}. ",
            self.total_years, self.workers_per_zone
        )?;
        if self.years_per_worker == self.years_last_worker {
            write!(
                f,
                "{} threads running {} years per thread",
                self.workers_per_zone, self.years_per_worker
            )
        } else {
            write!(
                f,
                "{} threads running {} years per thread per zone, one thread running {} years per zone",
                self.workers_per_zone - 1,
                self.years_per_worker,
                self.years_last_worker
            )
        }
    }
}
