//! End-to-end scenarios for the loss simulation.
//!
//! # Test Categories
//!
//! 1. **Reference scenario**: two unit zones converge to the analytical
//!    expected annual loss `Σ rate × mean`
//! 2. **Execution paths**: sequential and parallel runs agree statistically
//! 3. **Degenerate inputs**: empty model, silent zones, point-mass losses

use approx::assert_relative_eq;
use loss_engine::simulation::{
    ExecutionConfig, ExecutionMode, SimulationCoordinator, SimulationError, SimulationRequest,
};
use loss_engine::zone::{Zone, ZoneParameters};

fn zone(rate: f64, mean: f64, stddev: f64) -> Zone {
    Zone::new(ZoneParameters::new(rate, mean, stddev).unwrap()).unwrap()
}

fn coordinator(workers: usize) -> SimulationCoordinator {
    let config = ExecutionConfig::builder().workers(workers).build().unwrap();
    SimulationCoordinator::new(config)
}

// ============================================================================
// Reference Scenario
// ============================================================================

#[test]
fn test_two_unit_zones_reference_scenario() {
    let request = SimulationRequest::new(vec![zone(1.0, 1.0, 1.0), zone(1.0, 1.0, 1.0)], 100_000)
        .unwrap();

    let result = coordinator(4).run(&request).unwrap();

    assert!(result.mean_annual_loss.is_finite());
    assert!(
        (1.5..=3.0).contains(&result.mean_annual_loss),
        "Mean annual loss {} outside [1.5, 3.0]",
        result.mean_annual_loss
    );
}

#[test]
fn test_converges_to_expected_annual_loss() {
    let florida = zone(1.2, 3.0, 2.0);
    let gulf = zone(0.7, 5.0, 1.5);
    let expected = florida.expected_annual_loss() + gulf.expected_annual_loss();

    let request = SimulationRequest::new(vec![florida, gulf], 400_000).unwrap();
    let result = coordinator(4).run(&request).unwrap();

    // Annual loss variance is Σ rate × (stddev² + mean²) ≈ 38, SE ≈ 0.01
    assert_relative_eq!(result.mean_annual_loss, expected, max_relative = 0.02);
}

// ============================================================================
// Execution Paths
// ============================================================================

#[test]
fn test_sequential_and_parallel_agree() {
    let zones = vec![zone(1.0, 1.0, 1.0), zone(1.0, 1.0, 1.0)];
    let request = SimulationRequest::new(zones, 500_000).unwrap();

    for trial in 0..3 {
        let sequential = coordinator(4).run_sequential(&request).unwrap();
        let parallel = coordinator(4).run_parallel(&request).unwrap();

        assert_eq!(sequential.mode, ExecutionMode::Sequential);
        assert_eq!(parallel.mode, ExecutionMode::Parallel);

        let diff = (sequential.mean_annual_loss - parallel.mean_annual_loss).abs();
        let rel = diff / sequential.mean_annual_loss;
        assert!(
            rel < 0.05,
            "Trial {}: sequential={:.5}, parallel={:.5}, relative difference={:.4}",
            trial,
            sequential.mean_annual_loss,
            parallel.mean_annual_loss,
            rel
        );
    }
}

#[test]
fn test_run_selects_mode_from_worker_budget() {
    let request = SimulationRequest::new(vec![zone(1.0, 1.0, 1.0)], 1_000).unwrap();

    assert_eq!(
        coordinator(1).run(&request).unwrap().mode,
        ExecutionMode::Sequential
    );
    assert_eq!(
        coordinator(2).run(&request).unwrap().mode,
        ExecutionMode::Parallel
    );
}

#[test]
fn test_parallel_covers_all_years_with_remainder() {
    let request =
        SimulationRequest::new(vec![zone(1.0, 1.0, 1.0), zone(2.0, 0.5, 0.1)], 1_000_003).unwrap();

    let result = coordinator(10).run(&request).unwrap();

    assert_eq!(result.plan.workers_per_zone(), 5);
    assert_eq!(result.partials.len(), 10);
    assert_eq!(result.zone_years(0), 1_000_003);
    assert_eq!(result.zone_years(1), 1_000_003);
}

// ============================================================================
// Degenerate Inputs
// ============================================================================

#[test]
fn test_empty_model_is_reported() {
    for years in [1, 7, 1_000_000] {
        let request = SimulationRequest::new(Vec::new(), years).unwrap();

        assert_eq!(
            coordinator(1).run(&request),
            Err(SimulationError::EmptyModel)
        );
        assert_eq!(
            coordinator(6).run(&request),
            Err(SimulationError::EmptyModel)
        );
    }
}

#[test]
fn test_silent_zones_give_zero_loss() {
    let request = SimulationRequest::new(vec![zone(0.0, 1.0, 1.0), zone(0.0, 9.0, 3.0)], 50_000)
        .unwrap();

    let result = coordinator(4).run(&request).unwrap();

    assert_eq!(result.mean_annual_loss, 0.0);
}

#[test]
fn test_point_mass_losses_scale_with_event_count() {
    // With zero stddev the mean annual loss is mean × (observed event rate).
    let request = SimulationRequest::new(vec![zone(3.0, 2.0, 0.0)], 200_000).unwrap();

    let result = coordinator(2).run(&request).unwrap();

    assert_relative_eq!(result.mean_annual_loss, 6.0, max_relative = 0.02);
}
