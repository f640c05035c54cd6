//! Estimate command implementation
//!
//! Validates the raw command-line values, builds the Florida and Gulf zones
//! and runs the loss engine.

use std::io::Write;
use std::num::ParseIntError;

use loss_engine::simulation::{
    ExecutionConfig, SimulationCoordinator, SimulationRequest, DEFAULT_YEARS,
};
use loss_engine::zone::{Zone, ZoneParameters};
use tracing::info;

use super::report;
use crate::{CliError, Result};

/// Names of the six positional parameters, in command-line order.
pub const PARAMETER_NAMES: [&str; 6] = [
    "Florida landfall rate",
    "Florida mean",
    "Florida stddev",
    "Gulf landfall rate",
    "Gulf mean",
    "Gulf stddev",
];

/// Validated model inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModelInput {
    /// Number of simulated years.
    pub total_years: u64,
    /// Florida zone parameters.
    pub florida: ZoneParameters,
    /// Gulf states zone parameters.
    pub gulf: ZoneParameters,
}

/// Parses the optional sample count; defaults to [`DEFAULT_YEARS`].
pub fn parse_samples(raw: Option<&str>) -> Result<u64> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_YEARS);
    };

    let sample_error = |reason: String| CliError::SampleCount {
        value: raw.to_string(),
        reason,
    };

    let trimmed = raw.trim();
    if trimmed.starts_with('-') {
        return Err(sample_error("The number of years should be positive".to_string()));
    }

    let samples = parse_unsigned(trimmed)
        .map_err(|e| sample_error(format!("not an unsigned integer ({})", e)))?;

    if samples < 1 || samples >= u64::from(u32::MAX) {
        return Err(sample_error(format!(
            "The number of samples should be between 1 and {}",
            u32::MAX
        )));
    }

    Ok(samples)
}

/// Parses an unsigned integer written in decimal, hex (`0x`) or octal
/// (leading `0`).
fn parse_unsigned(raw: &str) -> std::result::Result<u64, ParseIntError> {
    let digits = raw.strip_prefix('+').unwrap_or(raw);
    if let Some(hex) = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
    {
        u64::from_str_radix(hex, 16)
    } else if digits.len() > 1 && digits.starts_with('0') {
        u64::from_str_radix(&digits[1..], 8)
    } else {
        digits.parse()
    }
}

/// Parses one model parameter; it must be finite and strictly positive.
pub fn parse_parameter(name: &'static str, raw: &str) -> Result<f64> {
    let param_error = |reason: String| CliError::ParameterParse {
        name,
        value: raw.to_string(),
        reason,
    };

    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|e| param_error(format!("not a decimal number ({})", e)))?;

    if !value.is_finite() || value <= 0.0 || value >= f64::MAX {
        return Err(param_error(format!(
            "{} should be positive and lower than {:e}",
            name,
            f64::MAX
        )));
    }

    Ok(value)
}

/// Validates the sample count and the six positional parameters.
pub fn parse_model(samples: Option<&str>, params: &[String]) -> Result<ModelInput> {
    if params.len() != PARAMETER_NAMES.len() {
        return Err(CliError::ArgumentCount {
            given: params.len(),
        });
    }

    let total_years = parse_samples(samples)?;

    let mut values = [0.0_f64; 6];
    for ((value, name), raw) in values.iter_mut().zip(PARAMETER_NAMES).zip(params) {
        *value = parse_parameter(name, raw)?;
    }

    let [fl_rate, fl_mean, fl_stddev, gulf_rate, gulf_mean, gulf_stddev] = values;

    Ok(ModelInput {
        total_years,
        florida: ZoneParameters::new(fl_rate, fl_mean, fl_stddev)?,
        gulf: ZoneParameters::new(gulf_rate, gulf_mean, gulf_stddev)?,
    })
}

/// Builds the Florida and Gulf zones for the engine.
pub fn build_request(input: &ModelInput) -> Result<SimulationRequest> {
    let zones = vec![
        Zone::new(input.florida)?.with_name("florida"),
        Zone::new(input.gulf)?.with_name("gulf"),
    ];
    Ok(SimulationRequest::new(zones, input.total_years)?)
}

/// Echoes the configuration, runs the simulation and prints the loss.
///
/// Returns the estimated mean annual loss.
pub fn run<W: Write>(input: &ModelInput, config: ExecutionConfig, out: &mut W) -> Result<f64> {
    let request = build_request(input)?;

    writeln!(out)?;
    report::print_params(out, input)?;
    writeln!(out)?;

    for zone in request.zones() {
        info!(
            zone = zone.name().unwrap_or("unnamed"),
            location = zone.loss_params().location(),
            scale = zone.loss_params().scale(),
            "Derived log-normal loss parameters"
        );
    }

    let coordinator = SimulationCoordinator::new(config);
    let result = coordinator.run(&request)?;

    for (index, zone) in request.zones().iter().enumerate() {
        info!(
            zone = zone.name().unwrap_or("unnamed"),
            mean_annual_loss = result.zone_mean_annual_loss(index),
            "Zone contribution"
        );
    }

    report::print_loss(out, result.mean_annual_loss)?;
    Ok(result.mean_annual_loss)
}
