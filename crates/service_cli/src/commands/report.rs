//! Console reporting
//!
//! Usage text, configuration echo and the final loss line.

use std::io::{self, Write};

use super::estimate::ModelInput;

/// Model description appended to the usage line and to `--help`.
pub const MODEL_HELP: &str = "\
Calculates the average annual hurricane loss in $Billions for a simple hurricane model. The model is parameterized by:
florida_landfall_rate - The annual rate of landfalling hurricanes in Florida
florida_mean, florida_stddev - The LogNormal parameters that describe the economic loss of a landfalling hurricane in Florida.
gulf_landfall_rate - The annual rate of landfalling hurricanes in the Gulf states
gulf_mean, gulf_stddev - The LogNormal parameters that describe the economic loss of a landfalling hurricane in the Gulf states.
options: -n, --num_monte_carlo_samples Number of samples (i.e. simulation years) to run";

/// Prints the usage line followed by the model description.
pub fn print_usage<W: Write>(out: &mut W, usage: &str) -> io::Result<()> {
    writeln!(out, "{}", usage)?;
    writeln!(out, "{}", MODEL_HELP)
}

/// Echoes the validated configuration.
pub fn print_params<W: Write>(out: &mut W, input: &ModelInput) -> io::Result<()> {
    writeln!(
        out,
        "Calculating average annual hurricane loss in $Billions for the following params: "
    )?;
    writeln!(out, "number of simulation years: {}", input.total_years)?;
    writeln!(out, "florida_landfall_rate: {}", input.florida.landfall_rate())?;
    writeln!(out, "florida_mean: {}", input.florida.loss_mean())?;
    writeln!(out, "florida_stddev: {}", input.florida.loss_stddev())?;
    writeln!(out, "gulf_landfall_rate: {}", input.gulf.landfall_rate())?;
    writeln!(out, "gulf_mean: {}", input.gulf.loss_mean())?;
    writeln!(out, "gulf_stddev: {}", input.gulf.loss_stddev())
}

/// Prints the estimated mean annual loss.
pub fn print_loss<W: Write>(out: &mut W, loss: f64) -> io::Result<()> {
    writeln!(out, "loss: {}", loss)
}
