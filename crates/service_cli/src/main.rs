//! gethurricaneloss - Average Annual Hurricane Loss
//!
//! Command-line entry point for the loss engine.
//!
//! ```text
//! gethurricaneloss [-n|--num_monte_carlo_samples N]
//!                  florida_landfall_rate florida_mean florida_stddev
//!                  gulf_landfall_rate gulf_mean gulf_stddev
//! ```
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate only validates input,
//! resolves configuration and reports; all simulation work happens in
//! `loss_engine`.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;

pub use error::{CliError, Result};

use config::LogLevel;

/// Average annual hurricane loss in $Billions for a simple hurricane model
#[derive(Parser, Debug)]
#[command(name = "gethurricaneloss")]
#[command(version, about, long_about = None)]
#[command(after_help = commands::report::MODEL_HELP)]
struct Cli {
    /// Number of samples (i.e. simulation years) to run [default: 1000000]
    #[arg(
        short = 'n',
        long = "num_monte_carlo_samples",
        value_name = "SAMPLES",
        allow_hyphen_values = true
    )]
    num_monte_carlo_samples: Option<String>,

    /// Worker threads shared by both zones [default: logical CPUs - 2]
    #[arg(long, env = "GETHURRICANELOSS_WORKERS")]
    workers: Option<usize>,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, env = "GETHURRICANELOSS_LOG", default_value = "warn")]
    log_level: LogLevel,

    /// florida_landfall_rate florida_mean florida_stddev gulf_landfall_rate gulf_mean gulf_stddev
    #[arg(value_name = "PARAMS", allow_negative_numbers = true)]
    params: Vec<String>,
}

impl Cli {
    fn has_input(&self) -> bool {
        !self.params.is_empty() || self.num_monte_carlo_samples.is_some()
    }
}

fn init_tracing(log_level: LogLevel) {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(log_level.as_filter_str())),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn print_usage() {
    let usage = Cli::command().render_usage().to_string();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    // Nothing sensible left to report if stdout is gone.
    let _ = commands::report::print_usage(&mut out, &usage);
    let _ = out.flush();
}

fn run(cli: &Cli) -> Result<()> {
    let input =
        commands::estimate::parse_model(cli.num_monte_carlo_samples.as_deref(), &cli.params)?;

    let config = config::execution_config(cli.workers)?;
    info!(
        workers = config.workers(),
        parallel = config.is_parallel(),
        "Execution configuration resolved"
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    commands::estimate::run(&input, config, &mut out)?;
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level);

    if !cli.has_input() {
        print_usage();
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            if err.shows_usage() {
                print_usage();
            }
            ExitCode::FAILURE
        }
    }
}
