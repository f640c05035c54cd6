//! CLI command implementations
//!
//! - [`estimate`]: validates the model inputs and runs the simulation
//! - [`report`]: usage text and console reporting

pub mod estimate;
pub mod report;
