//! Tally library exports for testing

use clap::ValueEnum;

pub mod core;
pub mod eval;
pub mod keypad;

/// How `tally eval` prints its answer.
#[derive(Clone, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}
