use clap::{Args, Parser};
use std::path::PathBuf;

/// Predict RF signal strength over a 2-D grid of obstacles and
/// transmitters.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub enum Cli {
    /// Run a scenario file and export its signal grid.
    Simulate(Simulate),

    /// Run the built-in campus scenario and export its signal grid.
    Demo(Demo),

    /// Print a single cell of an exported signal grid.
    Probe(Probe),

    /// Print coverage statistics of an exported signal grid.
    Summary(Summary),
}

/// Path loss parameters overriding the scenario's.
#[derive(Debug, Clone, Args)]
pub struct ModelArgs {
    /// Path loss exponent (2.0 is free space).
    #[arg(long)]
    pub exponent: Option<f64>,

    /// Penalty for paths crossing an obstacle, in dB.
    #[arg(long)]
    pub obstacle_attenuation: Option<f64>,
}

#[derive(Debug, Clone, Args)]
pub struct Simulate {
    /// Reject obstacles and transmitters which fall off the grid
    /// instead of ignoring them.
    #[arg(long)]
    pub strict: bool,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Output signal grid.
    #[arg(short, long)]
    pub out: PathBuf,

    /// Input scenario (JSON).
    pub scenario: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct Demo {
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    #[arg(long, default_value_t = 100)]
    pub height: usize,

    #[command(flatten)]
    pub model: ModelArgs,

    /// Output signal grid.
    #[arg(short, long, default_value = "signal_strength.txt")]
    pub out: PathBuf,
}

/// Dimensions of a previously exported grid.
#[derive(Debug, Clone, Copy, Args)]
pub struct Dimensions {
    #[arg(long)]
    pub width: usize,

    #[arg(long)]
    pub height: usize,
}

#[derive(Debug, Clone, Args)]
pub struct Probe {
    #[command(flatten)]
    pub dims: Dimensions,

    #[arg(short, allow_negative_numbers = true)]
    pub x: i32,

    #[arg(short, allow_negative_numbers = true)]
    pub y: i32,

    /// Exported signal grid.
    pub input: PathBuf,
}

#[derive(Debug, Clone, Args)]
pub struct Summary {
    #[command(flatten)]
    pub dims: Dimensions,

    /// Cells at or above this level (dBm) count as covered.
    #[arg(short, long, default_value_t = -100.0, allow_negative_numbers = true)]
    pub threshold: f64,

    /// Print as JSON.
    #[arg(long)]
    pub json: bool,

    /// Exported signal grid.
    pub input: PathBuf,
}
