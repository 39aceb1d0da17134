//! Command line argument parsing using clap.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

/// Expand a web search query with relevance feedback until it reaches a target precision
#[derive(Parser, Debug, Clone)]
#[command(name = "rocchio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct RocchioArgs {
    /// Google Custom Search API key
    #[arg(value_name = "API_KEY")]
    pub api_key: String,

    /// Custom Search engine id
    #[arg(value_name = "ENGINE_ID")]
    pub engine_id: String,

    /// Desired precision, between 0 and 1
    #[arg(value_name = "PRECISION", value_parser = parse_precision, allow_negative_numbers = true)]
    pub precision: f64,

    /// Initial query (quote multi-word queries)
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format for the final report
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// JSON configuration file
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Override the iteration cap
    #[arg(long, value_name = "N")]
    pub max_iterations: Option<usize>,
}

impl RocchioArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1,
                n => n + 1,
            }
        }
    }
}

/// Output formats for the final report
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Parse a precision argument, rejecting values outside [0, 1].
pub fn parse_precision(value: &str) -> Result<f64, String> {
    let precision: f64 = value
        .trim()
        .parse()
        .map_err(|_| format!("'{value}' is not a number"))?;
    if !(0.0..=1.0).contains(&precision) {
        return Err(format!("precision should be between 0 and 1, got {precision}"));
    }
    Ok(precision)
}
