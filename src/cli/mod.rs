//! Command-line interface definitions.

pub mod check;
pub mod output;
pub mod price;
pub mod run;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

/// fundflow - wallets, transfers, splits and purchases from a scenario file.
#[derive(Parser, Debug)]
#[command(name = "fundflow")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Emit one JSON object per line instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Only print warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run every step of a scenario and show the final balances
    Run(RunArgs),

    /// Validate a scenario without running it
    Check(ScenarioArg),

    /// Show a product's price and tax in one currency
    Price(PriceArgs),
}

/// Shared argument for commands that only need a scenario path.
#[derive(Parser, Debug)]
pub struct ScenarioArg {
    /// Path to the scenario file
    pub scenario: PathBuf,
}

/// Arguments for the `run` subcommand.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Path to the scenario file
    pub scenario: PathBuf,

    /// Record failing steps and continue instead of stopping
    #[arg(long)]
    pub keep_going: bool,
}

/// Arguments for the `price` subcommand.
#[derive(Parser, Debug)]
pub struct PriceArgs {
    /// Path to the scenario file declaring the product
    pub scenario: PathBuf,

    /// Product name
    pub product: String,

    /// Currency code, e.g. EUR
    pub currency: String,
}

impl Cli {
    /// Load the configuration named by `--config`, or the defaults.
    pub fn load_config(&self) -> Result<Config> {
        match &self.config {
            Some(path) => Config::load(path),
            None => Ok(Config::default()),
        }
    }
}
