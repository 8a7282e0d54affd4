use std::path::PathBuf;

use clap::Parser;

use crate::errors::{CliError, Result};

/// Aggregate on-chain token and app balances into a net-worth summary.
#[derive(Parser, Debug)]
#[command(name = "networth", version, about)]
pub struct Cli {
    /// Comma-separated list of wallet addresses to query
    #[arg(long, value_delimiter = ',')]
    pub addresses: Vec<String>,

    /// Skip token and app balances at or below this USD value
    #[arg(long = "balanceThreshold", default_value_t = 0.0)]
    pub balance_threshold: f64,

    /// Directory to write the snapshot file into; prints to stdout when unset
    #[arg(long = "dataFolder")]
    pub data_folder: Option<PathBuf>,

    /// Render numeric fields as display strings
    #[arg(long)]
    pub format: bool,

    /// Top-level summary fields to keep in the output
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,
}

impl Cli {
    /// The address list is the one required input; everything else defaults.
    pub fn require_addresses(&self) -> Result<&[String]> {
        if self.addresses.is_empty() {
            return Err(CliError::usage(
                "Missing command line argument --addresses",
            ));
        }
        Ok(&self.addresses)
    }
}
