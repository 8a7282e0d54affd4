//! Net-worth aggregation for blockchain addresses.
//!
//! Queries the Zapper portfolio API for a set of addresses and folds the
//! nested balance tree of wallet holdings and application positions into
//! flat per-symbol and per-product totals.

pub mod cli;
pub mod constants;
pub mod errors;
pub mod output;
pub mod portfolio;
pub mod utils;

// Re-export the pieces a run is made of.
pub use cli::Cli;
pub use errors::CliError;
pub use portfolio::{aggregate, NetWorth, PortfolioFetcher, ProductBreakdown};
