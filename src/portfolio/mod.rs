pub mod types;
pub mod fetcher;
pub mod networth;

pub use types::*;
pub use fetcher::PortfolioFetcher;
pub use networth::{aggregate, NetWorth, ProductBreakdown};
