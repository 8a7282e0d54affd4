use std::env;

use anyhow::Result;
use clap::Parser;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

use networth::cli::Cli;
use networth::constants::{ZAPPER_API_URL, ZAPPER_API_URL_ENV};
use networth::output;
use networth::portfolio::{aggregate, PortfolioFetcher};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Logs go to stderr so the summary on stdout stays machine-readable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let addresses = match cli.require_addresses() {
        Ok(addresses) => addresses.to_vec(),
        Err(error) => {
            eprintln!("{}", error);
            eprintln!();
            eprintln!("Example:");
            eprintln!("  networth --addresses=0xabcdea,0xdeadbeef");
            std::process::exit(1);
        }
    };

    let endpoint = env::var(ZAPPER_API_URL_ENV).unwrap_or_else(|_| ZAPPER_API_URL.to_string());
    let fetcher = PortfolioFetcher::with_endpoint(endpoint);

    let portfolio = fetcher.fetch_portfolio(&addresses).await?;
    let net_worth = aggregate(&portfolio, cli.balance_threshold);

    let rendered = output::render(&net_worth, cli.format, &cli.only)?;
    output::emit(&rendered, cli.data_folder.as_deref()).await?;

    Ok(())
}
