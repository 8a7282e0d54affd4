use anyhow::Result;
use reqwest::Client;
use tracing::{debug, info};

use super::types::{Portfolio, PortfolioResponse};
use crate::constants::{PORTFOLIO_QUERY, QUERY_NETWORKS, ZAPPER_API_URL, ZAPPER_REFERER};
use crate::errors::CliError;

/// Fetches the raw portfolio payload from the Zapper GraphQL API.
pub struct PortfolioFetcher {
    client: Client,
    endpoint: String,
}

impl PortfolioFetcher {
    pub fn new() -> Self {
        Self::with_endpoint(ZAPPER_API_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Fetch the complete portfolio for the given addresses in one request.
    ///
    /// No retries and no pagination: the API answers with the full payload,
    /// and any transport or decoding failure is fatal to the run.
    pub async fn fetch_portfolio(&self, addresses: &[String]) -> Result<Portfolio> {
        info!("Fetching portfolio for {} address(es)", addresses.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header("accept", "application/json")
            .header("cache-control", "no-cache")
            .header("referer", ZAPPER_REFERER)
            .json(&build_request_body(addresses))
            .send()
            .await
            .map_err(|e| CliError::api(format!("Portfolio request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(CliError::api(format!(
                "Portfolio request failed with status {}",
                response.status()
            ))
            .into());
        }

        let decoded: PortfolioResponse = response
            .json()
            .await
            .map_err(|e| CliError::api(format!("Failed to parse portfolio response: {}", e)))?;

        let portfolio = decoded.data.portfolio;
        debug!(
            "Received {} token balances and {} app balances",
            portfolio.token_balances.len(),
            portfolio.app_balances.len()
        );

        Ok(portfolio)
    }
}

impl Default for PortfolioFetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the fixed query document with its variables. The address list
/// is the only per-run input; the network list never changes.
fn build_request_body(addresses: &[String]) -> serde_json::Value {
    serde_json::json!({
        "id": "providerPortfolioQuery",
        "query": PORTFOLIO_QUERY,
        "variables": {
            "addresses": addresses,
            "networks": QUERY_NETWORKS,
            "withOverrides": false,
        }
    })
}
