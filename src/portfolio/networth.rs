use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::types::Portfolio;

/// Aggregated net-worth summary produced from one portfolio payload.
///
/// Field order matters: it is the serialization order of the emitted JSON,
/// and every map keeps insertion order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NetWorth {
    pub value: f64,
    pub networks: Vec<String>,
    pub prices: IndexMap<String, f64>,
    pub balances: IndexMap<String, f64>,
    pub products: IndexMap<String, ProductBreakdown>,
}

/// Per-application totals, keyed by the app's display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductBreakdown {
    pub value: f64,
    pub tokens: IndexMap<String, f64>,
}

impl NetWorth {
    /// Record a network identifier, keeping first-seen order without
    /// duplicates.
    fn record_network(&mut self, network: &str) {
        if !self.networks.iter().any(|known| known == network) {
            self.networks.push(network.to_string());
        }
    }

    /// Price and quantity bookkeeping for one token occurrence.
    ///
    /// The first occurrence of a symbol fixes its price for the whole run.
    /// Quantities accumulate across occurrences, but only non-zero ones
    /// create or grow an entry. Empty symbols are dropped silently.
    fn record_token(&mut self, symbol: &str, price: f64, balance: f64) {
        if symbol.is_empty() {
            return;
        }

        if !self.prices.contains_key(symbol) {
            self.prices.insert(symbol.to_string(), price);
        }

        if balance != 0.0 {
            *self.balances.entry(symbol.to_string()).or_insert(0.0) += balance;
        }
    }
}

/// Fold a portfolio into a flat net-worth summary.
///
/// Entries admit themselves only by exceeding `balance_threshold` strictly;
/// a balance exactly at the threshold is filtered out and leaves no trace.
/// Token balances are processed before app balances, both in input order,
/// so `value` is traceable to qualifying top-level balanceUSD amounts only:
/// asset-internal USD values never reach the total.
pub fn aggregate(portfolio: &Portfolio, balance_threshold: f64) -> NetWorth {
    let mut net_worth = NetWorth::default();

    for token_balance in &portfolio.token_balances {
        let token = &token_balance.token;
        if token.balance_usd <= balance_threshold {
            continue;
        }

        net_worth.record_network(&token_balance.network);
        net_worth.record_token(
            &token.base_token.symbol,
            token.base_token.price,
            token.balance,
        );
        net_worth.value += token.balance_usd;
    }

    for app_balance in &portfolio.app_balances {
        if app_balance.balance_usd <= balance_threshold {
            continue;
        }

        // Grouped by display name, so same-named apps merge.
        let app_name = app_balance.app_name.as_str();
        net_worth
            .products
            .entry(app_name.to_string())
            .or_default();

        for product in &app_balance.products {
            for asset in &product.assets {
                for entry in &asset.tokens {
                    let token = entry.effective();
                    net_worth.record_token(token.symbol, token.price, token.balance);

                    // The per-app breakdown counts every occurrence, zero
                    // quantities and empty symbols included.
                    let breakdown = net_worth
                        .products
                        .entry(app_name.to_string())
                        .or_default();
                    *breakdown
                        .tokens
                        .entry(token.symbol.to_string())
                        .or_insert(0.0) += token.balance;
                }
            }
        }

        net_worth.record_network(&app_balance.network);

        let breakdown = net_worth
            .products
            .entry(app_name.to_string())
            .or_default();
        breakdown.value += app_balance.balance_usd;
        net_worth.value += app_balance.balance_usd;
    }

    net_worth
}
