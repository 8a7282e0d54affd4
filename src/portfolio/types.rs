use serde::Deserialize;

/// Identity and market data for a fungible token.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BaseToken {
    pub id: String,
    pub name: String,
    pub label: Option<String>,
    pub symbol: String,
    pub address: String,
    pub decimals: u32,
    pub price: f64,
    pub verified: bool,
    #[serde(rename = "imgUrl")]
    pub img_url: Option<String>,
}

/// The balance object carried by a direct wallet holding.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenWrapper {
    pub balance: f64,
    #[serde(rename = "balanceUSD")]
    pub balance_usd: f64,
    #[serde(rename = "balanceRaw")]
    pub balance_raw: String,
    #[serde(rename = "baseToken")]
    pub base_token: BaseToken,
}

/// A wallet-held balance of one base token on one network.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TokenBalance {
    pub key: String,
    pub address: String,
    pub network: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<i64>,
    pub token: TokenWrapper,
}

/// Token quantity as delivered by the API: numeric for direct holdings,
/// a decimal string for position tokens.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TokenQuantity {
    Number(f64),
    Text(String),
}

impl Default for TokenQuantity {
    fn default() -> Self {
        TokenQuantity::Number(0.0)
    }
}

impl TokenQuantity {
    /// Coerce to `f64`. Empty strings count as zero; anything unparseable
    /// becomes NaN and poisons the sums it enters.
    pub fn as_f64(&self) -> f64 {
        match self {
            TokenQuantity::Number(value) => *value,
            TokenQuantity::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    0.0
                } else {
                    trimmed.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

/// Wrapped position token nested one level below an asset token entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PositionToken {
    pub address: String,
    pub network: String,
    pub balance: TokenQuantity,
    #[serde(rename = "balanceUSD")]
    pub balance_usd: f64,
    pub price: f64,
    pub symbol: String,
}

/// One entry of an asset's token list. Wrapped position types carry their
/// token data under `token`; plain entries carry it inline.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AssetToken {
    #[serde(rename = "metaType")]
    pub meta_type: Option<String>,
    pub address: String,
    pub network: String,
    pub balance: TokenQuantity,
    #[serde(rename = "balanceUSD")]
    pub balance_usd: f64,
    pub price: f64,
    pub symbol: String,
    pub token: Option<PositionToken>,
}

/// The normalized token record the aggregator works with.
#[derive(Debug, Clone, Copy)]
pub struct EffectiveToken<'a> {
    pub symbol: &'a str,
    pub price: f64,
    pub balance: f64,
}

impl AssetToken {
    /// Resolve the effective token: the nested position token when present,
    /// otherwise this entry's own fields.
    pub fn effective(&self) -> EffectiveToken<'_> {
        match &self.token {
            Some(token) => EffectiveToken {
                symbol: &token.symbol,
                price: token.price,
                balance: token.balance.as_f64(),
            },
            None => EffectiveToken {
                symbol: &self.symbol,
                price: self.price,
                balance: self.balance.as_f64(),
            },
        }
    }
}

/// A position inside an application product grouping.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Asset {
    #[serde(rename = "__typename")]
    pub typename: String,
    pub key: Option<String>,
    pub address: String,
    pub network: String,
    #[serde(rename = "appId")]
    pub app_id: String,
    #[serde(rename = "groupId")]
    pub group_id: String,
    #[serde(rename = "groupLabel")]
    pub group_label: Option<String>,
    pub balance: TokenQuantity,
    #[serde(rename = "balanceUSD")]
    pub balance_usd: f64,
    pub price: f64,
    pub symbol: String,
    pub decimals: u32,
    pub supply: f64,
    #[serde(rename = "pricePerShare")]
    pub price_per_share: Vec<f64>,
    pub tokens: Vec<AssetToken>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Product {
    pub assets: Vec<Asset>,
}

/// An application-level balance grouping one or more products.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppBalance {
    pub key: String,
    pub address: String,
    pub network: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: Option<i64>,
    #[serde(rename = "balanceUSD")]
    pub balance_usd: f64,
    #[serde(rename = "appName")]
    pub app_name: String,
    #[serde(rename = "appId")]
    pub app_id: String,
    pub products: Vec<Product>,
}

/// The complete payload for the queried addresses.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    #[serde(rename = "tokenBalances")]
    pub token_balances: Vec<TokenBalance>,
    #[serde(rename = "appBalances")]
    pub app_balances: Vec<AppBalance>,
}

/// GraphQL response envelope. A response without a `data.portfolio` field
/// fails to decode and aborts the run.
#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioResponse {
    pub data: PortfolioData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PortfolioData {
    pub portfolio: Portfolio,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_coercion() {
        assert_eq!(TokenQuantity::Number(1.5).as_f64(), 1.5);
        assert_eq!(TokenQuantity::Text("2.25".to_string()).as_f64(), 2.25);
        assert_eq!(TokenQuantity::Text(String::new()).as_f64(), 0.0);
        assert!(TokenQuantity::Text("not-a-number".to_string())
            .as_f64()
            .is_nan());
    }

    #[test]
    fn test_effective_token_prefers_nested_position() {
        let entry: AssetToken = serde_json::from_str(
            r#"{
                "metaType": "SUPPLIED",
                "symbol": "aWETH",
                "price": 1.0,
                "balance": "3",
                "token": {
                    "symbol": "WETH",
                    "price": 2000.0,
                    "balance": "1.5"
                }
            }"#,
        )
        .unwrap();

        let token = entry.effective();
        assert_eq!(token.symbol, "WETH");
        assert_eq!(token.price, 2000.0);
        assert_eq!(token.balance, 1.5);
    }

    #[test]
    fn test_effective_token_falls_back_to_entry_fields() {
        let entry: AssetToken = serde_json::from_str(
            r#"{"symbol": "USDC", "price": 1.0, "balance": 250.0}"#,
        )
        .unwrap();

        let token = entry.effective();
        assert_eq!(token.symbol, "USDC");
        assert_eq!(token.price, 1.0);
        assert_eq!(token.balance, 250.0);
    }

    #[test]
    fn test_absent_fields_default() {
        let balance: TokenBalance = serde_json::from_str(r#"{}"#).unwrap();
        assert!(balance.network.is_empty());
        assert_eq!(balance.token.balance_usd, 0.0);
        assert!(balance.token.base_token.symbol.is_empty());
    }
}
