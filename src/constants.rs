//! Fixed endpoints, query documents and network lists.

/// Default GraphQL endpoint for portfolio queries.
pub const ZAPPER_API_URL: &str = "https://zapper.xyz/z/graphql";

/// Environment variable that overrides [`ZAPPER_API_URL`].
pub const ZAPPER_API_URL_ENV: &str = "ZAPPER_API_URL";

/// Referer forwarded with every portfolio request.
pub const ZAPPER_REFERER: &str = "https://zapper.xyz/";

/// Every network the portfolio query asks for. The list is exhaustive and
/// fixed; the addresses are the only per-run input.
pub const QUERY_NETWORKS: [&str; 27] = [
    "APECHAIN_MAINNET",
    "ARBITRUM_MAINNET",
    "AVALANCHE_MAINNET",
    "BASE_MAINNET",
    "BINANCE_SMART_CHAIN_MAINNET",
    "BITCOIN_MAINNET",
    "BLAST_MAINNET",
    "CELO_MAINNET",
    "DEGEN_MAINNET",
    "ETHEREUM_MAINNET",
    "FANTOM_OPERA_MAINNET",
    "GNOSIS_MAINNET",
    "LINEA_MAINNET",
    "MANTLE_MAINNET",
    "METIS_MAINNET",
    "MODE_MAINNET",
    "MOONBEAM_MAINNET",
    "MORPH_MAINNET",
    "OPBNB_MAINNET",
    "OPTIMISM_MAINNET",
    "POLYGON_MAINNET",
    "SCROLL_MAINNET",
    "SHAPE_MAINNET",
    "SOLANA_MAINNET",
    "WORLDCHAIN_MAINNET",
    "ZKSYNC_MAINNET",
    "ZORA_MAINNET",
];

/// The portfolio query document. Wrapped position entries nest their token
/// data one level deeper under `token`; plain app-token entries carry it
/// inline.
pub const PORTFOLIO_QUERY: &str = r#"query providerPortfolioQuery(
  $addresses: [Address!]!
  $networks: [Network!]!
  $withOverrides: Boolean
) {
  portfolio(addresses: $addresses, networks: $networks, withOverrides: $withOverrides) {
    proxies {
      address
      owner {
        address
        id
      }
      app {
        id
        displayName
        imgUrl
      }
    }
    tokenBalances {
      key
      address
      network
      updatedAt
      token {
        balance
        balanceUSD
        balanceRaw
        baseToken {
          name
          label
          symbol
          address
          decimals
          price
          verified
          imgUrl
          id
        }
      }
    }
    appBalances {
      key
      address
      network
      updatedAt
      balanceUSD
      appName
      appId
      products {
        assets {
          __typename
          ... on AppTokenPositionBalance {
            __typename
            key
            address
            network
            appId
            groupId
            groupLabel
            balance
            balanceUSD
            price
            symbol
            decimals
            supply
            pricePerShare
            tokens {
              __typename
              address
              network
              balance
              balanceUSD
              price
              symbol
            }
          }
          ... on ContractPositionBalance {
            __typename
            key
            address
            network
            appId
            groupId
            groupLabel
            balanceUSD
            tokens {
              metaType
              token {
                __typename
                ... on NonFungiblePositionBalance {
                  __typename
                  address
                  balance
                  balanceUSD
                  network
                  symbol
                }
                ... on BaseTokenPositionBalance {
                  __typename
                  address
                  balance
                  balanceUSD
                  network
                  symbol
                }
                ... on AppTokenPositionBalance {
                  __typename
                  address
                  balance
                  balanceUSD
                  network
                  symbol
                }
              }
            }
          }
        }
      }
    }
    nftBalances {
      balanceUSD
      network
    }
  }
}
"#;
