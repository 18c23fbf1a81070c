use anyhow::{Context, Result};
use std::time::Duration;

pub const DEFAULT_GAS_ORACLE_URL: &str = "https://api.etherscan.io/v2/api";
pub const DEFAULT_PRICE_API_URL: &str = "https://api.coingecko.com/api/v3/simple/price";

#[derive(Debug, Clone)]
pub struct Config {
    // Gas oracle (Etherscan v2)
    pub api_key: Option<String>,
    pub chain_id: u64,
    pub gas_oracle_url: String,

    // Price conversion (CoinGecko simple price)
    pub price_api_url: String,

    // Upstream request timeout
    pub http_timeout: Duration,

    // Watch mode refresh interval
    pub refresh_interval: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            api_key: std::env::var("ETHERSCAN_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),

            chain_id: std::env::var("ETHERSCAN_CHAIN_ID")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .context("Invalid ETHERSCAN_CHAIN_ID")?,

            gas_oracle_url: std::env::var("GAS_ORACLE_URL")
                .unwrap_or_else(|_| DEFAULT_GAS_ORACLE_URL.to_string()),

            price_api_url: std::env::var("PRICE_API_URL")
                .unwrap_or_else(|_| DEFAULT_PRICE_API_URL.to_string()),

            http_timeout: Duration::from_secs(10),

            refresh_interval: Duration::from_secs(
                std::env::var("REFRESH_INTERVAL_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("Invalid REFRESH_INTERVAL_SECS")?,
            ),
        };

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if !self.gas_oracle_url.starts_with("http") {
            anyhow::bail!("GAS_ORACLE_URL must be an HTTP(S) URL");
        }
        if !self.price_api_url.starts_with("http") {
            anyhow::bail!("PRICE_API_URL must be an HTTP(S) URL");
        }
        if self.refresh_interval.is_zero() {
            anyhow::bail!("REFRESH_INTERVAL_SECS must be positive");
        }

        // Missing key is a degraded mode, not a startup failure: gas prices
        // come back zeroed and the UI still has a renderable result.
        if self.api_key.is_none() {
            tracing::error!("ETHERSCAN_API_KEY not set; gas prices will be unavailable");
        }

        Ok(())
    }
}
