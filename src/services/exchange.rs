use crate::config::Config;
use crate::models::ExchangeRateSet;
use crate::services::http::{excerpt, ApiPayload, HttpService};
use crate::services::numeric::coerce_float;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Asset id the price endpoint is queried for.
const ASSET_ID: &str = "ethereum";

#[derive(Deserialize)]
struct PriceResponse {
    #[serde(default)]
    ethereum: Option<BTreeMap<String, Value>>,
}

pub struct ExchangeService {
    http: Arc<HttpService>,
    base_url: String,
}

impl ExchangeService {
    pub fn new(http: Arc<HttpService>, config: &Config) -> Self {
        Self {
            http,
            base_url: config.price_api_url.clone(),
        }
    }

    /// Fetch ETH unit prices for the requested currency code. Returns an
    /// empty set on any failure; callers must treat empty as total failure,
    /// distinct from a valid-but-zero price.
    pub async fn fetch_eth_unit_prices(&self, currency: &str) -> ExchangeRateSet {
        let url = match Url::parse_with_params(
            &self.base_url,
            &[("ids", ASSET_ID), ("vs_currencies", currency)],
        ) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("[exchange] invalid price URL: {}", e);
                return ExchangeRateSet::new();
            }
        };

        let payload = match self.http.get_json(url, "exchange").await {
            Ok(payload) => payload,
            Err(_) => return ExchangeRateSet::new(),
        };

        let value = match payload {
            ApiPayload::Json(value) => value,
            ApiPayload::RawText(text) => {
                tracing::error!("[exchange] upstream returned non-JSON: {}", excerpt(&text));
                return ExchangeRateSet::new();
            }
        };

        let response: PriceResponse = match serde_json::from_value(value) {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("[exchange] unexpected response shape: {}", e);
                return ExchangeRateSet::new();
            }
        };

        let Some(prices) = response.ethereum else {
            tracing::error!("[exchange] response missing '{}' key", ASSET_ID);
            return ExchangeRateSet::new();
        };

        prices
            .into_iter()
            .map(|(code, value)| (code.to_lowercase(), coerce_float(&value)))
            .collect()
    }
}
