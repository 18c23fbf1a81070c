use crate::config::Config;
use crate::models::GasPriceSet;
use crate::services::http::{excerpt, ApiPayload, HttpService};
use crate::services::numeric::coerce_float;
use reqwest::Url;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Gas-oracle envelope: `result` is a price mapping on success, but the
/// provider puts a human-readable message there on errors (bad key, rate
/// limit). Modeling it as a closed sum keeps the shape check a match
/// instead of per-key probing.
#[derive(Deserialize)]
struct OracleEnvelope {
    #[serde(default)]
    result: Option<OracleResult>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OracleResult {
    Prices(OraclePrices),
    Message(String),
    Other(Value),
}

#[derive(Deserialize)]
struct OraclePrices {
    #[serde(rename = "SafeGasPrice", default)]
    safe: Value,
    #[serde(rename = "ProposeGasPrice", default)]
    propose: Value,
    #[serde(rename = "FastGasPrice", default)]
    fast: Value,
}

pub struct GasOracleService {
    http: Arc<HttpService>,
    api_key: Option<String>,
    base_url: String,
    chain_id: u64,
}

impl GasOracleService {
    pub fn new(http: Arc<HttpService>, config: &Config) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            base_url: config.gas_oracle_url.clone(),
            chain_id: config.chain_id,
        }
    }

    /// Fetch current gwei prices for the three tiers. Infallible by design:
    /// every failure path degrades to the zeroed set so the caller always
    /// has a renderable result.
    pub async fn fetch_gas_prices(&self, chain_id: Option<u64>) -> GasPriceSet {
        let Some(api_key) = self.api_key.as_deref() else {
            tracing::error!("[gas_oracle] no API key configured, returning zeroed prices");
            return GasPriceSet::zeroed();
        };

        let chain_id = chain_id.unwrap_or(self.chain_id).to_string();
        let url = match Url::parse_with_params(
            &self.base_url,
            &[
                ("chainid", chain_id.as_str()),
                ("module", "gastracker"),
                ("action", "gasoracle"),
                ("apikey", api_key),
            ],
        ) {
            Ok(url) => url,
            Err(e) => {
                tracing::error!("[gas_oracle] invalid oracle URL: {}", e);
                return GasPriceSet::zeroed();
            }
        };

        let payload = match self.http.get_json(url, "gas_oracle").await {
            Ok(payload) => payload,
            // Sanitizer already logged the failure.
            Err(_) => return GasPriceSet::zeroed(),
        };

        let value = match payload {
            ApiPayload::Json(value) => value,
            ApiPayload::RawText(text) => {
                tracing::error!("[gas_oracle] upstream returned non-JSON: {}", excerpt(&text));
                return GasPriceSet::zeroed();
            }
        };

        let envelope: OracleEnvelope = match serde_json::from_value(value) {
            Ok(envelope) => envelope,
            Err(e) => {
                tracing::error!("[gas_oracle] unexpected envelope: {}", e);
                return GasPriceSet::zeroed();
            }
        };

        match envelope.result {
            Some(OracleResult::Prices(prices)) => GasPriceSet {
                safe: coerce_float(&prices.safe),
                average: coerce_float(&prices.propose),
                fast: coerce_float(&prices.fast),
            },
            Some(OracleResult::Message(message)) => {
                tracing::error!("[gas_oracle] provider error in 'result': {}", excerpt(&message));
                GasPriceSet::zeroed()
            }
            Some(OracleResult::Other(other)) => {
                tracing::error!("[gas_oracle] unexpected 'result' structure: {}", other);
                GasPriceSet::zeroed()
            }
            None => {
                tracing::error!("[gas_oracle] response missing 'result' field");
                GasPriceSet::zeroed()
            }
        }
    }
}
