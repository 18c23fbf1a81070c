use crate::error::FetchError;
use anyhow::Result;
use reqwest::Url;
use serde_json::Value;
use std::time::Duration;

const EXCERPT_LIMIT: usize = 300;

/// What an upstream body sanitized down to. Downstream code pattern-matches
/// on this closed set instead of probing response shapes per caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiPayload {
    /// Body parsed as structured JSON.
    Json(Value),
    /// Non-empty body that is not JSON, preserved verbatim for diagnostics.
    RawText(String),
}

/// Thin wrapper over reqwest that guarantees a typed result: every request
/// comes back as an `ApiPayload` or a classified `FetchError`, never a bare
/// transport error or panic.
pub struct HttpService {
    client: reqwest::Client,
}

impl HttpService {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }

    /// GET `url` and sanitize the body. `label` identifies the caller in logs.
    pub async fn get_json(&self, url: Url, label: &str) -> Result<ApiPayload, FetchError> {
        let response = match self.client.get(url).send().await {
            Ok(resp) => resp,
            Err(e) => {
                tracing::error!("[{}] network error: {}", label, e);
                return Err(FetchError::Network(e));
            }
        };

        if let Err(e) = response.error_for_status_ref() {
            tracing::error!("[{}] upstream status error: {}", label, e);
            return Err(FetchError::Network(e));
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                tracing::error!("[{}] failed to read body: {}", label, e);
                return Err(FetchError::Network(e));
            }
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            tracing::error!("[{}] empty response body", label);
            return Err(FetchError::EmptyResponse);
        }

        match serde_json::from_str::<Value>(trimmed) {
            // Some upstreams return JSON wrapped in a JSON string; unwrap one
            // level before giving up on structure.
            Ok(Value::String(inner)) => match serde_json::from_str::<Value>(&inner) {
                Ok(value) => Ok(ApiPayload::Json(value)),
                Err(_) => {
                    tracing::warn!(
                        "[{}] response not structured JSON, keeping raw text: {}",
                        label,
                        excerpt(trimmed)
                    );
                    Ok(ApiPayload::RawText(trimmed.to_string()))
                }
            },
            Ok(value) => Ok(ApiPayload::Json(value)),
            Err(_) => {
                tracing::warn!(
                    "[{}] response not JSON, keeping raw text: {}",
                    label,
                    excerpt(trimmed)
                );
                Ok(ApiPayload::RawText(trimmed.to_string()))
            }
        }
    }
}

/// Truncate a body for logging without splitting a UTF-8 character.
pub fn excerpt(body: &str) -> String {
    body.chars().take(EXCERPT_LIMIT).collect()
}
