use thiserror::Error;

/// Failures at the HTTP sanitizer boundary. Malformed-but-present bodies are
/// not errors here; they come back as `ApiPayload::RawText` so the upstream
/// payload is preserved for logging.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("empty response body")]
    EmptyResponse,
}

/// The one hard failure the core surfaces: cost figures without a price for
/// the requested currency are meaningless, so the report does not assemble.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    #[error("Failed to fetch ETH price for {currency}")]
    PriceUnavailable { currency: String },
}
