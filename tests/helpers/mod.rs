use gasgauge::config::Config;
use gasgauge::services::{ExchangeService, GasOracleService, HttpService};
use std::sync::Arc;
use std::time::Duration;

pub fn test_config(gas_oracle_url: &str, price_api_url: &str, api_key: Option<&str>) -> Config {
    Config {
        api_key: api_key.map(String::from),
        chain_id: 1,
        gas_oracle_url: gas_oracle_url.to_string(),
        price_api_url: price_api_url.to_string(),
        http_timeout: Duration::from_secs(10),
        refresh_interval: Duration::from_secs(30),
    }
}

pub fn build_services(config: &Config) -> (GasOracleService, ExchangeService) {
    let http = Arc::new(HttpService::new(config.http_timeout).expect("http client"));
    (
        GasOracleService::new(http.clone(), config),
        ExchangeService::new(http, config),
    )
}
