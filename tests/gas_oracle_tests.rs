mod helpers;

use gasgauge::models::GasPriceSet;
use helpers::{build_services, test_config};
use mockito::Matcher;

fn oracle_query(chain_id: &str) -> Matcher {
    Matcher::AllOf(vec![
        Matcher::UrlEncoded("chainid".into(), chain_id.into()),
        Matcher::UrlEncoded("module".into(), "gastracker".into()),
        Matcher::UrlEncoded("action".into(), "gasoracle".into()),
        Matcher::UrlEncoded("apikey".into(), "test-key".into()),
    ])
}

#[tokio::test]
async fn parses_well_formed_envelope() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(oracle_query("1"))
        .with_status(200)
        .with_body(
            r#"{"status":"1","message":"OK","result":{"SafeGasPrice":"10","ProposeGasPrice":"20.5","FastGasPrice":"30"}}"#,
        )
        .create_async()
        .await;

    let config = test_config(&server.url(), &server.url(), Some("test-key"));
    let (oracle, _) = build_services(&config);

    let prices = oracle.fetch_gas_prices(None).await;
    assert_eq!(
        prices,
        GasPriceSet {
            safe: 10.0,
            average: 20.5,
            fast: 30.0
        }
    );
    mock.assert_async().await;
}

#[tokio::test]
async fn string_result_degrades_to_zeroed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"0","message":"NOTOK","result":"Max rate limit reached"}"#)
        .create_async()
        .await;

    let config = test_config(&server.url(), &server.url(), Some("test-key"));
    let (oracle, _) = build_services(&config);

    assert_eq!(oracle.fetch_gas_prices(None).await, GasPriceSet::zeroed());
}

#[tokio::test]
async fn missing_result_field_degrades_to_zeroed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"status":"0","message":"NOTOK"}"#)
        .create_async()
        .await;

    let config = test_config(&server.url(), &server.url(), Some("test-key"));
    let (oracle, _) = build_services(&config);

    assert_eq!(oracle.fetch_gas_prices(None).await, GasPriceSet::zeroed());
}

#[tokio::test]
async fn non_json_body_degrades_to_zeroed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<html>502 Bad Gateway</html>")
        .create_async()
        .await;

    let config = test_config(&server.url(), &server.url(), Some("test-key"));
    let (oracle, _) = build_services(&config);

    assert_eq!(oracle.fetch_gas_prices(None).await, GasPriceSet::zeroed());
}

#[tokio::test]
async fn http_error_degrades_to_zeroed() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let config = test_config(&server.url(), &server.url(), Some("test-key"));
    let (oracle, _) = build_services(&config);

    assert_eq!(oracle.fetch_gas_prices(None).await, GasPriceSet::zeroed());
}

#[tokio::test]
async fn missing_api_key_makes_no_request() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let config = test_config(&server.url(), &server.url(), None);
    let (oracle, _) = build_services(&config);

    assert_eq!(oracle.fetch_gas_prices(None).await, GasPriceSet::zeroed());
    mock.assert_async().await;
}

#[tokio::test]
async fn prices_with_thousands_separators_coerce() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            r#"{"status":"1","message":"OK","result":{"SafeGasPrice":"1,050.5","ProposeGasPrice":2,"FastGasPrice":"oops"}}"#,
        )
        .create_async()
        .await;

    let config = test_config(&server.url(), &server.url(), Some("test-key"));
    let (oracle, _) = build_services(&config);

    let prices = oracle.fetch_gas_prices(None).await;
    assert_eq!(prices.safe, 1050.5);
    assert_eq!(prices.average, 2.0);
    // Unparseable field coerces to the unavailable sentinel, not an error.
    assert_eq!(prices.fast, 0.0);
}

#[tokio::test]
async fn explicit_chain_id_overrides_configured_one() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_query(oracle_query("137"))
        .with_status(200)
        .with_body(
            r#"{"status":"1","message":"OK","result":{"SafeGasPrice":"40","ProposeGasPrice":"50","FastGasPrice":"60"}}"#,
        )
        .create_async()
        .await;

    let config = test_config(&server.url(), &server.url(), Some("test-key"));
    let (oracle, _) = build_services(&config);

    let prices = oracle.fetch_gas_prices(Some(137)).await;
    assert_eq!(prices.safe, 40.0);
    mock.assert_async().await;
}
