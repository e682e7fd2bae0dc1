mod common;

use std::net::Ipv4Addr;
use std::time::Duration;

use common::{serve_once, serve_slowly, StaticResolver};
use linkprobe::interfaces::{HttpFeed, Prober};
use linkprobe::location::GeoLocator;
use linkprobe::models::{LocationFailure, LocationLine, ProtocolKind};
use linkprobe::utils::http::HttpConfig;
use linkprobe::ConfigParser;

fn http_config() -> HttpConfig {
    HttpConfig {
        connect_timeout: Duration::from_secs(2),
        read_timeout: Duration::from_secs(2),
        user_agent: "linkprobe-tests".to_string(),
    }
}

#[tokio::test]
async fn test_lookup_success() {
    let body = r#"{"ip":"8.8.8.8","city":"Mountain View","region":"California","country":"US","org":"AS15169 Google LLC"}"#;
    let (base, request) = serve_once("200 OK", body).await;
    let locator = GeoLocator::new(&base, &http_config()).unwrap();

    let summary = locator.lookup(Ipv4Addr::new(8, 8, 8, 8)).await.unwrap();
    assert_eq!(
        summary.to_string(),
        "Mountain View, California, US · AS15169 Google LLC"
    );

    let head = request.await.unwrap();
    assert!(head.starts_with("GET /8.8.8.8/json HTTP/1.1"));
    assert!(head.to_ascii_lowercase().contains("accept: application/json"));
}

#[tokio::test]
async fn test_lookup_api_error() {
    let (base, _request) = serve_once("500 Internal Server Error", "{}").await;
    let locator = GeoLocator::new(&base, &http_config()).unwrap();

    let failure = locator.lookup(Ipv4Addr::new(1, 1, 1, 1)).await.unwrap_err();
    assert_eq!(failure, LocationFailure::Api(500));
    assert_eq!(failure.to_string(), "Unknown (API Error)");
}

#[tokio::test]
async fn test_lookup_parse_error() {
    let (base, _request) = serve_once("200 OK", "rate limited, try later").await;
    let locator = GeoLocator::new(&base, &http_config()).unwrap();

    let failure = locator.lookup(Ipv4Addr::new(1, 1, 1, 1)).await.unwrap_err();
    assert!(matches!(failure, LocationFailure::Parse(_)));
    assert_eq!(failure.to_string(), "Unknown (Parse Error)");
}

#[tokio::test]
async fn test_lookup_network_error() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let locator = GeoLocator::new(&format!("http://127.0.0.1:{}", port), &http_config()).unwrap();

    let failure = locator.lookup(Ipv4Addr::new(1, 1, 1, 1)).await.unwrap_err();
    assert!(matches!(failure, LocationFailure::Network(_)));
    assert_eq!(failure.to_string(), "Unknown (Network Error)");
}

#[tokio::test]
async fn test_lookup_slow_body_within_read_timeout() {
    let body = r#"{"country":"NL"}"#;
    let base = serve_slowly(body, Duration::from_millis(150)).await;
    let config = HttpConfig {
        connect_timeout: Duration::from_secs(1),
        read_timeout: Duration::from_secs(1),
        user_agent: "linkprobe-tests".to_string(),
    };
    let locator = GeoLocator::new(&base, &config).unwrap();

    let summary = locator.lookup(Ipv4Addr::new(9, 9, 9, 9)).await.unwrap();
    assert_eq!(summary.to_string(), "NL");
}

#[tokio::test]
async fn test_probe_link_with_location() {
    let body = r#"{"city":"Helsinki","region":"Uusimaa","country":"FI","org":"AS24940 Hetzner Online GmbH"}"#;
    let (base, _request) = serve_once("200 OK", body).await;
    let prober = Prober::new(
        HttpFeed::new(&http_config()).unwrap(),
        ConfigParser::with_resolver(StaticResolver::default()),
        Some(GeoLocator::new(&base, &http_config()).unwrap()),
    );

    let report = prober
        .probe_config("socks://95.216.1.2:1080#fi".to_string())
        .await;
    assert_eq!(report.kind, ProtocolKind::SOCKS);
    assert_eq!(report.ip, Some(Ipv4Addr::new(95, 216, 1, 2)));
    assert_eq!(
        report.location,
        LocationLine::Found("Helsinki, Uusimaa, FI · AS24940 Hetzner Online GmbH".to_string())
    );
}

#[tokio::test]
async fn test_probe_link_with_failed_location() {
    let (base, _request) = serve_once("429 Too Many Requests", "").await;
    let prober = Prober::new(
        HttpFeed::new(&http_config()).unwrap(),
        ConfigParser::with_resolver(StaticResolver::default()),
        Some(GeoLocator::new(&base, &http_config()).unwrap()),
    );

    let report = prober
        .probe_config("http://95.216.1.3:3128".to_string())
        .await;
    assert_eq!(report.location.to_string(), "Unknown (API Error)");
}
