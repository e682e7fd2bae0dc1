#![allow(dead_code)]

use std::collections::HashMap;
use std::future::Future;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use linkprobe::error::{ExtractionError, FetchError};
use linkprobe::interfaces::FeedSource;
use linkprobe::location::Locate;
use linkprobe::models::{LocationFailure, LocationSummary};
use linkprobe::parser::HostResolver;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Resolver answering from a fixed table and recording every lookup.
#[derive(Debug, Clone, Default)]
pub struct StaticResolver {
    answers: HashMap<String, Vec<IpAddr>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl StaticResolver {
    pub fn with(mut self, host: &str, addrs: &[IpAddr]) -> Self {
        self.answers.insert(host.to_string(), addrs.to_vec());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl HostResolver for StaticResolver {
    fn resolve(
        &self,
        host: &str,
    ) -> impl Future<Output = Result<Vec<IpAddr>, ExtractionError>> + Send {
        self.calls.lock().unwrap().push(host.to_string());
        let result = self
            .answers
            .get(host)
            .cloned()
            .ok_or_else(|| ExtractionError::Resolution {
                host: host.to_string(),
                reason: "NXDOMAIN".to_string(),
            });
        async move { result }
    }
}

/// Feed source serving canned bodies after an optional delay.
#[derive(Debug, Clone, Default)]
pub struct FakeFeed {
    feeds: HashMap<String, (Duration, Result<String, u16>)>,
}

impl FakeFeed {
    pub fn with(mut self, url: &str, delay: Duration, body: &str) -> Self {
        self.feeds
            .insert(url.to_string(), (delay, Ok(body.to_string())));
        self
    }

    pub fn with_status(mut self, url: &str, status: u16) -> Self {
        self.feeds
            .insert(url.to_string(), (Duration::ZERO, Err(status)));
        self
    }
}

impl FeedSource for FakeFeed {
    fn fetch(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        let entry = self
            .feeds
            .get(url)
            .cloned()
            .unwrap_or((Duration::ZERO, Err(404)));
        async move {
            let (delay, body) = entry;
            tokio::time::sleep(delay).await;
            body.map_err(|status| {
                FetchError::Status(reqwest::StatusCode::from_u16(status).unwrap())
            })
        }
    }
}

/// Locator that places every address in the same city.
#[derive(Debug, Clone, Default)]
pub struct FixedLocator;

impl Locate for FixedLocator {
    fn locate(
        &self,
        _ip: Ipv4Addr,
    ) -> impl Future<Output = Result<LocationSummary, LocationFailure>> + Send {
        async {
            Ok(LocationSummary {
                city: Some("Amsterdam".to_string()),
                region: Some("North Holland".to_string()),
                country: Some("NL".to_string()),
                org: None,
            })
        }
    }
}

/// Serves one HTTP response on a local port.
///
/// Returns the base URL and a handle yielding the raw request head.
pub async fn serve_once(status_line: &str, body: &str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let response = format!(
        "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status_line,
        body.len(),
        body
    );

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut head = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = stream.read(&mut chunk).await.unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&chunk[..n]);
            if head.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        stream.write_all(response.as_bytes()).await.unwrap();
        let _ = stream.shutdown().await;
        String::from_utf8_lossy(&head).into_owned()
    });

    (format!("http://{}", addr), handle)
}

/// Serves one `200 OK` response whose body trickles out a byte at a time.
pub async fn serve_slowly(body: &str, per_byte: Duration) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let head = format!(
        "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        body.len()
    );
    let body = body.as_bytes().to_vec();

    tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let mut chunk = [0u8; 1024];
        let _ = stream.read(&mut chunk).await;
        stream.write_all(head.as_bytes()).await.unwrap();
        for byte in body {
            tokio::time::sleep(per_byte).await;
            stream.write_all(&[byte]).await.unwrap();
            stream.flush().await.unwrap();
        }
        let _ = stream.shutdown().await;
    });

    format!("http://{}", addr)
}
