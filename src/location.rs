//! Best-effort IP geolocation through an ipinfo-style JSON API.

use std::future::Future;
use std::net::Ipv4Addr;

use log::{debug, warn};
use reqwest::header::ACCEPT;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::error::FetchError;
use crate::models::{LocationFailure, LocationSummary};
use crate::settings::Settings;
use crate::utils::http::{build_client, HttpConfig};

pub trait Locate {
    fn locate(
        &self,
        ip: Ipv4Addr,
    ) -> impl Future<Output = Result<LocationSummary, LocationFailure>> + Send;
}

/// Client for `GET <base>/<ip>/json`.
#[derive(Debug, Clone)]
pub struct GeoLocator {
    client: Client,
    base_url: String,
}

impl GeoLocator {
    pub fn new(base_url: &str, config: &HttpConfig) -> Result<Self, FetchError> {
        Ok(GeoLocator {
            client: build_client(config)?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, FetchError> {
        Self::new(&settings.geo_base_url, &HttpConfig::from(settings))
    }

    pub fn endpoint(&self, ip: Ipv4Addr) -> String {
        format!("{}/{}/json", self.base_url, ip)
    }

    pub async fn lookup(&self, ip: Ipv4Addr) -> Result<LocationSummary, LocationFailure> {
        let url = self.endpoint(ip);
        debug!("Looking up location of {} via {}", ip, url);

        let response = match self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to fetch location for {}: {}", ip, e);
                return Err(LocationFailure::Network(e.to_string()));
            }
        };

        if response.status() != StatusCode::OK {
            warn!("Geolocation API error: {}", response.status());
            return Err(LocationFailure::Api(response.status().as_u16()));
        }

        let body = response.text().await.map_err(|e| {
            warn!("Failed to read geolocation response: {}", e);
            LocationFailure::Network(e.to_string())
        })?;
        parse_location(&body)
    }
}

impl Locate for GeoLocator {
    fn locate(
        &self,
        ip: Ipv4Addr,
    ) -> impl Future<Output = Result<LocationSummary, LocationFailure>> + Send {
        self.lookup(ip)
    }
}

/// Parses a geolocation response body. Anything but a JSON object with
/// optional string fields is a parse failure.
pub fn parse_location(body: &str) -> Result<LocationSummary, LocationFailure> {
    let parse_error = |e: String| {
        warn!("Failed to parse geolocation response: {}", e);
        LocationFailure::Parse(e)
    };

    let json: Value = serde_json::from_str(body).map_err(|e| parse_error(e.to_string()))?;
    if !json.is_object() {
        return Err(parse_error("expected a JSON object".to_string()));
    }
    serde_json::from_value(json).map_err(|e| parse_error(e.to_string()))
}
