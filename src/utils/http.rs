use std::time::Duration;

use log::debug;
use reqwest::{Client, StatusCode};

use crate::error::FetchError;
use crate::settings::Settings;

/// Timeouts and identity used for every outgoing request.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    pub connect_timeout: Duration,
    pub read_timeout: Duration,
    pub user_agent: String,
}

impl From<&Settings> for HttpConfig {
    fn from(settings: &Settings) -> Self {
        HttpConfig {
            connect_timeout: settings.connect_timeout(),
            read_timeout: settings.read_timeout(),
            user_agent: settings.user_agent.clone(),
        }
    }
}

/// Builds a client capped by both the connect and the read timeout. The read
/// timeout applies to each read, so a slow body keeps flowing.
pub fn build_client(config: &HttpConfig) -> Result<Client, FetchError> {
    Client::builder()
        .connect_timeout(config.connect_timeout)
        .read_timeout(config.read_timeout)
        .user_agent(config.user_agent.as_str())
        .build()
        .map_err(FetchError::Client)
}

/// Makes a GET request and returns the body of a `200 OK` response.
///
/// # Arguments
/// * `client` - Client from [`build_client`]
/// * `url` - The URL to request
///
/// # Returns
/// * `Ok(String)` - The response body
/// * `Err(FetchError)` - Transport failure or any status other than 200
pub async fn web_get_async(client: &Client, url: &str) -> Result<String, FetchError> {
    debug!("GET {}", url);
    let response = client.get(url).send().await.map_err(FetchError::Request)?;

    if response.status() != StatusCode::OK {
        return Err(FetchError::Status(response.status()));
    }

    response.text().await.map_err(FetchError::Body)
}
