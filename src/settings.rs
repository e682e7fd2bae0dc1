//! Runtime settings
//!
//! Everything has a compiled-in default; a TOML file may override any field.
//!
//! ```toml
//! subscription_urls = ["https://example.com/feed.txt"]
//! geo_base_url = "https://ipinfo.io"
//! connect_timeout_secs = 10
//! read_timeout_secs = 10
//! seed = 42
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use lazy_static::lazy_static;
use log::info;
use serde::Deserialize;
use url::Url;

use crate::error::SettingsError;

const FEED_BASE_URL: &str = "https://raw.githubusercontent.com/barry-far/V2ray-Config/refs/heads/main/Sub";
const FEED_COUNT: usize = 50;

pub const DEFAULT_GEO_BASE_URL: &str = "https://ipinfo.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = concat!("linkprobe/", env!("CARGO_PKG_VERSION"));

lazy_static! {
    /// `Sub1.txt` through `Sub50.txt` of the public feed mirror.
    pub static ref DEFAULT_SUBSCRIPTION_URLS: Vec<String> = (1..=FEED_COUNT)
        .map(|n| format!("{}{}.txt", FEED_BASE_URL, n))
        .collect();
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub subscription_urls: Vec<String>,
    pub geo_base_url: String,
    pub connect_timeout_secs: u64,
    pub read_timeout_secs: u64,
    pub user_agent: String,
    /// Fixed seed for feed and line selection; random when unset.
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            subscription_urls: DEFAULT_SUBSCRIPTION_URLS.clone(),
            geo_base_url: DEFAULT_GEO_BASE_URL.to_string(),
            connect_timeout_secs: DEFAULT_TIMEOUT_SECS,
            read_timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            seed: None,
        }
    }
}

impl Settings {
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        let settings: Settings = toml::from_str(content)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Loads settings from a file, or the defaults when `path` is empty.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Ok(Settings::default());
        }
        info!("Loading settings from {}", path.display());
        Self::from_toml(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<(), SettingsError> {
        for url in self.subscription_urls.iter().chain([&self.geo_base_url]) {
            Url::parse(url).map_err(|source| SettingsError::Url {
                url: url.clone(),
                source,
            })?;
        }
        if self.connect_timeout_secs == 0 || self.read_timeout_secs == 0 {
            return Err(SettingsError::Config(
                "timeouts must be at least one second".to_string(),
            ));
        }
        Ok(())
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}
