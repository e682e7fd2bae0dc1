use thiserror::Error;

use crate::models::ProtocolKind;

/// Why a stage of the parsing pipeline produced no address.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    #[error("payload is not valid base64: {0}")]
    Decode(String),

    #[error("payload could not be parsed: {0}")]
    Parse(String),

    #[error("failed to resolve {host}: {reason}")]
    Resolution { host: String, reason: String },

    #[error("no address candidate found")]
    NoAddress,

    #[error("candidate {0:?} is not a valid IPv4 address")]
    InvalidAddress(String),

    #[error("no extractor for {0} links")]
    UnsupportedProtocol(ProtocolKind),

    #[error("No IP detected")]
    NoIpDetected,
}

/// Failure while downloading a subscription feed.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Failed to send request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("HTTP error: {0}")]
    Status(reqwest::StatusCode),

    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),
}

/// Failure of a whole probe request, as shown to the user.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("Error: {0}")]
    Fetch(#[from] FetchError),

    #[error("No valid configuration found")]
    NoValidConfig,

    #[error("No subscription URL configured")]
    NoSubscription,
}

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid settings file: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid URL {url:?}: {source}")]
    Url {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
