use std::fmt;

use serde::Deserialize;
use thiserror::Error;

/// Where a server appears to be, as reported by the geolocation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LocationSummary {
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub org: Option<String>,
}

impl LocationSummary {
    /// Organization name without the trailing `, suffix` some providers add.
    fn organization(&self) -> Option<&str> {
        let org = self.org.as_deref().filter(|s| !s.is_empty())?;
        let head = match org.rfind(',') {
            Some(pos) => &org[..pos],
            None => org,
        };
        Some(head.trim())
    }
}

/// Renders `"{city, }{region, }{country}{ · organization}"`.
impl fmt::Display for LocationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let city = self.city.as_deref().unwrap_or("");
        let region = self.region.as_deref().unwrap_or("");

        if !city.is_empty() {
            write!(f, "{}, ", city)?;
        }
        if !region.is_empty() && region != city {
            write!(f, "{}, ", region)?;
        }
        f.write_str(self.country.as_deref().unwrap_or("Unknown"))?;
        if let Some(org) = self.organization() {
            write!(f, " · {}", org)?;
        }
        Ok(())
    }
}

/// Why a location could not be determined. The display strings are shown to
/// the user verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LocationFailure {
    #[error("Unknown (API Error)")]
    Api(u16),

    #[error("Unknown (Network Error)")]
    Network(String),

    #[error("Unknown (Parse Error)")]
    Parse(String),
}
