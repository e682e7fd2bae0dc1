//! Request/response values passed between a probe session and its observers.

use std::fmt;
use std::net::Ipv4Addr;

use crate::error::ProbeError;
use crate::models::ProtocolKind;

/// Where the config line of a probe comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeSource {
    /// Fetch this subscription feed and pick a random line from it.
    Subscription(String),
    /// Probe a single share link as given.
    Link(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeRequest {
    pub id: u64,
    pub source: ProbeSource,
    /// Seed for picking the line inside the feed.
    pub seed: u64,
}

/// Location column of a report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocationLine {
    Found(String),
    /// Lookup failed; holds the sentinel string, e.g. `Unknown (API Error)`.
    Failed(String),
    NoIpDetected,
    /// Lookups disabled for this prober.
    Skipped,
}

impl fmt::Display for LocationLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationLine::Found(s) | LocationLine::Failed(s) => f.write_str(s),
            LocationLine::NoIpDetected => f.write_str("No IP detected"),
            LocationLine::Skipped => f.write_str("-"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub config: String,
    pub kind: ProtocolKind,
    pub ip: Option<Ipv4Addr>,
    pub location: LocationLine,
}

#[derive(Debug)]
pub struct ProbeResponse {
    pub request_id: u64,
    pub outcome: Result<ProbeReport, ProbeError>,
}
