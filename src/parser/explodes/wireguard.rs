use std::net::Ipv4Addr;

use super::common::validate;
use crate::error::ExtractionError;

pub(crate) const ENDPOINT_MARKER: &str = "Endpoint = ";

/// Extract the peer endpoint from WireGuard configuration text.
///
/// ```text
/// [Peer]
/// PublicKey = ...
/// Endpoint = 162.159.192.1:2408
/// ```
pub fn explode_wireguard_conf(config: &str) -> Result<Ipv4Addr, ExtractionError> {
    let endpoint = match config.find(ENDPOINT_MARKER) {
        Some(pos) => &config[pos + ENDPOINT_MARKER.len()..],
        None => return Err(ExtractionError::NoAddress),
    };
    validate(endpoint.split(':').next().unwrap_or(endpoint))
}
