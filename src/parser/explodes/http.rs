use std::net::Ipv4Addr;

use super::common::validate;
use crate::error::ExtractionError;

/// Extract the host of a plain `scheme://host[:port][/path][?query]` link.
///
/// Used for `http://`, `socks://` and `wireguard://` links, which carry the
/// address unencoded.
pub fn explode_url(link: &str) -> Result<Ipv4Addr, ExtractionError> {
    let rest = match link.find("://") {
        Some(pos) => &link[pos + 3..],
        None => link,
    };
    let host = rest
        .split('/')
        .next()
        .and_then(|s| s.split('?').next())
        .and_then(|s| s.split(':').next())
        .unwrap_or("");
    validate(host)
}
