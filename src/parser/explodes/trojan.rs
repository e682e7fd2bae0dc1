use std::net::Ipv4Addr;

use super::common::{host_after_userinfo, validate};
use crate::error::ExtractionError;
use crate::utils::base64::decode_tolerant;

/// Extract the server address from a `trojan://` link.
///
/// `trojan://password@host:port` is read from the user info; a link without a
/// password is treated as a plain URL.
pub fn explode_trojan(trojan: &str) -> Result<Ipv4Addr, ExtractionError> {
    let payload = trojan.strip_prefix("trojan://").unwrap_or(trojan);
    if !payload.contains('@') {
        return super::http::explode_url(trojan);
    }

    let decoded = decode_tolerant(payload);
    validate(host_after_userinfo(&decoded))
}
