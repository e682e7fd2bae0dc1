use std::net::Ipv4Addr;

use crate::error::ExtractionError;
use crate::utils::base64::decode_tolerant;
use crate::utils::ip::extract_ip_from_text;

/// Extract the server address from a `vless://` link.
///
/// VLESS links carry `uuid@host:port?params` inline, occasionally base64
/// wrapped, so the decoded text is scanned for the address.
pub fn explode_vless(vless: &str) -> Result<Ipv4Addr, ExtractionError> {
    let payload = vless.strip_prefix("vless://").unwrap_or(vless);
    extract_ip_from_text(&decode_tolerant(payload)).ok_or(ExtractionError::NoAddress)
}
