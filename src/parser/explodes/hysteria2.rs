use std::net::Ipv4Addr;

use crate::error::ExtractionError;
use crate::utils::base64::decode_tolerant;
use crate::utils::ip::extract_ip_from_text;

/// Extract the server address from a `hysteria2://` link.
pub fn explode_hysteria2(hysteria2: &str) -> Result<Ipv4Addr, ExtractionError> {
    let payload = hysteria2.strip_prefix("hysteria2://").unwrap_or(hysteria2);
    extract_ip_from_text(&decode_tolerant(payload)).ok_or(ExtractionError::NoAddress)
}
