use std::net::Ipv4Addr;

use super::common::{host_after_userinfo, validate};
use crate::error::ExtractionError;
use crate::utils::base64::decode_tolerant;

/// Extract the server address from an `ss://` link.
///
/// Handles both the legacy form, where `method:password@host:port` is base64
/// encoded as a whole, and SIP002, where only the user info is encoded and the
/// decode falls back to the raw text.
pub fn explode_ss(ss: &str) -> Result<Ipv4Addr, ExtractionError> {
    let payload = ss.strip_prefix("ss://").unwrap_or(ss);
    let decoded = decode_tolerant(payload);
    validate(host_after_userinfo(&decoded))
}
