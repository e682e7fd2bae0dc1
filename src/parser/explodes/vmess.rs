use std::net::Ipv4Addr;

use log::debug;
use serde_json::Value;

use super::common::validate;
use crate::error::ExtractionError;
use crate::utils::base64::try_decode;
use crate::utils::ip::{extract_ip_from_text, is_valid_ip};

/// Keys of a v2rayN share payload that may carry the server address.
const ADDRESS_KEYS: [&str; 3] = ["add", "server", "address"];

/// Extract the server address from a `vmess://` link.
///
/// The payload is normally base64 encoded JSON. When it does not parse as a
/// JSON object, the decoded text is scanned for an embedded dotted-quad.
pub fn explode_vmess(vmess: &str) -> Result<Ipv4Addr, ExtractionError> {
    let encoded = vmess.strip_prefix("vmess://").unwrap_or(vmess);
    let (decoded, decode_error) = match try_decode(encoded) {
        Ok(decoded) => (decoded, None),
        Err(e) => (encoded.to_string(), Some(e)),
    };

    match serde_json::from_str::<Value>(&decoded) {
        Ok(Value::Object(json)) => {
            let found = ADDRESS_KEYS
                .iter()
                .filter_map(|key| json.get(*key).and_then(Value::as_str))
                .find(|value| is_valid_ip(value));
            match found {
                Some(add) => validate(add),
                None => Err(ExtractionError::NoAddress),
            }
        }
        parsed => {
            debug!("vmess payload is not a JSON object, scanning text");
            extract_ip_from_text(&decoded).ok_or_else(|| match (decode_error, parsed) {
                (Some(e), _) => ExtractionError::Decode(e.to_string()),
                (None, Err(e)) => ExtractionError::Parse(e.to_string()),
                (None, Ok(_)) => ExtractionError::Parse("expected a JSON object".to_string()),
            })
        }
    }
}
