use std::net::Ipv4Addr;

use serde_json::Value;

use super::common::validate;
use crate::error::ExtractionError;
use crate::utils::ip::is_valid_ip;

const ADDRESS_KEYS: [&str; 3] = ["server", "address", "host"];

/// Extract the server address from a bare JSON outbound object.
pub fn explode_json(content: &str) -> Result<Ipv4Addr, ExtractionError> {
    let json: Value =
        serde_json::from_str(content).map_err(|e| ExtractionError::Parse(e.to_string()))?;
    let json = json
        .as_object()
        .ok_or_else(|| ExtractionError::Parse("expected a JSON object".to_string()))?;

    ADDRESS_KEYS
        .iter()
        .filter_map(|key| json.get(*key).and_then(Value::as_str))
        .find(|value| is_valid_ip(value))
        .map(validate)
        .unwrap_or(Err(ExtractionError::NoAddress))
}
