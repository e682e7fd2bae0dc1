use std::net::Ipv4Addr;

use crate::error::ExtractionError;
use crate::models::ProtocolKind;
use crate::utils::ip::parse_ipv4;

/// Pulls a server address out of one kind of share link.
pub type Extractor = fn(&str) -> Result<Ipv4Addr, ExtractionError>;

/// Extractor per protocol. `Unknown` links are only inspected for ini-style
/// and JSON bodies.
const EXTRACTORS: [(ProtocolKind, Extractor); 9] = [
    (ProtocolKind::VMess, super::vmess::explode_vmess),
    (ProtocolKind::VLess, super::vless::explode_vless),
    (ProtocolKind::Shadowsocks, super::ss::explode_ss),
    (ProtocolKind::Trojan, super::trojan::explode_trojan),
    (ProtocolKind::HTTP, super::http::explode_url),
    (ProtocolKind::SOCKS, super::http::explode_url),
    (ProtocolKind::WireGuard, super::http::explode_url),
    (ProtocolKind::Hysteria2, super::hysteria2::explode_hysteria2),
    (ProtocolKind::Unknown, explode_plain_text),
];

pub fn extractor_for(kind: ProtocolKind) -> Extractor {
    EXTRACTORS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, extractor)| *extractor)
        .unwrap_or(explode_plain_text)
}

/// Detects the link's protocol and runs the matching extractor.
pub fn explode(config: &str) -> Result<Ipv4Addr, ExtractionError> {
    extractor_for(ProtocolKind::detect(config))(config)
}

/// Config text without a recognized scheme: a WireGuard ini section or a bare
/// JSON outbound. Links with some other `scheme://` are not trusted.
fn explode_plain_text(config: &str) -> Result<Ipv4Addr, ExtractionError> {
    if config.contains("://") {
        Err(ExtractionError::UnsupportedProtocol(ProtocolKind::Unknown))
    } else if config.contains(super::wireguard::ENDPOINT_MARKER) {
        super::wireguard::explode_wireguard_conf(config)
    } else if config.trim().starts_with('{') {
        super::json::explode_json(config)
    } else {
        Err(ExtractionError::NoAddress)
    }
}

/// Validates a candidate produced by an extractor.
pub(crate) fn validate(candidate: &str) -> Result<Ipv4Addr, ExtractionError> {
    if candidate.is_empty() {
        return Err(ExtractionError::NoAddress);
    }
    parse_ipv4(candidate).ok_or_else(|| ExtractionError::InvalidAddress(candidate.to_string()))
}

/// Text after the first `@` (or all of it) and before the next `:`.
pub(crate) fn host_after_userinfo(payload: &str) -> &str {
    let rest = match payload.find('@') {
        Some(pos) => &payload[pos + 1..],
        None => payload,
    };
    rest.split(':').next().unwrap_or(rest)
}
