//! Share-link protocol identification

use std::fmt;

/// Protocol of a share link, identified by its literal scheme prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProtocolKind {
    VMess,
    VLess,
    Shadowsocks,
    Trojan,
    HTTP,
    SOCKS,
    WireGuard,
    Hysteria2,
    Unknown,
}

/// Scheme prefixes in matching priority order.
pub const PROTOCOL_PREFIXES: [(&str, ProtocolKind); 8] = [
    ("vmess://", ProtocolKind::VMess),
    ("vless://", ProtocolKind::VLess),
    ("ss://", ProtocolKind::Shadowsocks),
    ("trojan://", ProtocolKind::Trojan),
    ("http://", ProtocolKind::HTTP),
    ("socks://", ProtocolKind::SOCKS),
    ("wireguard://", ProtocolKind::WireGuard),
    ("hysteria2://", ProtocolKind::Hysteria2),
];

impl ProtocolKind {
    /// Classifies a config line. Matching is case-sensitive; anything without
    /// a recognized prefix is `Unknown`.
    pub fn detect(config: &str) -> Self {
        PROTOCOL_PREFIXES
            .iter()
            .find(|(prefix, _)| config.starts_with(prefix))
            .map(|(_, kind)| *kind)
            .unwrap_or(ProtocolKind::Unknown)
    }

    pub fn prefix(self) -> Option<&'static str> {
        PROTOCOL_PREFIXES
            .iter()
            .find(|(_, kind)| *kind == self)
            .map(|(prefix, _)| *prefix)
    }

    /// Strips this kind's prefix from `config`, if it carries it.
    pub fn strip<'a>(self, config: &'a str) -> Option<&'a str> {
        self.prefix().and_then(|prefix| config.strip_prefix(prefix))
    }

    /// Whether the payload after the prefix is expected to be base64 or
    /// user-info encoded rather than a plain `scheme://host` URL.
    pub fn is_encoded(config: &str) -> bool {
        match Self::detect(config) {
            ProtocolKind::VMess
            | ProtocolKind::VLess
            | ProtocolKind::Shadowsocks
            | ProtocolKind::Hysteria2 => true,
            ProtocolKind::Trojan => config["trojan://".len()..].contains('@'),
            _ => false,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ProtocolKind::VMess => "VMess",
            ProtocolKind::VLess => "VLESS",
            ProtocolKind::Shadowsocks => "Shadowsocks",
            ProtocolKind::Trojan => "Trojan",
            ProtocolKind::HTTP => "HTTP",
            ProtocolKind::SOCKS => "SOCKS",
            ProtocolKind::WireGuard => "WireGuard",
            ProtocolKind::Hysteria2 => "Hysteria2",
            ProtocolKind::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ProtocolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a line starts with any recognized share-link scheme.
pub fn has_known_prefix(line: &str) -> bool {
    ProtocolKind::detect(line) != ProtocolKind::Unknown
}
