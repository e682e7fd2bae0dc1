use std::fmt;
use std::net::Ipv4Addr;

use log::debug;

use super::domain::{extract_domain, resolve_ipv4, HostResolver, SystemResolver};
use super::explodes::extractor_for;
use crate::error::ExtractionError;
use crate::models::ProtocolKind;
use crate::utils::ip::extract_ip_from_text;

/// Stage of the pipeline that produced an address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractionSource {
    /// A literal hostname in the link, resolved by name.
    Domain(String),
    /// The protocol-specific extractor.
    Protocol(ProtocolKind),
    /// Dotted-quad scan over the raw link.
    TextScan,
}

impl fmt::Display for ExtractionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractionSource::Domain(host) => write!(f, "resolved {}", host),
            ExtractionSource::Protocol(kind) => write!(f, "{} link", kind),
            ExtractionSource::TextScan => f.write_str("text scan"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub ip: Ipv4Addr,
    pub source: ExtractionSource,
}

/// Finds the server address of a share link.
///
/// Stages run in order and the first address wins:
/// 1. a literal hostname after `@`, `host=` or `hostname=`, resolved by name;
/// 2. the extractor registered for the link's protocol;
/// 3. a dotted-quad scan over the undecoded link.
#[derive(Debug, Clone, Default)]
pub struct ConfigParser<R = SystemResolver> {
    resolver: R,
}

impl ConfigParser<SystemResolver> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: HostResolver> ConfigParser<R> {
    pub fn with_resolver(resolver: R) -> Self {
        ConfigParser { resolver }
    }

    pub async fn extract_ip(&self, config: &str) -> Result<Extraction, ExtractionError> {
        let config = config.trim();

        if let Some(domain) = extract_domain(config) {
            match resolve_ipv4(&self.resolver, domain).await {
                Ok(ip) => {
                    return Ok(Extraction {
                        ip,
                        source: ExtractionSource::Domain(domain.to_string()),
                    })
                }
                Err(e) => debug!("domain stage: {}", e),
            }
        }

        match extract_with_protocol(config) {
            Ok(extraction) => return Ok(extraction),
            Err(e) => debug!("protocol stage: {}", e),
        }

        extract_ip_from_text(config)
            .map(|ip| Extraction {
                ip,
                source: ExtractionSource::TextScan,
            })
            .ok_or(ExtractionError::NoIpDetected)
    }
}

/// Runs only the protocol stage, skipping name resolution.
pub fn extract_with_protocol(config: &str) -> Result<Extraction, ExtractionError> {
    let kind = ProtocolKind::detect(config);
    debug!(
        "extracting {} link ({})",
        kind,
        if ProtocolKind::is_encoded(config) {
            "encoded"
        } else {
            "plain"
        }
    );
    extractor_for(kind)(config).map(|ip| Extraction {
        ip,
        source: ExtractionSource::Protocol(kind),
    })
}
