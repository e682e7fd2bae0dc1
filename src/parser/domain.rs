//! Literal hostnames inside share links and their resolution.

use std::future::Future;
use std::net::{IpAddr, Ipv4Addr};

use lazy_static::lazy_static;
use log::{debug, warn};
use regex::Regex;

use crate::error::ExtractionError;

lazy_static! {
    static ref DOMAIN: Regex =
        Regex::new(r"(?:@|host=|hostname=)([a-zA-Z0-9.-]+\.[a-zA-Z]{2,})").unwrap();
}

/// Name resolution seam, so the pipeline can be exercised without a network.
pub trait HostResolver {
    fn resolve(
        &self,
        host: &str,
    ) -> impl Future<Output = Result<Vec<IpAddr>, ExtractionError>> + Send;
}

/// Resolves through the operating system's resolver.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemResolver;

impl HostResolver for SystemResolver {
    fn resolve(
        &self,
        host: &str,
    ) -> impl Future<Output = Result<Vec<IpAddr>, ExtractionError>> + Send {
        let host = host.to_string();
        async move {
            match tokio::net::lookup_host((host.as_str(), 0)).await {
                Ok(addrs) => Ok(addrs.map(|addr| addr.ip()).collect()),
                Err(e) => Err(ExtractionError::Resolution {
                    host: host.clone(),
                    reason: e.to_string(),
                }),
            }
        }
    }
}

/// Finds the first hostname that follows `@`, `host=` or `hostname=`.
pub fn extract_domain(config: &str) -> Option<&str> {
    DOMAIN
        .captures(config)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Resolves a hostname, keeping only the first IPv4 answer.
pub async fn resolve_ipv4<R: HostResolver>(
    resolver: &R,
    domain: &str,
) -> Result<Ipv4Addr, ExtractionError> {
    let addrs = match resolver.resolve(domain).await {
        Ok(addrs) => addrs,
        Err(e) => {
            warn!("Domain resolution failed: {}", e);
            return Err(e);
        }
    };

    let ip = addrs.iter().find_map(|addr| match addr {
        IpAddr::V4(v4) => Some(*v4),
        IpAddr::V6(_) => None,
    });
    match ip {
        Some(ip) => {
            debug!("Resolved domain {} to IP: {}", domain, ip);
            Ok(ip)
        }
        None => Err(ExtractionError::Resolution {
            host: domain.to_string(),
            reason: "no IPv4 address".to_string(),
        }),
    }
}
