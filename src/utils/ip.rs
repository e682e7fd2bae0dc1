//! IPv4 validation and scanning helpers

use std::net::Ipv4Addr;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LETTER: Regex = Regex::new(r"[a-zA-Z]").unwrap();
    static ref DOTTED_QUAD: Regex = Regex::new(
        r"\b(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\.(25[0-5]|2[0-4][0-9]|[01]?[0-9][0-9]?)\b"
    )
    .unwrap();
}

/// Parses a dotted-quad address with the validator's rules.
///
/// Any ASCII letter rejects the input outright. Otherwise there must be exactly
/// four `.`-separated segments, each an integer in `0..=255`. Leading zeros and
/// an explicit sign are tolerated (`"010.1.1.1"` is `10.1.1.1`).
pub fn parse_ipv4(s: &str) -> Option<Ipv4Addr> {
    if LETTER.is_match(s) {
        return None;
    }

    let segments: Vec<&str> = s.split('.').collect();
    if segments.len() != 4 {
        return None;
    }

    let mut octets = [0u8; 4];
    for (octet, segment) in octets.iter_mut().zip(segments) {
        let value = segment.parse::<i32>().ok()?;
        *octet = u8::try_from(value).ok()?;
    }
    Some(Ipv4Addr::from(octets))
}

/// Checks whether a string is a usable dotted-quad IPv4 address.
pub fn is_valid_ip(s: &str) -> bool {
    parse_ipv4(s).is_some()
}

/// Finds the first dotted-quad embedded in arbitrary text.
pub fn extract_ip_from_text(text: &str) -> Option<Ipv4Addr> {
    DOTTED_QUAD
        .find(text)
        .and_then(|m| parse_ipv4(m.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_valid_ip() {
        assert!(is_valid_ip("0.0.0.0"));
        assert!(is_valid_ip("255.255.255.255"));
        assert!(is_valid_ip("192.168.1.10"));

        assert!(!is_valid_ip("256.1.1.1"));
        assert!(!is_valid_ip("1.2.3"));
        assert!(!is_valid_ip("1.2.3.4.5"));
        assert!(!is_valid_ip("1.2.3.x"));
        assert!(!is_valid_ip("example.com"));
        assert!(!is_valid_ip("1..2.3"));
        assert!(!is_valid_ip(""));
        assert!(!is_valid_ip("::1"));
        assert!(!is_valid_ip("2001:db8::1"));
        assert!(!is_valid_ip("fe80::1"));
    }

    #[test]
    fn test_is_valid_ip_all_octets() {
        for octet in 0..=255u16 {
            let ip = format!("{octet}.{octet}.0.{octet}");
            assert!(is_valid_ip(&ip), "{ip} should be valid");
        }
        for octet in 256..300u16 {
            let ip = format!("10.0.0.{octet}");
            assert!(!is_valid_ip(&ip), "{ip} should be invalid");
        }
    }

    #[test]
    fn test_parse_ipv4_normalizes() {
        assert_eq!(parse_ipv4("010.1.1.1"), Some(Ipv4Addr::new(10, 1, 1, 1)));
        assert_eq!(parse_ipv4("-1.1.1.1"), None);
    }

    #[test]
    fn test_extract_ip_from_text() {
        assert_eq!(
            extract_ip_from_text("uuid@104.16.1.2:443?security=tls"),
            Some(Ipv4Addr::new(104, 16, 1, 2))
        );
        assert_eq!(
            extract_ip_from_text("first 1.1.1.1 then 8.8.8.8"),
            Some(Ipv4Addr::new(1, 1, 1, 1))
        );
        assert_eq!(extract_ip_from_text("no address here"), None);
        assert_eq!(extract_ip_from_text("999.1.1.1"), None);
    }
}
