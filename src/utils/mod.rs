pub mod base64;
pub mod http;
pub mod ip;

// Re-export common utilities
pub use ip::{extract_ip_from_text, is_valid_ip, parse_ipv4};
