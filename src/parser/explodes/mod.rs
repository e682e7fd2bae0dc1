pub mod common;
pub mod http;
pub mod hysteria2;
pub mod json;
pub mod ss;
pub mod trojan;
pub mod vless;
pub mod vmess;
pub mod wireguard;

pub use common::{explode, extractor_for, Extractor};
