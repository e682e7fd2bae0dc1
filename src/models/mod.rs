//! Core data models
//!
//! Plain values that flow through the pipeline: the protocol of a share link,
//! the location summary returned by the geolocation service, and the
//! request/response pair of a probe.
//!
//! ```rust
//! use linkprobe::models::ProtocolKind;
//!
//! let kind = ProtocolKind::detect("trojan://secret@203.0.113.9:443");
//! assert_eq!(kind, ProtocolKind::Trojan);
//! assert_eq!(kind.to_string(), "Trojan");
//! ```

mod location;
mod probe;
mod protocol;

pub use location::*;
pub use probe::*;
pub use protocol::*;
