pub mod error;
pub mod interfaces;
pub mod location;
pub mod models;
pub mod parser;
pub mod settings;
pub mod utils;

// Re-export the main entry points for easier access
pub use interfaces::{Prober, ProbeSession};
pub use models::{LocationSummary, ProtocolKind};
pub use parser::{ConfigParser, Extraction, ExtractionSource};
pub use settings::Settings;
