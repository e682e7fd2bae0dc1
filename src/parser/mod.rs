pub mod domain;
pub mod explodes;
pub mod pipeline;
pub mod subparser;

pub use domain::{extract_domain, HostResolver, SystemResolver};
pub use pipeline::{ConfigParser, Extraction, ExtractionSource};
pub use subparser::{select_config_line, valid_config_lines};
