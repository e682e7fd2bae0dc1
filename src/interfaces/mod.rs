pub mod probe;
pub mod session;

pub use probe::{FeedSource, HttpFeed, Prober};
pub use session::{LatestResponse, ProbeSession};
