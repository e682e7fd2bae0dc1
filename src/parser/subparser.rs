use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::models::has_known_prefix;

/// Lines of a subscription feed that are recognized share links.
///
/// # Arguments
/// * `content` - Raw feed body, one link per line
///
/// # Returns
/// * Trimmed lines starting with a known scheme, in feed order
pub fn valid_config_lines(content: &str) -> Vec<&str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter(|line| has_known_prefix(line))
        .collect()
}

/// Picks one share link from a feed uniformly at random.
///
/// Returns `None` when the feed holds no recognized link.
pub fn select_config_line<'a, R: Rng + ?Sized>(content: &'a str, rng: &mut R) -> Option<&'a str> {
    let lines = valid_config_lines(content);
    debug!("feed has {} usable links", lines.len());
    lines.choose(rng).copied()
}

/// Picks one subscription URL uniformly at random.
pub fn select_subscription<'a, R: Rng + ?Sized>(urls: &'a [String], rng: &mut R) -> Option<&'a str> {
    urls.choose(rng).map(String::as_str)
}
