pub mod parsers;
pub mod serde;

pub use parsers::{parse_duration, parse_felt};

/// Shortens a hex hash for log output, keeping the prefix and the last few characters.
pub fn trim_hash(hash: &str) -> String {
    let hash = hash.trim();
    let len = hash.chars().count();
    if len <= 12 {
        return hash.to_string();
    }
    let prefix = hash.chars().take(6).collect::<String>();
    let suffix = hash.chars().skip(len - 4).collect::<String>();
    format!("{prefix}..{suffix}")
}
