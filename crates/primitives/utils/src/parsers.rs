use anyhow::{anyhow, bail, Context};
use starknet_types_core::felt::Felt;

use std::time::Duration;

/// Parses a string duration & return it as [Duration].
pub fn parse_duration(s: &str) -> anyhow::Result<Duration> {
    let s = s.trim();
    let split_index = s.find(|c: char| !c.is_ascii_digit()).ok_or_else(|| anyhow!("Invalid duration format: {}", s))?;

    let (value_str, suffix) = s.split_at(split_index);
    let value: u64 = value_str.parse().map_err(|_| anyhow!("Invalid duration value: {}", value_str))?;

    let seconds_per_unit: u64 = match suffix.trim() {
        "ms" => return Ok(Duration::from_millis(value)),
        "s" => 1,
        "min" => 60,
        "h" => 60 * 60,
        "d" => 60 * 60 * 24,
        _ => bail!("Invalid duration suffix: {}. Expected 'ms', 's', 'min', 'h' or 'd'.", suffix),
    };
    let secs = value.checked_mul(seconds_per_unit).ok_or_else(|| anyhow!("Duration out of range: {}", s))?;
    Ok(Duration::from_secs(secs))
}

/// Parses a felt written either as `0x`-prefixed hex or as a decimal string.
///
/// Wallet state stores addresses, hashes and chain ids as strings coming from many sources, so both
/// `"0x1"` and `"1"` have to resolve to the same value.
pub fn parse_felt(s: &str) -> anyhow::Result<Felt> {
    let s = s.trim();
    if s.is_empty() {
        bail!("Invalid felt format: empty string");
    }
    if s.starts_with("0x") || s.starts_with("0X") {
        Felt::from_hex(&s.to_ascii_lowercase()).with_context(|| format!("Invalid felt format: {s}"))
    } else {
        Felt::from_dec_str(s).with_context(|| format!("Invalid felt format: {s}"))
    }
}
