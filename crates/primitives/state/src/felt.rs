use starknet_types_core::felt::Felt;

/// Parses an address, hash or chain id into its felt value. Returns `None` for anything that is
/// neither `0x`-prefixed hex nor decimal.
pub fn normalize_felt(value: &str) -> Option<Felt> {
    wp_utils::parse_felt(value).ok()
}

/// Compares two address-like strings as unsigned integers.
///
/// Values that cannot be parsed only match an identical raw string, so a malformed key never
/// aliases a well-formed one.
pub fn felt_eq(a: &str, b: &str) -> bool {
    match (normalize_felt(a), normalize_felt(b)) {
        (Some(a), Some(b)) => a == b,
        _ => a == b,
    }
}
