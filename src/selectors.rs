//! Function selectors and event topics
//!
//! Selectors are the first four bytes of the keccak256 hash of a function's
//! canonical signature; topics are the full hash of an event's signature.
//! Both are fixed by the deployed bytecode and must match bit for bit.

use alloy::primitives::B256;
use tiny_keccak::{Hasher, Keccak};

use crate::error::BindingError;

/// Compute keccak256 hash of data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// 4-byte selector of a canonical function signature, e.g. `lock()`.
pub fn function_selector(signature: &str) -> [u8; 4] {
    let hash = keccak256(signature.as_bytes());
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Topic 0 of a non-anonymous event, e.g. `Lock(address,uint256)`.
pub fn event_topic(signature: &str) -> B256 {
    B256::from(keccak256(signature.as_bytes()))
}

/// Lowercase hex without `0x`, the form used in the selector tables.
pub fn selector_hex(selector: [u8; 4]) -> String {
    hex::encode(selector)
}

/// Parse a selector written as hex, with or without `0x`.
pub fn parse_selector(s: &str) -> Result<[u8; 4], BindingError> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    let bytes = hex::decode(s).map_err(|e| BindingError::UnknownSelector(format!("{s} ({e})")))?;
    bytes
        .try_into()
        .map_err(|_| BindingError::UnknownSelector(s.to_string()))
}

/// Look up the signature for a selector in one of the static tables.
pub fn lookup<'a>(table: &'a [(&'a str, &'a str)], selector: [u8; 4]) -> Option<&'a str> {
    let key = selector_hex(selector);
    table
        .binary_search_by(|(sel, _)| (*sel).cmp(key.as_str()))
        .ok()
        .map(|i| table[i].1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contracts::lock_redeem::LOCK_REDEEM_FUNC_SIGS;

    #[test]
    fn test_keccak256_empty() {
        assert_eq!(
            hex::encode(keccak256(b"")),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }

    #[test]
    fn test_lock_selector() {
        assert_eq!(selector_hex(function_selector("lock()")), "f83d08ba");
        assert_eq!(
            selector_hex(function_selector("transfer(address,uint256)")),
            "a9059cbb"
        );
    }

    #[test]
    fn test_lock_topic() {
        assert_eq!(
            event_topic("Lock(address,uint256)").to_string(),
            "0x625fed9875dada8643f2418b838ae0bc78d9a148a18eee4ee1979ff0f3f5d427"
        );
    }

    #[test]
    fn test_parse_selector() {
        assert_eq!(parse_selector("0xf83d08ba").unwrap(), [0xf8, 0x3d, 0x08, 0xba]);
        assert_eq!(parse_selector("db006a75").unwrap(), [0xdb, 0x00, 0x6a, 0x75]);
        assert!(parse_selector("f83d08").is_err());
        assert!(parse_selector("not-hex!").is_err());
    }

    #[test]
    fn test_lookup_in_table() {
        assert_eq!(
            lookup(LOCK_REDEEM_FUNC_SIGS, [0xf8, 0x3d, 0x08, 0xba]),
            Some("lock()")
        );
        assert_eq!(
            lookup(LOCK_REDEEM_FUNC_SIGS, [0x7c, 0xac, 0xde, 0x3f]),
            Some("sign(uint256,address)")
        );
        assert_eq!(lookup(LOCK_REDEEM_FUNC_SIGS, [0, 0, 0, 0]), None);
    }
}
