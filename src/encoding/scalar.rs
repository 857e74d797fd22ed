//! Strict codec for the JSON-RPC scalar forms
//!
//! A *quantity* is `0x` followed by the fewest lowercase hex digits that
//! represent the value (`0x0` for zero). *Data* is `0x` followed by exactly two
//! lowercase hex digits per byte. Anything else is rejected, so every accepted
//! string re-encodes to itself.

use alloy::hex;
use alloy::primitives::{Bytes, U256};

use crate::error::{Error, Result};

/// Maximum number of hex digits in a 256-bit quantity
const MAX_QUANTITY_DIGITS: usize = 64;

fn is_lower_hex(byte: u8) -> bool {
    byte.is_ascii_digit() || (b'a'..=b'f').contains(&byte)
}

fn malformed_quantity(text: &str, reason: &'static str) -> Error {
    Error::MalformedQuantity {
        text: text.to_string(),
        reason,
    }
}

fn malformed_data(text: &str, reason: &'static str) -> Error {
    Error::MalformedData {
        text: text.to_string(),
        reason,
    }
}

/// Decodes a canonical quantity string
pub fn decode_quantity(text: &str) -> Result<U256> {
    let digits = text
        .strip_prefix("0x")
        .ok_or_else(|| malformed_quantity(text, "missing 0x prefix"))?;

    if digits.is_empty() {
        return Err(malformed_quantity(text, "no digits"));
    }
    if digits.len() > 1 && digits.starts_with('0') {
        return Err(malformed_quantity(text, "leading zero"));
    }
    if !digits.bytes().all(is_lower_hex) {
        return Err(malformed_quantity(text, "not lowercase hex"));
    }
    if digits.len() > MAX_QUANTITY_DIGITS {
        return Err(malformed_quantity(text, "wider than 256 bits"));
    }

    U256::from_str_radix(digits, 16).map_err(|_| malformed_quantity(text, "not lowercase hex"))
}

/// Encodes a quantity in its canonical minimal form
pub fn encode_quantity(value: U256) -> String {
    let full = hex::encode(value.to_be_bytes::<32>());
    let trimmed = full.trim_start_matches('0');
    if trimmed.is_empty() {
        "0x0".to_string()
    } else {
        format!("0x{trimmed}")
    }
}

/// Decodes a canonical data string
pub fn decode_data(text: &str) -> Result<Bytes> {
    let digits = text
        .strip_prefix("0x")
        .ok_or_else(|| malformed_data(text, "missing 0x prefix"))?;

    if digits.len() % 2 != 0 {
        return Err(malformed_data(text, "odd number of digits"));
    }
    if !digits.bytes().all(is_lower_hex) {
        return Err(malformed_data(text, "not lowercase hex"));
    }

    hex::decode(digits)
        .map(Bytes::from)
        .map_err(|_| malformed_data(text, "not lowercase hex"))
}

/// Encodes bytes as canonical data (two lowercase digits per byte)
pub fn encode_data(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Serde adapter for `U256` fields carried as strict quantities
pub mod quantity {
    use alloy::primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_quantity(*value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::decode_quantity(&text).map_err(serde::de::Error::custom)
    }
}

/// Serde adapter for `Bytes` fields carried as strict data
pub mod data {
    use alloy::primitives::Bytes;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Bytes, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::encode_data(value))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Bytes, D::Error> {
        let text = String::deserialize(deserializer)?;
        super::decode_data(&text).map_err(serde::de::Error::custom)
    }
}
