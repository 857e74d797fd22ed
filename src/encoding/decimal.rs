//! Serde adapter for integers the transaction service carries loosely
//!
//! The service mixes JSON numbers, decimal strings and `0x` strings for the
//! same fields. All three are accepted on input; output is always a decimal
//! string, which is what its write endpoints expect.
//!
//! JSON numbers are only exact up to `u64::MAX` in `serde_json`; the service
//! sends wei amounts as strings, and a larger bare number is rejected rather
//! than rounded through `f64`.

use std::fmt;

use alloy::primitives::U256;
use serde::de::{self, Visitor};
use serde::{Deserializer, Serializer};

/// Parses a decimal or `0x`-prefixed integer
pub fn parse_uint(text: &str) -> Option<U256> {
    let text = text.trim();
    match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(digits) if !digits.is_empty() => U256::from_str_radix(digits, 16).ok(),
        Some(_) => None,
        None if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) => {
            U256::from_str_radix(text, 10).ok()
        }
        None => None,
    }
}

struct UintVisitor;

impl<'de> Visitor<'de> for UintVisitor {
    type Value = U256;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a non-negative integer, decimal string or 0x string")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<U256, E> {
        Ok(U256::from(value))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<U256, E> {
        u64::try_from(value)
            .map(U256::from)
            .map_err(|_| E::custom(format!("negative integer {value}")))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<U256, E> {
        Ok(U256::from(value))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<U256, E> {
        Err(E::custom(format!(
            "number {value} is not an exact integer; send it as a string"
        )))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<U256, E> {
        parse_uint(value).ok_or_else(|| E::custom(format!("invalid integer {value:?}")))
    }
}

pub fn serialize<S: Serializer>(value: &U256, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<U256, D::Error> {
    deserializer.deserialize_any(UintVisitor)
}

/// The same adapter for optional fields; `null` and a missing field are `None`
pub mod option {
    use alloy::primitives::U256;
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    struct Wrapped(#[serde(with = "super")] U256);

    pub fn serialize<S: Serializer>(value: &Option<U256>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(value) => super::serialize(value, serializer),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<U256>, D::Error> {
        Ok(Option::<Wrapped>::deserialize(deserializer)?.map(|Wrapped(value)| value))
    }
}
