pub mod encode;
pub mod hash;
pub mod owners;
pub mod sign;
pub mod signatures;
pub mod verify;

use alloy::primitives::U256;
use color_eyre::eyre::{eyre, Result};
use safe_multisig::encoding::decimal::parse_uint;

/// Parses a decimal or 0x integer argument
pub(crate) fn parse_u256(name: &str, text: &str) -> Result<U256> {
    parse_uint(text).ok_or_else(|| eyre!("Invalid {}: {:?}", name, text))
}
