//! Encoding utilities for Safe transactions

pub mod abi;
pub mod decimal;
mod eip712;
pub mod scalar;

pub use abi::{decode_address_array, decode_uint, OwnerChange};
pub use eip712::{
    compute_domain_separator, compute_safe_transaction_hash, compute_struct_hash,
    compute_transaction_hash,
};
pub use scalar::{decode_data, decode_quantity, encode_data, encode_quantity};

use alloy::primitives::{Address, U256};

/// Left-pads an address into a 32-byte ABI word
pub(crate) fn address_word(address: Address) -> [u8; 32] {
    let mut word = [0u8; 32];
    word[12..].copy_from_slice(address.as_slice());
    word
}

/// Encodes a 256-bit unsigned integer as a big-endian ABI word
pub(crate) fn uint_word(value: U256) -> [u8; 32] {
    value.to_be_bytes::<32>()
}
