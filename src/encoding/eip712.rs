//! EIP-712 hashing of Safe transactions
//!
//! The constants differ per Safe version (see [`crate::contracts`]); the field
//! order of the `SafeTx` struct does not.

use alloy::primitives::{keccak256, B256, U256};

use super::{address_word, uint_word};
use crate::account::SafeDomain;
use crate::types::{SafeTransaction, SafeVersion};

/// Computes the domain separator for a Safe
///
/// domain_separator = keccak256(abi.encode(DOMAIN_TYPEHASH, [chainId,] safeAddress))
pub fn compute_domain_separator(domain: &SafeDomain) -> B256 {
    let constants = domain.version.hashing_constants();
    let mut encoded = Vec::with_capacity(96);

    encoded.extend_from_slice(constants.domain_typehash.as_slice());

    if constants.include_chain_id {
        encoded.extend_from_slice(&uint_word(U256::from(domain.chain_id)));
    }

    encoded.extend_from_slice(&address_word(domain.address));

    keccak256(&encoded)
}

/// Computes the struct hash for SafeTx
///
/// struct_hash = keccak256(abi.encode(
///     SAFE_TX_TYPEHASH,
///     to, value, keccak256(data), operation,
///     safeTxGas, baseGas, gasPrice, gasToken, refundReceiver, nonce
/// ))
pub fn compute_struct_hash(version: SafeVersion, tx: &SafeTransaction) -> B256 {
    let constants = version.hashing_constants();
    let mut encoded = Vec::with_capacity(352);

    encoded.extend_from_slice(constants.safe_tx_typehash.as_slice());
    encoded.extend_from_slice(&address_word(tx.to));
    encoded.extend_from_slice(&uint_word(tx.value));
    encoded.extend_from_slice(keccak256(&tx.data).as_slice());

    encoded.extend_from_slice(&tx.operation.word());

    encoded.extend_from_slice(&uint_word(tx.safe_tx_gas));
    // `dataGas` before 1.0.0, same slot
    encoded.extend_from_slice(&uint_word(tx.base_gas));
    encoded.extend_from_slice(&uint_word(tx.gas_price));
    encoded.extend_from_slice(&address_word(tx.gas_token));
    encoded.extend_from_slice(&address_word(tx.refund_receiver));
    encoded.extend_from_slice(&uint_word(tx.nonce));

    keccak256(&encoded)
}

/// Computes the final EIP-712 hash to sign
///
/// hash = keccak256("\x19\x01" || domainSeparator || structHash)
pub fn compute_transaction_hash(domain_separator: B256, struct_hash: B256) -> B256 {
    let mut encoded = Vec::with_capacity(66);

    encoded.extend_from_slice(&[0x19, 0x01]);
    encoded.extend_from_slice(domain_separator.as_slice());
    encoded.extend_from_slice(struct_hash.as_slice());

    keccak256(&encoded)
}

/// Computes the safeTxHash owners sign for `tx` on the Safe described by `domain`
pub fn compute_safe_transaction_hash(domain: &SafeDomain, tx: &SafeTransaction) -> B256 {
    let domain_separator = compute_domain_separator(domain);
    let struct_hash = compute_struct_hash(domain.version, tx);
    compute_transaction_hash(domain_separator, struct_hash)
}
