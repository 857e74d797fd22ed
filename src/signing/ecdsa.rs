//! ECDSA signature generation for Safe transactions

use alloy::primitives::{Address, Bytes, B256};
use alloy::signers::Signer;

use super::codec::{encode_signatures, SignatureRecord};
use crate::error::Result;

/// Signs a Safe transaction hash directly
///
/// Safe expects signatures in the format: r (32 bytes) || s (32 bytes) || v (1 byte)
/// where v is 27 or 28
pub async fn sign_hash<S: Signer + Sync>(signer: &S, hash: B256) -> Result<Bytes> {
    let signature = signer.sign_hash(&hash).await?;
    Ok(SignatureRecord::ecdsa(signer.address(), &signature, false).raw)
}

/// Signs a Safe transaction hash using eth_sign (personal_sign)
///
/// The signer signs `"\x19Ethereum Signed Message:\n32" || hash`; v is shifted
/// to 31 or 32 so the Safe knows to apply the same prefix before recovery.
pub async fn eth_sign_hash<S: Signer + Sync>(signer: &S, hash: B256) -> Result<Bytes> {
    let signature = signer.sign_message(hash.as_slice()).await?;
    Ok(SignatureRecord::ecdsa(signer.address(), &signature, true).raw)
}

/// Encodes an approved-hash signature for `owner`
///
/// r = owner (left-padded), s = 0, v = 1. The Safe accepts it when the owner
/// approved the hash on-chain or is the transaction sender.
pub fn encode_approved_hash_signature(owner: Address) -> Bytes {
    SignatureRecord::approved_hash(owner).raw
}

/// Encodes a standalone contract signature with its EIP-1271 payload
pub fn encode_contract_signature(contract: Address, payload: impl Into<Bytes>) -> Bytes {
    encode_signatures(&[SignatureRecord::contract(contract, payload)])
}
