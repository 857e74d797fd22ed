//! Decoding and classification of Safe signature blobs
//!
//! A blob is a sequence of 65-byte chunks `r (32) | s (32) | v (1)`, one per
//! signer, optionally followed by the dynamic payloads of contract signers.
//! The `v` byte selects how the signer is derived from the chunk.

use alloy::primitives::{eip191_hash_message, Address, Bytes, Signature, B256, U256};
use serde::Serialize;
use tracing::trace;

use crate::encoding::{address_word, uint_word};
use crate::error::{Error, Result};

/// Length of one static signature chunk
pub const SIGNATURE_LENGTH: usize = 65;

/// How a signature chunk authorizes its signer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SignatureScheme {
    /// ECDSA over the raw transaction hash (`v` 27/28)
    EcdsaStandard,
    /// ECDSA over the EIP-191 prefixed hash (`v` 31/32)
    EcdsaEthSign,
    /// Hash approved on-chain by the owner in `r` (`v` 1)
    ApprovedHash,
    /// EIP-1271 contract signer in `r`, payload at offset `s` (`v` 0)
    ContractSignature,
}

impl SignatureScheme {
    /// Classifies a `v` byte
    pub fn from_v(v: u8) -> Option<Self> {
        match v {
            27 | 28 => Some(Self::EcdsaStandard),
            31 | 32 => Some(Self::EcdsaEthSign),
            1 => Some(Self::ApprovedHash),
            0 => Some(Self::ContractSignature),
            _ => None,
        }
    }

    /// Returns true if the signer is derived by public-key recovery
    pub fn is_ecdsa(&self) -> bool {
        matches!(self, Self::EcdsaStandard | Self::EcdsaEthSign)
    }
}

/// One decoded signature chunk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRecord {
    pub scheme: SignatureScheme,
    /// Recovered signer for ECDSA schemes, claimed signer otherwise
    pub signer: Address,
    /// The 65-byte chunk as found in the blob
    pub raw: Bytes,
    /// Dynamic payload of a contract signature
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_payload: Option<Bytes>,
}

impl SignatureRecord {
    /// Builds an ECDSA record from an alloy signature already known to recover to `signer`
    pub fn ecdsa(signer: Address, signature: &Signature, eth_sign: bool) -> Self {
        let mut raw = signature.as_bytes();
        if eth_sign {
            raw[64] += 4;
        }
        Self {
            scheme: if eth_sign {
                SignatureScheme::EcdsaEthSign
            } else {
                SignatureScheme::EcdsaStandard
            },
            signer,
            raw: Bytes::copy_from_slice(&raw),
            contract_payload: None,
        }
    }

    /// Builds the record for an owner that approved the hash on-chain
    pub fn approved_hash(owner: Address) -> Self {
        Self {
            scheme: SignatureScheme::ApprovedHash,
            signer: owner,
            raw: Bytes::from(static_chunk(owner, U256::ZERO, 1)),
            contract_payload: None,
        }
    }

    /// Builds the record for a contract signer with its EIP-1271 payload
    ///
    /// The offset in `s` is left at zero; [`encode_signatures`] fills it in.
    pub fn contract(signer: Address, payload: impl Into<Bytes>) -> Self {
        Self {
            scheme: SignatureScheme::ContractSignature,
            signer,
            raw: Bytes::from(static_chunk(signer, U256::ZERO, 0)),
            contract_payload: Some(payload.into()),
        }
    }

    /// The `v` byte of the chunk, `None` if `raw` is not a full chunk
    pub fn v(&self) -> Option<u8> {
        if self.raw.len() != SIGNATURE_LENGTH {
            return None;
        }
        self.raw.last().copied()
    }
}

fn static_chunk(signer: Address, s: U256, v: u8) -> Vec<u8> {
    let mut chunk = Vec::with_capacity(SIGNATURE_LENGTH);
    chunk.extend_from_slice(&address_word(signer));
    chunk.extend_from_slice(&uint_word(s));
    chunk.push(v);
    chunk
}

/// Decodes the single signature of one confirmation
///
/// Only a contract signature may extend past its 65-byte chunk, to carry its
/// payload. Any other scheme must be exactly one chunk.
pub fn decode_signature(hash: B256, signature: &[u8]) -> Result<SignatureRecord> {
    let record = decode_signatures(hash, signature, 1)?
        .into_iter()
        .next()
        .ok_or(Error::TruncatedSignatureBlob {
            index: 0,
            needed: SIGNATURE_LENGTH,
            available: signature.len(),
        })?;

    if record.scheme != SignatureScheme::ContractSignature && signature.len() != SIGNATURE_LENGTH {
        return Err(Error::InvalidSignatureLength {
            length: signature.len(),
        });
    }

    Ok(record)
}

/// Splits a blob into `count` signature records, in blob order
///
/// ECDSA signers are recovered against `hash`; approved-hash and contract
/// signers are taken from `r` as claimed, and must be corroborated on-chain.
pub fn decode_signatures(hash: B256, blob: &[u8], count: usize) -> Result<Vec<SignatureRecord>> {
    let mut records = Vec::with_capacity(count.min(blob.len() / SIGNATURE_LENGTH));

    for index in 0..count {
        let start = index.saturating_mul(SIGNATURE_LENGTH);
        let chunk = blob
            .get(start..start.saturating_add(SIGNATURE_LENGTH))
            .ok_or(Error::TruncatedSignatureBlob {
                index,
                needed: SIGNATURE_LENGTH,
                available: blob.len().saturating_sub(start),
            })?;

        let v = chunk[64];
        let scheme =
            SignatureScheme::from_v(v).ok_or(Error::UnknownSignatureScheme { index, v })?;
        trace!(index, v, ?scheme, "classified signature chunk");

        let (signer, contract_payload) = match scheme {
            SignatureScheme::EcdsaStandard => (recover(hash, chunk, v == 28)?, None),
            SignatureScheme::EcdsaEthSign => {
                (recover(eip191_hash_message(hash), chunk, v - 4 == 28)?, None)
            }
            SignatureScheme::ApprovedHash => (Address::from_slice(&chunk[12..32]), None),
            SignatureScheme::ContractSignature => {
                let payload = contract_payload(blob, chunk, index, count)?;
                (Address::from_slice(&chunk[12..32]), Some(payload))
            }
        };

        records.push(SignatureRecord {
            scheme,
            signer,
            raw: Bytes::copy_from_slice(chunk),
            contract_payload,
        });
    }

    Ok(records)
}

fn recover(prehash: B256, chunk: &[u8], y_parity: bool) -> Result<Address> {
    let r = U256::from_be_slice(&chunk[..32]);
    let s = U256::from_be_slice(&chunk[32..64]);
    Signature::new(r, s, y_parity)
        .recover_address_from_prehash(&prehash)
        .map_err(|_| Error::SignerSignatureMismatch {
            signer: Address::ZERO,
        })
}

/// Locates `len (32) | payload (len)` at the offset stored in `s`
fn contract_payload(blob: &[u8], chunk: &[u8], index: usize, count: usize) -> Result<Bytes> {
    let invalid = |reason| Error::InvalidContractSignature { index, reason };

    let offset = U256::from_be_slice(&chunk[32..64]);
    let offset = word_index(offset).ok_or_else(|| invalid("offset out of bounds"))?;
    if offset < count.saturating_mul(SIGNATURE_LENGTH) {
        return Err(invalid("offset points into the static part"));
    }

    let length_end = offset
        .checked_add(32)
        .filter(|end| *end <= blob.len())
        .ok_or_else(|| invalid("length word out of bounds"))?;
    let length = word_index(U256::from_be_slice(&blob[offset..length_end]))
        .ok_or_else(|| invalid("payload out of bounds"))?;
    let payload_end = length_end
        .checked_add(length)
        .filter(|end| *end <= blob.len())
        .ok_or_else(|| invalid("payload out of bounds"))?;

    Ok(Bytes::copy_from_slice(&blob[length_end..payload_end]))
}

fn word_index(value: U256) -> Option<usize> {
    if value > U256::from(u32::MAX) {
        return None;
    }
    usize::try_from(value.as_limbs()[0]).ok()
}

/// Concatenates records into the layout `execTransaction` expects
///
/// Records are sorted ascending by signer, contract payloads are appended
/// after the static part and their offsets written into `s`.
pub fn encode_signatures(records: &[SignatureRecord]) -> Bytes {
    let mut sorted: Vec<&SignatureRecord> = records.iter().collect();
    sorted.sort_by_key(|record| record.signer);

    let mut static_part = Vec::with_capacity(sorted.len() * SIGNATURE_LENGTH);
    let mut dynamic_part = Vec::new();
    let static_len = sorted.len() * SIGNATURE_LENGTH;

    for record in sorted {
        match (&record.scheme, &record.contract_payload) {
            (SignatureScheme::ContractSignature, Some(payload)) => {
                let offset = U256::from(static_len + dynamic_part.len());
                static_part.extend(static_chunk(record.signer, offset, 0));
                dynamic_part.extend_from_slice(&uint_word(U256::from(payload.len())));
                dynamic_part.extend_from_slice(payload);
            }
            _ => static_part.extend_from_slice(&record.raw),
        }
    }

    static_part.extend(dynamic_part);
    Bytes::from(static_part)
}
