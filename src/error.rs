//! Error types for safe-multisig

use alloy::primitives::{Address, B256};
use thiserror::Error;

/// Result type alias for safe-multisig operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while encoding, hashing or validating Safe transactions
///
/// None of these are programmer errors: every variant describes input that
/// failed a specific check, so callers can surface the reason verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Quantity text is not `0x` followed by minimal lowercase hex digits
    #[error("Malformed quantity {text:?}: {reason}")]
    MalformedQuantity { text: String, reason: &'static str },

    /// Data text is not `0x` followed by an even number of lowercase hex digits
    #[error("Malformed data {text:?}: {reason}")]
    MalformedData { text: String, reason: &'static str },

    /// ABI payload is shorter than its declared layout
    #[error("ABI decode error: need {needed} bytes, got {available}")]
    AbiDecode { needed: usize, available: usize },

    /// Fewer than 65 bytes remain for a declared signature chunk
    #[error("Truncated signature blob: chunk {index} needs {needed} bytes, {available} available")]
    TruncatedSignatureBlob {
        index: usize,
        needed: usize,
        available: usize,
    },

    /// A single non-contract signature is not exactly one chunk long
    #[error("Invalid signature length: expected 65 bytes, got {length}")]
    InvalidSignatureLength { length: usize },

    /// Signature chunk carries an unrecognized `v`
    #[error("Unknown signature scheme v={v} in chunk {index}")]
    UnknownSignatureScheme { index: usize, v: u8 },

    /// Contract signature points outside the dynamic part of the blob
    #[error("Invalid contract signature in chunk {index}: {reason}")]
    InvalidContractSignature { index: usize, reason: &'static str },

    /// Recomputed transaction hash differs from the claimed hash
    #[error("Invalid transaction hash: claimed {claimed}, computed {computed}")]
    InvalidHash { claimed: B256, computed: B256 },

    /// No confirmations were supplied
    #[error("Transaction has no confirmations")]
    NoConfirmations,

    /// A signature does not correspond to its stated signer
    #[error("Signature does not belong to signer {signer}")]
    SignerSignatureMismatch { signer: Address },

    /// A signer is not a current owner, or confirmed more than once
    #[error("Confirmation from {signer} is not from a distinct current owner")]
    ConfirmationsNotFromOwners { signer: Address },

    /// Contract version string is not a supported Safe version
    #[error("Unsupported Safe version: {0}")]
    UnsupportedVersion(String),

    /// Account snapshot violates the preconditions of a deployed Safe
    #[error("Invalid account: {0}")]
    InvalidAccount(String),

    /// Owner-management call would leave the Safe in an invalid configuration
    #[error("Invalid owner change: {0}")]
    InvalidOwnerChange(String),

    /// Transaction record lacks a field required to rebuild the Safe transaction
    #[error("Incomplete transaction record: missing {0}")]
    IncompleteTransaction(&'static str),

    /// Signature generation failed
    #[error("Failed to sign: {0}")]
    Signing(String),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(String),
}

impl From<alloy::signers::Error> for Error {
    fn from(err: alloy::signers::Error) -> Self {
        Error::Signing(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
