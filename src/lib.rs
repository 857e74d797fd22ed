//! # safe-multisig
//!
//! Offline core for multi-owner Safe accounts: transaction hashing for every
//! Safe version, signature blob decoding, and validation of owner
//! confirmations against an account snapshot.
//!
//! ## Features
//!
//! - EIP-712 transaction hashes for Safe 0.1.0 through 1.4.1
//! - Decoding of ECDSA, `eth_sign`, approved-hash and contract signatures
//! - Confirmation validation with a typed verdict
//! - Owner-management call data and `getOwners()` eth_call (de)coding
//! - Transaction-service payloads and client-gateway models
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use safe_multisig::{validate_transaction, AccountSnapshot, SafeVersion};
//!
//! // Snapshot fetched by the caller (e.g. via `query::get_owners_request`)
//! let account = AccountSnapshot::new(safe, 1, SafeVersion::V1_3_0, owners, 2)?;
//!
//! let verdict = validate_transaction(&account, &tx, claimed_hash, &confirmations);
//! if verdict.is_valid() && account.meets_threshold(confirmations.len()) {
//!     // ready to execute
//! }
//! ```
//!
//! ## Owner management
//!
//! ```rust,ignore
//! let tx = OwnerManagement::new(&account)
//!     .swap_owner(old_owner, new_owner)?
//!     .with_nonce(nonce);
//! let proposal = ProposeTransactionRequest::sign(&account.domain(), &tx, &signer).await?;
//! ```

pub mod account;
pub mod chain;
pub mod contracts;
pub mod encoding;
pub mod envelope;
pub mod error;
pub mod models;
pub mod proposal;
pub mod query;
pub mod signing;
pub mod types;
pub mod validation;

// Re-export main types at crate root
pub use account::{AccountSnapshot, SafeDomain};
pub use chain::{ChainConfig, SAFE_SINGLETON_SLOT};
pub use contracts::{IOwnerManager, SENTINEL_OWNERS};
pub use encoding::{compute_safe_transaction_hash, OwnerChange};
pub use envelope::{EthTransaction, FeeModel, TxBase};
pub use error::{Error, Result};
pub use models::TransactionDetails;
pub use proposal::{ConfirmTransactionRequest, OwnerManagement, ProposeTransactionRequest};
pub use signing::{decode_signatures, encode_signatures, SignatureRecord, SignatureScheme};
pub use types::{Confirmation, Operation, SafeTransaction, SafeVersion};
pub use validation::{validate_transaction, validate_transaction_details, ValidationVerdict};

// Re-export alloy types that are commonly used
pub use alloy::primitives::{Address, Bytes, B256, U256};
