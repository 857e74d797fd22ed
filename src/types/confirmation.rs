//! Owner confirmations

use alloy::primitives::{Address, Bytes};
use serde::{Deserialize, Serialize};

/// An owner's signature over a Safe transaction hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    /// The owner the signature claims to come from
    pub signer: Address,
    /// Encoded signature (`r || s || v`, plus a dynamic part for contract signers)
    pub signature: Bytes,
}

impl Confirmation {
    pub fn new(signer: Address, signature: impl Into<Bytes>) -> Self {
        Self {
            signer,
            signature: signature.into(),
        }
    }
}
