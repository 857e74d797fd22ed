//! ABI encoding for the Safe owner-management calls
//!
//! Only static parameters occur in these calls: every argument is one 32-byte
//! word following the 4-byte selector. Return data decoding covers the two
//! shapes the owner queries produce, a dynamic `address[]` and a `uint256`.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::{SolCall, SolInterface};
use serde::Serialize;

use crate::contracts::IOwnerManager::{self, IOwnerManagerCalls};
use crate::error::{Error, Result};

const WORD: usize = 32;

/// A call that changes the owner set or threshold of a Safe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum OwnerChange {
    AddOwnerWithThreshold {
        owner: Address,
        threshold: U256,
    },
    RemoveOwner {
        prev_owner: Address,
        owner: Address,
        threshold: U256,
    },
    SwapOwner {
        prev_owner: Address,
        old_owner: Address,
        new_owner: Address,
    },
    ChangeThreshold {
        threshold: U256,
    },
}

impl OwnerChange {
    /// Canonical function signature, e.g. `changeThreshold(uint256)`
    pub fn signature(&self) -> &'static str {
        match self {
            Self::AddOwnerWithThreshold { .. } => IOwnerManager::addOwnerWithThresholdCall::SIGNATURE,
            Self::RemoveOwner { .. } => IOwnerManager::removeOwnerCall::SIGNATURE,
            Self::SwapOwner { .. } => IOwnerManager::swapOwnerCall::SIGNATURE,
            Self::ChangeThreshold { .. } => IOwnerManager::changeThresholdCall::SIGNATURE,
        }
    }

    /// 4-byte function selector
    pub fn selector(&self) -> [u8; 4] {
        match self {
            Self::AddOwnerWithThreshold { .. } => IOwnerManager::addOwnerWithThresholdCall::SELECTOR,
            Self::RemoveOwner { .. } => IOwnerManager::removeOwnerCall::SELECTOR,
            Self::SwapOwner { .. } => IOwnerManager::swapOwnerCall::SELECTOR,
            Self::ChangeThreshold { .. } => IOwnerManager::changeThresholdCall::SELECTOR,
        }
    }

    /// Encodes selector and arguments as call data
    pub fn encode(&self) -> Bytes {
        let encoded = match *self {
            Self::AddOwnerWithThreshold { owner, threshold } => {
                IOwnerManager::addOwnerWithThresholdCall { owner, threshold }.abi_encode()
            }
            Self::RemoveOwner {
                prev_owner,
                owner,
                threshold,
            } => IOwnerManager::removeOwnerCall {
                prevOwner: prev_owner,
                owner,
                threshold,
            }
            .abi_encode(),
            Self::SwapOwner {
                prev_owner,
                old_owner,
                new_owner,
            } => IOwnerManager::swapOwnerCall {
                prevOwner: prev_owner,
                oldOwner: old_owner,
                newOwner: new_owner,
            }
            .abi_encode(),
            Self::ChangeThreshold { threshold } => {
                IOwnerManager::changeThresholdCall { threshold }.abi_encode()
            }
        };
        Bytes::from(encoded)
    }

    /// Decodes call data back into an owner change
    ///
    /// Returns `None` for anything that is not one of the four owner-management
    /// calls, including the read-only queries.
    pub fn decode(data: &[u8]) -> Option<Self> {
        match IOwnerManagerCalls::abi_decode(data).ok()? {
            IOwnerManagerCalls::addOwnerWithThreshold(call) => Some(Self::AddOwnerWithThreshold {
                owner: call.owner,
                threshold: call.threshold,
            }),
            IOwnerManagerCalls::removeOwner(call) => Some(Self::RemoveOwner {
                prev_owner: call.prevOwner,
                owner: call.owner,
                threshold: call.threshold,
            }),
            IOwnerManagerCalls::swapOwner(call) => Some(Self::SwapOwner {
                prev_owner: call.prevOwner,
                old_owner: call.oldOwner,
                new_owner: call.newOwner,
            }),
            IOwnerManagerCalls::changeThreshold(call) => Some(Self::ChangeThreshold {
                threshold: call.threshold,
            }),
            _ => None,
        }
    }
}

/// Call data for `getOwners()`
pub fn encode_get_owners() -> Bytes {
    Bytes::copy_from_slice(&IOwnerManager::getOwnersCall::SELECTOR)
}

/// Call data for `getThreshold()`
pub fn encode_get_threshold() -> Bytes {
    Bytes::copy_from_slice(&IOwnerManager::getThresholdCall::SELECTOR)
}

/// Call data for `nonce()`
pub fn encode_nonce() -> Bytes {
    Bytes::copy_from_slice(&IOwnerManager::nonceCall::SELECTOR)
}

fn read_word(data: &[u8], offset: usize) -> Result<&[u8]> {
    let end = offset.checked_add(WORD).ok_or(Error::AbiDecode {
        needed: usize::MAX,
        available: data.len(),
    })?;
    data.get(offset..end).ok_or(Error::AbiDecode {
        needed: end,
        available: data.len(),
    })
}

/// Interprets a word as a length or offset; values beyond `usize` can never fit
/// in the buffer, so they are reported as a short read.
fn word_to_usize(word: &[u8], available: usize) -> Result<usize> {
    let too_large = Error::AbiDecode {
        needed: usize::MAX,
        available,
    };
    if word[..24].iter().any(|b| *b != 0) {
        return Err(too_large);
    }
    let mut low = [0u8; 8];
    low.copy_from_slice(&word[24..]);
    usize::try_from(u64::from_be_bytes(low)).map_err(|_| too_large)
}

/// Decodes an ABI-encoded `address[]` return value
///
/// Layout: `offset | length | address[0] | ... | address[length - 1]`.
pub fn decode_address_array(data: &[u8]) -> Result<Vec<Address>> {
    let offset = word_to_usize(read_word(data, 0)?, data.len())?;
    let length = word_to_usize(read_word(data, offset)?, data.len())?;

    let start = offset + WORD;
    let needed = length
        .checked_mul(WORD)
        .and_then(|size| size.checked_add(start))
        .unwrap_or(usize::MAX);
    if data.len() < needed {
        return Err(Error::AbiDecode {
            needed,
            available: data.len(),
        });
    }

    Ok(data[start..needed]
        .chunks_exact(WORD)
        .map(|word| Address::from_slice(&word[12..]))
        .collect())
}

/// Decodes an ABI-encoded `uint256` return value
pub fn decode_uint(data: &[u8]) -> Result<U256> {
    let word = read_word(data, 0)?;
    Ok(U256::from_be_slice(word))
}
