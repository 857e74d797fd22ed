//! Account snapshots of deployed Safes

use std::collections::HashSet;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

use crate::contracts::SENTINEL_OWNERS;
use crate::error::{Error, Result};
use crate::types::SafeVersion;

/// The fields of an account that a transaction hash commits to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SafeDomain {
    /// Safe contract address (`verifyingContract`)
    pub address: Address,
    /// Chain id, only hashed for 1.3.0 and later
    pub chain_id: u64,
    /// Singleton version, selects the EIP-712 constants
    pub version: SafeVersion,
}

impl SafeDomain {
    pub fn new(address: Address, chain_id: u64, version: SafeVersion) -> Self {
        Self {
            address,
            chain_id,
            version,
        }
    }
}

/// Immutable view of a deployed Safe's owner configuration
///
/// Owners keep their on-chain order: `removeOwner` and `swapOwner` need the
/// predecessor of an owner in the contract's linked list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawAccountSnapshot", into = "RawAccountSnapshot")]
pub struct AccountSnapshot {
    domain: SafeDomain,
    owners: Vec<Address>,
    threshold: u64,
}

impl AccountSnapshot {
    /// Creates a snapshot, checking the invariants every deployed Safe holds
    pub fn new(
        address: Address,
        chain_id: u64,
        version: SafeVersion,
        owners: Vec<Address>,
        threshold: u64,
    ) -> Result<Self> {
        if owners.is_empty() {
            return Err(Error::InvalidAccount("no owners".to_string()));
        }

        let mut seen = HashSet::with_capacity(owners.len());
        for owner in &owners {
            if *owner == Address::ZERO || *owner == SENTINEL_OWNERS {
                return Err(Error::InvalidAccount(format!("invalid owner {owner}")));
            }
            if !seen.insert(*owner) {
                return Err(Error::InvalidAccount(format!("duplicate owner {owner}")));
            }
        }

        if threshold == 0 || threshold > owners.len() as u64 {
            return Err(Error::InvalidAccount(format!(
                "threshold {threshold} outside 1..={}",
                owners.len()
            )));
        }

        Ok(Self {
            domain: SafeDomain::new(address, chain_id, version),
            owners,
            threshold,
        })
    }

    pub fn address(&self) -> Address {
        self.domain.address
    }

    pub fn chain_id(&self) -> u64 {
        self.domain.chain_id
    }

    pub fn version(&self) -> SafeVersion {
        self.domain.version
    }

    /// Returns the hashing domain of this account
    pub fn domain(&self) -> SafeDomain {
        self.domain
    }

    /// Owners in on-chain order
    pub fn owners(&self) -> &[Address] {
        &self.owners
    }

    pub fn threshold(&self) -> u64 {
        self.threshold
    }

    pub fn is_owner(&self, address: Address) -> bool {
        self.owners.contains(&address)
    }

    /// Returns the owner preceding `owner` in the on-chain linked list
    pub fn prev_owner(&self, owner: Address) -> Option<Address> {
        let index = self.owners.iter().position(|o| *o == owner)?;
        Some(if index == 0 {
            SENTINEL_OWNERS
        } else {
            self.owners[index - 1]
        })
    }

    /// Returns true if `confirmations` validated confirmations reach the threshold
    pub fn meets_threshold(&self, confirmations: usize) -> bool {
        confirmations as u64 >= self.threshold
    }
}

/// Wire shape of an account snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAccountSnapshot {
    address: Address,
    chain_id: u64,
    contract_version: SafeVersion,
    owners: Vec<Address>,
    threshold: u64,
}

impl TryFrom<RawAccountSnapshot> for AccountSnapshot {
    type Error = Error;

    fn try_from(raw: RawAccountSnapshot) -> Result<Self> {
        Self::new(
            raw.address,
            raw.chain_id,
            raw.contract_version,
            raw.owners,
            raw.threshold,
        )
    }
}

impl From<AccountSnapshot> for RawAccountSnapshot {
    fn from(account: AccountSnapshot) -> Self {
        Self {
            address: account.domain.address,
            chain_id: account.domain.chain_id,
            contract_version: account.domain.version,
            owners: account.owners,
            threshold: account.threshold,
        }
    }
}
