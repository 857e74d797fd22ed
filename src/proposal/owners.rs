//! Owner-management transactions

use alloy::primitives::{Address, U256};

use crate::account::AccountSnapshot;
use crate::contracts::SENTINEL_OWNERS;
use crate::encoding::OwnerChange;
use crate::error::{Error, Result};
use crate::types::{Operation, SafeTransaction};

/// Builds transactions that change a Safe's owners or threshold
///
/// Every transaction is a zero-value `Call` from the Safe to itself with a
/// zero nonce; set the nonce with [`SafeTransaction::with_nonce`] before
/// hashing. Preconditions the contract would revert on are checked up front.
#[derive(Debug, Clone, Copy)]
pub struct OwnerManagement<'a> {
    account: &'a AccountSnapshot,
}

impl<'a> OwnerManagement<'a> {
    pub fn new(account: &'a AccountSnapshot) -> Self {
        Self { account }
    }

    /// `addOwnerWithThreshold(owner, threshold)`
    pub fn add_owner_with_threshold(&self, owner: Address, threshold: u64) -> Result<SafeTransaction> {
        self.check_new_owner(owner)?;
        self.check_threshold(threshold, self.account.owners().len() + 1)?;

        Ok(self.transaction(OwnerChange::AddOwnerWithThreshold {
            owner,
            threshold: U256::from(threshold),
        }))
    }

    /// `removeOwner(prevOwner, owner, threshold)`, with `prevOwner` looked up
    pub fn remove_owner(&self, owner: Address, threshold: u64) -> Result<SafeTransaction> {
        let prev_owner = self.predecessor(owner)?;
        if self.account.owners().len() == 1 {
            return Err(Error::InvalidOwnerChange(
                "cannot remove the last owner".to_string(),
            ));
        }
        self.check_threshold(threshold, self.account.owners().len() - 1)?;

        Ok(self.transaction(OwnerChange::RemoveOwner {
            prev_owner,
            owner,
            threshold: U256::from(threshold),
        }))
    }

    /// `swapOwner(prevOwner, oldOwner, newOwner)`, with `prevOwner` looked up
    pub fn swap_owner(&self, old_owner: Address, new_owner: Address) -> Result<SafeTransaction> {
        let prev_owner = self.predecessor(old_owner)?;
        self.check_new_owner(new_owner)?;

        Ok(self.transaction(OwnerChange::SwapOwner {
            prev_owner,
            old_owner,
            new_owner,
        }))
    }

    /// `changeThreshold(threshold)`
    pub fn change_threshold(&self, threshold: u64) -> Result<SafeTransaction> {
        self.check_threshold(threshold, self.account.owners().len())?;

        Ok(self.transaction(OwnerChange::ChangeThreshold {
            threshold: U256::from(threshold),
        }))
    }

    fn transaction(&self, change: OwnerChange) -> SafeTransaction {
        SafeTransaction::new(self.account.address(), U256::ZERO, change.encode(), Operation::Call)
    }

    fn predecessor(&self, owner: Address) -> Result<Address> {
        self.account
            .prev_owner(owner)
            .ok_or_else(|| Error::InvalidOwnerChange(format!("{owner} is not an owner")))
    }

    fn check_new_owner(&self, owner: Address) -> Result<()> {
        if owner == Address::ZERO || owner == SENTINEL_OWNERS || owner == self.account.address() {
            return Err(Error::InvalidOwnerChange(format!("{owner} cannot be an owner")));
        }
        if self.account.is_owner(owner) {
            return Err(Error::InvalidOwnerChange(format!("{owner} is already an owner")));
        }
        Ok(())
    }

    fn check_threshold(&self, threshold: u64, owner_count: usize) -> Result<()> {
        if threshold == 0 || threshold > owner_count as u64 {
            return Err(Error::InvalidOwnerChange(format!(
                "threshold {threshold} outside 1..={owner_count}"
            )));
        }
        Ok(())
    }
}
