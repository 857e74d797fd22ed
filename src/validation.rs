//! Validation of confirmed Safe transactions against an account snapshot
//!
//! Validation answers one question: are these confirmations genuine and
//! authorized for this exact transaction? Whether there are enough of them to
//! execute is left to the caller ([`AccountSnapshot::meets_threshold`]).

use std::collections::HashSet;

use alloy::primitives::B256;
use tracing::debug;

use crate::account::AccountSnapshot;
use crate::encoding::compute_safe_transaction_hash;
use crate::error::{Error, Result};
use crate::models::TransactionDetails;
use crate::signing::{decode_signature, SignatureRecord};
use crate::types::{Confirmation, SafeTransaction};

/// Outcome of validating a transaction and its confirmations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    Valid,
    Invalid(Error),
}

impl ValidationVerdict {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The failure reason, if any
    pub fn reason(&self) -> Option<&Error> {
        match self {
            Self::Valid => None,
            Self::Invalid(reason) => Some(reason),
        }
    }

    pub fn into_result(self) -> Result<()> {
        match self {
            Self::Valid => Ok(()),
            Self::Invalid(reason) => Err(reason),
        }
    }
}

impl From<Result<()>> for ValidationVerdict {
    fn from(result: Result<()>) -> Self {
        match result {
            Ok(()) => Self::Valid,
            Err(reason) => Self::Invalid(reason),
        }
    }
}

/// Validates `confirmations` of `tx`, whose hash is claimed to be `claimed_hash`
///
/// Checks run in order and stop at the first failure:
/// 1. the recomputed hash equals `claimed_hash`
/// 2. there is at least one confirmation
/// 3. every signature belongs to its stated signer
/// 4. every signer is a distinct current owner
pub fn validate_transaction(
    account: &AccountSnapshot,
    tx: &SafeTransaction,
    claimed_hash: B256,
    confirmations: &[Confirmation],
) -> ValidationVerdict {
    let verdict = ValidationVerdict::from(check_transaction(
        account,
        tx,
        claimed_hash,
        confirmations,
    ));

    if let ValidationVerdict::Invalid(reason) = &verdict {
        debug!(
            safe = %account.address(),
            %claimed_hash,
            confirmations = confirmations.len(),
            %reason,
            "transaction failed validation"
        );
    }

    verdict
}

/// Validates a transaction record as returned by the client gateway
///
/// Fails with [`Error::IncompleteTransaction`] when the record is not a
/// multisig transaction or lacks the fields needed to rebuild it.
pub fn validate_transaction_details(
    account: &AccountSnapshot,
    details: &TransactionDetails,
) -> Result<ValidationVerdict> {
    let (tx, claimed_hash, confirmations) = details.multisig_parts()?;
    Ok(validate_transaction(account, &tx, claimed_hash, &confirmations))
}

fn check_transaction(
    account: &AccountSnapshot,
    tx: &SafeTransaction,
    claimed_hash: B256,
    confirmations: &[Confirmation],
) -> Result<()> {
    let computed = compute_safe_transaction_hash(&account.domain(), tx);
    if computed != claimed_hash {
        return Err(Error::InvalidHash {
            claimed: claimed_hash,
            computed,
        });
    }

    if confirmations.is_empty() {
        return Err(Error::NoConfirmations);
    }

    for confirmation in confirmations {
        verify_confirmation(computed, confirmation)?;
    }

    let mut seen = HashSet::with_capacity(confirmations.len());
    for confirmation in confirmations {
        if !account.is_owner(confirmation.signer) || !seen.insert(confirmation.signer) {
            return Err(Error::ConfirmationsNotFromOwners {
                signer: confirmation.signer,
            });
        }
    }

    Ok(())
}

/// Decodes a confirmation's signature and checks it belongs to the stated signer
///
/// For ECDSA schemes the recovered address must match; for approved-hash and
/// contract signatures the address embedded in `r` must match.
pub fn verify_confirmation(hash: B256, confirmation: &Confirmation) -> Result<SignatureRecord> {
    let record = decode_signature(hash, &confirmation.signature).map_err(|err| match err {
        Error::SignerSignatureMismatch { .. } => Error::SignerSignatureMismatch {
            signer: confirmation.signer,
        },
        other => other,
    })?;

    if record.signer != confirmation.signer {
        return Err(Error::SignerSignatureMismatch {
            signer: confirmation.signer,
        });
    }

    Ok(record)
}
