//! Payloads submitted to the transaction service

use alloy::primitives::{Address, Bytes, B256, U256};
use alloy::signers::Signer;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::account::SafeDomain;
use crate::encoding::{compute_safe_transaction_hash, decimal};
use crate::error::Result;
use crate::signing::sign_hash;
use crate::types::{Operation, SafeTransaction};

/// Body of a "propose transaction" request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposeTransactionRequest {
    pub to: Address,
    #[serde(with = "decimal")]
    pub value: U256,
    /// `None` for plain value transfers
    pub data: Option<Bytes>,
    pub operation: Operation,
    #[serde(with = "decimal")]
    pub safe_tx_gas: U256,
    #[serde(with = "decimal")]
    pub base_gas: U256,
    #[serde(with = "decimal")]
    pub gas_price: U256,
    pub gas_token: Address,
    pub refund_receiver: Address,
    #[serde(with = "decimal")]
    pub nonce: U256,
    pub safe_tx_hash: B256,
    /// Proposing owner
    pub sender: Address,
    /// Proposer's signature over `safe_tx_hash`
    pub signature: Bytes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,
}

impl ProposeTransactionRequest {
    /// Hashes `tx` for `domain` and signs the hash with `signer`
    pub async fn sign<S: Signer + Sync>(domain: &SafeDomain, tx: &SafeTransaction, signer: &S) -> Result<Self> {
        let safe_tx_hash = compute_safe_transaction_hash(domain, tx);
        let signature = sign_hash(signer, safe_tx_hash).await?;
        debug!(safe = %domain.address, %safe_tx_hash, sender = %signer.address(), "signed proposal");

        Ok(Self {
            to: tx.to,
            value: tx.value,
            data: (!tx.data.is_empty()).then(|| tx.data.clone()),
            operation: tx.operation,
            safe_tx_gas: tx.safe_tx_gas,
            base_gas: tx.base_gas,
            gas_price: tx.gas_price,
            gas_token: tx.gas_token,
            refund_receiver: tx.refund_receiver,
            nonce: tx.nonce,
            safe_tx_hash,
            sender: signer.address(),
            signature,
            origin: None,
        })
    }

    /// Sets the free-form origin label shown by wallet interfaces
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// The proposed transaction
    pub fn transaction(&self) -> SafeTransaction {
        SafeTransaction {
            to: self.to,
            value: self.value,
            data: self.data.clone().unwrap_or_default(),
            operation: self.operation,
            safe_tx_gas: self.safe_tx_gas,
            base_gas: self.base_gas,
            gas_price: self.gas_price,
            gas_token: self.gas_token,
            refund_receiver: self.refund_receiver,
            nonce: self.nonce,
        }
    }
}

/// Body of a "confirm transaction" request, posted under the transaction hash
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmTransactionRequest {
    pub signed_safe_tx_hash: Bytes,
}

impl ConfirmTransactionRequest {
    /// Signs `safe_tx_hash` with `signer`
    pub async fn sign<S: Signer + Sync>(safe_tx_hash: B256, signer: &S) -> Result<Self> {
        Ok(Self {
            signed_safe_tx_hash: sign_hash(signer, safe_tx_hash).await?,
        })
    }
}
