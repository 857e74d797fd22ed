//! Ethereum transaction envelopes
//!
//! One transaction type covers the legacy (EIP-155), access-list (EIP-2930)
//! and dynamic-fee (EIP-1559) formats. The fields every format shares live in
//! [`TxBase`]; [`FeeModel`] supplies the rest and selects the format. Encoding
//! is delegated to the matching `alloy::consensus` transaction.

use alloy::consensus::{SignableTransaction, TxEip1559, TxEip2930, TxEnvelope, TxLegacy};
use alloy::eips::eip2718::Encodable2718;
use alloy::eips::eip2930::AccessList;
use alloy::primitives::{Address, Bytes, Signature, B256, U256};
use alloy::signers::Signer;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// EIP-2718 type byte of access-list transactions
pub const EIP2930_TX_TYPE: u8 = 0x01;
/// EIP-2718 type byte of dynamic-fee transactions
pub const EIP1559_TX_TYPE: u8 = 0x02;

/// Fields shared by every transaction format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxBase {
    pub nonce: u64,
    pub gas_limit: u64,
    /// `None` deploys a contract
    pub to: Option<Address>,
    pub value: U256,
    pub input: Bytes,
}

/// Fee fields, which also select the transaction format
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum FeeModel {
    Legacy {
        gas_price: u128,
    },
    Eip2930 {
        gas_price: u128,
        access_list: AccessList,
    },
    Eip1559 {
        max_priority_fee_per_gas: u128,
        max_fee_per_gas: u128,
        access_list: AccessList,
    },
}

impl FeeModel {
    /// EIP-2718 type byte; `None` for legacy transactions
    pub fn tx_type(&self) -> Option<u8> {
        match self {
            Self::Legacy { .. } => None,
            Self::Eip2930 { .. } => Some(EIP2930_TX_TYPE),
            Self::Eip1559 { .. } => Some(EIP1559_TX_TYPE),
        }
    }
}

/// The consensus transaction an [`EthTransaction`] encodes as
enum ConsensusTx {
    Legacy(TxLegacy),
    Eip2930(TxEip2930),
    Eip1559(TxEip1559),
}

/// An unsigned Ethereum transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthTransaction {
    pub chain_id: u64,
    #[serde(flatten)]
    pub base: TxBase,
    pub fee: FeeModel,
}

impl EthTransaction {
    pub fn new(chain_id: u64, base: TxBase, fee: FeeModel) -> Self {
        Self {
            chain_id,
            base,
            fee,
        }
    }

    fn consensus(&self) -> ConsensusTx {
        let base = self.base.clone();
        match &self.fee {
            FeeModel::Legacy { gas_price } => ConsensusTx::Legacy(TxLegacy {
                // Some(..) selects EIP-155 replay protection
                chain_id: Some(self.chain_id),
                nonce: base.nonce,
                gas_price: *gas_price,
                gas_limit: base.gas_limit,
                to: base.to.into(),
                value: base.value,
                input: base.input,
            }),
            FeeModel::Eip2930 {
                gas_price,
                access_list,
            } => ConsensusTx::Eip2930(TxEip2930 {
                chain_id: self.chain_id,
                nonce: base.nonce,
                gas_price: *gas_price,
                gas_limit: base.gas_limit,
                to: base.to.into(),
                value: base.value,
                access_list: access_list.clone(),
                input: base.input,
            }),
            FeeModel::Eip1559 {
                max_priority_fee_per_gas,
                max_fee_per_gas,
                access_list,
            } => ConsensusTx::Eip1559(TxEip1559 {
                chain_id: self.chain_id,
                nonce: base.nonce,
                gas_limit: base.gas_limit,
                max_fee_per_gas: *max_fee_per_gas,
                max_priority_fee_per_gas: *max_priority_fee_per_gas,
                to: base.to.into(),
                value: base.value,
                access_list: access_list.clone(),
                input: base.input,
            }),
        }
    }

    /// Bytes whose keccak256 the sender signs
    ///
    /// Legacy transactions append `chainId, 0, 0` (EIP-155); typed ones are
    /// prefixed by their type byte.
    pub fn signing_payload(&self) -> Bytes {
        let payload = match self.consensus() {
            ConsensusTx::Legacy(tx) => tx.encoded_for_signing(),
            ConsensusTx::Eip2930(tx) => tx.encoded_for_signing(),
            ConsensusTx::Eip1559(tx) => tx.encoded_for_signing(),
        };
        payload.into()
    }

    pub fn signing_hash(&self) -> B256 {
        match self.consensus() {
            ConsensusTx::Legacy(tx) => tx.signature_hash(),
            ConsensusTx::Eip2930(tx) => tx.signature_hash(),
            ConsensusTx::Eip1559(tx) => tx.signature_hash(),
        }
    }

    /// Raw signed transaction, ready for `eth_sendRawTransaction`
    pub fn encode_signed(&self, signature: &Signature) -> Bytes {
        let signature = *signature;
        let envelope = match self.consensus() {
            ConsensusTx::Legacy(tx) => TxEnvelope::from(tx.into_signed(signature)),
            ConsensusTx::Eip2930(tx) => TxEnvelope::from(tx.into_signed(signature)),
            ConsensusTx::Eip1559(tx) => TxEnvelope::from(tx.into_signed(signature)),
        };
        envelope.encoded_2718().into()
    }

    /// Signs the transaction and returns the raw signed bytes
    pub async fn sign<S: Signer + Sync>(&self, signer: &S) -> Result<Bytes> {
        let signature = signer.sign_hash(&self.signing_hash()).await?;
        Ok(self.encode_signed(&signature))
    }
}
