//! Transaction detail records (`GET /transactions/{id}`)

use alloy::primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

use super::{AddressInfo, TransactionInfo};
use crate::encoding::decimal;
use crate::error::{Error, Result};
use crate::types::{Confirmation, Operation, SafeTransaction};

/// Lifecycle state of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionStatus {
    AwaitingConfirmations,
    AwaitingExecution,
    Cancelled,
    Failed,
    Success,
    #[serde(other)]
    Unknown,
}

/// A transaction as the client gateway reports it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionDetails {
    #[serde(default)]
    pub safe_address: Option<Address>,
    pub tx_id: String,
    pub tx_status: TransactionStatus,
    pub tx_info: TransactionInfo,
    #[serde(default)]
    pub tx_data: Option<TransactionData>,
    #[serde(default)]
    pub detailed_execution_info: Option<ExecutionInfo>,
    /// Hash of the executing Ethereum transaction, once mined
    #[serde(default)]
    pub tx_hash: Option<B256>,
    #[serde(default)]
    pub executed_at: Option<u64>,
}

/// Call parameters of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionData {
    #[serde(default)]
    pub hex_data: Option<Bytes>,
    pub to: AddressInfo,
    #[serde(default, with = "decimal::option")]
    pub value: Option<U256>,
    pub operation: Operation,
}

/// How a transaction is (or was) executed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExecutionInfo {
    Multisig(MultisigExecutionDetails),
    #[serde(rename_all = "camelCase")]
    Module { address: AddressInfo },
    #[serde(other)]
    Unknown,
}

/// Signing state of a multisig transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigExecutionDetails {
    pub safe_tx_hash: B256,
    #[serde(with = "decimal")]
    pub nonce: U256,
    #[serde(default, with = "decimal::option")]
    pub safe_tx_gas: Option<U256>,
    #[serde(default, with = "decimal::option")]
    pub base_gas: Option<U256>,
    #[serde(default, with = "decimal::option")]
    pub gas_price: Option<U256>,
    #[serde(default)]
    pub gas_token: Option<Address>,
    #[serde(default)]
    pub refund_receiver: Option<AddressInfo>,
    #[serde(default)]
    pub signers: Vec<AddressInfo>,
    pub confirmations_required: u64,
    #[serde(default)]
    pub confirmations: Vec<MultisigConfirmation>,
    #[serde(default)]
    pub executor: Option<AddressInfo>,
}

/// One owner's confirmation as reported by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultisigConfirmation {
    pub signer: AddressInfo,
    /// Absent when the owner approved on chain without a detached signature
    #[serde(default)]
    pub signature: Option<Bytes>,
    #[serde(default)]
    pub submitted_at: Option<u64>,
}

impl TransactionDetails {
    /// Multisig execution details, if this is a multisig transaction
    pub fn multisig(&self) -> Option<&MultisigExecutionDetails> {
        match &self.detailed_execution_info {
            Some(ExecutionInfo::Multisig(details)) => Some(details),
            _ => None,
        }
    }

    /// Rebuilds the signed transaction, its claimed hash and its confirmations
    ///
    /// Gas and refund fields the gateway omits default to zero. A missing
    /// `txData`, non-multisig execution or a confirmation without a signature
    /// fails with [`Error::IncompleteTransaction`].
    pub fn multisig_parts(&self) -> Result<(SafeTransaction, B256, Vec<Confirmation>)> {
        let details = self
            .multisig()
            .ok_or(Error::IncompleteTransaction("multisig execution info"))?;
        let data = self
            .tx_data
            .as_ref()
            .ok_or(Error::IncompleteTransaction("txData"))?;

        let tx = SafeTransaction::new(
            data.to.value,
            data.value.unwrap_or_default(),
            data.hex_data.clone().unwrap_or_default(),
            data.operation,
        )
        .with_safe_tx_gas(details.safe_tx_gas.unwrap_or_default())
        .with_base_gas(details.base_gas.unwrap_or_default())
        .with_gas_refund(
            details.gas_price.unwrap_or_default(),
            details.gas_token.unwrap_or_default(),
        )
        .with_refund_receiver(
            details
                .refund_receiver
                .as_ref()
                .map(|receiver| receiver.value)
                .unwrap_or_default(),
        )
        .with_nonce(details.nonce);

        let confirmations = details
            .confirmations
            .iter()
            .map(|confirmation| {
                let signature = confirmation
                    .signature
                    .clone()
                    .ok_or(Error::IncompleteTransaction("confirmation signature"))?;
                Ok(Confirmation::new(confirmation.signer.value, signature))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok((tx, details.safe_tx_hash, confirmations))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, b256};

    const DETAILS: &str = r#"{
        "safeAddress": "0xfb1bffc9d739b8d520daf37df666da4c687191ea",
        "txId": "multisig_0xfb1bffc9d739b8d520daf37df666da4c687191ea_0xc2a8bbeb9fb933f45fcf4618b9f54191540e39e93f160a7531eb0da330546c6d",
        "executedAt": null,
        "txStatus": "AWAITING_CONFIRMATIONS",
        "txInfo": {
            "type": "Transfer",
            "sender": {"value": "0xfb1bffc9d739b8d520daf37df666da4c687191ea"},
            "recipient": {"value": "0x5afe3855358e112b5647b952709e6165e1c1eeee"},
            "direction": "OUTGOING",
            "transferInfo": {"type": "NATIVE_COIN", "value": "1000000000000000000"}
        },
        "txData": {
            "hexData": null,
            "dataDecoded": null,
            "to": {"value": "0x5AFE3855358E112B5647B952709E6165E1C1EEEE"},
            "value": "1000000000000000000",
            "operation": 0
        },
        "detailedExecutionInfo": {
            "type": "MULTISIG",
            "submittedAt": 1700000000000,
            "nonce": 5,
            "safeTxGas": "0",
            "baseGas": "0",
            "gasPrice": "0",
            "gasToken": "0x0000000000000000000000000000000000000000",
            "refundReceiver": {"value": "0x0000000000000000000000000000000000000000"},
            "safeTxHash": "0xc2a8bbeb9fb933f45fcf4618b9f54191540e39e93f160a7531eb0da330546c6d",
            "executor": null,
            "signers": [
                {"value": "0x1111111111111111111111111111111111111111"},
                {"value": "0x2222222222222222222222222222222222222222"}
            ],
            "confirmationsRequired": 2,
            "confirmations": [
                {
                    "signer": {"value": "0x1111111111111111111111111111111111111111"},
                    "signature": "0x0000000000000000000000001111111111111111111111111111111111111111000000000000000000000000000000000000000000000000000000000000000001",
                    "submittedAt": 1700000000001
                }
            ],
            "trusted": true
        },
        "txHash": null
    }"#;

    #[test]
    fn test_multisig_parts() {
        let details: TransactionDetails = serde_json::from_str(DETAILS).unwrap();
        assert_eq!(details.tx_status, TransactionStatus::AwaitingConfirmations);

        let (tx, hash, confirmations) = details.multisig_parts().unwrap();
        assert_eq!(tx.to, address!("5afe3855358e112b5647b952709e6165e1c1eeee"));
        assert_eq!(tx.value, U256::from(10).pow(U256::from(18)));
        assert!(tx.data.is_empty());
        assert_eq!(tx.nonce, U256::from(5));
        assert_eq!(
            hash,
            b256!("c2a8bbeb9fb933f45fcf4618b9f54191540e39e93f160a7531eb0da330546c6d")
        );
        assert_eq!(confirmations.len(), 1);
        assert_eq!(
            confirmations[0].signer,
            address!("1111111111111111111111111111111111111111")
        );
        assert_eq!(confirmations[0].signature.len(), 65);
    }

    #[test]
    fn test_module_transaction_is_incomplete() {
        let json = DETAILS.replace(
            r#""type": "MULTISIG""#,
            r#""type": "MODULE", "address": {"value": "0x1111111111111111111111111111111111111111"}"#,
        );
        let details: TransactionDetails = serde_json::from_str(&json).unwrap();
        assert!(matches!(details.detailed_execution_info, Some(ExecutionInfo::Module { .. })));
        assert_eq!(
            details.multisig_parts().unwrap_err(),
            Error::IncompleteTransaction("multisig execution info")
        );
    }

    #[test]
    fn test_missing_signature_is_incomplete() {
        let json = DETAILS.replace(
            r#""signature": "0x0000000000000000000000001111111111111111111111111111111111111111000000000000000000000000000000000000000000000000000000000000000001","#,
            r#""signature": null,"#,
        );
        let details: TransactionDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(
            details.multisig_parts().unwrap_err(),
            Error::IncompleteTransaction("confirmation signature")
        );
    }

    #[test]
    fn test_unknown_status_and_execution() {
        let json = DETAILS
            .replace("AWAITING_CONFIRMATIONS", "WILL_BE_REPLACED")
            .replace(r#""type": "MULTISIG""#, r#""type": "RELAYED""#);
        let details: TransactionDetails = serde_json::from_str(&json).unwrap();
        assert_eq!(details.tx_status, TransactionStatus::Unknown);
        assert_eq!(details.detailed_execution_info, Some(ExecutionInfo::Unknown));
    }
}
