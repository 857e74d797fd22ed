//! Human-oriented transaction summaries (`txInfo`)

use alloy::primitives::{Address, B256, U256};
use serde::{Deserialize, Serialize};

use super::AddressInfo;
use crate::encoding::decimal;

/// What a transaction does, as summarized by the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TransactionInfo {
    #[serde(rename_all = "camelCase")]
    Transfer {
        sender: AddressInfo,
        recipient: AddressInfo,
        #[serde(default)]
        direction: Option<String>,
        transfer_info: TransferInfo,
    },
    #[serde(rename_all = "camelCase")]
    SettingsChange {
        #[serde(default)]
        settings_info: Option<SettingsInfo>,
    },
    #[serde(rename_all = "camelCase")]
    Custom {
        to: AddressInfo,
        #[serde(with = "decimal")]
        value: U256,
        #[serde(default)]
        method_name: Option<String>,
        #[serde(default)]
        is_cancellation: bool,
    },
    #[serde(rename_all = "camelCase")]
    Creation {
        creator: AddressInfo,
        transaction_hash: B256,
        #[serde(default)]
        implementation: Option<AddressInfo>,
        #[serde(default)]
        factory: Option<AddressInfo>,
    },
    #[serde(other)]
    Unknown,
}

/// Asset moved by a transfer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransferInfo {
    #[serde(rename_all = "camelCase")]
    Erc20 {
        token_address: Address,
        #[serde(default)]
        token_symbol: Option<String>,
        #[serde(default)]
        decimals: Option<u8>,
        #[serde(with = "decimal")]
        value: U256,
    },
    #[serde(rename_all = "camelCase")]
    Erc721 {
        token_address: Address,
        #[serde(with = "decimal")]
        token_id: U256,
    },
    NativeCoin {
        #[serde(with = "decimal")]
        value: U256,
    },
    #[serde(other)]
    Unknown,
}

/// Owner or threshold change carried by a settings transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SettingsInfo {
    AddOwner { owner: AddressInfo, threshold: u64 },
    RemoveOwner { owner: AddressInfo, threshold: u64 },
    #[serde(rename_all = "camelCase")]
    SwapOwner {
        old_owner: AddressInfo,
        new_owner: AddressInfo,
    },
    ChangeThreshold { threshold: u64 },
    #[serde(other)]
    Unknown,
}
