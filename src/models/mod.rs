//! Wire models of the Safe client gateway
//!
//! Tagged unions are closed enums; tags this crate does not know about
//! deserialize to an explicit `Unknown` variant instead of failing.

mod details;
mod info;

use alloy::primitives::Address;
use serde::{Deserialize, Serialize};

pub use details::{
    ExecutionInfo, MultisigConfirmation, MultisigExecutionDetails, TransactionData,
    TransactionDetails, TransactionStatus,
};
pub use info::{SettingsInfo, TransactionInfo, TransferInfo};

/// An address with the display metadata the gateway attaches to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressInfo {
    pub value: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo_uri: Option<String>,
}

impl From<Address> for AddressInfo {
    fn from(value: Address) -> Self {
        Self {
            value,
            name: None,
            logo_uri: None,
        }
    }
}
