//! Proposed Safe transactions

use alloy::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

use super::Operation;

/// A Safe transaction as owners sign it
///
/// Values are immutable in practice: the `with_*` builders consume the
/// transaction and return a new one, so a hash computed for an earlier value
/// never silently applies to a modified one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SafeTransaction {
    /// Target address
    pub to: Address,
    /// Value to send
    pub value: U256,
    /// Calldata
    pub data: Bytes,
    /// Operation type
    pub operation: Operation,
    /// Gas limit for the Safe transaction
    pub safe_tx_gas: U256,
    /// Base gas (overhead)
    pub base_gas: U256,
    /// Gas price for refund calculation
    pub gas_price: U256,
    /// Token used for gas refund (address(0) for ETH)
    pub gas_token: Address,
    /// Address to receive gas refund
    pub refund_receiver: Address,
    /// Safe nonce
    pub nonce: U256,
}

impl SafeTransaction {
    /// Creates a transaction with zeroed gas/refund parameters and nonce
    pub fn new(to: Address, value: U256, data: impl Into<Bytes>, operation: Operation) -> Self {
        Self {
            to,
            value,
            data: data.into(),
            operation,
            safe_tx_gas: U256::ZERO,
            base_gas: U256::ZERO,
            gas_price: U256::ZERO,
            gas_token: Address::ZERO,
            refund_receiver: Address::ZERO,
            nonce: U256::ZERO,
        }
    }

    /// Sets the safe transaction gas
    pub fn with_safe_tx_gas(mut self, gas: U256) -> Self {
        self.safe_tx_gas = gas;
        self
    }

    /// Sets the base gas
    pub fn with_base_gas(mut self, gas: U256) -> Self {
        self.base_gas = gas;
        self
    }

    /// Sets the refund gas price and the token it is paid in
    pub fn with_gas_refund(mut self, gas_price: U256, gas_token: Address) -> Self {
        self.gas_price = gas_price;
        self.gas_token = gas_token;
        self
    }

    /// Sets the refund receiver
    pub fn with_refund_receiver(mut self, receiver: Address) -> Self {
        self.refund_receiver = receiver;
        self
    }

    /// Sets the nonce
    pub fn with_nonce(mut self, nonce: U256) -> Self {
        self.nonce = nonce;
        self
    }
}
