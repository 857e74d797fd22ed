//! Outgoing transactions and transaction-service payloads

mod owners;
mod payload;

pub use owners::OwnerManagement;
pub use payload::{ConfirmTransactionRequest, ProposeTransactionRequest};
