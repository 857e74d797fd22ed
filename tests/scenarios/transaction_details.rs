//! Validation of transaction records in the client gateway shape

use alloy::primitives::B256;
use safe_multisig::encoding::encode_data;
use safe_multisig::{
    compute_safe_transaction_hash, validate_transaction_details, Confirmation, Error,
    SafeVersion, TransactionDetails, ValidationVerdict,
};
use serde_json::{json, Value};

use crate::common::{account, confirm, signers, RECIPIENT, SAFE};

fn details_json(safe_tx_hash: B256, nonce: u64, confirmations: &[Confirmation]) -> Value {
    let confirmations: Vec<Value> = confirmations
        .iter()
        .map(|c| {
            json!({
                "signer": {"value": c.signer},
                "signature": encode_data(&c.signature),
                "submittedAt": 1700000000000u64
            })
        })
        .collect();

    json!({
        "safeAddress": SAFE,
        "txId": format!("multisig_{SAFE}_{safe_tx_hash}"),
        "executedAt": null,
        "txStatus": "AWAITING_EXECUTION",
        "txInfo": {
            "type": "Transfer",
            "sender": {"value": SAFE},
            "recipient": {"value": RECIPIENT},
            "direction": "OUTGOING",
            "transferInfo": {"type": "NATIVE_COIN", "value": "1000000000000000000"}
        },
        "txData": {
            "hexData": null,
            "to": {"value": RECIPIENT},
            "value": "1000000000000000000",
            "operation": 0
        },
        "detailedExecutionInfo": {
            "type": "MULTISIG",
            "nonce": nonce,
            "safeTxGas": "0",
            "baseGas": "0",
            "gasPrice": "0",
            "gasToken": "0x0000000000000000000000000000000000000000",
            "refundReceiver": {"value": "0x0000000000000000000000000000000000000000"},
            "safeTxHash": safe_tx_hash,
            "signers": [],
            "confirmationsRequired": 2,
            "confirmations": confirmations
        },
        "txHash": null
    })
}

#[test]
fn test_gateway_record_validates() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_3_0, 1);
    let hash = compute_safe_transaction_hash(&account.domain(), &crate::common::transfer());

    let confirmations = [confirm(&signers.b, hash), confirm(&signers.c, hash)];
    let details: TransactionDetails =
        serde_json::from_value(details_json(hash, 5, &confirmations)).unwrap();

    let verdict = validate_transaction_details(&account, &details).unwrap();
    assert_eq!(verdict, ValidationVerdict::Valid);

    let multisig = details.multisig().unwrap();
    assert!(account.meets_threshold(multisig.confirmations.len()));
    assert_eq!(multisig.confirmations_required, account.threshold());
}

#[test]
fn test_gateway_record_with_wrong_nonce() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_3_0, 1);
    let hash = compute_safe_transaction_hash(&account.domain(), &crate::common::transfer());

    // hash and signatures are for nonce 5, the record claims nonce 6
    let confirmations = [confirm(&signers.a, hash)];
    let details: TransactionDetails =
        serde_json::from_value(details_json(hash, 6, &confirmations)).unwrap();

    let verdict = validate_transaction_details(&account, &details).unwrap();
    assert!(matches!(verdict.reason(), Some(Error::InvalidHash { claimed, .. }) if *claimed == hash));
}

#[test]
fn test_gateway_record_on_other_chain() {
    let signers = signers();
    let mainnet = account(&signers, SafeVersion::V1_3_0, 1);
    let gnosis = account(&signers, SafeVersion::V1_3_0, 100);
    let hash = compute_safe_transaction_hash(&mainnet.domain(), &crate::common::transfer());

    let confirmations = [confirm(&signers.a, hash), confirm(&signers.b, hash)];
    let details: TransactionDetails =
        serde_json::from_value(details_json(hash, 5, &confirmations)).unwrap();

    assert!(validate_transaction_details(&mainnet, &details).unwrap().is_valid());
    assert!(matches!(
        validate_transaction_details(&gnosis, &details).unwrap(),
        ValidationVerdict::Invalid(Error::InvalidHash { .. })
    ));
}

#[test]
fn test_gateway_record_without_multisig_info() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_3_0, 1);

    let mut value = details_json(B256::ZERO, 5, &[]);
    value["detailedExecutionInfo"] = Value::Null;
    let details: TransactionDetails = serde_json::from_value(value).unwrap();

    assert_eq!(
        validate_transaction_details(&account, &details),
        Err(Error::IncompleteTransaction("multisig execution info"))
    );
}
