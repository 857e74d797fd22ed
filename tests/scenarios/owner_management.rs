//! Owner changes proposed, confirmed and validated end to end

use alloy::primitives::U256;
use safe_multisig::query::{decode_get_owners_response, get_owners_request};
use safe_multisig::{
    validate_transaction, AccountSnapshot, Confirmation, OwnerChange, OwnerManagement,
    ProposeTransactionRequest, SafeVersion, ConfirmTransactionRequest, SENTINEL_OWNERS,
};

use crate::common::{account, signers, SAFE};

#[tokio::test]
async fn test_swap_owner_proposal_reaches_threshold() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_4_1, 11155111);

    let tx = OwnerManagement::new(&account)
        .swap_owner(signers.c.address(), signers.d.address())
        .unwrap()
        .with_nonce(U256::from(12));
    assert_eq!(tx.to, SAFE);
    assert_eq!(
        OwnerChange::decode(&tx.data),
        Some(OwnerChange::SwapOwner {
            prev_owner: signers.b.address(),
            old_owner: signers.c.address(),
            new_owner: signers.d.address(),
        })
    );

    let proposal = ProposeTransactionRequest::sign(&account.domain(), &tx, &signers.a)
        .await
        .unwrap();
    let confirmation = ConfirmTransactionRequest::sign(proposal.safe_tx_hash, &signers.b)
        .await
        .unwrap();

    let confirmations = vec![
        Confirmation::new(proposal.sender, proposal.signature.clone()),
        Confirmation::new(signers.b.address(), confirmation.signed_safe_tx_hash),
    ];
    let verdict = validate_transaction(&account, &tx, proposal.safe_tx_hash, &confirmations);
    assert!(verdict.is_valid());
    assert!(account.meets_threshold(confirmations.len()));
}

#[tokio::test]
async fn test_outgoing_owner_cannot_confirm_after_swap() {
    let signers = signers();
    let before = account(&signers, SafeVersion::V1_3_0, 1);
    let after = AccountSnapshot::new(
        SAFE,
        1,
        SafeVersion::V1_3_0,
        vec![signers.a.address(), signers.b.address(), signers.d.address()],
        2,
    )
    .unwrap();

    let tx = OwnerManagement::new(&after)
        .change_threshold(3)
        .unwrap()
        .with_nonce(U256::from(13));
    let hash = safe_multisig::compute_safe_transaction_hash(&after.domain(), &tx);
    let confirmations = vec![
        crate::common::confirm(&signers.a, hash),
        crate::common::confirm(&signers.c, hash),
    ];

    assert!(validate_transaction(&before, &tx, hash, &confirmations).is_valid());
    assert!(!validate_transaction(&after, &tx, hash, &confirmations).is_valid());
}

#[test]
fn test_owner_list_from_eth_call() {
    let signers = signers();
    let request = get_owners_request(SAFE);
    assert_eq!(request.params()[1], "latest");

    let owners = [signers.a.address(), signers.b.address(), signers.c.address()];
    let mut result = format!("0x{:064x}{:064x}", 32, owners.len());
    for owner in owners {
        result.push_str(&format!("{:0>64}", alloy::hex::encode(owner)));
    }

    let decoded = decode_get_owners_response(&result).unwrap();
    let account = AccountSnapshot::new(SAFE, 1, SafeVersion::V1_3_0, decoded, 2).unwrap();
    assert_eq!(account.prev_owner(signers.a.address()), Some(SENTINEL_OWNERS));
    assert_eq!(account.owners(), &owners);
}
