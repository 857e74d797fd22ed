//! Validation of confirmations against an owner snapshot

use alloy::primitives::{b256, U256};
use safe_multisig::signing::{eth_sign_hash, SignatureRecord};
use safe_multisig::{
    compute_safe_transaction_hash, decode_signatures, encode_signatures, validate_transaction,
    Confirmation, Error, SafeVersion, SignatureScheme, ValidationVerdict,
};

use crate::common::{account, confirm, flip_last_digit, signers, transfer};

#[test]
fn test_two_owner_confirmations_are_valid() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_3_0, 1);
    let tx = transfer();
    let hash = compute_safe_transaction_hash(&account.domain(), &tx);

    let confirmations = vec![confirm(&signers.a, hash), confirm(&signers.b, hash)];
    let verdict = validate_transaction(&account, &tx, hash, &confirmations);

    assert_eq!(verdict, ValidationVerdict::Valid);
    assert!(account.meets_threshold(confirmations.len()));
}

#[test]
fn test_outsider_confirmation_is_rejected() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_3_0, 1);
    let tx = transfer();
    let hash = compute_safe_transaction_hash(&account.domain(), &tx);

    let confirmations = vec![confirm(&signers.a, hash), confirm(&signers.d, hash)];

    assert_eq!(
        validate_transaction(&account, &tx, hash, &confirmations),
        ValidationVerdict::Invalid(Error::ConfirmationsNotFromOwners {
            signer: signers.d.address()
        })
    );
}

#[test]
fn test_flipped_hash_digit_is_rejected() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_3_0, 1);
    let tx = transfer();
    let hash = compute_safe_transaction_hash(&account.domain(), &tx);
    let confirmations = vec![confirm(&signers.a, hash), confirm(&signers.b, hash)];

    let tampered = flip_last_digit(hash);
    assert_ne!(tampered, hash);

    let verdict = validate_transaction(&account, &tx, tampered, &confirmations);
    assert_eq!(
        verdict.into_result(),
        Err(Error::InvalidHash {
            claimed: tampered,
            computed: hash
        })
    );
}

#[test]
fn test_no_confirmations() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_3_0, 1);
    let tx = transfer();
    let hash = compute_safe_transaction_hash(&account.domain(), &tx);

    assert_eq!(
        validate_transaction(&account, &tx, hash, &[]),
        ValidationVerdict::Invalid(Error::NoConfirmations)
    );
}

#[test]
fn test_signature_attributed_to_wrong_owner() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_3_0, 1);
    let tx = transfer();
    let hash = compute_safe_transaction_hash(&account.domain(), &tx);

    let signed_by_c = confirm(&signers.c, hash);
    let misattributed = Confirmation::new(signers.b.address(), signed_by_c.signature);

    assert_eq!(
        validate_transaction(&account, &tx, hash, &[confirm(&signers.a, hash), misattributed]),
        ValidationVerdict::Invalid(Error::SignerSignatureMismatch {
            signer: signers.b.address()
        })
    );
}

#[test]
fn test_confirmations_do_not_carry_over_to_modified_transaction() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_3_0, 1);
    let tx = transfer();
    let hash = compute_safe_transaction_hash(&account.domain(), &tx);
    let confirmations = vec![confirm(&signers.a, hash), confirm(&signers.b, hash)];

    let bumped = tx.clone().with_nonce(U256::from(6));
    let bumped_hash = compute_safe_transaction_hash(&account.domain(), &bumped);

    assert!(matches!(
        validate_transaction(&account, &bumped, hash, &confirmations),
        ValidationVerdict::Invalid(Error::InvalidHash { .. })
    ));
    assert!(matches!(
        validate_transaction(&account, &bumped, bumped_hash, &confirmations),
        ValidationVerdict::Invalid(Error::SignerSignatureMismatch { .. })
    ));
}

#[test]
fn test_known_hashes_per_version() {
    let signers = signers();
    let tx = transfer();

    let cases = [
        (
            SafeVersion::V1_3_0,
            1,
            b256!("c2a8bbeb9fb933f45fcf4618b9f54191540e39e93f160a7531eb0da330546c6d"),
        ),
        (
            SafeVersion::V1_4_1,
            100,
            b256!("2e2970a5926cf817cd1d6cd9cb869d524fb08664f63b027af7d2f1437bb3e248"),
        ),
        (
            SafeVersion::V1_1_1,
            1,
            b256!("683d82145613615a9b736278248ca9a656f358ee82b3217d5973d38b78415731"),
        ),
        (
            SafeVersion::V1_0_0,
            137,
            b256!("683d82145613615a9b736278248ca9a656f358ee82b3217d5973d38b78415731"),
        ),
        (
            SafeVersion::V0_1_0,
            1,
            b256!("c4fbf5a720980fce799520cb0693883f0852ce534653481297b83aa1424325ab"),
        ),
    ];

    for (version, chain_id, expected) in cases {
        let account = account(&signers, version, chain_id);
        let hash = compute_safe_transaction_hash(&account.domain(), &tx);
        assert_eq!(hash, expected, "v{version} on chain {chain_id}");

        let confirmations = vec![confirm(&signers.a, hash), confirm(&signers.c, hash)];
        assert!(validate_transaction(&account, &tx, expected, &confirmations).is_valid());
    }
}

#[tokio::test]
async fn test_mixed_signature_schemes() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_3_0, 1);
    let tx = transfer();
    let hash = compute_safe_transaction_hash(&account.domain(), &tx);

    let eth_signed = Confirmation::new(
        signers.b.address(),
        eth_sign_hash(&signers.b, hash).await.unwrap(),
    );
    let approved = Confirmation::new(
        signers.c.address(),
        SignatureRecord::approved_hash(signers.c.address()).raw,
    );

    let confirmations = vec![confirm(&signers.a, hash), eth_signed, approved];
    assert!(validate_transaction(&account, &tx, hash, &confirmations).is_valid());
}

#[test]
fn test_signature_blob_assembly() {
    let signers = signers();
    let account = account(&signers, SafeVersion::V1_3_0, 1);
    let hash = compute_safe_transaction_hash(&account.domain(), &transfer());

    let records: Vec<SignatureRecord> = [&signers.c, &signers.a]
        .into_iter()
        .map(|signer| {
            let confirmation = confirm(signer, hash);
            decode_signatures(hash, &confirmation.signature, 1).unwrap().remove(0)
        })
        .collect();

    let blob = encode_signatures(&records);
    let decoded = decode_signatures(hash, &blob, 2).unwrap();

    // owners sorted ascending, as the contract requires
    assert!(decoded[0].signer < decoded[1].signer);
    assert!(decoded.iter().all(|r| r.scheme == SignatureScheme::EcdsaStandard));
    assert_eq!(
        decode_signatures(hash, &blob, 3),
        Err(Error::TruncatedSignatureBlob {
            index: 2,
            needed: 65,
            available: 0
        })
    );
}
