//! Common fixtures for scenario tests

use alloy::hex;
use alloy::primitives::{address, Address, B256, U256};
use alloy::signers::local::PrivateKeySigner;
use alloy::signers::SignerSync;
use safe_multisig::{AccountSnapshot, Confirmation, Operation, SafeTransaction, SafeVersion};

pub const SAFE: Address = address!("fb1bffc9d739b8d520daf37df666da4c687191ea");
pub const RECIPIENT: Address = address!("5afe3855358e112b5647b952709e6165e1c1eeee");

/// Well-known development keys
const KEYS: [&str; 4] = [
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80",
    "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d",
    "5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fbf82f4cfe6a4c7",
    "7c852118294e51e653712a81e05800f419141751be58f605c371e15141b007a6",
];

/// Owners A, B, C and the outsider D
pub struct Signers {
    pub a: PrivateKeySigner,
    pub b: PrivateKeySigner,
    pub c: PrivateKeySigner,
    pub d: PrivateKeySigner,
}

pub fn signers() -> Signers {
    let [a, b, c, d] = KEYS.map(|key| key.parse::<PrivateKeySigner>().unwrap());
    Signers { a, b, c, d }
}

/// A Safe owned by {A, B, C} with threshold 2
pub fn account(signers: &Signers, version: SafeVersion, chain_id: u64) -> AccountSnapshot {
    AccountSnapshot::new(
        SAFE,
        chain_id,
        version,
        vec![signers.a.address(), signers.b.address(), signers.c.address()],
        2,
    )
    .unwrap()
}

/// 1 ether to [`RECIPIENT`] at nonce 5
pub fn transfer() -> SafeTransaction {
    SafeTransaction::new(
        RECIPIENT,
        U256::from(10).pow(U256::from(18)),
        vec![],
        Operation::Call,
    )
    .with_nonce(U256::from(5))
}

pub fn confirm(signer: &PrivateKeySigner, hash: B256) -> Confirmation {
    let signature = signer.sign_hash_sync(&hash).unwrap();
    Confirmation::new(signer.address(), signature.as_bytes().to_vec())
}

/// The hash with its last hex digit changed
pub fn flip_last_digit(hash: B256) -> B256 {
    let mut text = hex::encode_prefixed(hash);
    let last = text.pop();
    text.push(if last == Some('0') { '1' } else { '0' });
    text.parse().unwrap()
}
