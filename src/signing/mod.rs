//! Signature generation and decoding for Safe transactions

mod codec;
mod ecdsa;

pub use codec::{
    decode_signature, decode_signatures, encode_signatures, SignatureRecord, SignatureScheme,
    SIGNATURE_LENGTH,
};
pub use ecdsa::{
    encode_approved_hash_signature, encode_contract_signature, eth_sign_hash, sign_hash,
};
