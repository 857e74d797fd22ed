//! eth_call requests for reading a Safe's owner configuration
//!
//! Nothing here performs I/O. Requests are rendered as JSON-RPC `params`
//! and responses are decoded from the `result` text a node returns.

use alloy::primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::encoding::abi::{encode_get_owners, encode_get_threshold, encode_nonce};
use crate::encoding::{decode_address_array, decode_data, decode_uint, scalar};
use crate::error::{Error, Result};

/// Block tag every owner query is evaluated at
pub const LATEST_BLOCK: &str = "latest";

/// Call object of an `eth_call` request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EthCallRequest {
    pub to: Address,
    #[serde(with = "scalar::data")]
    pub data: Bytes,
}

impl EthCallRequest {
    pub fn new(to: Address, data: Bytes) -> Self {
        Self { to, data }
    }

    /// JSON-RPC params: `[{to, data}, "latest"]`
    pub fn params(&self) -> Value {
        json!([self, LATEST_BLOCK])
    }
}

/// Builds the `getOwners()` call for `safe`
pub fn get_owners_request(safe: Address) -> EthCallRequest {
    EthCallRequest::new(safe, encode_get_owners())
}

/// Decodes the `result` of a `getOwners()` call into owner addresses
pub fn decode_get_owners_response(result: &str) -> Result<Vec<Address>> {
    let data = decode_data(result)?;
    decode_address_array(&data)
}

/// Builds the `getThreshold()` call for `safe`
pub fn get_threshold_request(safe: Address) -> EthCallRequest {
    EthCallRequest::new(safe, encode_get_threshold())
}

/// Decodes the `result` of a `getThreshold()` call
pub fn decode_get_threshold_response(result: &str) -> Result<u64> {
    let value = decode_uint(&decode_data(result)?)?;
    u64::try_from(value).map_err(|_| {
        Error::InvalidAccount(format!("threshold {value} does not fit in 64 bits"))
    })
}

/// Builds the `nonce()` call for `safe`
pub fn nonce_request(safe: Address) -> EthCallRequest {
    EthCallRequest::new(safe, encode_nonce())
}

/// Decodes the `result` of a `nonce()` call
pub fn decode_nonce_response(result: &str) -> Result<U256> {
    decode_uint(&decode_data(result)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;

    const SAFE: Address = address!("fb1bffc9d739b8d520daf37df666da4c687191ea");

    fn word(hex_digits: &str) -> String {
        format!("{hex_digits:0>64}")
    }

    #[test]
    fn test_get_owners_request_params() {
        let request = get_owners_request(SAFE);
        assert_eq!(request.data.to_vec(), vec![0xa0, 0xe6, 0x7e, 0x2b]);
        assert_eq!(
            request.params(),
            json!([
                {
                    "to": "0xfb1bffc9d739b8d520daf37df666da4c687191ea",
                    "data": "0xa0e67e2b"
                },
                "latest"
            ])
        );
    }

    #[test]
    fn test_decode_get_owners_response() {
        let result = format!(
            "0x{}{}{}{}",
            word("20"),
            word("2"),
            word("1111111111111111111111111111111111111111"),
            word("2222222222222222222222222222222222222222"),
        );

        let owners = decode_get_owners_response(&result).unwrap();
        assert_eq!(
            owners,
            vec![
                address!("1111111111111111111111111111111111111111"),
                address!("2222222222222222222222222222222222222222"),
            ]
        );
    }

    #[test]
    fn test_decode_get_owners_response_errors() {
        assert!(matches!(
            decode_get_owners_response("0xABCD"),
            Err(Error::MalformedData { .. })
        ));

        let truncated = format!("0x{}{}", word("20"), word("1"));
        assert_eq!(
            decode_get_owners_response(&truncated),
            Err(Error::AbiDecode {
                needed: 96,
                available: 64
            })
        );
    }

    #[test]
    fn test_threshold_and_nonce() {
        assert_eq!(get_threshold_request(SAFE).data.to_vec(), vec![0xe7, 0x52, 0x35, 0xb8]);
        assert_eq!(nonce_request(SAFE).data.to_vec(), vec![0xaf, 0xfe, 0xd0, 0xe0]);

        let result = format!("0x{}", word("2"));
        assert_eq!(decode_get_threshold_response(&result).unwrap(), 2);
        assert_eq!(decode_nonce_response(&result).unwrap(), U256::from(2));

        let huge = format!("0x{}", "f".repeat(64));
        assert!(matches!(
            decode_get_threshold_response(&huge),
            Err(Error::InvalidAccount(_))
        ));
        assert!(matches!(decode_nonce_response("0x"), Err(Error::AbiDecode { .. })));
    }

    #[test]
    fn test_request_json_roundtrip() {
        let request = nonce_request(SAFE);
        let json = serde_json::to_string(&request).unwrap();
        let parsed: EthCallRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, request);
    }
}
