//! Contract ABI definitions and per-version EIP-712 constants for Safe

use alloy::primitives::{address, b256, Address, B256};
use alloy::sol;

sol! {
    /// Owner management surface shared by every Safe version
    interface IOwnerManager {
        /// Adds an owner and updates the threshold
        function addOwnerWithThreshold(address owner, uint256 threshold) external;

        /// Removes `owner`, whose predecessor in the owner list is `prevOwner`
        function removeOwner(address prevOwner, address owner, uint256 threshold) external;

        /// Replaces `oldOwner`, whose predecessor is `prevOwner`, with `newOwner`
        function swapOwner(address prevOwner, address oldOwner, address newOwner) external;

        /// Changes the number of required confirmations
        function changeThreshold(uint256 threshold) external;

        /// Returns array of owners
        function getOwners() external view returns (address[] memory owners);

        /// Returns the threshold (number of required signatures)
        function getThreshold() external view returns (uint256 threshold);

        /// Returns the current nonce of the Safe
        function nonce() external view returns (uint256 nonce);
    }
}

/// Head of the owner linked list; the predecessor of the first owner
pub const SENTINEL_OWNERS: Address = address!("0000000000000000000000000000000000000001");

/// EIP-712 constants a Safe version hashes transactions with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingConstants {
    /// Type hash of the `EIP712Domain` struct
    pub domain_typehash: B256,
    /// Type hash of the `SafeTx` struct
    pub safe_tx_typehash: B256,
    /// Whether the domain separator commits to the chain id
    pub include_chain_id: bool,
}

/// keccak256("EIP712Domain(address verifyingContract)")
pub const DOMAIN_TYPEHASH_LEGACY: B256 =
    b256!("035aff83d86937d35b32e04f0ddc6ff469290eef2f1b692d8a815c89404d4749");

/// keccak256("EIP712Domain(uint256 chainId,address verifyingContract)")
pub const DOMAIN_TYPEHASH: B256 =
    b256!("47e79534a245952e8b16893a336b85a3d9ea9fa8c573f3d803afb92a79469218");

/// keccak256("SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 dataGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)")
pub const SAFE_TX_TYPEHASH_DATA_GAS: B256 =
    b256!("14d461bc7412367e924637b363c7bf29b8f47e2f84869f4426e5633d8af47b20");

/// keccak256("SafeTx(address to,uint256 value,bytes data,uint8 operation,uint256 safeTxGas,uint256 baseGas,uint256 gasPrice,address gasToken,address refundReceiver,uint256 nonce)")
pub const SAFE_TX_TYPEHASH: B256 =
    b256!("bb8310d486368db6bd6f849402fdd73ad53d316b5a4b2644ad6efe0f941286d8");

/// Safe 0.1.0: `dataGas` field name, no chain id
pub const HASHING_V0_1_0: HashingConstants = HashingConstants {
    domain_typehash: DOMAIN_TYPEHASH_LEGACY,
    safe_tx_typehash: SAFE_TX_TYPEHASH_DATA_GAS,
    include_chain_id: false,
};

/// Safe 1.0.0 up to 1.2.0: `baseGas`, no chain id
pub const HASHING_V1_0_0: HashingConstants = HashingConstants {
    domain_typehash: DOMAIN_TYPEHASH_LEGACY,
    safe_tx_typehash: SAFE_TX_TYPEHASH,
    include_chain_id: false,
};

/// Safe 1.3.0 onwards: the domain commits to the chain id
pub const HASHING_V1_3_0: HashingConstants = HashingConstants {
    domain_typehash: DOMAIN_TYPEHASH,
    safe_tx_typehash: SAFE_TX_TYPEHASH,
    include_chain_id: true,
};
