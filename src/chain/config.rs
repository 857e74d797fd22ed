//! Chain configuration and the registry of known Safe singletons

use alloy::primitives::{address, Address, U256};

use crate::account::SafeDomain;
use crate::error::{Error, Result};
use crate::types::SafeVersion;

/// Safe proxy singleton storage slot (slot 0)
///
/// Proxies store the singleton (master copy) address in the first storage
/// slot, as the first declared variable of the proxy contract.
pub const SAFE_SINGLETON_SLOT: U256 = U256::ZERO;

/// A deployed Safe singleton and the version its bytecode implements
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingletonDeployment {
    pub address: Address,
    pub version: SafeVersion,
    /// Emits extra events for L2 indexing; hashing is unaffected
    pub l2: bool,
}

impl SingletonDeployment {
    const fn new(address: Address, version: SafeVersion, l2: bool) -> Self {
        Self {
            address,
            version,
            l2,
        }
    }
}

/// Canonical singleton deployments, identical on every chain they exist on
pub const CANONICAL_SINGLETONS: &[SingletonDeployment] = &[
    SingletonDeployment::new(
        address!("b6029EA3B2c51D09a50B53CA8012FeEB05bDa35A"),
        SafeVersion::V1_0_0,
        false,
    ),
    SingletonDeployment::new(
        address!("34CfAC646f301356fAa8B21e94227e3583Fe3F5F"),
        SafeVersion::V1_1_1,
        false,
    ),
    SingletonDeployment::new(
        address!("6851D6fDFAfD08c0295C392436245E5bc78B0185"),
        SafeVersion::V1_2_0,
        false,
    ),
    SingletonDeployment::new(
        address!("d9Db270c1B5E3Bd161E8c8503c55cEABeE709552"),
        SafeVersion::V1_3_0,
        false,
    ),
    SingletonDeployment::new(
        address!("3E5c63644E683549055b9Be8653de26E0B4CD36E"),
        SafeVersion::V1_3_0,
        true,
    ),
    SingletonDeployment::new(
        address!("41675C099F32341bf84BFc5382aF534df5C7461a"),
        SafeVersion::V1_4_1,
        false,
    ),
    SingletonDeployment::new(
        address!("29fcB43b46531BcA003ddC8FCB67FFE91900C762"),
        SafeVersion::V1_4_1,
        true,
    ),
];

/// Extracts the singleton address from the value of [`SAFE_SINGLETON_SLOT`]
pub fn singleton_from_slot(value: U256) -> Address {
    Address::from_slice(&value.to_be_bytes::<32>()[12..])
}

/// Chain configuration including the chain ID and known singletons
#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Chain ID
    pub chain_id: u64,
    /// Singletons whose version can be inferred from their address
    pub singletons: Vec<SingletonDeployment>,
}

impl ChainConfig {
    /// Creates a chain configuration with the canonical singletons
    pub fn new(chain_id: u64) -> Self {
        Self {
            chain_id,
            singletons: CANONICAL_SINGLETONS.to_vec(),
        }
    }

    /// Registers a non-canonical singleton deployment
    pub fn with_singleton(mut self, address: Address, version: SafeVersion, l2: bool) -> Self {
        self.singletons.push(SingletonDeployment::new(address, version, l2));
        self
    }

    /// Returns configuration for Ethereum mainnet
    pub fn mainnet() -> Self {
        Self::new(chain_ids::MAINNET)
    }

    /// Returns configuration for Sepolia testnet
    pub fn sepolia() -> Self {
        Self::new(chain_ids::SEPOLIA)
    }

    /// Returns configuration for Gnosis Chain
    pub fn gnosis() -> Self {
        Self::new(chain_ids::GNOSIS)
    }

    /// Looks up the version implemented by `singleton`
    pub fn version_of(&self, singleton: Address) -> Option<SafeVersion> {
        self.singletons
            .iter()
            .find(|deployment| deployment.address == singleton)
            .map(|deployment| deployment.version)
    }

    /// Builds the hashing domain of the Safe at `safe` backed by `singleton`
    pub fn domain(&self, safe: Address, singleton: Address) -> Result<SafeDomain> {
        let version = self
            .version_of(singleton)
            .ok_or_else(|| Error::UnsupportedVersion(format!("unknown singleton {singleton}")))?;
        Ok(SafeDomain::new(safe, self.chain_id, version))
    }
}

/// Well-known chain IDs
pub mod chain_ids {
    pub const MAINNET: u64 = 1;
    pub const GOERLI: u64 = 5;
    pub const OPTIMISM: u64 = 10;
    pub const GNOSIS: u64 = 100;
    pub const POLYGON: u64 = 137;
    pub const BASE: u64 = 8453;
    pub const ARBITRUM: u64 = 42161;
    pub const SEPOLIA: u64 = 11155111;
}
