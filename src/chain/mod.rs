//! Chain configuration

mod config;

pub use config::{
    chain_ids, singleton_from_slot, ChainConfig, SingletonDeployment, CANONICAL_SINGLETONS,
    SAFE_SINGLETON_SLOT,
};
