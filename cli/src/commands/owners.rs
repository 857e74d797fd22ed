use alloy::network::AnyNetwork;
use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use color_eyre::eyre::{eyre, Result};
use safe_multisig::chain::singleton_from_slot;
use safe_multisig::query::{
    decode_get_owners_response, decode_get_threshold_response, decode_nonce_response,
    get_owners_request, get_threshold_request, nonce_request, EthCallRequest,
};
use safe_multisig::{AccountSnapshot, ChainConfig, SafeVersion, SAFE_SINGLETON_SLOT};
use tracing::debug;

use crate::cli::OwnersArgs;
use crate::output::OwnersOutput;

/// On-chain owner configuration of a Safe
pub struct OwnerState {
    pub chain_id: u64,
    pub singleton: Address,
    pub version: Option<SafeVersion>,
    pub owners: Vec<Address>,
    pub threshold: u64,
    pub nonce: U256,
}

impl OwnerState {
    pub fn into_account(self, safe: Address) -> Result<AccountSnapshot> {
        let version = self
            .version
            .ok_or_else(|| eyre!("Unknown Safe singleton {}", self.singleton))?;
        Ok(AccountSnapshot::new(
            safe,
            self.chain_id,
            version,
            self.owners,
            self.threshold,
        )?)
    }
}

async fn eth_call<P: Provider<AnyNetwork>>(provider: &P, request: EthCallRequest) -> Result<String> {
    Ok(provider
        .raw_request::<_, String>("eth_call".into(), request.params())
        .await?)
}

pub async fn fetch_owner_state(rpc_url: &str, safe: Address) -> Result<OwnerState> {
    let provider = ProviderBuilder::new()
        .network::<AnyNetwork>()
        .connect_http(rpc_url.parse()?);

    let chain_id = provider.get_chain_id().await?;
    let singleton = singleton_from_slot(provider.get_storage_at(safe, SAFE_SINGLETON_SLOT).await?);
    let version = ChainConfig::new(chain_id).version_of(singleton);
    debug!(%safe, chain_id, %singleton, ?version, "resolved Safe singleton");

    let owners = decode_get_owners_response(&eth_call(&provider, get_owners_request(safe)).await?)?;
    let threshold =
        decode_get_threshold_response(&eth_call(&provider, get_threshold_request(safe)).await?)?;
    let nonce = decode_nonce_response(&eth_call(&provider, nonce_request(safe)).await?)?;

    Ok(OwnerState {
        chain_id,
        singleton,
        version,
        owners,
        threshold,
        nonce,
    })
}

pub async fn run(args: OwnersArgs, json: bool) -> Result<()> {
    let safe: Address = args.safe.parse()?;
    let state = fetch_owner_state(&args.rpc_url, safe).await?;

    let output = OwnersOutput {
        address: safe,
        chain_id: state.chain_id,
        version: state.version,
        singleton: state.singleton,
        nonce: state.nonce,
        threshold: state.threshold,
        owners: state.owners,
    };

    output.print(json);

    Ok(())
}
