use alloy::primitives::{Address, Bytes};
use color_eyre::eyre::Result;
use safe_multisig::encoding::{compute_domain_separator, compute_struct_hash, compute_transaction_hash};
use safe_multisig::{Operation, SafeDomain, SafeTransaction, SafeVersion};
use tracing::debug;

use super::parse_u256;
use crate::cli::HashArgs;
use crate::output::HashOutput;

pub async fn run(args: HashArgs, json: bool) -> Result<()> {
    let safe: Address = args.safe.parse()?;
    let version: SafeVersion = args.version.parse()?;
    let domain = SafeDomain::new(safe, args.chain_id, version);

    let tx = build_transaction(&args)?;
    debug!(?tx, %version, "hashing transaction");

    let domain_separator = compute_domain_separator(&domain);
    let struct_hash = compute_struct_hash(version, &tx);

    let output = HashOutput {
        safe,
        chain_id: args.chain_id,
        version,
        domain_separator,
        struct_hash,
        safe_tx_hash: compute_transaction_hash(domain_separator, struct_hash),
    };

    output.print(json);

    Ok(())
}

fn build_transaction(args: &HashArgs) -> Result<SafeTransaction> {
    let to: Address = args.to.parse()?;
    let data: Bytes = args.data.parse()?;
    let operation = Operation::from(args.delegate_call);

    let gas_token = match &args.gas_token {
        Some(token) => token.parse()?,
        None => Address::ZERO,
    };
    let refund_receiver = match &args.refund_receiver {
        Some(receiver) => receiver.parse()?,
        None => Address::ZERO,
    };

    Ok(SafeTransaction::new(to, parse_u256("value", &args.value)?, data, operation)
        .with_safe_tx_gas(parse_u256("safe-tx-gas", &args.safe_tx_gas)?)
        .with_base_gas(parse_u256("base-gas", &args.base_gas)?)
        .with_gas_refund(parse_u256("gas-price", &args.gas_price)?, gas_token)
        .with_refund_receiver(refund_receiver)
        .with_nonce(parse_u256("nonce", &args.nonce)?))
}
