use std::io::Read;
use std::path::Path;

use alloy::primitives::Address;
use color_eyre::eyre::{eyre, Result};
use safe_multisig::{validate_transaction_details, AccountSnapshot, TransactionDetails};

use super::owners::fetch_owner_state;
use crate::cli::VerifyArgs;
use crate::output::VerifyOutput;

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut input = String::new();
        std::io::stdin().read_to_string(&mut input)?;
        Ok(input)
    } else {
        Ok(std::fs::read_to_string(path)?)
    }
}

pub async fn run(args: VerifyArgs, json: bool) -> Result<()> {
    let details: TransactionDetails = serde_json::from_str(&read_input(&args.details)?)?;

    let account: AccountSnapshot = match (&args.account, &args.rpc_url) {
        (Some(path), _) => serde_json::from_str(&read_input(path)?)?,
        (None, Some(rpc_url)) => {
            let safe: Address = match (&args.safe, details.safe_address) {
                (Some(safe), _) => safe.parse()?,
                (None, Some(safe)) => safe,
                (None, None) => return Err(eyre!("No Safe address. Use --safe")),
            };
            fetch_owner_state(rpc_url, safe).await?.into_account(safe)?
        }
        (None, None) => return Err(eyre!("No account snapshot. Use --account or --rpc-url")),
    };

    let verdict = validate_transaction_details(&account, &details)?;
    let (_, safe_tx_hash, confirmations) = details.multisig_parts()?;

    let output = VerifyOutput {
        safe: account.address(),
        safe_tx_hash,
        valid: verdict.is_valid(),
        reason: verdict.reason().map(ToString::to_string),
        confirmations: confirmations.len(),
        threshold: account.threshold(),
        executable: verdict.is_valid() && account.meets_threshold(confirmations.len()),
    };

    output.print(json);

    Ok(())
}
