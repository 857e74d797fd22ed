use alloy::primitives::Address;
use color_eyre::eyre::{eyre, Result};
use safe_multisig::{AccountSnapshot, OwnerChange, OwnerManagement, SafeVersion};

use crate::cli::{EncodeArgs, OwnerChangeCommand};
use crate::output::EncodeOutput;

pub async fn run(args: EncodeArgs, json: bool) -> Result<()> {
    let safe: Address = args.safe.parse()?;
    let owners = args
        .owners
        .iter()
        .map(|owner| owner.parse::<Address>())
        .collect::<Result<Vec<_>, _>>()?;

    // Chain id and version do not affect call data
    let account = AccountSnapshot::new(safe, 1, SafeVersion::V1_3_0, owners, args.current_threshold)?;
    let management = OwnerManagement::new(&account);

    let tx = match &args.change {
        OwnerChangeCommand::AddOwner { owner, threshold } => {
            management.add_owner_with_threshold(owner.parse()?, *threshold)?
        }
        OwnerChangeCommand::RemoveOwner { owner, threshold } => {
            management.remove_owner(owner.parse()?, *threshold)?
        }
        OwnerChangeCommand::SwapOwner {
            old_owner,
            new_owner,
        } => management.swap_owner(old_owner.parse()?, new_owner.parse()?)?,
        OwnerChangeCommand::ChangeThreshold { threshold } => {
            management.change_threshold(*threshold)?
        }
    };

    let call = OwnerChange::decode(&tx.data).ok_or_else(|| eyre!("Encoded call does not decode"))?;

    let output = EncodeOutput {
        to: tx.to,
        signature: call.signature(),
        call,
        data: tx.data,
    };

    output.print(json);

    Ok(())
}
