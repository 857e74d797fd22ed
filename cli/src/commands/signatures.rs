use alloy::primitives::{Bytes, B256};
use color_eyre::eyre::{eyre, Result};
use safe_multisig::signing::SIGNATURE_LENGTH;
use safe_multisig::decode_signatures;

use crate::cli::SignaturesArgs;
use crate::output::SignaturesOutput;

pub async fn run(args: SignaturesArgs, json: bool) -> Result<()> {
    let hash: B256 = args.hash.parse()?;
    let blob: Bytes = args.signatures.parse()?;
    let count = args.count.unwrap_or(blob.len() / SIGNATURE_LENGTH);

    if count == 0 {
        return Err(eyre!("No signatures in blob"));
    }

    let output = SignaturesOutput {
        hash,
        signatures: decode_signatures(hash, &blob, count)?,
    };

    output.print(json);

    Ok(())
}
