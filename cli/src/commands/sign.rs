use alloy::primitives::B256;
use color_eyre::eyre::Result;
use safe_multisig::signing::eth_sign_hash;
use safe_multisig::ConfirmTransactionRequest;

use crate::cli::SignArgs;
use crate::output::{confirm_prompt, SignOutput};
use crate::wallet::create_signer;

pub async fn run(args: SignArgs, json: bool) -> Result<()> {
    let safe_tx_hash: B256 = args.hash.parse()?;
    let signer = create_signer(&args.wallet)?;

    if !args.no_confirm && !json {
        println!("Signer: {}", signer.address());
        if !confirm_prompt(&format!("Sign {}?", safe_tx_hash)) {
            println!("Aborted");
            return Ok(());
        }
    }

    let signed_safe_tx_hash = if args.eth_sign {
        eth_sign_hash(&signer, safe_tx_hash).await?
    } else {
        ConfirmTransactionRequest::sign(safe_tx_hash, &signer)
            .await?
            .signed_safe_tx_hash
    };

    let output = SignOutput {
        signer: signer.address(),
        safe_tx_hash,
        signed_safe_tx_hash,
    };

    output.print(json);

    Ok(())
}
