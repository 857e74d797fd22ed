use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "safe")]
#[command(about = "Offline hashing, encoding and signature checks for Safe transactions", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute the safeTxHash of a transaction
    Hash(HashArgs),

    /// Print call data for an owner-management call
    Encode(EncodeArgs),

    /// Decode a signature blob against a transaction hash
    Signatures(SignaturesArgs),

    /// Validate the confirmations of a transaction record
    Verify(VerifyArgs),

    /// Display Safe owners, threshold and nonce
    Owners(OwnersArgs),

    /// Sign a safeTxHash and print the confirmation payload
    Sign(SignArgs),
}

#[derive(Parser, Clone)]
pub struct HashArgs {
    /// Target address
    #[arg(value_name = "TO")]
    pub to: String,

    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// Chain ID
    #[arg(long, default_value = "1")]
    pub chain_id: u64,

    /// Safe contract version (e.g. "1.3.0", "1.1.1")
    #[arg(long = "safe-version", default_value = "1.3.0")]
    pub version: String,

    /// Value in wei (decimal or 0x)
    #[arg(long, default_value = "0")]
    pub value: String,

    /// Call data
    #[arg(long, default_value = "0x")]
    pub data: String,

    /// Use DELEGATECALL instead of CALL
    #[arg(long)]
    pub delegate_call: bool,

    #[arg(long, default_value = "0")]
    pub safe_tx_gas: String,

    #[arg(long, default_value = "0")]
    pub base_gas: String,

    #[arg(long, default_value = "0")]
    pub gas_price: String,

    /// Refund token (zero address for ETH)
    #[arg(long)]
    pub gas_token: Option<String>,

    #[arg(long)]
    pub refund_receiver: Option<String>,

    /// Safe nonce
    #[arg(long, default_value = "0")]
    pub nonce: String,
}

#[derive(Parser, Clone)]
pub struct EncodeArgs {
    #[command(subcommand)]
    pub change: OwnerChangeCommand,

    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// Current owner, in on-chain order (repeatable)
    #[arg(long = "owner", value_name = "ADDR", global = true)]
    pub owners: Vec<String>,

    /// Current threshold
    #[arg(long = "current-threshold", default_value = "1", global = true)]
    pub current_threshold: u64,
}

#[derive(Subcommand, Clone)]
pub enum OwnerChangeCommand {
    /// addOwnerWithThreshold(owner, threshold)
    AddOwner {
        #[arg(value_name = "OWNER")]
        owner: String,
        #[arg(long)]
        threshold: u64,
    },

    /// removeOwner(prevOwner, owner, threshold)
    RemoveOwner {
        #[arg(value_name = "OWNER")]
        owner: String,
        #[arg(long)]
        threshold: u64,
    },

    /// swapOwner(prevOwner, oldOwner, newOwner)
    SwapOwner {
        #[arg(value_name = "OLD")]
        old_owner: String,
        #[arg(value_name = "NEW")]
        new_owner: String,
    },

    /// changeThreshold(threshold)
    ChangeThreshold {
        #[arg(value_name = "THRESHOLD")]
        threshold: u64,
    },
}

#[derive(Parser, Clone)]
pub struct SignaturesArgs {
    /// Transaction hash the signatures were made over
    #[arg(value_name = "HASH")]
    pub hash: String,

    /// Signature blob
    #[arg(value_name = "SIGNATURES")]
    pub signatures: String,

    /// Number of signatures (default: every full 65-byte chunk)
    #[arg(long)]
    pub count: Option<usize>,
}

#[derive(Parser, Clone)]
pub struct VerifyArgs {
    /// Transaction details JSON from the client gateway ("-" for stdin)
    #[arg(value_name = "DETAILS")]
    pub details: PathBuf,

    /// Account snapshot JSON; fetched over RPC when absent
    #[arg(long)]
    pub account: Option<PathBuf>,

    /// Safe contract address (defaults to the record's safeAddress)
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: Option<String>,

    /// RPC endpoint URL
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: Option<String>,
}

#[derive(Parser, Clone)]
pub struct OwnersArgs {
    /// Safe contract address
    #[arg(long, env = "SAFE_ADDRESS")]
    pub safe: String,

    /// RPC endpoint URL
    #[arg(long, env = "ETH_RPC_URL")]
    pub rpc_url: String,
}

#[derive(Parser, Clone)]
pub struct SignArgs {
    /// safeTxHash to confirm
    #[arg(value_name = "HASH")]
    pub hash: String,

    /// Produce an eth_sign signature (v 31/32) instead of a raw hash signature
    #[arg(long)]
    pub eth_sign: bool,

    /// Skip confirmation prompt
    #[arg(long)]
    pub no_confirm: bool,

    #[command(flatten)]
    pub wallet: WalletArgs,
}

#[derive(Parser, Clone)]
pub struct WalletArgs {
    /// Raw private key
    #[arg(long, env = "PRIVATE_KEY")]
    pub private_key: Option<String>,

    /// Prompt for private key interactively
    #[arg(short, long)]
    pub interactive: bool,
}
