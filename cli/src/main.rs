// CLI-specific lint overrides
#![allow(clippy::print_stdout, reason = "CLI tools print to stdout")]
#![allow(clippy::print_stderr, reason = "CLI tools print to stderr")]
#![allow(clippy::unwrap_used, reason = "CLI can unwrap for user-facing errors")]
#![allow(clippy::expect_used, reason = "CLI can expect for user-facing errors")]

mod cli;
mod commands;
mod output;
mod wallet;

use clap::Parser;
use cli::{Cli, Commands};
use color_eyre::eyre::Result;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    // Logs go to stderr so --json output stays parseable
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Hash(args) => commands::hash::run(args, cli.json).await,
        Commands::Encode(args) => commands::encode::run(args, cli.json).await,
        Commands::Signatures(args) => commands::signatures::run(args, cli.json).await,
        Commands::Verify(args) => commands::verify::run(args, cli.json).await,
        Commands::Owners(args) => commands::owners::run(args, cli.json).await,
        Commands::Sign(args) => commands::sign::run(args, cli.json).await,
    }
}
