//! Charybdis CLI
//!
//! Known-answer checks, test-vector output and single-block operations.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use commands::{backend, block_op, print_subkeys, print_vectors, selftest, BlockOp};
use tracing_subscriber::EnvFilter;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "charybdis")]
#[command(about = "512-bit ARX block cipher with an AVX2 batch engine", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace). `RUST_LOG` wins.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the built-in known-answer self-test on every available engine
    Selftest,
    /// Print the reference test vector (key, plaintext, K[1], round 1, ciphertext)
    Vectors {
        /// Use the legacy key schedule
        #[arg(long)]
        legacy: bool,
    },
    /// Print all 24 subkeys for a key
    Subkeys {
        /// 256-bit key as 64 hex digits
        #[arg(long)]
        key: String,
        /// Use the legacy key schedule
        #[arg(long)]
        legacy: bool,
    },
    /// Encrypt one 64-byte block
    EncryptBlock(BlockArgs),
    /// Decrypt one 64-byte block
    DecryptBlock(BlockArgs),
    /// Report the engine used for multi-block calls
    Backend,
}

#[derive(Args)]
struct BlockArgs {
    /// 256-bit key as 64 hex digits
    #[arg(long)]
    key: String,
    /// 512-bit block as 128 hex digits
    #[arg(long)]
    block: String,
    /// Use the legacy key schedule
    #[arg(long)]
    legacy: bool,
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Selftest => selftest()?,
        Commands::Vectors { legacy } => print_vectors(*legacy),
        Commands::Subkeys { key, legacy } => print_subkeys(key, *legacy)?,
        Commands::EncryptBlock(args) => block_op(BlockOp::Encrypt, &args.key, &args.block, args.legacy)?,
        Commands::DecryptBlock(args) => block_op(BlockOp::Decrypt, &args.key, &args.block, args.legacy)?,
        Commands::Backend => backend(),
    }

    Ok(())
}
