//! avm-templates CLI — instantiate precompiled logic-signature contracts.
//!
//! Provides commands that build the bundled contracts from flags or from a JSON request
//! file, inject values into an arbitrary program, and derive program addresses.
//!
//! Each command delegates to [`avm_templates_core`].

mod commands;
mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use avm_templates_core::templates::HashFunction;

#[derive(Parser)]
#[command(
    name = "avm-templates",
    about = "Instantiate precompiled Algorand logic-signature templates",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Write the built contract (template, address, base64 program) to this JSON file
    #[arg(long, global = true)]
    out: Option<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a contract from a JSON request file
    Build {
        /// Path to the request file
        request: PathBuf,
    },

    /// Build a hash time-locked contract
    Htlc {
        /// Address that can reclaim the funds after the expiry round
        #[arg(long)]
        owner: String,

        /// Address that receives the funds on a valid preimage
        #[arg(long)]
        receiver: String,

        /// Hash function applied to the preimage (sha256, keccak256)
        #[arg(long, default_value = "sha256")]
        hash_function: HashFunction,

        /// Base64 of the 32-byte hash image
        #[arg(long)]
        hash_image: String,

        /// Round after which the owner can reclaim the funds
        #[arg(long)]
        expiry_round: u64,

        /// Maximum fee per transaction, in microalgos
        #[arg(long)]
        max_fee: u64,
    },

    /// Build a split contract
    Split {
        /// Address that receives the balance after the expiry round
        #[arg(long)]
        owner: String,

        #[arg(long)]
        receiver_one: String,

        #[arg(long)]
        receiver_two: String,

        /// Share of receiver one is numerator / denominator
        #[arg(long)]
        ratio_numerator: u64,

        #[arg(long)]
        ratio_denominator: u64,

        #[arg(long)]
        expiry_round: u64,

        /// Minimum amount paid to receiver one
        #[arg(long)]
        min_pay: u64,

        /// Maximum fee per transaction, in microalgos
        #[arg(long)]
        max_fee: u64,
    },

    /// Build a dynamic fee contract
    DynamicFee {
        #[arg(long)]
        receiver: String,

        /// Close-remainder address (zero address when omitted)
        #[arg(long)]
        close_remainder: Option<String>,

        /// Base64 of the 32-byte lease
        #[arg(long)]
        lease: String,

        #[arg(long)]
        amount: u64,

        #[arg(long)]
        first_valid: u64,

        #[arg(long)]
        last_valid: u64,
    },

    /// Inject values into an arbitrary base64 program
    Inject {
        /// Base64 program
        #[arg(long)]
        program: String,

        /// Integer at a 1-byte placeholder: OFFSET=VALUE
        #[arg(long = "uint", value_name = "OFFSET=VALUE")]
        uints: Vec<String>,

        /// 32 raw bytes at a 32-byte placeholder: OFFSET=BASE64
        #[arg(long = "bytes", value_name = "OFFSET=BASE64")]
        bytes: Vec<String>,

        /// Decoded address at a 32-byte placeholder: OFFSET=ADDRESS
        #[arg(long = "address", value_name = "OFFSET=ADDRESS")]
        addresses: Vec<String>,
    },

    /// Print the address of a base64 program
    Address {
        /// Base64 program
        #[arg(long)]
        program: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let out = cli.out.as_deref();

    match cli.command {
        Commands::Build { request } => {
            commands::build::run(&request, out)?;
        }
        Commands::Htlc {
            owner,
            receiver,
            hash_function,
            hash_image,
            expiry_round,
            max_fee,
        } => {
            let params = avm_templates_core::templates::Htlc {
                owner,
                receiver,
                hash_function,
                hash_image,
                expiry_round,
                max_fee,
            };
            commands::template::run(&params, out)?;
        }
        Commands::Split {
            owner,
            receiver_one,
            receiver_two,
            ratio_numerator,
            ratio_denominator,
            expiry_round,
            min_pay,
            max_fee,
        } => {
            let params = avm_templates_core::templates::Split {
                owner,
                receiver_one,
                receiver_two,
                ratio_numerator,
                ratio_denominator,
                expiry_round,
                min_pay,
                max_fee,
            };
            commands::template::run(&params, out)?;
        }
        Commands::DynamicFee {
            receiver,
            close_remainder,
            lease,
            amount,
            first_valid,
            last_valid,
        } => {
            let params = avm_templates_core::templates::DynamicFee {
                receiver,
                close_remainder,
                lease,
                amount,
                first_valid,
                last_valid,
            };
            commands::template::run(&params, out)?;
        }
        Commands::Inject {
            program,
            uints,
            bytes,
            addresses,
        } => {
            commands::inject::run(&program, &uints, &bytes, &addresses, out)?;
        }
        Commands::Address { program } => {
            commands::address::run(&program)?;
        }
    }

    Ok(())
}
