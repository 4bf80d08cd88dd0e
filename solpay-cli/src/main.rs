//! Command-line encoder, parser, and validator for Solana Pay URLs.
//!
//! # Usage
//!
//! ```bash
//! # Encode a transfer request URL
//! solpay transfer 11111111111111111111111111111112 --amount 0.001 --label "Coffee Shop"
//!
//! # Encode a transaction request URL
//! solpay transaction https://merchant.example.com/api/pay
//!
//! # Parse a URL into its JSON representation
//! solpay parse "solana:11111111111111111111111111111112?amount=0.001"
//!
//! # Check validity / format for a QR code
//! solpay validate "solana:11111111111111111111111111111112"
//! solpay qr "solana:11111111111111111111111111111112?label=Coffee+Shop"
//!
//! # Build a Solana Explorer link
//! solpay explorer --cluster devnet --address 11111111111111111111111111111112
//! ```
//!
//! `RUST_LOG` controls log verbosity (default: `warn`).

#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use solpay::address::Address;
use solpay::amount::Amount;
use solpay::cluster::Cluster;
use solpay::encoding::{self, EncodeOptions};
use solpay::explorer::ExplorerTarget;
use solpay::request::{TransactionRequest, TransferRequest};

#[derive(Parser)]
#[command(name = "solpay", version, about = "Solana Pay URL toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encode a transfer request URL.
    Transfer {
        /// Recipient account address (base58).
        recipient: String,
        /// Amount in human-readable units.
        #[arg(long)]
        amount: Option<Amount>,
        /// SPL token mint for token transfers.
        #[arg(long)]
        spl_token: Option<Address>,
        /// Reference key for later on-chain correlation (repeatable).
        #[arg(long)]
        reference: Vec<Address>,
        /// Label describing the payee.
        #[arg(long)]
        label: Option<String>,
        /// Message describing the payment.
        #[arg(long)]
        message: Option<String>,
        /// SPL memo to attach to the payment transaction.
        #[arg(long)]
        memo: Option<String>,
        /// Render in human-readable form instead of percent-encoding.
        #[arg(long)]
        display: bool,
    },
    /// Encode a transaction request URL.
    Transaction {
        /// The https endpoint the wallet negotiates the transaction with.
        link: String,
        /// Render in human-readable form instead of percent-encoding.
        #[arg(long)]
        display: bool,
    },
    /// Parse a Solana Pay URL and print it as JSON.
    Parse {
        /// The URL to parse.
        url: String,
    },
    /// Check whether a string is a valid Solana Pay URL.
    Validate {
        /// The URL to check.
        url: String,
    },
    /// Percent-encode a Solana Pay URL for embedding in a QR code.
    Qr {
        /// The URL to format.
        url: String,
    },
    /// Build a Solana Explorer link.
    Explorer {
        /// Cluster the link should point at.
        #[arg(long, default_value = "mainnet")]
        cluster: Cluster,
        /// Account address to link to.
        #[arg(long)]
        address: Option<Address>,
        /// Transaction signature to link to.
        #[arg(long)]
        transaction: Option<String>,
        /// Block slot to link to.
        #[arg(long)]
        block: Option<u64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        tracing::error!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Transfer {
            recipient,
            amount,
            spl_token,
            reference,
            label,
            message,
            memo,
            display,
        } => {
            let mut request = TransferRequest::try_new(&recipient)?;
            if let Some(amount) = amount {
                request = request.with_amount(amount);
            }
            if let Some(mint) = spl_token {
                request = request.with_spl_token(mint);
            }
            for key in reference {
                request = request.with_reference(key);
            }
            if let Some(label) = label {
                request = request.with_label(label);
            }
            if let Some(message) = message {
                request = request.with_message(message);
            }
            if let Some(memo) = memo {
                request = request.with_memo(memo);
            }
            println!("{}", encoding::encode_transfer_url(&request, options(display)));
        }
        Command::Transaction { link, display } => {
            let request = TransactionRequest::try_new(&link)?;
            println!(
                "{}",
                encoding::encode_transaction_url(&request, options(display))
            );
        }
        Command::Parse { url } => {
            let request = encoding::parse_url(&url)?;
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Command::Validate { url } => {
            if encoding::validate_url(&url) {
                println!("valid");
            } else {
                println!("invalid");
                std::process::exit(1);
            }
        }
        Command::Qr { url } => {
            println!("{}", encoding::qr_payload(&url)?);
        }
        Command::Explorer {
            cluster,
            address,
            transaction,
            block,
        } => {
            let target = if let Some(address) = address {
                ExplorerTarget::Address(address)
            } else if let Some(signature) = transaction {
                ExplorerTarget::Transaction(signature)
            } else if let Some(slot) = block {
                ExplorerTarget::Block(slot)
            } else {
                return Err("one of --address, --transaction, or --block is required".into());
            };
            println!("{}", target.link(cluster));
        }
    }

    Ok(())
}

const fn options(display: bool) -> EncodeOptions {
    EncodeOptions { encode: !display }
}
