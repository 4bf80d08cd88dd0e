#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Typed Solana Pay URL handling.
//!
//! This crate implements the Solana Pay payment-URL micro-format: a
//! bidirectional mapping between structured payment requests and
//! constrained `solana:` URI strings. A transfer request describes a
//! non-interactive payment entirely within the URL; a transaction request
//! defers the transaction contents to a follow-up exchange with an https
//! endpoint.
//!
//! The codec is pure and synchronous. Every operation is a deterministic
//! function of its input with no I/O, no shared state, and nothing to
//! retry; it is safe to call from any number of threads without locking.
//! Signing, RPC transport, and on-chain lookups belong to other crates.
//!
//! # Modules
//!
//! - [`address`] - Base58 account identifiers
//! - [`amount`] - Human-readable payment amount parsing
//! - [`cluster`] - Cluster monikers and well-known public endpoints
//! - [`encoding`] - URL encoding, parsing, and validation
//! - [`error`] - Error taxonomy for construction and parsing
//! - [`explorer`] - Solana Explorer link building
//! - [`request`] - Transfer and transaction request types
//!
//! # Feature Flags
//!
//! - `telemetry` - Enables tracing instrumentation for debugging and monitoring
//!
//! # Example
//!
//! ```
//! use solpay::encoding::{EncodeOptions, encode_transfer_url, parse_url};
//! use solpay::request::TransferRequest;
//!
//! let request = TransferRequest::try_new("11111111111111111111111111111112")?
//!     .with_amount(1_000_000u64.into())
//!     .with_label("Coffee Shop");
//!
//! let url = encode_transfer_url(&request, EncodeOptions::default());
//! assert!(url.starts_with("solana:11111111111111111111111111111112"));
//! assert!(url.contains("amount=1000000"));
//!
//! let parsed = parse_url(&url)?;
//! let transfer = parsed.as_transfer().expect("encoded as a transfer");
//! assert_eq!(transfer.label.as_deref(), Some("Coffee Shop"));
//! # Ok::<(), solpay::error::SolanaPayError>(())
//! ```

pub mod address;
pub mod amount;
pub mod cluster;
pub mod encoding;
pub mod error;
pub mod explorer;
pub mod request;
