//! Error types for Solana Pay URL handling.
//!
//! Every encode and parse operation fails fast with one of these kinds;
//! there are no partial results and nothing to retry.

/// Errors produced while constructing, parsing, or validating Solana Pay URLs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SolanaPayError {
    /// The input does not start with the `solana:` scheme.
    #[error("URL does not start with the solana: scheme")]
    InvalidScheme,
    /// The recipient is not a valid base58 account address.
    #[error("Invalid recipient address: {0}")]
    InvalidRecipient(String),
    /// The SPL token mint is not a valid base58 account address.
    #[error("Invalid spl-token mint address: {0}")]
    InvalidSplToken(String),
    /// A reference key is not a valid base58 account address.
    #[error("Invalid reference key: {0}")]
    InvalidReference(String),
    /// The amount is not a plain non-negative decimal number.
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    /// A transaction request link is malformed or does not use https.
    #[error("Transaction request link must be a valid https URL: {0}")]
    InvalidLink(String),
    /// The input is not a valid Solana Pay URL.
    #[error("Invalid Solana Pay URL")]
    InvalidUrl,
}
