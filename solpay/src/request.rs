//! Payment request types for the Solana Pay URL format.
//!
//! Two kinds of request exist on the wire:
//!
//! - [`TransferRequest`] - a non-interactive payment fully described by
//!   the URL itself
//! - [`TransactionRequest`] - an interactive payment that defers the
//!   transaction contents to a follow-up exchange with an https endpoint
//!
//! [`PaymentRequest`] is the tagged union of the two. All three are
//! immutable value objects: construction validates every invariant once,
//! and the encoder and parser operate on already-valid data.

use serde::{Deserialize, Deserializer, Serialize, de};
use url::Url;

use crate::address::Address;
use crate::amount::Amount;
use crate::error::SolanaPayError;

/// A non-interactive transfer request.
///
/// Everything a wallet needs is in the URL: the recipient, an optional
/// amount and SPL token mint, reference keys for later on-chain
/// correlation, and free-text display fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// The account receiving the transfer.
    pub recipient: Address,
    /// Amount in human-readable units. `None` lets the wallet prompt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// SPL token mint for token transfers; `None` transfers native SOL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spl_token: Option<Address>,
    /// Ordered reference keys used to locate the transaction on chain
    /// later. Order is preserved through encode and parse.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reference: Vec<Address>,
    /// Label describing the source of the request, e.g. a store name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Message describing the nature of the payment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// SPL memo to include in the payment transaction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

impl TransferRequest {
    /// Creates a transfer request for the given recipient.
    #[must_use]
    pub const fn new(recipient: Address) -> Self {
        Self {
            recipient,
            amount: None,
            spl_token: None,
            reference: Vec::new(),
            label: None,
            message: None,
            memo: None,
        }
    }

    /// Creates a transfer request, parsing the recipient from base58.
    ///
    /// # Errors
    ///
    /// Returns [`SolanaPayError::InvalidRecipient`] if the recipient does
    /// not satisfy the account address invariant.
    pub fn try_new(recipient: &str) -> Result<Self, SolanaPayError> {
        let recipient = recipient
            .parse::<Address>()
            .map_err(|_| SolanaPayError::InvalidRecipient(recipient.into()))?;
        Ok(Self::new(recipient))
    }

    /// Sets the transfer amount.
    #[must_use]
    pub const fn with_amount(mut self, amount: Amount) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the SPL token mint.
    #[must_use]
    pub const fn with_spl_token(mut self, mint: Address) -> Self {
        self.spl_token = Some(mint);
        self
    }

    /// Appends a reference key, preserving insertion order.
    #[must_use]
    pub fn with_reference(mut self, reference: Address) -> Self {
        self.reference.push(reference);
        self
    }

    /// Sets the label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the message.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the memo.
    #[must_use]
    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = Some(memo.into());
        self
    }
}

/// An interactive transaction request.
///
/// The URL only carries a link; the wallet fetches the actual transaction
/// from that endpoint. The link must use https — the check happens at
/// construction, so no insecure request object ever exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    link: Url,
}

impl TransactionRequest {
    /// Creates a transaction request.
    ///
    /// # Errors
    ///
    /// Returns [`SolanaPayError::InvalidLink`] unless the link uses the
    /// `https` scheme.
    pub fn new(link: Url) -> Result<Self, SolanaPayError> {
        if link.scheme() != "https" {
            return Err(SolanaPayError::InvalidLink(link.into()));
        }
        Ok(Self { link })
    }

    /// Creates a transaction request, parsing the link from a string.
    ///
    /// # Errors
    ///
    /// Returns [`SolanaPayError::InvalidLink`] if the string is not a
    /// well-formed https URL.
    pub fn try_new(link: &str) -> Result<Self, SolanaPayError> {
        let url = Url::parse(link).map_err(|_| SolanaPayError::InvalidLink(link.into()))?;
        Self::new(url)
    }

    /// Returns the transaction link.
    #[must_use]
    pub const fn link(&self) -> &Url {
        &self.link
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransactionRequestWire {
    link: Url,
}

impl<'de> Deserialize<'de> for TransactionRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = TransactionRequestWire::deserialize(deserializer)?;
        Self::new(wire.link).map_err(de::Error::custom)
    }
}

/// A parsed Solana Pay URL: either a transfer or a transaction request.
///
/// The discriminator is structural: a remainder that begins with an https
/// link is a transaction request; anything else is parsed as an
/// address-plus-query transfer request.
///
/// # Serialization
///
/// Serializes as `{ "type": "transfer" | "transaction", "params": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params", rename_all = "lowercase")]
pub enum PaymentRequest {
    /// A non-interactive transfer fully described by the URL.
    Transfer(TransferRequest),
    /// An interactive request resolved against an https endpoint.
    Transaction(TransactionRequest),
}

impl PaymentRequest {
    /// Returns the transfer request, if this is one.
    #[must_use]
    pub const fn as_transfer(&self) -> Option<&TransferRequest> {
        match self {
            Self::Transfer(request) => Some(request),
            Self::Transaction(_) => None,
        }
    }

    /// Returns the transaction request, if this is one.
    #[must_use]
    pub const fn as_transaction(&self) -> Option<&TransactionRequest> {
        match self {
            Self::Transaction(request) => Some(request),
            Self::Transfer(_) => None,
        }
    }
}

impl From<TransferRequest> for PaymentRequest {
    fn from(request: TransferRequest) -> Self {
        Self::Transfer(request)
    }
}

impl From<TransactionRequest> for PaymentRequest {
    fn from(request: TransactionRequest) -> Self {
        Self::Transaction(request)
    }
}
