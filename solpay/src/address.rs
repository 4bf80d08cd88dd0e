//! Base58 account identifiers.
//!
//! Every address field of a Solana Pay URL — `recipient`, `spl-token`,
//! and each `reference` key — must name a ledger account: a fixed-length
//! value in base58 form. [`Address`] enforces that invariant at
//! construction, so downstream code never re-validates.

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use solana_pubkey::Pubkey;
use std::fmt;
use std::str::FromStr;

/// A base58-encoded Solana account identifier.
///
/// Wraps [`Pubkey`] and is therefore always a decodable 32-byte key.
/// Reference keys carry no authority and need not be funded accounts;
/// they still have to satisfy the same format invariant.
///
/// # Serialization
///
/// Serializes to/from its base58 string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address(Pubkey);

impl Address {
    /// Creates an address from an already-validated public key.
    #[must_use]
    pub const fn new(pubkey: Pubkey) -> Self {
        Self(pubkey)
    }

    /// Returns the underlying public key.
    #[must_use]
    pub const fn pubkey(&self) -> &Pubkey {
        &self.0
    }

    /// Returns the raw 32-byte key material.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }
}

impl From<Pubkey> for Address {
    fn from(pubkey: Pubkey) -> Self {
        Self(pubkey)
    }
}

impl From<Address> for Pubkey {
    fn from(address: Address) -> Self {
        address.0
    }
}

/// Error returned when parsing an invalid account identifier.
///
/// A valid identifier is a base58 string decoding to exactly 32 bytes.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid account address {0}")]
pub struct AddressFormatError(String);

impl FromStr for Address {
    type Err = AddressFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Pubkey>()
            .map(Self)
            .map_err(|_| AddressFormatError(s.into()))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Address {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}
