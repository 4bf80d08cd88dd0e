//! Human-readable payment amount parsing.
//!
//! Solana Pay amounts are human-scale decimals: `0.001` means 0.001 SOL
//! for a native transfer, or 0.001 UI units of the mint named by
//! `spl-token`. The wire form is a plain decimal number — no sign, no
//! exponent — and [`Amount`] preserves the source scale so that encoded
//! values survive a round trip byte for byte.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::fmt;
use std::str::FromStr;

/// A non-negative decimal payment amount.
///
/// Comparison is by numeric value, so `1.00` equals `1`; rendering keeps
/// the scale of the source, so `"1.00"` displays as `"1.00"`.
///
/// # Serialization
///
/// Serializes to/from its decimal string form. Strings survive JSON
/// parsers that cannot represent high-precision numbers exactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Amount(Decimal);

impl Amount {
    /// Creates an amount from a decimal value.
    ///
    /// # Errors
    ///
    /// Returns [`AmountFormatError`] if the value is negative.
    pub fn new(value: Decimal) -> Result<Self, AmountFormatError> {
        if value.is_sign_negative() {
            return Err(AmountFormatError(value.to_string()));
        }
        Ok(Self(value))
    }

    /// Returns the inner decimal value.
    #[must_use]
    pub const fn inner(&self) -> Decimal {
        self.0
    }
}

impl From<u64> for Amount {
    fn from(value: u64) -> Self {
        Self(Decimal::from(value))
    }
}

/// Error returned when parsing an invalid amount.
///
/// A valid amount is an unsigned decimal number: ASCII digits with at
/// most one `.`, no sign, no exponent.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid amount {0}")]
pub struct AmountFormatError(String);

impl FromStr for Amount {
    type Err = AmountFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Restricting the alphabet up front rules out signs and exponents,
        // which Decimal would otherwise tolerate.
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
            return Err(AmountFormatError(s.into()));
        }
        let value = Decimal::from_str(s).map_err(|_| AmountFormatError(s.into()))?;
        Ok(Self(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_decimals() {
        assert_eq!("0.001".parse::<Amount>().unwrap().to_string(), "0.001");
        assert_eq!("1000000".parse::<Amount>().unwrap().to_string(), "1000000");
        assert_eq!("0".parse::<Amount>().unwrap().to_string(), "0");
    }

    #[test]
    fn test_scale_is_preserved() {
        assert_eq!("1.00".parse::<Amount>().unwrap().to_string(), "1.00");
        assert_eq!("0.010".parse::<Amount>().unwrap().to_string(), "0.010");
    }

    #[test]
    fn test_equality_is_numeric() {
        let padded: Amount = "1.00".parse().unwrap();
        let bare: Amount = "1".parse().unwrap();
        assert_eq!(padded, bare);
    }

    #[test]
    fn test_rejects_signs_and_exponents() {
        assert!("-1".parse::<Amount>().is_err());
        assert!("+1".parse::<Amount>().is_err());
        assert!("1e6".parse::<Amount>().is_err());
        assert!("1E6".parse::<Amount>().is_err());
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!("".parse::<Amount>().is_err());
        assert!(".".parse::<Amount>().is_err());
        assert!("1.2.3".parse::<Amount>().is_err());
        assert!("abc".parse::<Amount>().is_err());
        assert!("1 000".parse::<Amount>().is_err());
    }

    #[test]
    fn test_new_rejects_negative() {
        assert!(Amount::new(Decimal::NEGATIVE_ONE).is_err());
        assert!(Amount::new(Decimal::ONE).is_ok());
    }

    #[test]
    fn test_from_u64() {
        assert_eq!(Amount::from(1_000_000u64).to_string(), "1000000");
    }

    #[test]
    fn test_serde_as_string() {
        let amount: Amount = "0.001".parse().unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"0.001\"");
        let back: Amount = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
