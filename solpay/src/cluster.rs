//! Solana cluster monikers and their well-known endpoints.
//!
//! A cluster is identified either by its moniker (`mainnet`, `devnet`,
//! `testnet`, `localnet`) or by the genesis hash of its first block.
//! This module maps between the two and exposes the public RPC endpoints
//! for each cluster.

use std::fmt;
use std::str::FromStr;
use url::Url;

/// Genesis hash of the mainnet-beta cluster.
pub const MAINNET_GENESIS_HASH: &str = "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdpKuc147dw2N9d";

/// Genesis hash of the devnet cluster.
pub const DEVNET_GENESIS_HASH: &str = "EtWTRABZaYq6iMfeYKouRu166VU2xqa1wcaWoxPkrZBG";

/// Genesis hash of the testnet cluster.
pub const TESTNET_GENESIS_HASH: &str = "4uhcVJyU9pJkvQyS88uRDiswHXSCkY3zQawwpjk2NsNY";

/// A Solana cluster moniker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cluster {
    /// The mainnet-beta production cluster.
    Mainnet,
    /// The devnet development cluster.
    Devnet,
    /// The testnet staging cluster.
    Testnet,
    /// A test validator on the local machine.
    Localnet,
}

impl Cluster {
    /// Resolves a cluster from its genesis hash.
    ///
    /// Returns `None` if the hash belongs to no known public cluster.
    #[must_use]
    pub fn from_genesis_hash(hash: &str) -> Option<Self> {
        match hash {
            MAINNET_GENESIS_HASH => Some(Self::Mainnet),
            DEVNET_GENESIS_HASH => Some(Self::Devnet),
            TESTNET_GENESIS_HASH => Some(Self::Testnet),
            _ => None,
        }
    }

    /// Returns the genesis hash of the cluster, or `None` for localnet
    /// (every local validator has its own).
    #[must_use]
    pub const fn genesis_hash(&self) -> Option<&'static str> {
        match self {
            Self::Mainnet => Some(MAINNET_GENESIS_HASH),
            Self::Devnet => Some(DEVNET_GENESIS_HASH),
            Self::Testnet => Some(TESTNET_GENESIS_HASH),
            Self::Localnet => None,
        }
    }

    /// Returns the public RPC endpoint for the cluster.
    ///
    /// These endpoints are rate limited and not suitable for production
    /// applications.
    #[must_use]
    pub const fn public_rpc_url(&self) -> &'static str {
        match self {
            Self::Mainnet => "https://api.mainnet-beta.solana.com",
            Self::Devnet => "https://api.devnet.solana.com",
            Self::Testnet => "https://api.testnet.solana.com",
            Self::Localnet => "http://127.0.0.1:8899",
        }
    }

    /// Returns the public WebSocket endpoint for the cluster: the RPC
    /// endpoint with its scheme swapped to `ws`/`wss`.
    #[must_use]
    pub fn public_websocket_url(&self) -> String {
        let mut url = Url::parse(self.public_rpc_url()).expect("well-known endpoint is a valid URL");
        let scheme = if url.scheme() == "https" { "wss" } else { "ws" };
        url.set_scheme(scheme)
            .expect("http and ws schemes are interchangeable");
        url.into()
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mainnet => "mainnet",
            Self::Devnet => "devnet",
            Self::Testnet => "testnet",
            Self::Localnet => "localnet",
        };
        write!(f, "{name}")
    }
}

/// Error returned when parsing an unknown cluster moniker.
#[derive(Debug, Clone, thiserror::Error)]
#[error("Invalid cluster moniker {0}")]
pub struct ClusterMonikerError(String);

impl FromStr for Cluster {
    type Err = ClusterMonikerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" | "mainnet-beta" => Ok(Self::Mainnet),
            "devnet" => Ok(Self::Devnet),
            "testnet" => Ok(Self::Testnet),
            "localnet" => Ok(Self::Localnet),
            _ => Err(ClusterMonikerError(s.into())),
        }
    }
}
