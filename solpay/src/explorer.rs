//! Solana Explorer link building.
//!
//! Builds `https://explorer.solana.com` links for accounts, transaction
//! signatures, and blocks. Mainnet links carry no cluster parameter;
//! devnet and testnet links append `?cluster=<name>`; localnet links
//! point the explorer at the local RPC endpoint through
//! `?cluster=custom&customUrl=...`.

use url::Url;

use crate::address::Address;
use crate::cluster::Cluster;

/// Base URL of the Solana Explorer.
const EXPLORER_BASE: &str = "https://explorer.solana.com";

/// Local RPC endpoint advertised in custom-cluster explorer links.
const LOCALNET_CUSTOM_URL: &str = "http://localhost:8899";

/// A target page on the Solana Explorer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExplorerTarget {
    /// An account page.
    Address(Address),
    /// A transaction page, by base58 signature.
    Transaction(String),
    /// A block page, by slot number.
    Block(u64),
}

impl ExplorerTarget {
    /// Builds the explorer URL for this target on the given cluster.
    #[must_use]
    pub fn link(&self, cluster: Cluster) -> String {
        let mut url = Url::parse(EXPLORER_BASE).expect("explorer base is a valid URL");

        let path = match self {
            Self::Address(address) => format!("address/{address}"),
            Self::Transaction(signature) => format!("tx/{signature}"),
            Self::Block(slot) => format!("block/{slot}"),
        };
        url.set_path(&path);

        match cluster {
            Cluster::Mainnet => {}
            Cluster::Devnet | Cluster::Testnet => {
                url.query_pairs_mut()
                    .append_pair("cluster", &cluster.to_string());
            }
            Cluster::Localnet => {
                url.query_pairs_mut()
                    .append_pair("cluster", "custom")
                    .append_pair("customUrl", LOCALNET_CUSTOM_URL);
            }
        }

        url.into()
    }
}
