use std::str::FromStr;

use serde_derive::Deserialize;

use crate::configs::{deserialize_data_or_env, deserialize_optional_data_or_env};

pub const DEFAULT_EXPLORER_API_URL: &str = "https://dora.coz.io/api/v1";

/// Chain backends the explorer serves. `Neo2` is the legacy chain and the
/// default target for unqualified requests; `Neo3` is the successor chain.
#[derive(Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "lowercase")]
pub enum ChainId {
    #[default]
    Neo2,
    Neo3,
}

impl FromStr for ChainId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "neo2" => Ok(ChainId::Neo2),
            "neo3" => Ok(ChainId::Neo3),
            _ => Err(anyhow::anyhow!("Invalid chain id")),
        }
    }
}

impl std::fmt::Display for ChainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChainId::Neo2 => write!(f, "neo2"),
            ChainId::Neo3 => write!(f, "neo3"),
        }
    }
}

#[derive(Deserialize, PartialEq, Debug, Clone, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl FromStr for Network {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            _ => Err(anyhow::anyhow!("Invalid network")),
        }
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Network::Mainnet => write!(f, "mainnet"),
            Network::Testnet => write!(f, "testnet"),
        }
    }
}

/// Resolved explorer configuration handed to the fetch layer.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub chain_id: ChainId,
    pub network: Network,
    pub explorer_api_url: String,
}

impl ServiceConfig {
    /// Root address of the backend serving the given chain, composed from
    /// the API root, the chain segment and the network segment. Requests
    /// without an explicit chain go to the configured default chain.
    /// Callers never construct base addresses themselves.
    pub fn base_url(&self, chain_id: Option<ChainId>) -> String {
        format!(
            "{}/{}/{}",
            self.explorer_api_url.trim_end_matches('/'),
            chain_id.unwrap_or(self.chain_id.clone()),
            self.network,
        )
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct CommonGeneralConfig {
    #[serde(deserialize_with = "deserialize_data_or_env", default)]
    pub chain_id: ChainId,
    #[serde(deserialize_with = "deserialize_data_or_env", default)]
    pub network: Network,
    #[serde(deserialize_with = "deserialize_optional_data_or_env", default)]
    pub explorer_api_url: Option<String>,
}

impl CommonGeneralConfig {
    pub fn to_service_config(&self) -> ServiceConfig {
        ServiceConfig {
            chain_id: self.chain_id.clone(),
            network: self.network.clone(),
            explorer_api_url: self
                .explorer_api_url
                .clone()
                .unwrap_or_else(|| DEFAULT_EXPLORER_API_URL.to_string()),
        }
    }
}
