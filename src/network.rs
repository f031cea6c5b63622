//! Well-known Stacks API instances.
//!
//! A [`StacksNetwork`] is a plain configuration value: pick a preset or
//! build a custom one, then pass its [`StacksNetwork::core_api_url`] to
//! the API functions. Values are immutable once created.
//!
//! Preset URLs are bare hosts. API functions append their resource path
//! (`/blocks`, `/info`, `/pox`, ...) directly to the base URL, while the
//! public Hiro API serves these under `/extended/v1/...` and `/v2/...`; use
//! [`StacksNetwork::with_url`] to point a preset at a compatible server.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::{fmt, result::Result, str::FromStr};

/// Unknown network or chain name.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
#[error("unknown network name: {0}")]
pub struct UnknownNetworkError(pub String);

/// Chain a network belongs to.
///
/// Also used as the path segment when asking for a target block time.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Chain {
    /// Production chain
    Mainnet,
    /// Test chain
    Testnet,
}

impl Chain {
    /// Lowercase name as used by the API.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Chain {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            other => Err(UnknownNetworkError(other.to_string())),
        }
    }
}

/// Name of a network preset.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum NetworkName {
    /// Public mainnet
    Mainnet,
    /// Public testnet
    Testnet,
    /// Hosted regtest environment
    Regtest,
    /// Local development node
    Mocknet,
}

impl NetworkName {
    /// Lowercase name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Regtest => "regtest",
            Self::Mocknet => "mocknet",
        }
    }

    /// Chain this network runs. Everything but mainnet is a test chain.
    pub const fn chain(&self) -> Chain {
        match self {
            Self::Mainnet => Chain::Mainnet,
            Self::Testnet | Self::Regtest | Self::Mocknet => Chain::Testnet,
        }
    }
}

impl fmt::Display for NetworkName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetworkName {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mainnet" => Ok(Self::Mainnet),
            "testnet" => Ok(Self::Testnet),
            "regtest" => Ok(Self::Regtest),
            "mocknet" => Ok(Self::Mocknet),
            other => Err(UnknownNetworkError(other.to_string())),
        }
    }
}

/// Stacks API instance: network name and base URL.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct StacksNetwork {
    name: NetworkName,
    core_api_url: String,
}

impl StacksNetwork {
    /// Default API URL for mainnet
    pub const MAINNET_BASE_URL: &'static str = "https://stacks-node-api.mainnet.stacks.co";
    /// Default API URL for testnet
    pub const TESTNET_BASE_URL: &'static str = "https://stacks-node-api.testnet.stacks.co";
    /// Default API URL for regtest
    pub const REGTEST_BASE_URL: &'static str = "https://stacks-node-api.regtest.stacks.co";
    /// Default API URL for a local mocknet node
    pub const MOCKNET_BASE_URL: &'static str = "http://localhost:3999";

    pub fn new<S: Into<String>>(name: NetworkName, core_api_url: S) -> Self {
        //! Network with a custom API URL.
        Self {
            name,
            core_api_url: core_api_url.into(),
        }
    }

    pub fn mainnet() -> Self {
        //! Mainnet parameters
        Self::new(NetworkName::Mainnet, Self::MAINNET_BASE_URL)
    }

    pub fn testnet() -> Self {
        //! Testnet parameters
        Self::new(NetworkName::Testnet, Self::TESTNET_BASE_URL)
    }

    pub fn regtest() -> Self {
        //! Regtest parameters
        Self::new(NetworkName::Regtest, Self::REGTEST_BASE_URL)
    }

    pub fn mocknet() -> Self {
        //! Local mocknet parameters
        Self::new(NetworkName::Mocknet, Self::MOCKNET_BASE_URL)
    }

    pub fn from_name(name: NetworkName) -> Self {
        //! Preset for the given name.
        match name {
            NetworkName::Mainnet => Self::mainnet(),
            NetworkName::Testnet => Self::testnet(),
            NetworkName::Regtest => Self::regtest(),
            NetworkName::Mocknet => Self::mocknet(),
        }
    }

    #[must_use]
    pub fn with_url<S: Into<String>>(self, core_api_url: S) -> Self {
        //! Same network, different API URL.
        Self::new(self.name, core_api_url)
    }

    pub const fn name(&self) -> NetworkName {
        //! Network name.
        self.name
    }

    pub const fn chain(&self) -> Chain {
        //! Chain of this network.
        self.name.chain()
    }

    pub fn core_api_url(&self) -> &str {
        //! Base URL to pass to API functions.
        &self.core_api_url
    }
}

impl FromStr for StacksNetwork {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s.parse()?))
    }
}
