//! Supported blockchain networks

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Networks the order book is deployed on
///
/// Serialized by network name (`mainnet`, `goerli`, `xdai`) so it can be used
/// as a key in configuration files and environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SupportedChainId {
	Mainnet,
	Goerli,
	#[serde(rename = "xdai", alias = "gnosis_chain", alias = "gnosis")]
	GnosisChain,
}

/// Returned when a numeric or textual chain id does not name a supported network
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unsupported chain id: {0}")]
pub struct UnsupportedChainError(pub String);

impl SupportedChainId {
	/// All supported networks, ordered by chain id
	pub const ALL: [SupportedChainId; 3] = [
		SupportedChainId::Mainnet,
		SupportedChainId::Goerli,
		SupportedChainId::GnosisChain,
	];

	/// Numeric EIP-155 chain id
	pub fn chain_id(&self) -> u64 {
		match self {
			SupportedChainId::Mainnet => 1,
			SupportedChainId::Goerli => 5,
			SupportedChainId::GnosisChain => 100,
		}
	}

	/// Network name used in order book URLs and configuration keys
	pub fn network_name(&self) -> &'static str {
		match self {
			SupportedChainId::Mainnet => "mainnet",
			SupportedChainId::Goerli => "goerli",
			SupportedChainId::GnosisChain => "xdai",
		}
	}
}

impl TryFrom<u64> for SupportedChainId {
	type Error = UnsupportedChainError;

	fn try_from(chain_id: u64) -> Result<Self, Self::Error> {
		Self::ALL
			.into_iter()
			.find(|chain| chain.chain_id() == chain_id)
			.ok_or_else(|| UnsupportedChainError(chain_id.to_string()))
	}
}

impl FromStr for SupportedChainId {
	type Err = UnsupportedChainError;

	/// Accepts either a numeric chain id or a network name
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if let Ok(chain_id) = s.parse::<u64>() {
			return Self::try_from(chain_id);
		}

		match s.to_ascii_lowercase().as_str() {
			"mainnet" | "ethereum" => Ok(SupportedChainId::Mainnet),
			"goerli" => Ok(SupportedChainId::Goerli),
			"xdai" | "gnosis" | "gnosis_chain" => Ok(SupportedChainId::GnosisChain),
			_ => Err(UnsupportedChainError(s.to_string())),
		}
	}
}

impl fmt::Display for SupportedChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.chain_id())
	}
}
