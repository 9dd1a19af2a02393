//! Token address helpers
//!
//! The order book never trades the native currency directly. Sell-side native
//! currency is traded through its wrapped ERC20, while buy-side native currency
//! is expressed with a placeholder address the settlement contract unwraps.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::chain::SupportedChainId;

/// Placeholder address for buying the native currency (and for eth-flow sell tokens)
pub const NATIVE_CURRENCY_BUY_ADDRESS: &str = "0xEeeeeEeeeEeEeeEeEeEeeEEEeeeeEeeeeeeeEEeE";

/// Sentinel sender used when a quote is requested without a connected account
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Wrapped native token on each supported chain
pub fn wrapped_native_address(chain_id: SupportedChainId) -> &'static str {
	match chain_id {
		SupportedChainId::Mainnet => "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2",
		SupportedChainId::Goerli => "0xB4FBF271143F4FBf7B91A5ded31805e42b2208d6",
		SupportedChainId::GnosisChain => "0xe91D153E0b41518A2Ce8Dd3D7944Fa863463a97d",
	}
}

/// A token as seen by a caller: either the chain's native currency or an ERC20 contract
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum TokenAddress {
	Native,
	Erc20(String),
}

impl TokenAddress {
	pub fn erc20(address: impl Into<String>) -> Self {
		TokenAddress::Erc20(address.into())
	}

	/// Address usable wherever the backend expects an ERC20 (sell tokens, markets)
	pub fn to_erc20_address(&self, chain_id: SupportedChainId) -> String {
		match self {
			TokenAddress::Native => wrapped_native_address(chain_id).to_string(),
			TokenAddress::Erc20(address) => address.clone(),
		}
	}

	/// Address usable as a buy token, where native currency has its own placeholder
	pub fn to_native_buy_address(&self) -> String {
		match self {
			TokenAddress::Native => NATIVE_CURRENCY_BUY_ADDRESS.to_string(),
			TokenAddress::Erc20(address) => address.clone(),
		}
	}
}

impl FromStr for TokenAddress {
	type Err = String;

	/// `ETH`, `XDAI`, `native` and the placeholder address all denote native currency
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let trimmed = s.trim();
		if trimmed.is_empty() {
			return Err("token address cannot be empty".to_string());
		}

		let is_native = trimmed.eq_ignore_ascii_case(NATIVE_CURRENCY_BUY_ADDRESS)
			|| ["eth", "xdai", "native"]
				.iter()
				.any(|symbol| trimmed.eq_ignore_ascii_case(symbol));

		if is_native {
			Ok(TokenAddress::Native)
		} else {
			Ok(TokenAddress::Erc20(trimmed.to_string()))
		}
	}
}

impl TryFrom<String> for TokenAddress {
	type Error = String;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl From<TokenAddress> for String {
	fn from(token: TokenAddress) -> Self {
		token.to_string()
	}
}

impl fmt::Display for TokenAddress {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			TokenAddress::Native => write!(f, "{}", NATIVE_CURRENCY_BUY_ADDRESS),
			TokenAddress::Erc20(address) => write!(f, "{}", address),
		}
	}
}
