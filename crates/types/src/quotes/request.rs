//! Quote request models
//!
//! [`FeeQuoteParams`] is what callers provide. [`QuoteQuery`] is the body the
//! order book's `/quote` endpoint expects; see [`super::mapping`].

use serde::{Deserialize, Serialize};

use crate::models::{SupportedChainId, TokenAddress};
use crate::orders::{OrderKind, SigningScheme};

/// Trade-off between quote latency and price accuracy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceQuality {
	Fast,
	Optimal,
}

/// Caller-facing fee and price quote request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeeQuoteParams {
	pub chain_id: SupportedChainId,
	pub sell_token: TokenAddress,
	pub buy_token: TokenAddress,
	/// Sell amount for sell orders, buy amount for buy orders (atoms)
	pub amount: String,
	pub kind: OrderKind,
	pub user_address: Option<String>,
	pub receiver: Option<String>,
	pub valid_to: u32,
	pub price_quality: Option<PriceQuality>,
	/// Selling native currency through the eth-flow contract
	#[serde(default)]
	pub is_eth_flow: bool,
}

/// Caller-facing request for the legacy markets price endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuoteParams {
	pub chain_id: SupportedChainId,
	pub base_token: TokenAddress,
	pub quote_token: TokenAddress,
	pub amount: String,
	pub kind: OrderKind,
}

/// Amount field selected by the order side. Exactly one is ever sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum QuoteSide {
	Sell {
		#[serde(rename = "sellAmountBeforeFee")]
		sell_amount_before_fee: String,
	},
	Buy {
		#[serde(rename = "buyAmountAfterFee")]
		buy_amount_after_fee: String,
	},
}

impl QuoteSide {
	pub fn new(kind: OrderKind, amount: String) -> Self {
		match kind {
			OrderKind::Sell => QuoteSide::Sell {
				sell_amount_before_fee: amount,
			},
			OrderKind::Buy => QuoteSide::Buy {
				buy_amount_after_fee: amount,
			},
		}
	}
}

/// Fields added to quotes for native-currency (eth-flow) orders
///
/// Eth-flow orders are placed on-chain by a contract and verified through
/// EIP-1271. Their verification gas is subsidized, so it is quoted as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EthFlowQuoteParams {
	pub signing_scheme: SigningScheme,
	pub onchain_order: bool,
	pub verification_gas_limit: u64,
}

impl Default for EthFlowQuoteParams {
	fn default() -> Self {
		Self {
			signing_scheme: SigningScheme::Eip1271,
			onchain_order: true,
			verification_gas_limit: 0,
		}
	}
}

/// Body of `POST /quote`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteQuery {
	pub sell_token: String,
	pub buy_token: String,
	pub from: String,
	pub receiver: String,
	pub app_data: String,
	pub valid_to: u32,
	pub partially_fillable: bool,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub price_quality: Option<PriceQuality>,
	#[serde(flatten)]
	pub side: QuoteSide,
	#[serde(flatten)]
	pub eth_flow: Option<EthFlowQuoteParams>,
}
