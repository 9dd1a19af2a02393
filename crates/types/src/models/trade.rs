//! Settled trades, profile statistics and pricing data

use serde::{Deserialize, Serialize};

use crate::orders::OrderUid;

/// A single on-chain settlement of (part of) an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeMetadata {
	pub block_number: u64,
	pub log_index: u64,
	pub order_uid: OrderUid,
	pub owner: String,
	pub sell_token: String,
	pub buy_token: String,
	pub sell_amount: String,
	pub buy_amount: String,
	pub sell_amount_before_fees: String,
	pub tx_hash: Option<String>,
}

/// Query for `GET /trades`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TradesQuery {
	pub owner: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub limit: Option<u32>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub offset: Option<u32>,
}

/// Affiliate statistics for an account (mainnet only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileData {
	pub total_trades: u64,
	pub total_referrals: u64,
	pub trade_volume_usd: f64,
	pub referral_volume_usd: f64,
	pub last_updated: Option<String>,
}

/// Price of a token denominated in the chain's native currency
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NativePrice {
	pub price: f64,
}

/// Pricing source used by the trading UI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PriceStrategyKind {
	Cowswap,
	Legacy,
}

/// Primary and fallback pricing sources, published per chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceStrategy {
	pub primary: PriceStrategyKind,
	pub secondary: PriceStrategyKind,
}
