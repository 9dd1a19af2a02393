//! Order models as exchanged with the order book
//!
//! Orders are created and signed by the caller, submitted once, and then only
//! ever read back. Nothing here is persisted locally.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod errors;
pub mod ethflow;

pub use errors::{OrderError, OrderErrorKind, OrderOperation};
pub use ethflow::transform_eth_flow_order;

/// Unique order identifier: `orderDigest ++ owner ++ validTo`, hex encoded
pub type OrderUid = String;

/// Whether the order fixes the sell amount or the buy amount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderKind {
	Sell,
	Buy,
}

/// Signature scheme, in the string form the order book expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SigningScheme {
	Eip712,
	#[serde(rename = "ethsign")]
	EthSign,
	Eip1271,
	#[serde(rename = "presign")]
	PreSign,
}

impl SigningScheme {
	pub fn api_value(&self) -> &'static str {
		match self {
			SigningScheme::Eip712 => "eip712",
			SigningScheme::EthSign => "ethsign",
			SigningScheme::Eip1271 => "eip1271",
			SigningScheme::PreSign => "presign",
		}
	}
}

/// Execution state reported by the order book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
	Fulfilled,
	Expired,
	Cancelled,
	Invalid,
	PresignaturePending,
	Open,
}

impl OrderStatus {
	/// Whether the order can no longer be filled
	pub fn is_final(&self) -> bool {
		!matches!(self, OrderStatus::Open | OrderStatus::PresignaturePending)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderClass {
	Market,
	Limit,
	Liquidity,
}

/// Signed order as submitted by its owner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreation {
	pub sell_token: String,
	pub buy_token: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub receiver: Option<String>,
	pub sell_amount: String,
	pub buy_amount: String,
	pub valid_to: u32,
	pub app_data: String,
	pub fee_amount: String,
	pub kind: OrderKind,
	pub partially_fillable: bool,
	pub signature: String,
	pub signing_scheme: SigningScheme,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub quote_id: Option<i64>,
}

/// Body of `POST /orders`: the signed order plus its owner
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderCreationBody<'a> {
	#[serde(flatten)]
	pub order: &'a OrderCreation,
	pub from: &'a str,
}

/// Owner-signed request to cancel an open order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancellation {
	pub order_uid: OrderUid,
	pub signature: String,
	pub signing_scheme: SigningScheme,
}

/// Body of `DELETE /orders/{uid}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCancellationBody<'a> {
	pub signature: &'a str,
	pub signing_scheme: SigningScheme,
	pub from: &'a str,
}

/// Refund and validity details of an order placed with native currency
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthFlowData {
	pub user_valid_to: u32,
	#[serde(default)]
	pub is_refunded: bool,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub is_refundable: Option<bool>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refund_tx_hash: Option<String>,
}

/// Placement details of an order created by an on-chain transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnchainOrderData {
	pub sender: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub placement_error: Option<String>,
}

/// The order book's canonical view of an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderMetadata {
	pub creation_date: DateTime<Utc>,
	pub owner: String,
	pub uid: OrderUid,
	#[serde(default)]
	pub available_balance: Option<String>,
	pub executed_buy_amount: String,
	pub executed_sell_amount: String,
	pub executed_sell_amount_before_fees: String,
	pub executed_fee_amount: String,
	#[serde(default)]
	pub executed_surplus_fee: Option<String>,
	pub invalidated: bool,
	pub sell_token: String,
	pub buy_token: String,
	pub sell_amount: String,
	pub buy_amount: String,
	pub valid_to: u32,
	pub app_data: String,
	pub fee_amount: String,
	pub kind: OrderKind,
	pub partially_fillable: bool,
	pub signature: String,
	pub signing_scheme: SigningScheme,
	pub status: OrderStatus,
	#[serde(default)]
	pub receiver: Option<String>,
	pub class: OrderClass,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub ethflow_data: Option<EthFlowData>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub onchain_order_data: Option<OnchainOrderData>,
}

impl OrderMetadata {
	pub fn is_eth_flow(&self) -> bool {
		self.ethflow_data.is_some()
	}
}
