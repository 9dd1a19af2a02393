//! Quote response models

use serde::{Deserialize, Serialize};

use crate::orders::OrderKind;

/// Order parameters priced by the backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteData {
	pub sell_token: String,
	pub buy_token: String,
	#[serde(default)]
	pub receiver: Option<String>,
	pub sell_amount: String,
	pub buy_amount: String,
	pub valid_to: u32,
	pub app_data: String,
	pub fee_amount: String,
	pub kind: OrderKind,
	pub partially_fillable: bool,
}

/// Response of `POST /quote`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
	pub quote: QuoteData,
	pub from: String,
	pub expiration: String,
	#[serde(default)]
	pub id: Option<i64>,
}

/// Response of the legacy `GET /markets/...` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceInformation {
	#[serde(default)]
	pub token: String,
	pub amount: Option<String>,
}
