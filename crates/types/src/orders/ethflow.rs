//! Normalization of orders placed with native currency ("eth-flow" orders)
//!
//! Eth-flow orders are owned on-chain by the eth-flow contract, sell the
//! wrapped native token and carry a contract-level `validTo`. Callers want the
//! user's view instead.

use super::OrderMetadata;
use crate::models::NATIVE_CURRENCY_BUY_ADDRESS;

/// Rewrite an eth-flow order so `owner`, `sellToken` and `validTo` reflect the
/// effective values. Orders without `ethflowData` are returned unchanged.
pub fn transform_eth_flow_order(order: OrderMetadata) -> OrderMetadata {
	let Some(ethflow_data) = order.ethflow_data.as_ref() else {
		return order;
	};

	let valid_to = ethflow_data.user_valid_to;
	let owner = order
		.onchain_order_data
		.as_ref()
		.map(|data| data.sender.as_str())
		.filter(|sender| !sender.is_empty())
		.unwrap_or(order.owner.as_str())
		.to_string();

	OrderMetadata {
		valid_to,
		owner,
		sell_token: NATIVE_CURRENCY_BUY_ADDRESS.to_string(),
		..order
	}
}
