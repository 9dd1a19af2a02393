//! Translation of caller quote requests into the order book's quote schema

use tracing::debug;

use super::request::{EthFlowQuoteParams, FeeQuoteParams, QuoteQuery, QuoteSide};
use crate::models::ZERO_ADDRESS;
use crate::orders::OrderKind;

/// Build the `/quote` body for `params`, stamping it with `app_data`
///
/// Only sell quotes carry the eth-flow fields. Eth-flow orders always sell
/// the native currency.
pub fn map_quote_params(params: &FeeQuoteParams, app_data: &str) -> QuoteQuery {
	let from = params
		.user_address
		.clone()
		.unwrap_or_else(|| ZERO_ADDRESS.to_string());
	let receiver = params.receiver.clone().unwrap_or_else(|| from.clone());

	let eth_flow = params.is_eth_flow && params.kind == OrderKind::Sell;
	if eth_flow {
		debug!("Eth-flow quote: requesting an on-chain EIP-1271 order");
	}

	QuoteQuery {
		sell_token: params.sell_token.to_erc20_address(params.chain_id),
		buy_token: params.buy_token.to_native_buy_address(),
		from,
		receiver,
		app_data: app_data.to_string(),
		valid_to: params.valid_to,
		partially_fillable: false,
		price_quality: params.price_quality,
		side: QuoteSide::new(params.kind, params.amount.clone()),
		eth_flow: eth_flow.then(EthFlowQuoteParams::default),
	}
}
