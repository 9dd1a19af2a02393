//! Order book request/response fixtures for integration tests

use orderbook_client::{
	serde_json::{json, Value},
	FeeQuoteParams, OrderCancellation, OrderCreation, OrderKind, PriceQuoteParams,
	SigningScheme, SupportedChainId, TokenAddress,
};

/// Test data fixtures
#[allow(dead_code)]
pub struct Fixtures;

#[allow(dead_code)]
impl Fixtures {
	pub const OWNER: &'static str = "0x1111111111111111111111111111111111111111";
	pub const ETH_FLOW_CONTRACT: &'static str = "0x40a50cf069e992aa4536211b23f286ef88752187";
	pub const USDC: &'static str = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
	pub const DAI: &'static str = "0x6B175474E89094C44Da98b954EedeAC495271d0F";
	pub const WETH: &'static str = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
	pub const ORDER_UID: &'static str = "0x59920c85de0162e9e55df8d396e75f3b6b7c2dfdb535f03e5c807731c31585eaff714b8b0e2700303ec912bd40496c3997ceea2b616d6710";
	pub const ETH_FLOW_UID: &'static str = "0xe5ee5cf1ad3a7bd6d4b1ef5e7d2e5c8bd45c5cbb2bb1dcc6f2d1b6e5cb1d2e3f40a50cf069e992aa4536211b23f286ef88752187ffffffff";
	pub const MISSING_UID: &'static str = "0xdeadbeef";
	/// Sell token the mock server answers quotes for with an HTML error page
	pub const BROKEN_TOKEN: &'static str = "0x000000000000000000000000000000000000dEaD";

	pub fn order_creation() -> OrderCreation {
		OrderCreation {
			sell_token: Self::USDC.to_string(),
			buy_token: Self::DAI.to_string(),
			receiver: None,
			sell_amount: "1000000".to_string(),
			buy_amount: "990000000000000000".to_string(),
			valid_to: 1_700_000_000,
			app_data: "0x0000000000000000000000000000000000000000000000000000000000000000"
				.to_string(),
			fee_amount: "1000".to_string(),
			kind: OrderKind::Sell,
			partially_fillable: false,
			signature: "0x".to_string() + &"ab".repeat(65),
			signing_scheme: SigningScheme::Eip712,
			quote_id: Some(42),
		}
	}

	pub fn cancellation(order_uid: &str) -> OrderCancellation {
		OrderCancellation {
			order_uid: order_uid.to_string(),
			signature: "0x".to_string() + &"cd".repeat(65),
			signing_scheme: SigningScheme::EthSign,
		}
	}

	pub fn order_json(uid: &str) -> Value {
		json!({
			"creationDate": "2023-11-14T22:13:20.000000Z",
			"owner": Self::OWNER,
			"uid": uid,
			"availableBalance": null,
			"executedBuyAmount": "0",
			"executedSellAmount": "0",
			"executedSellAmountBeforeFees": "0",
			"executedFeeAmount": "0",
			"executedSurplusFee": null,
			"invalidated": false,
			"sellToken": Self::USDC,
			"buyToken": Self::DAI,
			"sellAmount": "1000000",
			"buyAmount": "990000000000000000",
			"validTo": 1_700_000_000u32,
			"appData": "0x0000000000000000000000000000000000000000000000000000000000000000",
			"feeAmount": "1000",
			"kind": "sell",
			"partiallyFillable": false,
			"signature": "0x",
			"signingScheme": "eip712",
			"status": "open",
			"receiver": Self::OWNER,
			"class": "market"
		})
	}

	/// Order placed through the eth-flow contract, as the backend reports it
	pub fn eth_flow_order_json(uid: &str) -> Value {
		let mut order = Self::order_json(uid);
		order["owner"] = json!(Self::ETH_FLOW_CONTRACT);
		order["sellToken"] = json!(Self::WETH);
		order["validTo"] = json!(u32::MAX);
		order["signingScheme"] = json!("eip1271");
		order["ethflowData"] = json!({
			"userValidTo": 1_700_000_600u32,
			"isRefunded": false,
			"refundTxHash": null
		});
		order["onchainOrderData"] = json!({
			"sender": Self::OWNER,
			"placementError": null
		});
		order
	}

	pub fn trade_json() -> Value {
		json!({
			"blockNumber": 18_000_000u64,
			"logIndex": 12,
			"orderUid": Self::ORDER_UID,
			"owner": Self::OWNER,
			"sellToken": Self::USDC,
			"buyToken": Self::DAI,
			"sellAmount": "1000000",
			"buyAmount": "995000000000000000",
			"sellAmountBeforeFees": "999000",
			"txHash": "0x4f7e5c3e1b2f7b8d3a6e9c2d1f0b4a5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a"
		})
	}

	pub fn quote_response_json(request: &Value) -> Value {
		json!({
			"quote": {
				"sellToken": request["sellToken"],
				"buyToken": request["buyToken"],
				"receiver": request["receiver"],
				"sellAmount": "998000",
				"buyAmount": "993000000000000000",
				"validTo": request["validTo"],
				"appData": request["appData"],
				"feeAmount": "2000",
				"kind": request["kind"],
				"partiallyFillable": false
			},
			"from": request["from"],
			"expiration": "2023-11-14T22:13:20Z",
			"id": 4242
		})
	}

	pub fn fee_quote_params(chain_id: SupportedChainId, kind: OrderKind) -> FeeQuoteParams {
		FeeQuoteParams {
			chain_id,
			sell_token: TokenAddress::erc20(Self::USDC),
			buy_token: TokenAddress::erc20(Self::DAI),
			amount: "1000000".to_string(),
			kind,
			user_address: Some(Self::OWNER.to_string()),
			receiver: None,
			valid_to: 1_700_000_000,
			price_quality: None,
			is_eth_flow: false,
		}
	}

	pub fn price_quote_params(chain_id: SupportedChainId) -> PriceQuoteParams {
		PriceQuoteParams {
			chain_id,
			base_token: TokenAddress::erc20(Self::DAI),
			quote_token: TokenAddress::Native,
			amount: "1000000000000000000".to_string(),
			kind: OrderKind::Sell,
		}
	}
}
