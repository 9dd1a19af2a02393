//! Mock order book server for integration tests
//!
//! Serves the order, profile and strategy APIs on an ephemeral port and
//! records every request it receives. Test binaries that only use the
//! fixtures leave it unused.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
	extract::{Path, Query, Request, State},
	http::{header, HeaderMap, StatusCode},
	middleware::{self, Next},
	response::{IntoResponse, Response},
	routing::{get, post},
	Json, Router,
};
use orderbook_client::{
	config::ConfigurableValue,
	serde_json::{json, Value},
	Settings, SupportedChainId,
};
use serde::Deserialize;
use tokio::task::JoinHandle;

use super::fixtures::Fixtures;

/// A request as seen by the mock server
#[derive(Debug, Clone)]
pub struct RecordedRequest {
	pub method: String,
	/// Path and query
	pub uri: String,
	pub app_id: Option<String>,
	pub content_type: Option<String>,
	pub body: Option<Value>,
}

#[derive(Debug, Clone, Default)]
pub struct MockState {
	requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockState {
	fn record_body(&self, body: &Value) {
		if let Some(last) = self.requests.lock().unwrap().last_mut() {
			last.body = Some(body.clone());
		}
	}
}

/// Test server instance
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
	state: MockState,
}

impl TestServer {
	/// Spawn the mock order book
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		let state = MockState::default();
		let app = router(state.clone());

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
			.await
			.expect("bind test port");
		let addr = listener.local_addr().unwrap();
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			let _ = axum::serve(listener, app).await;
		});

		// Give server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self {
			base_url,
			handle,
			state,
		})
	}

	/// Settings pointing mainnet and goerli at this server
	pub fn settings(&self) -> Settings {
		let mut settings = Settings::default();
		let api = format!("{}/api", self.base_url);
		for chain in [SupportedChainId::Mainnet, SupportedChainId::Goerli] {
			settings
				.api
				.order_urls
				.insert(chain, ConfigurableValue::from_plain(&api));
		}
		settings.api.profile_urls.insert(
			SupportedChainId::Mainnet,
			ConfigurableValue::from_plain(&format!("{}/affiliate", self.base_url)),
		);
		settings.api.strategy_urls.insert(
			SupportedChainId::Mainnet,
			ConfigurableValue::from_plain(&format!("{}/strategy-1.json", self.base_url)),
		);
		settings
	}

	pub fn requests(&self) -> Vec<RecordedRequest> {
		self.state.requests.lock().unwrap().clone()
	}

	pub fn last_request(&self) -> RecordedRequest {
		self.requests().last().cloned().expect("no request received")
	}

	pub fn abort(self) {
		self.handle.abort();
	}
}

fn router(state: MockState) -> Router {
	Router::new()
		.route("/api/v1/orders", post(create_order))
		.route("/api/v1/orders/:uid", get(get_order).delete(cancel_order))
		.route("/api/v1/account/:owner/orders/", get(get_account_orders))
		.route("/api/v1/trades", get(get_trades))
		.route("/api/v1/quote", post(quote))
		.route("/api/v1/markets/:pair/:kind/:amount", get(legacy_price))
		.route("/api/v1/token/:address/native_price", get(native_price))
		.route("/affiliate/v1/profile/:address", get(profile))
		.route("/strategy-1.json", get(strategy))
		.layer(middleware::from_fn_with_state(state.clone(), record))
		.with_state(state)
}

async fn record(State(state): State<MockState>, request: Request, next: Next) -> Response {
	let header = |headers: &HeaderMap, name: &str| {
		headers
			.get(name)
			.and_then(|value| value.to_str().ok())
			.map(str::to_string)
	};

	state.requests.lock().unwrap().push(RecordedRequest {
		method: request.method().to_string(),
		uri: request
			.uri()
			.path_and_query()
			.map(|pq| pq.to_string())
			.unwrap_or_default(),
		app_id: header(request.headers(), "x-appid"),
		content_type: header(request.headers(), "content-type"),
		body: None,
	});

	next.run(request).await
}

fn api_error(status: StatusCode, error_type: &str, description: &str) -> Response {
	(
		status,
		Json(json!({"errorType": error_type, "description": description})),
	)
		.into_response()
}

async fn create_order(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
	state.record_body(&body);

	if body["sellAmount"] == "0" {
		return api_error(StatusCode::BAD_REQUEST, "AmountIsZero", "Buy or sell amount is zero.");
	}
	if body["from"] == Fixtures::ETH_FLOW_CONTRACT {
		return api_error(StatusCode::FORBIDDEN, "Forbidden", "deny-listed");
	}

	(StatusCode::CREATED, Json(json!(Fixtures::ORDER_UID))).into_response()
}

async fn cancel_order(
	State(state): State<MockState>,
	Path(uid): Path<String>,
	Json(body): Json<Value>,
) -> Response {
	state.record_body(&body);

	if uid == Fixtures::MISSING_UID {
		return api_error(StatusCode::NOT_FOUND, "OrderNotFound", "order not found");
	}
	(StatusCode::OK, Json(json!("Cancelled"))).into_response()
}

async fn get_order(Path(uid): Path<String>) -> Response {
	match uid.as_str() {
		Fixtures::MISSING_UID => {
			api_error(StatusCode::NOT_FOUND, "NotFound", "Order was not found")
		},
		Fixtures::ETH_FLOW_UID => Json(Fixtures::eth_flow_order_json(&uid)).into_response(),
		_ => Json(Fixtures::order_json(&uid)).into_response(),
	}
}

async fn get_account_orders(Path(_owner): Path<String>) -> Json<Value> {
	Json(json!([
		Fixtures::order_json(Fixtures::ORDER_UID),
		Fixtures::eth_flow_order_json(Fixtures::ETH_FLOW_UID)
	]))
}

#[derive(Deserialize)]
struct TradesParams {
	owner: Option<String>,
}

async fn get_trades(Query(params): Query<TradesParams>) -> Response {
	match params.owner {
		Some(_) => Json(json!([Fixtures::trade_json()])).into_response(),
		None => api_error(StatusCode::BAD_REQUEST, "MissingOwner", "owner is required"),
	}
}

async fn quote(State(state): State<MockState>, Json(body): Json<Value>) -> Response {
	state.record_body(&body);

	if body["sellToken"] == Fixtures::BROKEN_TOKEN {
		return (
			StatusCode::BAD_GATEWAY,
			[(header::CONTENT_TYPE, "text/html")],
			"<html><body>502 Bad Gateway</body></html>",
		)
			.into_response();
	}
	if body["buyToken"] == Fixtures::USDC {
		return api_error(
			StatusCode::NOT_FOUND,
			"NoLiquidity",
			"not enough liquidity",
		);
	}

	Json(Fixtures::quote_response_json(&body)).into_response()
}

async fn legacy_price(Path((pair, _kind, _amount)): Path<(String, String, String)>) -> Json<Value> {
	let quote_token = pair.split('-').nth(1).unwrap_or_default().to_string();
	Json(json!({"token": quote_token, "amount": "1850000000000000"}))
}

async fn native_price(Path(_address): Path<String>) -> Json<Value> {
	Json(json!({"price": 0.000_542}))
}

async fn profile(Path(_address): Path<String>) -> Json<Value> {
	Json(json!({
		"totalTrades": 12,
		"totalReferrals": 3,
		"tradeVolumeUsd": 10_500.5,
		"referralVolumeUsd": 2_000.0,
		"lastUpdated": "2023-11-14T22:13:20Z"
	}))
}

async fn strategy() -> Json<Value> {
	Json(json!({"primary": "COWSWAP", "secondary": "LEGACY"}))
}
