//! Order book client
//!
//! One explicit client per application. It holds the resolved endpoint
//! table, a transport and a diagnostics reporter, and is cheap to clone.

use orderbook_types::{
	map_quote_params,
	orders::{OrderCancellationBody, OrderCreationBody},
	transform_eth_flow_order, AppDataHash, FeeQuoteParams, NativePrice, OrderCancellation,
	OrderCreation, OrderKind, OrderMetadata, OrderOperation, OrderUid, PriceInformation,
	PriceQuoteParams, PriceStrategy, ProfileData, QuoteError, QuoteResponse, SupportedChainId,
	TradeMetadata, TradesQuery,
};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::diagnostics::{DiagnosticsReporter, ErrorOperation, ErrorReport};
use crate::endpoints::{ApiConcern, EndpointResult, Endpoints};
use crate::error::{OrderBookError, OrderBookResult};
use crate::response;
use crate::transport::{ApiRequest, ApiResponse, HttpMethod, Transport};

/// Default page size of account order listings
pub const DEFAULT_ORDERS_LIMIT: u32 = 1000;

/// Header identifying the submitting application
pub const APP_ID_HEADER: &str = "X-AppId";

/// Settings the client reads on every request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
	pub app_data_hash: AppDataHash,
	pub price_feed_enabled: bool,
}

#[derive(Debug, Clone)]
pub struct OrderBookClient {
	endpoints: Arc<Endpoints>,
	transport: Arc<dyn Transport>,
	reporter: Arc<dyn DiagnosticsReporter>,
	app_data_hash: String,
	price_feed_enabled: bool,
}

impl OrderBookClient {
	pub fn new(
		endpoints: Endpoints,
		transport: Arc<dyn Transport>,
		reporter: Arc<dyn DiagnosticsReporter>,
		options: ClientOptions,
	) -> Self {
		Self {
			endpoints: Arc::new(endpoints),
			transport,
			reporter,
			app_data_hash: options.app_data_hash.to_string(),
			price_feed_enabled: options.price_feed_enabled,
		}
	}

	pub fn endpoints(&self) -> &Endpoints {
		&self.endpoints
	}

	/// App data hash sent as `X-AppId` and as quote `appData`
	pub fn app_data_hash(&self) -> &str {
		&self.app_data_hash
	}

	pub fn price_feed_enabled(&self) -> bool {
		self.price_feed_enabled
	}

	fn default_headers(&self) -> Vec<(String, String)> {
		vec![
			("Content-Type".to_string(), "application/json".to_string()),
			(APP_ID_HEADER.to_string(), self.app_data_hash.clone()),
		]
	}

	async fn send(&self, request: ApiRequest) -> OrderBookResult<ApiResponse> {
		let url = request.url.clone();
		self.transport
			.send(request)
			.await
			.map_err(|source| OrderBookError::Transport { url, source })
	}

	/// Issue a request against `api`, with the fixed headers attached
	async fn fetch(
		&self,
		api: ApiConcern,
		chain_id: SupportedChainId,
		path: &str,
		method: HttpMethod,
		body: Option<serde_json::Value>,
	) -> OrderBookResult<ApiResponse> {
		let base_url = self.endpoints.resolve(api, chain_id)?;
		let request = ApiRequest::new(method, format!("{}{}", base_url, path))
			.with_headers(self.default_headers())
			.with_body(body);
		self.send(request).await
	}

	async fn fetch_orders_api(
		&self,
		chain_id: SupportedChainId,
		path: &str,
		method: HttpMethod,
		body: Option<serde_json::Value>,
	) -> OrderBookResult<ApiResponse> {
		self.fetch(ApiConcern::Orders, chain_id, path, method, body)
			.await
	}

	/// Hand a failure to the reporter, then give it back unchanged
	fn report(
		&self,
		operation: ErrorOperation,
		status: Option<u16>,
		params: &serde_json::Value,
		error: OrderBookError,
	) -> OrderBookError {
		self.reporter
			.report(ErrorReport::new(operation, &error, status, params.clone()));
		error
	}

	/// Submit a signed order on behalf of `owner`
	pub async fn send_order(
		&self,
		chain_id: SupportedChainId,
		order: &OrderCreation,
		owner: &str,
	) -> OrderBookResult<OrderUid> {
		info!(
			"Post signed order for network {} (owner {}, kind {:?})",
			chain_id, owner, order.kind
		);

		let params = serde_json::to_value(OrderCreationBody { order, from: owner })?;
		let response = self
			.fetch_orders_api(chain_id, "/orders", HttpMethod::Post, Some(params.clone()))
			.await
			.map_err(|e| self.report(ErrorOperation::Order, None, &params, e))?;

		let uid: OrderUid = response::order_result(&response, OrderOperation::Create)
			.map_err(|e| self.report(ErrorOperation::Order, Some(response.status), &params, e))?;

		info!("Success posting the signed order {}", uid);
		Ok(uid)
	}

	/// Cancel an order with an owner-signed cancellation
	pub async fn cancel_order(
		&self,
		chain_id: SupportedChainId,
		cancellation: &OrderCancellation,
		owner: &str,
	) -> OrderBookResult<()> {
		info!(
			"Delete signed order {} for network {}",
			cancellation.order_uid, chain_id
		);

		let params = serde_json::to_value(OrderCancellationBody {
			signature: &cancellation.signature,
			signing_scheme: cancellation.signing_scheme,
			from: owner,
		})?;
		let path = format!("/orders/{}", cancellation.order_uid);
		let response = self
			.fetch_orders_api(chain_id, &path, HttpMethod::Delete, Some(params.clone()))
			.await
			.map_err(|e| self.report(ErrorOperation::Order, None, &params, e))?;

		response::order_ack(&response, OrderOperation::Delete)
			.map_err(|e| self.report(ErrorOperation::Order, Some(response.status), &params, e))?;

		info!("Cancelled order {} on network {}", cancellation.order_uid, chain_id);
		Ok(())
	}

	/// Fetch one order, normalized if it was placed with native currency
	pub async fn get_order(
		&self,
		chain_id: SupportedChainId,
		order_uid: &str,
	) -> OrderBookResult<OrderMetadata> {
		debug!("Get order {} for network {}", order_uid, chain_id);

		let path = format!("/orders/{}", order_uid);
		let response = self
			.fetch_orders_api(chain_id, &path, HttpMethod::Get, None)
			.await?;

		if !response.is_success() {
			let error = response::lookup_failure(&response);
			warn!("Error getting order {}: {}", order_uid, error);
			return Err(error.into());
		}

		let order = response::decode_success(&response, "order")?;
		Ok(transform_eth_flow_order(order))
	}

	/// Fetch a page of an account's orders, each normalized
	///
	/// `limit` defaults to 1000 and `offset` to 0.
	pub async fn get_orders(
		&self,
		chain_id: SupportedChainId,
		owner: &str,
		limit: Option<u32>,
		offset: Option<u32>,
	) -> OrderBookResult<Vec<OrderMetadata>> {
		let limit = limit.unwrap_or(DEFAULT_ORDERS_LIMIT);
		let offset = offset.unwrap_or(0);
		debug!(
			"Get orders for {} on network {} (limit {}, offset {})",
			owner, chain_id, limit, offset
		);

		let path = format!(
			"/account/{}/orders/?limit={}&offset={}",
			owner, limit, offset
		);
		let response = self
			.fetch_orders_api(chain_id, &path, HttpMethod::Get, None)
			.await?;

		if !response.is_success() {
			let error = response::lookup_failure(&response);
			warn!("Error getting orders for {}: {}", owner, error);
			return Err(error.into());
		}

		let orders: Vec<OrderMetadata> = response::decode_success(&response, "orders")?;
		Ok(orders.into_iter().map(transform_eth_flow_order).collect())
	}

	/// Fetch settled trades of an account
	pub async fn get_trades(
		&self,
		chain_id: SupportedChainId,
		query: &TradesQuery,
	) -> OrderBookResult<Vec<TradeMetadata>> {
		debug!(
			"Get trades for {} on network {} (limit {:?}, offset {:?})",
			query.owner, chain_id, query.limit, query.offset
		);

		let mut serializer = url::form_urlencoded::Serializer::new(String::new());
		serializer.append_pair("owner", &query.owner);
		if let Some(limit) = query.limit {
			serializer.append_pair("limit", &limit.to_string());
		}
		if let Some(offset) = query.offset {
			serializer.append_pair("offset", &offset.to_string());
		}
		let path = format!("/trades?{}", serializer.finish());

		let response = self
			.fetch_orders_api(chain_id, &path, HttpMethod::Get, None)
			.await?;
		response::plain_result(&response, "trades")
	}

	/// Request a fee and price quote
	pub async fn get_quote(&self, params: &FeeQuoteParams) -> OrderBookResult<QuoteResponse> {
		let report_params = serde_json::to_value(params)?;
		let query = map_quote_params(params, &self.app_data_hash);
		debug!(
			"Get quote for network {} ({} -> {}, {:?})",
			params.chain_id, query.sell_token, query.buy_token, params.kind
		);

		let body = serde_json::to_value(&query)?;
		let response = self
			.fetch_orders_api(params.chain_id, "/quote", HttpMethod::Post, Some(body))
			.await
			.map_err(|e| self.report(ErrorOperation::Quote, None, &report_params, e))?;

		response::quote_result(&response).map_err(|e| {
			self.report(
				ErrorOperation::Quote,
				Some(response.status),
				&report_params,
				e,
			)
		})
	}

	/// Price from the legacy markets endpoint
	///
	/// Returns `None` without issuing a request when the price feed is
	/// disabled. A request that fails to complete maps to the unhandled
	/// quote error.
	pub async fn get_price_quote_legacy(
		&self,
		params: &PriceQuoteParams,
	) -> OrderBookResult<Option<PriceInformation>> {
		info!("Get price from API for network {}", params.chain_id);

		if !self.price_feed_enabled {
			debug!("Price feed disabled, skipping legacy price request");
			return Ok(None);
		}

		let report_params = serde_json::to_value(params)?;
		let kind = match params.kind {
			OrderKind::Sell => "sell",
			OrderKind::Buy => "buy",
		};
		let path = format!(
			"/markets/{}-{}/{}/{}",
			params.base_token.to_erc20_address(params.chain_id),
			params.quote_token.to_erc20_address(params.chain_id),
			kind,
			params.amount
		);

		let response = match self
			.fetch_orders_api(params.chain_id, &path, HttpMethod::Get, None)
			.await
		{
			Ok(response) => response,
			Err(error @ OrderBookError::Transport { .. }) => {
				warn!("Error getting price quote: {}", error);
				let error = OrderBookError::Quote(QuoteError::unhandled());
				return Err(self.report(ErrorOperation::Quote, None, &report_params, error));
			},
			Err(error) => {
				return Err(self.report(ErrorOperation::Quote, None, &report_params, error))
			},
		};

		response::quote_result(&response).map_err(|e| {
			self.report(
				ErrorOperation::Quote,
				Some(response.status),
				&report_params,
				e,
			)
		})
	}

	/// Price of `token_address` in the chain's native currency
	pub async fn get_native_price(
		&self,
		chain_id: SupportedChainId,
		token_address: &str,
	) -> OrderBookResult<NativePrice> {
		debug!("Get native price of {} on network {}", token_address, chain_id);

		let path = format!("/token/{}/native_price", token_address);
		let response = self
			.fetch_orders_api(chain_id, &path, HttpMethod::Get, None)
			.await?;
		response::plain_result(&response, "native price")
	}

	/// Affiliate statistics, available on mainnet only
	pub async fn get_profile_data(
		&self,
		chain_id: SupportedChainId,
		address: &str,
	) -> OrderBookResult<Option<ProfileData>> {
		info!("Get profile data for {} on network {}", address, chain_id);

		if chain_id != SupportedChainId::Mainnet {
			info!("Profile data is only available for mainnet");
			return Ok(None);
		}

		let path = format!("/profile/{}", address);
		let response = self
			.fetch(ApiConcern::Profile, chain_id, &path, HttpMethod::Get, None)
			.await?;
		response::plain_result(&response, "profile data").map(Some)
	}

	/// Published pricing strategy for a chain
	///
	/// The document is static content, so none of the fixed headers are sent.
	pub async fn get_price_strategy(
		&self,
		chain_id: SupportedChainId,
	) -> OrderBookResult<PriceStrategy> {
		info!("Get price strategy for network {}", chain_id);

		let url = self.endpoints.price_strategy_url(chain_id)?;
		let response = self.send(ApiRequest::new(HttpMethod::Get, url)).await?;
		response::plain_result(&response, "price strategy")
	}

	/// Public API URL of an order. No request is issued.
	pub fn order_link(&self, chain_id: SupportedChainId, order_uid: &str) -> EndpointResult<String> {
		let base_url = self.endpoints.order_api(chain_id)?;
		Ok(format!("{}/orders/{}", base_url, order_uid))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::transport::{TransportError, TransportResult};
	use async_trait::async_trait;
	use orderbook_types::{OrderErrorKind, SigningScheme, TokenAddress};
	use serde_json::json;
	use std::sync::Mutex;

	#[derive(Debug, Default)]
	struct StubTransport {
		reply: Option<ApiResponse>,
		requests: Mutex<Vec<ApiRequest>>,
	}

	#[async_trait]
	impl Transport for StubTransport {
		async fn send(&self, request: ApiRequest) -> TransportResult<ApiResponse> {
			let url = request.url.clone();
			self.requests.lock().unwrap().push(request);
			self.reply
				.clone()
				.ok_or(TransportError::Timeout { url })
		}
	}

	#[derive(Debug, Default)]
	struct StubReporter {
		reports: Mutex<Vec<ErrorReport>>,
	}

	impl DiagnosticsReporter for StubReporter {
		fn report(&self, report: ErrorReport) {
			self.reports.lock().unwrap().push(report);
		}
	}

	fn setup(
		reply: Option<ApiResponse>,
		price_feed_enabled: bool,
	) -> (Arc<StubTransport>, Arc<StubReporter>, OrderBookClient) {
		let transport = Arc::new(StubTransport {
			reply,
			..Default::default()
		});
		let reporter = Arc::new(StubReporter::default());
		let client = OrderBookClient::new(
			Endpoints::for_environment(orderbook_config::EnvironmentProfile::Production).unwrap(),
			transport.clone(),
			reporter.clone(),
			ClientOptions {
				app_data_hash: AppDataHash([0x11; 32]),
				price_feed_enabled,
			},
		);
		(transport, reporter, client)
	}

	fn cancellation() -> OrderCancellation {
		OrderCancellation {
			order_uid: "0xabc".to_string(),
			signature: "0xsig".to_string(),
			signing_scheme: SigningScheme::Eip712,
		}
	}

	fn price_params() -> PriceQuoteParams {
		PriceQuoteParams {
			chain_id: SupportedChainId::Mainnet,
			base_token: TokenAddress::Native,
			quote_token: TokenAddress::erc20("0x6B175474E89094C44Da98b954EedeAC495271d0F"),
			amount: "1000".to_string(),
			kind: OrderKind::Sell,
		}
	}

	#[tokio::test]
	async fn test_cancel_failure_is_reported_and_returned_unchanged() {
		let reply = ApiResponse::json(
			404,
			&json!({"errorType": "OrderNotFound", "description": "backend text"}),
		);
		let (transport, reporter, client) = setup(Some(reply), true);

		let error = client
			.cancel_order(SupportedChainId::Mainnet, &cancellation(), "0xowner")
			.await
			.unwrap_err();

		let order_error = error.as_order_error().unwrap();
		assert_eq!(order_error.kind, OrderErrorKind::OrderNotFound);

		let reports = reporter.reports.lock().unwrap();
		assert_eq!(reports.len(), 1);
		assert_eq!(reports[0].operation, ErrorOperation::Order);
		assert_eq!(reports[0].status, Some(404));
		assert_eq!(reports[0].name, "[OrderError] - OrderNotFound");
		assert_eq!(reports[0].message, error.to_string());
		assert_eq!(reports[0].params["from"], "0xowner");

		let requests = transport.requests.lock().unwrap();
		assert_eq!(requests[0].method, HttpMethod::Delete);
		assert_eq!(requests[0].url, "https://api.cow.fi/mainnet/api/v1/orders/0xabc");
		assert_eq!(requests[0].header(APP_ID_HEADER), Some(client.app_data_hash()));
	}

	#[tokio::test]
	async fn test_legacy_price_transport_failure_reports_unhandled_quote_error() {
		let (_, reporter, client) = setup(None, true);

		let error = client.get_price_quote_legacy(&price_params()).await.unwrap_err();

		assert_eq!(error.as_quote_error(), Some(&QuoteError::unhandled()));
		let reports = reporter.reports.lock().unwrap();
		assert_eq!(reports.len(), 1);
		assert_eq!(reports[0].operation, ErrorOperation::Quote);
		assert_eq!(reports[0].status, None);
		assert_eq!(reports[0].name, "[QuoteError] - UNHANDLED_ERROR");
	}

	#[tokio::test]
	async fn test_disabled_price_feed_skips_transport() {
		let (transport, reporter, client) = setup(None, false);

		let price = client.get_price_quote_legacy(&price_params()).await.unwrap();

		assert_eq!(price, None);
		assert!(transport.requests.lock().unwrap().is_empty());
		assert!(reporter.reports.lock().unwrap().is_empty());
	}

	#[tokio::test]
	async fn test_lookup_failures_are_not_reported() {
		let reply = ApiResponse::json(
			404,
			&json!({"errorType": "NotFound", "description": "Order was not found"}),
		);
		let (_, reporter, client) = setup(Some(reply), true);

		let error = client
			.get_order(SupportedChainId::Mainnet, "0xabc")
			.await
			.unwrap_err();

		assert!(error.as_order_error().is_some());
		assert!(reporter.reports.lock().unwrap().is_empty());
	}
}
