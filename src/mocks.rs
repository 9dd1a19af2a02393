//! Mock transport and reporter for examples and testing
//!
//! [`MockTransport`] answers from a queue of canned responses and records
//! every request it receives. [`RecordingReporter`] keeps every diagnostics
//! report instead of logging it.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use orderbook_api::{
	ApiRequest, ApiResponse, DiagnosticsReporter, ErrorReport, Transport, TransportError,
	TransportResult,
};
use orderbook_config::Settings;
use orderbook_types::serde_json::Value;

use crate::{BuilderError, OrderBookClient, OrderBookClientBuilder};

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
	mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Canned outcome of one request
#[derive(Debug)]
pub enum MockReply {
	Response(ApiResponse),
	/// The request never completes
	Timeout,
}

/// Transport that replays queued replies in order
///
/// When the queue is empty it answers `500` with a JSON error body.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
	replies: Arc<Mutex<VecDeque<MockReply>>>,
	requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
	pub fn new() -> Self {
		Self::default()
	}

	/// Queue a raw response
	pub fn push_response(&self, response: ApiResponse) -> &Self {
		lock(&self.replies).push_back(MockReply::Response(response));
		self
	}

	/// Queue a JSON response
	pub fn push_json(&self, status: u16, body: Value) -> &Self {
		self.push_response(ApiResponse::json(status, &body))
	}

	/// Queue a backend error body `{errorType, description}`
	pub fn push_api_error(&self, status: u16, error_type: &str, description: &str) -> &Self {
		self.push_json(
			status,
			orderbook_types::serde_json::json!({
				"errorType": error_type,
				"description": description,
			}),
		)
	}

	/// Queue a request that fails before any response arrives
	pub fn push_timeout(&self) -> &Self {
		lock(&self.replies).push_back(MockReply::Timeout);
		self
	}

	/// Every request received so far
	pub fn requests(&self) -> Vec<ApiRequest> {
		lock(&self.requests).clone()
	}

	pub fn request_count(&self) -> usize {
		lock(&self.requests).len()
	}

	pub fn last_request(&self) -> Option<ApiRequest> {
		lock(&self.requests).last().cloned()
	}
}

#[async_trait]
impl Transport for MockTransport {
	async fn send(&self, request: ApiRequest) -> TransportResult<ApiResponse> {
		let url = request.url.clone();
		lock(&self.requests).push(request);

		match lock(&self.replies).pop_front() {
			Some(MockReply::Response(response)) => Ok(response),
			Some(MockReply::Timeout) => Err(TransportError::Timeout { url }),
			None => Ok(ApiResponse::json(
				500,
				&orderbook_types::serde_json::json!({
					"errorType": "InternalServerError",
					"description": "no mock response queued",
				}),
			)),
		}
	}
}

/// Reporter that keeps every report for inspection
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
	reports: Arc<Mutex<Vec<ErrorReport>>>,
}

impl RecordingReporter {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn reports(&self) -> Vec<ErrorReport> {
		lock(&self.reports).clone()
	}
}

impl DiagnosticsReporter for RecordingReporter {
	fn report(&self, report: ErrorReport) {
		lock(&self.reports).push(report);
	}
}

/// Client wired to the given mocks
pub fn mock_client(
	settings: Settings,
	transport: &MockTransport,
	reporter: &RecordingReporter,
) -> Result<OrderBookClient, BuilderError> {
	OrderBookClientBuilder::new()
		.with_settings(settings)
		.with_transport(Arc::new(transport.clone()))
		.with_reporter(Arc::new(reporter.clone()))
		.build()
}
