//! Interpretation of raw order book responses
//!
//! Each function takes a response that has already arrived and turns it into
//! a decoded payload or exactly one classified error.

use orderbook_types::{
	ApiErrorObject, OrderError, OrderErrorKind, OrderOperation, QuoteError,
};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::error::{OrderBookError, OrderBookResult};
use crate::transport::ApiResponse;

/// Error body of a failed response, if it has one
pub fn decode_error_body(response: &ApiResponse) -> Option<ApiErrorObject> {
	match response.decode::<ApiErrorObject>() {
		Ok(error) => Some(error),
		Err(e) => {
			debug!(
				"Undecodable error body (status {}): {}",
				response.status, e
			);
			None
		},
	}
}

/// Decode a successful body
pub fn decode_success<T: DeserializeOwned>(
	response: &ApiResponse,
	context: &str,
) -> OrderBookResult<T> {
	response
		.decode()
		.map_err(|e| OrderBookError::decode(context, e))
}

/// Map a failed order create/delete response through the operation's table
pub fn order_failure(response: &ApiResponse, operation: OrderOperation) -> OrderError {
	match decode_error_body(response) {
		Some(error) => OrderError::from_status(response.status, &error, operation),
		None => OrderError::unhandled(operation.unhandled_kind()),
	}
}

/// Order pipeline: decoded body on success, classified order error otherwise
pub fn order_result<T: DeserializeOwned>(
	response: &ApiResponse,
	operation: OrderOperation,
) -> OrderBookResult<T> {
	if response.is_success() {
		decode_success(response, "order")
	} else {
		let error = order_failure(response, operation);
		warn!(
			"Order {} failed with status {}: {} ({})",
			operation, response.status, error.description, error.error_type
		);
		Err(error.into())
	}
}

/// Order pipeline for responses whose success body is not consumed
pub fn order_ack(response: &ApiResponse, operation: OrderOperation) -> OrderBookResult<()> {
	if response.is_success() {
		Ok(())
	} else {
		let error = order_failure(response, operation);
		warn!(
			"Order {} failed with status {}: {} ({})",
			operation, response.status, error.description, error.error_type
		);
		Err(error.into())
	}
}

/// Map a failed order lookup
pub fn lookup_failure(response: &ApiResponse) -> OrderError {
	match decode_error_body(response) {
		Some(error) => OrderError::from_lookup(&error),
		None => OrderError::unhandled(OrderErrorKind::UnhandledGetError),
	}
}

/// Map a failed quote or price response
///
/// Non-JSON bodies (gateway HTML pages and the like) are not parsed at all.
pub fn quote_failure(response: &ApiResponse) -> QuoteError {
	if !response.is_json() {
		debug!(
			"Quote failed with non-JSON body (status {}, content type {:?})",
			response.status, response.content_type
		);
		return QuoteError::unhandled();
	}

	match decode_error_body(response) {
		Some(error) => QuoteError::from_api_error(&error),
		None => QuoteError::unhandled(),
	}
}

/// Quote pipeline: decoded body on success, classified quote error otherwise
pub fn quote_result<T: DeserializeOwned>(response: &ApiResponse) -> OrderBookResult<T> {
	if response.is_success() {
		decode_success(response, "quote")
	} else {
		let error = quote_failure(response);
		warn!(
			"Quote failed with status {}: {} ({})",
			response.status, error.description, error.kind
		);
		Err(error.into())
	}
}

/// Generic failure for reads without an error taxonomy
pub fn request_failure(response: &ApiResponse, context: &str) -> OrderBookError {
	let message = decode_error_body(response)
		.map(|error| error.description)
		.filter(|description| !description.is_empty())
		.unwrap_or_else(|| response.text());

	OrderBookError::Request {
		context: context.to_string(),
		status: response.status,
		message,
	}
}

/// Decoded body on success, [`request_failure`] otherwise
pub fn plain_result<T: DeserializeOwned>(
	response: &ApiResponse,
	context: &str,
) -> OrderBookResult<T> {
	if response.is_success() {
		decode_success(response, context)
	} else {
		let error = request_failure(response, context);
		warn!("{}", error);
		Err(error)
	}
}
