//! Errors returned by the order book client

use orderbook_types::{OrderError, QuoteError};
use thiserror::Error;

use crate::endpoints::EndpointError;
use crate::transport::TransportError;

/// Every failure a client operation can end in
///
/// Order and quote failures are already classified when they reach this
/// type. The remaining variants cover failures that carry no backend code.
#[derive(Debug, Error)]
pub enum OrderBookError {
	#[error(transparent)]
	Order(#[from] OrderError),

	#[error(transparent)]
	Quote(#[from] QuoteError),

	#[error(transparent)]
	Endpoint(#[from] EndpointError),

	#[error("Request to {url} failed: {source}")]
	Transport {
		url: String,
		#[source]
		source: TransportError,
	},

	#[error("Failed to decode {context} response: {reason}")]
	Decode { context: String, reason: String },

	#[error("Failed to encode request: {0}")]
	Serialization(#[from] serde_json::Error),

	#[error("Error getting {context} (status {status}): {message}")]
	Request {
		context: String,
		status: u16,
		message: String,
	},
}

impl OrderBookError {
	pub fn decode(context: &str, reason: impl ToString) -> Self {
		Self::Decode {
			context: context.to_string(),
			reason: reason.to_string(),
		}
	}

	/// Classified order error, when this is one
	pub fn as_order_error(&self) -> Option<&OrderError> {
		match self {
			OrderBookError::Order(error) => Some(error),
			_ => None,
		}
	}

	/// Classified quote error, when this is one
	pub fn as_quote_error(&self) -> Option<&QuoteError> {
		match self {
			OrderBookError::Quote(error) => Some(error),
			_ => None,
		}
	}
}

pub type OrderBookResult<T> = Result<T, OrderBookError>;
