//! Error taxonomy for quote and price requests
//!
//! Quote failures share the order book's `errorType` codes with order
//! failures but mean different things to a user asking for a price, so they
//! are mapped into their own codes.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::ApiErrorObject;
use crate::orders::OrderErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QuoteErrorKind {
	UnsupportedToken,
	InsufficientLiquidity,
	FeeExceedsFrom,
	ZeroPrice,
	TransferEthToContract,
	#[serde(rename = "UNHANDLED_ERROR")]
	UnhandledError,
}

impl QuoteErrorKind {
	pub fn as_str(&self) -> &'static str {
		match self {
			QuoteErrorKind::UnsupportedToken => "UnsupportedToken",
			QuoteErrorKind::InsufficientLiquidity => "InsufficientLiquidity",
			QuoteErrorKind::FeeExceedsFrom => "FeeExceedsFrom",
			QuoteErrorKind::ZeroPrice => "ZeroPrice",
			QuoteErrorKind::TransferEthToContract => "TransferEthToContract",
			QuoteErrorKind::UnhandledError => "UNHANDLED_ERROR",
		}
	}

	pub fn details(&self) -> &'static str {
		match self {
			QuoteErrorKind::UnsupportedToken => {
				"One of the tokens you are trading is unsupported. Please read the FAQ for more info."
			},
			QuoteErrorKind::InsufficientLiquidity => "Token pair selected has insufficient liquidity.",
			QuoteErrorKind::FeeExceedsFrom => "Current fee exceeds entered \"from\" amount.",
			QuoteErrorKind::ZeroPrice => {
				"Quoted price is zero. This is likely due to a significant price difference between the two tokens. Please try increasing amounts."
			},
			QuoteErrorKind::TransferEthToContract => {
				"Buying native currency with smart contract wallets is not currently supported."
			},
			QuoteErrorKind::UnhandledError => {
				"Quote fetch failed. This may be due to a server or network connectivity issue. Please try again later."
			},
		}
	}
}

impl fmt::Display for QuoteErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A classified quote failure
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{description}")]
pub struct QuoteError {
	pub kind: QuoteErrorKind,
	pub description: String,
	pub data: Option<serde_json::Value>,
}

impl QuoteError {
	pub fn new(kind: QuoteErrorKind, description: impl Into<String>) -> Self {
		Self {
			kind,
			description: description.into(),
			data: None,
		}
	}

	/// Generic failure, used for unparseable error bodies and unknown codes
	pub fn unhandled() -> Self {
		Self::new(
			QuoteErrorKind::UnhandledError,
			QuoteErrorKind::UnhandledError.details(),
		)
	}

	/// Map a backend error body into a quote error
	pub fn from_api_error(error: &ApiErrorObject) -> Self {
		match OrderErrorKind::from_error_type(&error.error_type) {
			Some(OrderErrorKind::NotFound | OrderErrorKind::NoLiquidity) => Self::new(
				QuoteErrorKind::InsufficientLiquidity,
				QuoteErrorKind::InsufficientLiquidity.details(),
			),
			Some(OrderErrorKind::SellAmountDoesNotCoverFee) => Self {
				kind: QuoteErrorKind::FeeExceedsFrom,
				description: error.description.clone(),
				data: error.data.clone(),
			},
			Some(OrderErrorKind::UnsupportedToken) => {
				Self::new(QuoteErrorKind::UnsupportedToken, error.description.clone())
			},
			Some(OrderErrorKind::TransferEthToContract) => Self::new(
				QuoteErrorKind::TransferEthToContract,
				error.description.clone(),
			),
			_ => Self::unhandled(),
		}
	}
}
