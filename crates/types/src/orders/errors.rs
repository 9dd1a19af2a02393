//! Error taxonomy for order creation, cancellation and lookup
//!
//! The order book reports failures as an HTTP status plus an `errorType`
//! code. The same status means different things when creating and when
//! cancelling an order, so each operation has its own status table.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::models::ApiErrorObject;

/// Order error codes returned by the order book, plus the unhandled sentinels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderErrorKind {
	DuplicateOrder,
	InvalidSignature,
	MissingOrderData,
	InsufficientValidTo,
	InsufficientAllowance,
	InsufficientBalance,
	InsufficientFee,
	WrongOwner,
	NotFound,
	OrderNotFound,
	AlreadyCancelled,
	OrderFullyExecuted,
	OrderExpired,
	NoLiquidity,
	UnsupportedToken,
	AmountIsZero,
	SellAmountDoesNotCoverFee,
	TransferEthToContract,
	TransferSimulationFailed,
	#[serde(rename = "UNHANDLED_GET_ERROR")]
	UnhandledGetError,
	#[serde(rename = "UNHANDLED_CREATE_ERROR")]
	UnhandledCreateError,
	#[serde(rename = "UNHANDLED_DELETE_ERROR")]
	UnhandledDeleteError,
}

impl OrderErrorKind {
	const RECOGNIZED: [OrderErrorKind; 19] = [
		OrderErrorKind::DuplicateOrder,
		OrderErrorKind::InvalidSignature,
		OrderErrorKind::MissingOrderData,
		OrderErrorKind::InsufficientValidTo,
		OrderErrorKind::InsufficientAllowance,
		OrderErrorKind::InsufficientBalance,
		OrderErrorKind::InsufficientFee,
		OrderErrorKind::WrongOwner,
		OrderErrorKind::NotFound,
		OrderErrorKind::OrderNotFound,
		OrderErrorKind::AlreadyCancelled,
		OrderErrorKind::OrderFullyExecuted,
		OrderErrorKind::OrderExpired,
		OrderErrorKind::NoLiquidity,
		OrderErrorKind::UnsupportedToken,
		OrderErrorKind::AmountIsZero,
		OrderErrorKind::SellAmountDoesNotCoverFee,
		OrderErrorKind::TransferEthToContract,
		OrderErrorKind::TransferSimulationFailed,
	];

	/// Look up a backend `errorType`. Sentinels are never produced here.
	pub fn from_error_type(error_type: &str) -> Option<Self> {
		Self::RECOGNIZED
			.into_iter()
			.find(|kind| kind.as_str() == error_type)
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			OrderErrorKind::DuplicateOrder => "DuplicateOrder",
			OrderErrorKind::InvalidSignature => "InvalidSignature",
			OrderErrorKind::MissingOrderData => "MissingOrderData",
			OrderErrorKind::InsufficientValidTo => "InsufficientValidTo",
			OrderErrorKind::InsufficientAllowance => "InsufficientAllowance",
			OrderErrorKind::InsufficientBalance => "InsufficientBalance",
			OrderErrorKind::InsufficientFee => "InsufficientFee",
			OrderErrorKind::WrongOwner => "WrongOwner",
			OrderErrorKind::NotFound => "NotFound",
			OrderErrorKind::OrderNotFound => "OrderNotFound",
			OrderErrorKind::AlreadyCancelled => "AlreadyCancelled",
			OrderErrorKind::OrderFullyExecuted => "OrderFullyExecuted",
			OrderErrorKind::OrderExpired => "OrderExpired",
			OrderErrorKind::NoLiquidity => "NoLiquidity",
			OrderErrorKind::UnsupportedToken => "UnsupportedToken",
			OrderErrorKind::AmountIsZero => "AmountIsZero",
			OrderErrorKind::SellAmountDoesNotCoverFee => "SellAmountDoesNotCoverFee",
			OrderErrorKind::TransferEthToContract => "TransferEthToContract",
			OrderErrorKind::TransferSimulationFailed => "TransferSimulationFailed",
			OrderErrorKind::UnhandledGetError => "UNHANDLED_GET_ERROR",
			OrderErrorKind::UnhandledCreateError => "UNHANDLED_CREATE_ERROR",
			OrderErrorKind::UnhandledDeleteError => "UNHANDLED_DELETE_ERROR",
		}
	}

	/// User-facing explanation of the code
	pub fn details(&self) -> &'static str {
		match self {
			OrderErrorKind::DuplicateOrder => {
				"There was another identical order already submitted. Please try again."
			},
			OrderErrorKind::InvalidSignature => {
				"The order signature is invalid. Check whether your wallet supports off-chain signing."
			},
			OrderErrorKind::MissingOrderData => "The order has missing information.",
			OrderErrorKind::InsufficientValidTo => {
				"The order you are signing is already expired. This can happen if the expiration is short and signing took too long. Please try again."
			},
			OrderErrorKind::InsufficientAllowance => {
				"The account needs to approve the selling token in order to trade."
			},
			OrderErrorKind::InsufficientBalance => "The account doesn't have enough funds.",
			OrderErrorKind::InsufficientFee => {
				"The signed fee is insufficient. It may have increased due to a change in gas price, native currency price or sell token price. Please try again to get an updated fee quote."
			},
			OrderErrorKind::WrongOwner => {
				"The signature is invalid. The signing method provided by your wallet likely does not comply with the EIP-712 or eth_sign standards."
			},
			OrderErrorKind::NotFound => "Token pair selected has insufficient liquidity.",
			OrderErrorKind::OrderNotFound => "The order you are trying to cancel does not exist.",
			OrderErrorKind::AlreadyCancelled => {
				"The order you are trying to cancel has already been cancelled."
			},
			OrderErrorKind::OrderFullyExecuted => {
				"The order you are trying to cancel has already been executed."
			},
			OrderErrorKind::OrderExpired => "The order you are trying to cancel has already expired.",
			OrderErrorKind::NoLiquidity => "Token pair selected has insufficient liquidity.",
			OrderErrorKind::UnsupportedToken => {
				"One of the tokens you are trading is unsupported."
			},
			OrderErrorKind::AmountIsZero => "Amount is zero. Please enter a positive amount.",
			OrderErrorKind::SellAmountDoesNotCoverFee => {
				"Sell amount does not sufficiently cover the current network fee."
			},
			OrderErrorKind::TransferEthToContract => {
				"Buying native currency with smart contract wallets is not currently supported."
			},
			OrderErrorKind::TransferSimulationFailed => {
				"The transfer of the sell token failed in simulation. The token may be unsupported."
			},
			OrderErrorKind::UnhandledGetError => "The order could not be retrieved from the network.",
			OrderErrorKind::UnhandledCreateError => "The order was not accepted by the network.",
			OrderErrorKind::UnhandledDeleteError => {
				"The order cancellation was not accepted by the network."
			},
		}
	}

	pub fn is_unhandled(&self) -> bool {
		matches!(
			self,
			OrderErrorKind::UnhandledGetError
				| OrderErrorKind::UnhandledCreateError
				| OrderErrorKind::UnhandledDeleteError
		)
	}
}

impl fmt::Display for OrderErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Write operation whose status codes are being interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderOperation {
	Create,
	Delete,
}

/// Messages for the statuses that do not depend on the backend error code
struct StatusMessages {
	forbidden: &'static str,
	too_many_requests: &'static str,
	fallback: &'static str,
	unhandled: OrderErrorKind,
}

const CREATE_STATUS_MESSAGES: StatusMessages = StatusMessages {
	forbidden: "The order cannot be accepted. Your account is deny-listed.",
	too_many_requests:
		"The order cannot be accepted. Too many order placements. Please, retry in a minute",
	fallback: "Error creating the order",
	unhandled: OrderErrorKind::UnhandledCreateError,
};

const DELETE_STATUS_MESSAGES: StatusMessages = StatusMessages {
	forbidden: "The order cannot be cancelled. Your account is deny-listed.",
	too_many_requests:
		"The order cannot be cancelled. Too many order cancellations. Please, retry in a minute",
	fallback: "Error cancelling the order",
	unhandled: OrderErrorKind::UnhandledDeleteError,
};

impl OrderOperation {
	fn status_messages(&self) -> &'static StatusMessages {
		match self {
			OrderOperation::Create => &CREATE_STATUS_MESSAGES,
			OrderOperation::Delete => &DELETE_STATUS_MESSAGES,
		}
	}

	/// Sentinel used when a failure carries no usable error code
	pub fn unhandled_kind(&self) -> OrderErrorKind {
		self.status_messages().unhandled
	}

	/// Describe a failed response using this operation's status table
	pub fn describe_status(&self, status: u16, error: &ApiErrorObject) -> &'static str {
		let messages = self.status_messages();
		match status {
			400 | 404 => OrderErrorKind::from_error_type(&error.error_type)
				.unwrap_or(messages.unhandled)
				.details(),
			403 => messages.forbidden,
			429 => messages.too_many_requests,
			_ => messages.fallback,
		}
	}
}

impl fmt::Display for OrderOperation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			OrderOperation::Create => f.write_str("create"),
			OrderOperation::Delete => f.write_str("delete"),
		}
	}
}

/// A classified order failure
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{description}")]
pub struct OrderError {
	pub kind: OrderErrorKind,
	/// `errorType` exactly as the backend sent it
	pub error_type: String,
	pub description: String,
	pub data: Option<serde_json::Value>,
}

impl OrderError {
	pub fn new(kind: OrderErrorKind, description: impl Into<String>) -> Self {
		Self {
			kind,
			error_type: kind.as_str().to_string(),
			description: description.into(),
			data: None,
		}
	}

	/// Sentinel error carrying the sentinel's own description
	pub fn unhandled(kind: OrderErrorKind) -> Self {
		Self::new(kind, kind.details())
	}

	/// Map a failed create/delete response through the operation's status table
	pub fn from_status(status: u16, error: &ApiErrorObject, operation: OrderOperation) -> Self {
		let kind = OrderErrorKind::from_error_type(&error.error_type)
			.unwrap_or_else(|| operation.unhandled_kind());

		Self {
			kind,
			error_type: error.error_type.clone(),
			description: operation.describe_status(status, error).to_string(),
			data: error.data.clone(),
		}
	}

	/// Map a failed lookup. The backend description is kept as is.
	pub fn from_lookup(error: &ApiErrorObject) -> Self {
		let kind = OrderErrorKind::from_error_type(&error.error_type)
			.unwrap_or(OrderErrorKind::UnhandledGetError);
		let description = if error.description.is_empty() {
			kind.details().to_string()
		} else {
			error.description.clone()
		};

		Self {
			kind,
			error_type: error.error_type.clone(),
			description,
			data: error.data.clone(),
		}
	}
}
