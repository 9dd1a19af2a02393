//! Failure reporting for order and quote requests
//!
//! Reports are a side effect: a reporter observes a failure before the
//! client returns it and has no way to change it.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::error;

use crate::error::OrderBookError;

/// Pipeline a failure happened in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ErrorOperation {
	Order,
	Quote,
}

impl ErrorOperation {
	pub fn as_str(&self) -> &'static str {
		match self {
			ErrorOperation::Order => "ORDER",
			ErrorOperation::Quote => "QUOTE",
		}
	}
}

impl fmt::Display for ErrorOperation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorReport {
	pub operation: ErrorOperation,
	pub name: String,
	pub message: String,
	/// Backend HTTP status, absent when no response was received
	pub status: Option<u16>,
	pub tags: BTreeMap<String, String>,
	/// Parameters of the failed call
	pub params: serde_json::Value,
}

impl ErrorReport {
	pub fn new(
		operation: ErrorOperation,
		error: &OrderBookError,
		status: Option<u16>,
		params: serde_json::Value,
	) -> Self {
		let mut tags = BTreeMap::new();
		tags.insert("errorType".to_string(), operation.to_string());
		if let Some(status) = status {
			tags.insert("backendErrorCode".to_string(), status.to_string());
		}

		let name = match error {
			OrderBookError::Order(order_error) => {
				tags.insert("orderErrorType".to_string(), order_error.kind.to_string());
				format!("[OrderError] - {}", order_error.kind)
			},
			OrderBookError::Quote(quote_error) => {
				tags.insert("quoteErrorType".to_string(), quote_error.kind.to_string());
				format!("[QuoteError] - {}", quote_error.kind)
			},
			_ => format!("[{}-ERROR] - Unmapped {} Error", operation, operation),
		};

		Self {
			operation,
			name,
			message: error.to_string(),
			status,
			tags,
			params,
		}
	}
}

pub trait DiagnosticsReporter: Send + Sync + fmt::Debug {
	fn report(&self, report: ErrorReport);
}

/// Emits each report as a structured `tracing` error event
#[derive(Debug, Clone, Default)]
pub struct TracingReporter;

impl DiagnosticsReporter for TracingReporter {
	fn report(&self, report: ErrorReport) {
		error!(
			operation = %report.operation,
			name = %report.name,
			status = ?report.status,
			tags = ?report.tags,
			params = %report.params,
			"{}",
			report.message
		);
	}
}
