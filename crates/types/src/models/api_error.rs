//! Error body returned by the order book on non-success responses

use serde::{Deserialize, Serialize};

/// `{ "errorType": "...", "description": "...", "data": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorObject {
	pub error_type: String,
	#[serde(default)]
	pub description: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub data: Option<serde_json::Value>,
}

impl ApiErrorObject {
	pub fn new(error_type: impl Into<String>, description: impl Into<String>) -> Self {
		Self {
			error_type: error_type.into(),
			description: description.into(),
			data: None,
		}
	}
}
