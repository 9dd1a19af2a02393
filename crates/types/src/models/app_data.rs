//! App data document and its keccak-256 hash
//!
//! The hash identifies the submitting application. It is sent as the
//! `X-AppId` header on every order book request and as the `appData` field
//! of quote requests.

use serde::{Deserialize, Serialize};
use std::fmt;
use tiny_keccak::{Hasher, Keccak};

/// Metadata document describing the application that places orders
///
/// Fields are declared in lexicographic order so the compact JSON encoding is
/// deterministic and matches what other clients hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppDataDoc {
	pub app_code: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub environment: Option<String>,
	#[serde(default)]
	pub metadata: serde_json::Map<String, serde_json::Value>,
	pub version: String,
}

/// 32-byte app data hash, displayed as `0x`-prefixed lowercase hex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AppDataHash(pub [u8; 32]);

impl AppDataDoc {
	pub fn new(app_code: impl Into<String>, environment: Option<String>, version: impl Into<String>) -> Self {
		Self {
			app_code: app_code.into(),
			environment,
			metadata: serde_json::Map::new(),
			version: version.into(),
		}
	}

	pub fn hash(&self) -> Result<AppDataHash, serde_json::Error> {
		let encoded = serde_json::to_vec(self)?;
		Ok(AppDataHash(keccak256(&encoded)))
	}
}

impl AppDataHash {
	/// Parse a `0x`-prefixed 32-byte hex string
	pub fn from_hex(value: &str) -> Result<Self, hex::FromHexError> {
		let stripped = value.strip_prefix("0x").unwrap_or(value);
		let mut bytes = [0u8; 32];
		hex::decode_to_slice(stripped, &mut bytes)?;
		Ok(Self(bytes))
	}
}

impl fmt::Display for AppDataHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "0x{}", hex::encode(self.0))
	}
}

pub fn keccak256(data: &[u8]) -> [u8; 32] {
	let mut hasher = Keccak::v256();
	let mut output = [0u8; 32];
	hasher.update(data);
	hasher.finalize(&mut output);
	output
}
