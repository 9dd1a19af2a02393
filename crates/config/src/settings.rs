//! Configuration settings structures

use crate::configurable_value::ConfigurableValue;
use orderbook_types::{AppDataDoc, AppDataHash, SupportedChainId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Where the published price strategy documents live
pub const DEFAULT_STRATEGY_BASE_URL: &str =
	"https://raw.githubusercontent.com/cowprotocol/cowswap/configuration/config";

/// Main client settings
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Settings {
	pub environment: EnvironmentProfile,
	pub api: ApiSettings,
	pub price_feed: PriceFeedSettings,
	pub app_data: AppDataSettings,
	pub timeouts: TimeoutSettings,
	pub logging: LoggingSettings,
}

/// Deployment environment the client runs in
///
/// Local, development, PR and barn builds talk to the staging ("barn")
/// backend. Everything else talks to production.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum EnvironmentProfile {
	Local,
	Development,
	Pr,
	Barn,
	Staging,
	Ens,
	#[default]
	Production,
}

impl EnvironmentProfile {
	pub fn uses_barn_api(&self) -> bool {
		matches!(
			self,
			EnvironmentProfile::Local
				| EnvironmentProfile::Development
				| EnvironmentProfile::Pr
				| EnvironmentProfile::Barn
		)
	}

	/// Folder of the price strategy documents for this environment
	pub fn strategy_environment(&self) -> &'static str {
		match self {
			EnvironmentProfile::Production => "production",
			_ => "barn",
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			EnvironmentProfile::Local => "local",
			EnvironmentProfile::Development => "development",
			EnvironmentProfile::Pr => "pr",
			EnvironmentProfile::Barn => "barn",
			EnvironmentProfile::Staging => "staging",
			EnvironmentProfile::Ens => "ens",
			EnvironmentProfile::Production => "production",
		}
	}
}

impl fmt::Display for EnvironmentProfile {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Per-chain endpoint overrides
///
/// A chain listed here replaces the built-in host for that concern. Values
/// are base hosts without the `/v1` suffix, e.g. `http://localhost:8080/api`.
/// An empty value removes the chain, so requests for it fail as unsupported.
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ApiSettings {
	pub order_urls: HashMap<SupportedChainId, ConfigurableValue>,
	pub profile_urls: HashMap<SupportedChainId, ConfigurableValue>,
	/// Full strategy document URLs
	pub strategy_urls: HashMap<SupportedChainId, ConfigurableValue>,
	pub strategy_base_url: String,
}

impl Default for ApiSettings {
	fn default() -> Self {
		Self {
			order_urls: HashMap::new(),
			profile_urls: HashMap::new(),
			strategy_urls: HashMap::new(),
			strategy_base_url: DEFAULT_STRATEGY_BASE_URL.to_string(),
		}
	}
}

/// Legacy price feed toggle
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PriceFeedSettings {
	pub enabled: bool,
}

impl Default for PriceFeedSettings {
	fn default() -> Self {
		Self { enabled: true }
	}
}

/// Identity of the application placing orders
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppDataSettings {
	pub app_code: String,
	pub environment: Option<String>,
	pub version: String,
	/// Pre-computed hash, used instead of hashing the document
	pub hash: Option<String>,
}

impl Default for AppDataSettings {
	fn default() -> Self {
		Self {
			app_code: "CowSwap".to_string(),
			environment: None,
			version: "0.1.0".to_string(),
			hash: None,
		}
	}
}

/// Timeout configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct TimeoutSettings {
	/// Request timeout for the HTTP client
	pub request_ms: u64,
}

impl Default for TimeoutSettings {
	fn default() -> Self {
		Self { request_ms: 10_000 }
	}
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

#[derive(Debug, Error)]
pub enum ConfigValidationError {
	#[error("Invalid app data hash '{value}': {reason}")]
	InvalidAppDataHash { value: String, reason: String },
	#[error("Failed to encode app data document: {0}")]
	AppDataEncoding(#[from] serde_json::Error),
}

impl Settings {
	/// Check if running against production
	pub fn is_production(&self) -> bool {
		self.environment == EnvironmentProfile::Production
	}

	/// App data document described by these settings
	pub fn app_data_doc(&self) -> AppDataDoc {
		AppDataDoc::new(
			self.app_data.app_code.clone(),
			self.app_data.environment.clone(),
			self.app_data.version.clone(),
		)
	}

	/// The configured override, or the hash of the app data document
	pub fn app_data_hash(&self) -> Result<AppDataHash, ConfigValidationError> {
		match &self.app_data.hash {
			Some(value) => AppDataHash::from_hex(value).map_err(|e| {
				ConfigValidationError::InvalidAppDataHash {
					value: value.clone(),
					reason: e.to_string(),
				}
			}),
			None => Ok(self.app_data_doc().hash()?),
		}
	}
}
