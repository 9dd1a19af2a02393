//! Configurable values that can load from environment variables or plain values

use serde::{Deserialize, Serialize};
use std::fmt;

/// A configuration string, either used as is or read from an environment
/// variable when written as `env:NAME`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConfigurableValue {
	Plain(String),
	Env(String),
}

impl ConfigurableValue {
	/// Create a new environment variable reference
	pub fn from_env(env_var_name: &str) -> Self {
		Self::Env(env_var_name.to_string())
	}

	/// Create a new plain value
	pub fn from_plain(plain_value: &str) -> Self {
		Self::Plain(plain_value.to_string())
	}

	/// Resolve the actual value, reading the environment for `Env`
	pub fn resolve(&self) -> Result<String, ConfigurableValueError> {
		match self {
			Self::Env(name) => std::env::var(name)
				.map_err(|_| ConfigurableValueError::EnvironmentVariableNotFound(name.clone())),
			Self::Plain(value) => Ok(value.clone()),
		}
	}

	/// Get a description of this configurable value for logging
	pub fn description(&self) -> String {
		match self {
			Self::Env(name) => format!("environment variable '{}'", name),
			Self::Plain(_) => "configured plain value".to_string(),
		}
	}
}

/// Errors that can occur when resolving configurable values
#[derive(Debug, thiserror::Error)]
pub enum ConfigurableValueError {
	#[error("Environment variable '{0}' not found")]
	EnvironmentVariableNotFound(String),
}

impl fmt::Display for ConfigurableValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Env(name) => write!(f, "env:{}", name),
			Self::Plain(value) => f.write_str(value),
		}
	}
}

impl From<&str> for ConfigurableValue {
	fn from(value: &str) -> Self {
		if let Some(env_var) = value.strip_prefix("env:") {
			Self::from_env(env_var)
		} else {
			Self::from_plain(value)
		}
	}
}

impl From<String> for ConfigurableValue {
	fn from(value: String) -> Self {
		ConfigurableValue::from(value.as_str())
	}
}

impl From<ConfigurableValue> for String {
	fn from(value: ConfigurableValue) -> Self {
		value.to_string()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::env;

	#[test]
	fn test_plain_value() {
		let config = ConfigurableValue::from_plain("https://example.org/api");
		assert_eq!(config.resolve().unwrap(), "https://example.org/api");
		assert_eq!(config.description(), "configured plain value");
	}

	#[test]
	fn test_env_value() {
		env::set_var("ORDERBOOK_TEST_MAINNET_URL", "https://mainnet.example.org/api");

		let config = ConfigurableValue::from("env:ORDERBOOK_TEST_MAINNET_URL");
		assert_eq!(config, ConfigurableValue::Env("ORDERBOOK_TEST_MAINNET_URL".to_string()));
		assert_eq!(config.resolve().unwrap(), "https://mainnet.example.org/api");

		env::remove_var("ORDERBOOK_TEST_MAINNET_URL");
	}

	#[test]
	fn test_env_value_not_found() {
		let config = ConfigurableValue::from_env("ORDERBOOK_NON_EXISTENT_VAR");
		assert!(matches!(
			config.resolve(),
			Err(ConfigurableValueError::EnvironmentVariableNotFound(name)) if name == "ORDERBOOK_NON_EXISTENT_VAR"
		));
	}

	#[test]
	fn test_serde_uses_prefixed_string_form() {
		let config: ConfigurableValue = serde_json::from_str("\"env:MY_URL\"").unwrap();
		assert_eq!(config, ConfigurableValue::from_env("MY_URL"));
		assert_eq!(serde_json::to_string(&config).unwrap(), "\"env:MY_URL\"");

		let plain: ConfigurableValue = serde_json::from_str("\"http://localhost:8080\"").unwrap();
		assert_eq!(plain, ConfigurableValue::from_plain("http://localhost:8080"));
	}
}
