//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};
use thiserror::Error;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config/config";

#[derive(Debug, Error)]
pub enum ConfigLoadError {
	#[error("Failed to load configuration: {0}")]
	Config(#[from] ConfigError),
}

/// Load configuration from the optional config file and `ORDERBOOK__*`
/// environment variables
///
/// The file path defaults to `config/config` and can be changed with
/// `CONFIG_PATH`. A `.env` file is read first when present.
pub fn load_config() -> Result<Settings, ConfigLoadError> {
	dotenvy::dotenv().ok();

	let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
	debug!("Loading configuration from '{}'", path);

	let s = Config::builder()
		.add_source(File::with_name(&path).required(false))
		.add_source(Environment::with_prefix("ORDERBOOK").separator("__"))
		.build()?;

	Ok(s.try_deserialize()?)
}
