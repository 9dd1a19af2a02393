//! Startup logging for the order book client

use std::env;
use tracing::info;

use crate::Settings;

/// Logs client information at startup
pub fn log_service_info(settings: &Settings) {
	let service_name = "orderbook-client";
	let service_version = env!("CARGO_PKG_VERSION");

	info!("=== Order Book Client Starting ===");
	info!("🚀 Service: {} v{}", service_name, service_version);
	info!("🌍 Environment: {}", settings.environment);
	info!(
		"📈 Price feed: {}",
		if settings.price_feed.enabled { "enabled" } else { "disabled" }
	);

	for (chain, url) in &settings.api.order_urls {
		info!("🔗 Order API override for {}: {}", chain.network_name(), url.description());
	}

	if let Ok(config_path) = env::var("CONFIG_PATH") {
		info!("📋 Config Path: {}", config_path);
	}

	if let Ok(rust_log) = env::var("RUST_LOG") {
		info!("🔧 Log Level: {}", rust_log);
	}
}

/// Logs that the client is constructed and ready to issue requests
pub fn log_client_ready(app_data_hash: &str) {
	info!("✅ Order Book Client ready");
	info!("🪪 App data hash: {}", app_data_hash);
}
