//! Order Book Client Library
//!
//! Typed async client for the order book API: order submission and
//! cancellation, order and trade lookups, fee quotes and legacy prices,
//! with backend failures mapped into order and quote error taxonomies.

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

// Core domain types
pub use orderbook_types::{
	chrono, serde_json, ApiErrorObject, AppDataDoc, AppDataHash, FeeQuoteParams, NativePrice,
	OrderCancellation, OrderCreation, OrderError, OrderErrorKind, OrderKind, OrderMetadata,
	OrderStatus, OrderUid, PriceInformation, PriceQuality, PriceQuoteParams, PriceStrategy,
	PriceStrategyKind, ProfileData, QuoteError, QuoteErrorKind, QuoteResponse, SigningScheme,
	SupportedChainId, TokenAddress, TradeMetadata, TradesQuery, NATIVE_CURRENCY_BUY_ADDRESS,
	ZERO_ADDRESS,
};

// Client layer
pub use orderbook_api::{
	ApiConcern, ApiRequest, ApiResponse, ClientOptions, DiagnosticsReporter, EndpointError,
	Endpoints, ErrorOperation, ErrorReport, HttpMethod, HttpTransport, OrderBookClient,
	OrderBookError, OrderBookResult, TracingReporter, Transport, TransportError,
};

// Config
pub use orderbook_config::{
	load_config, log_client_ready, log_service_info, ConfigLoadError, ConfigValidationError,
	EnvironmentProfile, LogFormat, Settings,
};

pub mod models {
	pub use orderbook_types::*;
}

pub mod config {
	pub use orderbook_config::*;
}

pub mod api {
	pub use orderbook_api::*;
}

pub mod mocks;

// Re-export external dependencies for custom transports
pub use async_trait;
pub use reqwest;

#[derive(Debug, Error)]
pub enum BuilderError {
	#[error(transparent)]
	Config(#[from] ConfigLoadError),

	#[error(transparent)]
	Validation(#[from] ConfigValidationError),

	#[error(transparent)]
	Endpoint(#[from] EndpointError),

	#[error("Failed to create HTTP transport: {0}")]
	Transport(#[from] TransportError),

	#[error("Failed to initialize tracing: {0}")]
	Tracing(String),
}

/// Builder for [`OrderBookClient`]
///
/// Settings default to [`Settings::default`], the transport to reqwest and
/// the reporter to [`TracingReporter`]. Tracing is only initialized when
/// requested, since a library should not claim the global subscriber.
#[derive(Default)]
pub struct OrderBookClientBuilder {
	settings: Option<Settings>,
	transport: Option<Arc<dyn Transport>>,
	reporter: Option<Arc<dyn DiagnosticsReporter>>,
	init_tracing: bool,
}

impl OrderBookClientBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	/// Start from settings loaded from the config file and environment
	pub fn from_config() -> Result<Self, BuilderError> {
		Ok(Self::new().with_settings(load_config()?))
	}

	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	pub fn with_transport(mut self, transport: Arc<dyn Transport>) -> Self {
		self.transport = Some(transport);
		self
	}

	pub fn with_reporter(mut self, reporter: Arc<dyn DiagnosticsReporter>) -> Self {
		self.reporter = Some(reporter);
		self
	}

	/// Install a global tracing subscriber from the logging settings on build
	pub fn with_tracing(mut self, enabled: bool) -> Self {
		self.init_tracing = enabled;
		self
	}

	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	pub fn build(self) -> Result<OrderBookClient, BuilderError> {
		let settings = self.settings.unwrap_or_default();

		if self.init_tracing {
			init_tracing(&settings)?;
			log_service_info(&settings);
		}

		let endpoints = Endpoints::from_settings(&settings.api, settings.environment)?;
		let app_data_hash = settings.app_data_hash()?;

		let transport: Arc<dyn Transport> = match self.transport {
			Some(transport) => transport,
			None => Arc::new(HttpTransport::new(Duration::from_millis(
				settings.timeouts.request_ms,
			))?),
		};
		let reporter: Arc<dyn DiagnosticsReporter> = match self.reporter {
			Some(reporter) => reporter,
			None => Arc::new(TracingReporter),
		};

		log_client_ready(&app_data_hash.to_string());

		Ok(OrderBookClient::new(
			endpoints,
			transport,
			reporter,
			ClientOptions {
				app_data_hash,
				price_feed_enabled: settings.price_feed.enabled,
			},
		))
	}
}

/// Initialize tracing with configuration-based settings
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init_tracing(settings: &Settings) -> Result<(), BuilderError> {
	let log_level = &settings.logging.level;
	let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

	let result = match settings.logging.format {
		LogFormat::Json => {
			let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
		LogFormat::Pretty => {
			let subscriber = tracing_subscriber::fmt()
				.pretty()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
		LogFormat::Compact => {
			let subscriber = tracing_subscriber::fmt()
				.compact()
				.with_env_filter(env_filter);

			if settings.logging.structured {
				subscriber.with_target(true).with_thread_ids(true).try_init()
			} else {
				subscriber.try_init()
			}
		},
	};
	result.map_err(|e| BuilderError::Tracing(e.to_string()))?;

	info!(
		"Logging configuration applied: level={}, format={:?}, structured={}",
		settings.logging.level, settings.logging.format, settings.logging.structured
	);

	Ok(())
}
