//! Order Book Configuration
//!
//! Settings, loading and startup utilities for the order book client.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError};
pub use loader::{load_config, ConfigLoadError};
pub use settings::{
	ApiSettings, AppDataSettings, ConfigValidationError, EnvironmentProfile, LogFormat,
	LoggingSettings, PriceFeedSettings, Settings, TimeoutSettings, DEFAULT_STRATEGY_BASE_URL,
};
pub use startup_logger::{log_client_ready, log_service_info};
