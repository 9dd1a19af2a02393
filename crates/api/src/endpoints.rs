//! Endpoint resolution per chain and backend concern
//!
//! The table is built once from settings. Resolution afterwards is a pure
//! lookup, so an unsupported chain fails before any request is issued.

use orderbook_config::{ApiSettings, ConfigurableValue, EnvironmentProfile};
use orderbook_types::SupportedChainId;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;
use tracing::debug;

const PRODUCTION_HOST: &str = "https://api.cow.fi";
const BARN_HOST: &str = "https://barn.api.cow.fi";
const API_VERSION: &str = "v1";

/// Backend APIs the client talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiConcern {
	Orders,
	Profile,
	PriceStrategy,
}

impl fmt::Display for ApiConcern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ApiConcern::Orders => f.write_str("order book"),
			ApiConcern::Profile => f.write_str("profile"),
			ApiConcern::PriceStrategy => f.write_str("price strategy"),
		}
	}
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EndpointError {
	#[error("Unsupported network. The {api} API is not deployed in the network {chain_id}")]
	UnsupportedNetwork { api: ApiConcern, chain_id: u64 },

	#[error("Invalid {api} endpoint for network {chain_id}: {reason}")]
	InvalidEndpoint {
		api: ApiConcern,
		chain_id: u64,
		reason: String,
	},
}

pub type EndpointResult<T> = Result<T, EndpointError>;

/// Resolved base URLs for every chain and concern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
	environment: EnvironmentProfile,
	orders: HashMap<SupportedChainId, String>,
	profile: HashMap<SupportedChainId, String>,
	strategy: HashMap<SupportedChainId, String>,
}

impl Endpoints {
	/// Build the table from the built-in hosts for `environment`, replacing
	/// any chain listed in the settings overrides
	pub fn from_settings(
		settings: &ApiSettings,
		environment: EnvironmentProfile,
	) -> EndpointResult<Self> {
		let host = if environment.uses_barn_api() {
			BARN_HOST
		} else {
			PRODUCTION_HOST
		};

		let mut orders: HashMap<_, _> = SupportedChainId::ALL
			.iter()
			.map(|chain| (*chain, format!("{}/{}/api", host, chain.network_name())))
			.collect();
		let mut profile = HashMap::from([(
			SupportedChainId::Mainnet,
			format!("{}/affiliate/api", host),
		)]);

		let strategy_base = settings.strategy_base_url.trim_end_matches('/');
		let mut strategy: HashMap<_, _> = SupportedChainId::ALL
			.iter()
			.map(|chain| {
				let url = format!(
					"{}/{}/strategies/strategy-{}.json",
					strategy_base,
					environment.strategy_environment(),
					chain.chain_id()
				);
				(*chain, url)
			})
			.collect();

		apply_overrides(&mut orders, &settings.order_urls, ApiConcern::Orders)?;
		apply_overrides(&mut profile, &settings.profile_urls, ApiConcern::Profile)?;
		apply_overrides(
			&mut strategy,
			&settings.strategy_urls,
			ApiConcern::PriceStrategy,
		)?;

		debug!(
			"Resolved endpoints for '{}' environment: {} order, {} profile, {} strategy",
			environment,
			orders.len(),
			profile.len(),
			strategy.len()
		);

		Ok(Self {
			environment,
			orders,
			profile,
			strategy,
		})
	}

	/// Endpoints for one environment without overrides
	pub fn for_environment(environment: EnvironmentProfile) -> EndpointResult<Self> {
		Self::from_settings(&ApiSettings::default(), environment)
	}

	pub fn environment(&self) -> EnvironmentProfile {
		self.environment
	}

	/// Base URL for `api` on `chain_id`
	///
	/// Order and profile URLs carry the `/v1` suffix. The price strategy URL
	/// is the full document location.
	pub fn resolve(&self, api: ApiConcern, chain_id: SupportedChainId) -> EndpointResult<String> {
		let table = match api {
			ApiConcern::Orders => &self.orders,
			ApiConcern::Profile => &self.profile,
			ApiConcern::PriceStrategy => &self.strategy,
		};

		let base = table
			.get(&chain_id)
			.ok_or(EndpointError::UnsupportedNetwork {
				api,
				chain_id: chain_id.chain_id(),
			})?;

		match api {
			ApiConcern::Orders | ApiConcern::Profile => Ok(format!("{}/{}", base, API_VERSION)),
			ApiConcern::PriceStrategy => Ok(base.clone()),
		}
	}

	pub fn order_api(&self, chain_id: SupportedChainId) -> EndpointResult<String> {
		self.resolve(ApiConcern::Orders, chain_id)
	}

	pub fn profile_api(&self, chain_id: SupportedChainId) -> EndpointResult<String> {
		self.resolve(ApiConcern::Profile, chain_id)
	}

	pub fn price_strategy_url(&self, chain_id: SupportedChainId) -> EndpointResult<String> {
		self.resolve(ApiConcern::PriceStrategy, chain_id)
	}
}

fn apply_overrides(
	table: &mut HashMap<SupportedChainId, String>,
	overrides: &HashMap<SupportedChainId, ConfigurableValue>,
	api: ApiConcern,
) -> EndpointResult<()> {
	for (chain, value) in overrides {
		let url = value
			.resolve()
			.map_err(|e| EndpointError::InvalidEndpoint {
				api,
				chain_id: chain.chain_id(),
				reason: e.to_string(),
			})?;
		let url = url.trim().trim_end_matches('/');

		// An empty override marks the API as not deployed on that chain
		if url.is_empty() {
			debug!("{} API disabled on {}", api, chain.network_name());
			table.remove(chain);
			continue;
		}

		debug!("Using {} for {} API on {}", value.description(), api, chain.network_name());
		table.insert(*chain, url.to_string());
	}
	Ok(())
}
