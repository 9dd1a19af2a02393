//! Client builder tests

use std::sync::Arc;

use orderbook_client::{
	config::ConfigurableValue,
	mocks::{MockTransport, RecordingReporter},
	AppDataDoc, BuilderError, EndpointError, EnvironmentProfile, OrderBookClientBuilder, Settings,
	SupportedChainId,
};

#[test]
fn test_builder_defaults() {
	let client = OrderBookClientBuilder::new().build().unwrap();

	assert!(client.price_feed_enabled());
	assert_eq!(client.endpoints().environment(), EnvironmentProfile::Production);
	assert_eq!(
		client.order_link(SupportedChainId::Mainnet, "0x01").unwrap(),
		"https://api.cow.fi/mainnet/api/v1/orders/0x01"
	);

	let expected = AppDataDoc::new("CowSwap", None, "0.1.0").hash().unwrap();
	assert_eq!(client.app_data_hash(), expected.to_string());
}

#[test]
fn test_builder_with_barn_settings() {
	let mut settings = Settings::default();
	settings.environment = EnvironmentProfile::Development;
	settings.price_feed.enabled = false;

	let builder = OrderBookClientBuilder::new().with_settings(settings);
	assert!(builder.settings().is_some());

	let client = builder.build().unwrap();
	assert!(!client.price_feed_enabled());
	assert_eq!(
		client.order_link(SupportedChainId::Goerli, "0x02").unwrap(),
		"https://barn.api.cow.fi/goerli/api/v1/orders/0x02"
	);
}

#[test]
fn test_builder_uses_app_data_hash_override() {
	let hash = "0x487b02c558d729abaf3ecf17881a4181e5bc2446429a0995142297e897b6eb37";
	let mut settings = Settings::default();
	settings.app_data.hash = Some(hash.to_string());

	let client = OrderBookClientBuilder::new()
		.with_settings(settings)
		.with_transport(Arc::new(MockTransport::new()))
		.with_reporter(Arc::new(RecordingReporter::new()))
		.build()
		.unwrap();

	assert_eq!(client.app_data_hash(), hash);
}

#[test]
fn test_builder_rejects_invalid_app_data_hash() {
	let mut settings = Settings::default();
	settings.app_data.hash = Some("not-hex".to_string());

	let result = OrderBookClientBuilder::new().with_settings(settings).build();
	assert!(matches!(result, Err(BuilderError::Validation(_))));
}

#[test]
fn test_builder_rejects_unresolvable_override() {
	let mut settings = Settings::default();
	settings.api.order_urls.insert(
		SupportedChainId::Mainnet,
		ConfigurableValue::from_env("ORDERBOOK_BUILDER_TEST_UNSET_URL"),
	);

	let result = OrderBookClientBuilder::new().with_settings(settings).build();
	assert!(matches!(
		result,
		Err(BuilderError::Endpoint(EndpointError::InvalidEndpoint { chain_id: 1, .. }))
	));
}
