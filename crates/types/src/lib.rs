//! Order Book Types
//!
//! Shared models for the order book client: chains and tokens, orders,
//! quotes, and the error taxonomies the backend's failures are mapped into.

pub mod models;
pub mod orders;
pub mod quotes;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

pub use models::{
	ApiErrorObject, AppDataDoc, AppDataHash, NativePrice, PriceStrategy, PriceStrategyKind,
	ProfileData, SupportedChainId, TokenAddress, TradeMetadata, TradesQuery,
	UnsupportedChainError, NATIVE_CURRENCY_BUY_ADDRESS, ZERO_ADDRESS,
};

pub use orders::{
	transform_eth_flow_order, OrderCancellation, OrderClass, OrderCreation, OrderError,
	OrderErrorKind, OrderKind, OrderMetadata, OrderOperation, OrderStatus, OrderUid,
	SigningScheme,
};

pub use quotes::{
	map_quote_params, FeeQuoteParams, PriceInformation, PriceQuality, PriceQuoteParams,
	QuoteError, QuoteErrorKind, QuoteQuery, QuoteResponse,
};
