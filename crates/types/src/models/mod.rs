//! Shared domain models

pub mod api_error;
pub mod app_data;
pub mod chain;
pub mod token;
pub mod trade;

pub use api_error::ApiErrorObject;
pub use app_data::{keccak256, AppDataDoc, AppDataHash};
pub use chain::{SupportedChainId, UnsupportedChainError};
pub use token::{
	wrapped_native_address, TokenAddress, NATIVE_CURRENCY_BUY_ADDRESS, ZERO_ADDRESS,
};
pub use trade::{
	NativePrice, PriceStrategy, PriceStrategyKind, ProfileData, TradeMetadata, TradesQuery,
};
