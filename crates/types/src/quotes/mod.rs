//! Quote and price models, mapping and errors

pub mod errors;
pub mod mapping;
pub mod request;
pub mod response;

pub use errors::{QuoteError, QuoteErrorKind};
pub use mapping::map_quote_params;
pub use request::{
	EthFlowQuoteParams, FeeQuoteParams, PriceQuality, PriceQuoteParams, QuoteQuery, QuoteSide,
};
pub use response::{PriceInformation, QuoteData, QuoteResponse};
