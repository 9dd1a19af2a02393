//! Order Book API
//!
//! Endpoint resolution, HTTP transport, response mapping and the
//! [`OrderBookClient`] built on top of them.

pub mod client;
pub mod diagnostics;
pub mod endpoints;
pub mod error;
pub mod response;
pub mod transport;

pub use client::{ClientOptions, OrderBookClient, APP_ID_HEADER, DEFAULT_ORDERS_LIMIT};
pub use diagnostics::{DiagnosticsReporter, ErrorOperation, ErrorReport, TracingReporter};
pub use endpoints::{ApiConcern, EndpointError, EndpointResult, Endpoints};
pub use error::{OrderBookError, OrderBookResult};
pub use transport::{
	ApiRequest, ApiResponse, HttpMethod, HttpTransport, Transport, TransportError,
	TransportResult,
};
