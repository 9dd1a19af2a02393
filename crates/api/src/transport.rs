//! HTTP transport abstraction
//!
//! A [`Transport`] issues a single request and hands back the raw response.
//! It never interprets status codes, so mapping stays in one place and tests
//! can swap in a recording implementation.

use async_trait::async_trait;
use reqwest::{
	header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE},
	Client, Method,
};
use serde::de::DeserializeOwned;
use std::{fmt, str::FromStr, time::Duration};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	Get,
	Post,
	Delete,
}

impl fmt::Display for HttpMethod {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			HttpMethod::Get => f.write_str("GET"),
			HttpMethod::Post => f.write_str("POST"),
			HttpMethod::Delete => f.write_str("DELETE"),
		}
	}
}

impl From<HttpMethod> for Method {
	fn from(method: HttpMethod) -> Self {
		match method {
			HttpMethod::Get => Method::GET,
			HttpMethod::Post => Method::POST,
			HttpMethod::Delete => Method::DELETE,
		}
	}
}

/// A fully resolved request
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
	pub method: HttpMethod,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: Option<serde_json::Value>,
}

impl ApiRequest {
	pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
		Self {
			method,
			url: url.into(),
			headers: Vec::new(),
			body: None,
		}
	}

	pub fn with_headers(mut self, headers: Vec<(String, String)>) -> Self {
		self.headers = headers;
		self
	}

	pub fn with_body(mut self, body: Option<serde_json::Value>) -> Self {
		self.body = body;
		self
	}

	pub fn header(&self, name: &str) -> Option<&str> {
		self.headers
			.iter()
			.find(|(key, _)| key.eq_ignore_ascii_case(name))
			.map(|(_, value)| value.as_str())
	}
}

/// Raw response, uninterpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
	pub status: u16,
	pub content_type: Option<String>,
	pub body: Vec<u8>,
}

impl ApiResponse {
	pub fn new(status: u16, content_type: Option<&str>, body: impl Into<Vec<u8>>) -> Self {
		Self {
			status,
			content_type: content_type.map(str::to_string),
			body: body.into(),
		}
	}

	/// JSON response with the given status
	pub fn json(status: u16, body: &serde_json::Value) -> Self {
		Self::new(status, Some("application/json"), body.to_string())
	}

	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Whether the body declares itself as JSON
	pub fn is_json(&self) -> bool {
		self.content_type
			.as_deref()
			.map(|value| value.to_ascii_lowercase().contains("application/json"))
			.unwrap_or(false)
	}

	pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
		serde_json::from_slice(&self.body)
	}

	/// Body as text, for logging
	pub fn text(&self) -> String {
		String::from_utf8_lossy(&self.body).into_owned()
	}
}

#[derive(Debug, Error)]
pub enum TransportError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Request to {url} timed out")]
	Timeout { url: String },

	#[error("Invalid header '{name}'")]
	InvalidHeader { name: String },
}

pub type TransportResult<T> = Result<T, TransportError>;

#[async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
	async fn send(&self, request: ApiRequest) -> TransportResult<ApiResponse>;
}

/// reqwest-backed transport. One pooled client for every request.
#[derive(Debug, Clone)]
pub struct HttpTransport {
	client: Client,
}

impl HttpTransport {
	pub fn new(timeout: Duration) -> TransportResult<Self> {
		let client = Client::builder()
			.timeout(timeout)
			.user_agent(concat!("orderbook-client/", env!("CARGO_PKG_VERSION")))
			.build()?;
		Ok(Self { client })
	}

	fn header_map(headers: &[(String, String)]) -> TransportResult<HeaderMap> {
		let mut map = HeaderMap::new();
		for (key, value) in headers {
			let name = HeaderName::from_str(key)
				.map_err(|_| TransportError::InvalidHeader { name: key.clone() })?;
			let value = HeaderValue::from_str(value)
				.map_err(|_| TransportError::InvalidHeader { name: key.clone() })?;
			map.insert(name, value);
		}
		Ok(map)
	}
}

#[async_trait]
impl Transport for HttpTransport {
	async fn send(&self, request: ApiRequest) -> TransportResult<ApiResponse> {
		debug!("{} {}", request.method, request.url);

		let mut builder = self
			.client
			.request(request.method.into(), &request.url)
			.headers(Self::header_map(&request.headers)?);
		if let Some(body) = &request.body {
			builder = builder.body(body.to_string());
		}

		let response = builder.send().await.map_err(|e| {
			if e.is_timeout() {
				TransportError::Timeout {
					url: request.url.clone(),
				}
			} else {
				TransportError::Http(e)
			}
		})?;

		let status = response.status().as_u16();
		let content_type = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
			.map(str::to_string);
		let body = response.bytes().await?.to_vec();

		debug!(
			"{} {} responded with status {} ({} bytes)",
			request.method,
			request.url,
			status,
			body.len()
		);

		Ok(ApiResponse {
			status,
			content_type,
			body,
		})
	}
}
