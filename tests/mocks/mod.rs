//! Centralized mocks and fixtures for testing
//!
//! This module provides a mock order book server and reusable test data to
//! reduce duplication across test files.

pub mod fixtures;
pub mod test_server;

// Re-export commonly used items for convenience
#[allow(unused_imports)]
pub use fixtures::Fixtures;
#[allow(unused_imports)]
pub use test_server::TestServer;
