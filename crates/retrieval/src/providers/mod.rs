//! Retrieval provider implementations.

pub mod http;
pub mod mock;

pub use http::HttpRetrievalClient;
pub use mock::MockRetrievalClient;
