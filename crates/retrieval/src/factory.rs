//! Retrieval provider factory.
//!
//! This module creates retrieval clients from application configuration:
//! provider resolution, secret injection, and timeout wiring in one place.

use crate::client::RetrievalClient;
use crate::providers::{HttpRetrievalClient, MockRetrievalClient};
use lugpt_core::{AppConfig, AppError, AppResult};
use std::sync::Arc;
use std::time::Duration;

/// Create a retrieval client for the configured provider.
///
/// # Arguments
/// * `config` - Application configuration (provider, endpoint, collection,
///   timeout); the API key is resolved from the environment here
///
/// # Returns
/// A shared trait object implementing `RetrievalClient`
///
/// # Errors
/// `AppError::Config` if the provider is unknown; client initialization
/// failures propagate unchanged.
pub fn create_client(config: &AppConfig) -> AppResult<Arc<dyn RetrievalClient>> {
    match config.provider.to_lowercase().as_str() {
        "http" => {
            let client = HttpRetrievalClient::new(
                config.endpoint.clone(),
                config.collection.clone(),
                config.resolve_api_key(),
                Duration::from_secs(config.timeout_secs),
            )?;
            Ok(Arc::new(client))
        }
        "mock" => Ok(Arc::new(MockRetrievalClient::new())),
        other => Err(AppError::Config(format!("Unknown provider: {}", other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_http_client() {
        let config = AppConfig::default();
        let client = create_client(&config).unwrap();
        assert_eq!(client.provider_name(), "http");
    }

    #[test]
    fn test_create_mock_client() {
        let mut config = AppConfig::default();
        config.provider = "mock".to_string();
        let client = create_client(&config).unwrap();
        assert_eq!(client.provider_name(), "mock");
    }

    #[test]
    fn test_unknown_provider_is_config_error() {
        let mut config = AppConfig::default();
        config.provider = "milvus".to_string();
        match create_client(&config) {
            Err(AppError::Config(msg)) => assert!(msg.contains("Unknown provider")),
            Err(other) => panic!("Expected Config error, got {:?}", other),
            Ok(_) => panic!("Expected error for unknown provider"),
        }
    }
}
