//! Configuration management for LuGPT.
//!
//! This module handles loading and merging configuration from multiple
//! sources:
//! - Built-in defaults
//! - Config file (lugpt.yaml)
//! - Environment variables
//! - Command-line flags (applied last, highest precedence)
//!
//! Secrets (API keys for the retrieval service) are never stored in the
//! config file; they are resolved from the environment at startup.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{AppError, AppResult};

/// Default request timeout for the retrieval service, in seconds.
///
/// The upstream deployment had no timeout at all; a hung service call would
/// block the session forever. Every provider built from this config gets a
/// hard deadline.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Main application configuration.
///
/// This struct holds all global options that affect CLI behavior across
/// commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Optional config file path
    pub config_file: Option<PathBuf>,

    /// Retrieval client provider ("http", "mock")
    pub provider: String,

    /// Base URL of the retrieval/generation service
    pub endpoint: String,

    /// Vector store collection the service should query
    pub collection: String,

    /// API key for the retrieval service
    pub api_key: Option<String>,

    /// Environment variable to read the API key from, if `api_key` is unset
    pub api_key_env: Option<String>,

    /// Request timeout in seconds for service calls
    pub timeout_secs: u64,

    /// Log level override
    pub log_level: Option<String>,

    /// Verbose mode (enables debug logging)
    pub verbose: bool,

    /// Disable colored output
    pub no_color: bool,
}

/// Full configuration file structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    service: Option<ServiceConfig>,
    logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct ServiceConfig {
    provider: Option<String>,
    endpoint: Option<String>,
    collection: Option<String>,
    #[serde(rename = "apiKeyEnv")]
    api_key_env: Option<String>,
    #[serde(rename = "timeoutSecs")]
    timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct LoggingConfig {
    level: Option<String>,
    color: Option<bool>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_file: None,
            provider: "http".to_string(),
            endpoint: "http://localhost:8080".to_string(),
            collection: "LuGPT".to_string(),
            api_key: None,
            api_key_env: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            log_level: None,
            verbose: false,
            no_color: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the config file and environment variables.
    ///
    /// Environment variables:
    /// - `LUGPT_CONFIG`: Path to config file (default: ./lugpt.yaml)
    /// - `LUGPT_PROVIDER`: Retrieval client provider
    /// - `LUGPT_ENDPOINT`: Service base URL
    /// - `LUGPT_COLLECTION`: Vector store collection name
    /// - `LUGPT_API_KEY`: API key for the service
    /// - `LUGPT_TIMEOUT_SECS`: Request timeout in seconds
    /// - `RUST_LOG`: Log level
    /// - `NO_COLOR`: Disable colored output
    pub fn load() -> AppResult<Self> {
        let mut config = Self::default();

        if let Ok(config_file) = std::env::var("LUGPT_CONFIG") {
            config.config_file = Some(PathBuf::from(config_file));
        }

        // Load from YAML config file if it exists
        let config_path = if let Some(ref cf) = config.config_file {
            cf.clone()
        } else {
            PathBuf::from("lugpt.yaml")
        };

        if config_path.exists() {
            config = config.merge_yaml(&config_path)?;
        }

        // Environment variables override YAML config
        if let Ok(provider) = std::env::var("LUGPT_PROVIDER") {
            config.provider = provider;
        }

        if let Ok(endpoint) = std::env::var("LUGPT_ENDPOINT") {
            config.endpoint = endpoint;
        }

        if let Ok(collection) = std::env::var("LUGPT_COLLECTION") {
            config.collection = collection;
        }

        if let Ok(timeout) = std::env::var("LUGPT_TIMEOUT_SECS") {
            config.timeout_secs = timeout.parse().map_err(|_| {
                AppError::Config(format!("Invalid LUGPT_TIMEOUT_SECS value: {}", timeout))
            })?;
        }

        config.api_key = std::env::var("LUGPT_API_KEY").ok();
        config.log_level = std::env::var("RUST_LOG").ok();

        if std::env::var("NO_COLOR").is_ok() {
            config.no_color = true;
        }

        Ok(config)
    }

    /// Merge YAML configuration file into this config.
    fn merge_yaml(&mut self, path: &PathBuf) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read config file {:?}: {}", path, e))
        })?;

        let config_file: ConfigFile = serde_yaml::from_str(&contents).map_err(|e| {
            AppError::Config(format!("Failed to parse config file {:?}: {}", path, e))
        })?;

        let mut result = self.clone();

        if let Some(service) = config_file.service {
            if let Some(provider) = service.provider {
                result.provider = provider;
            }
            if let Some(endpoint) = service.endpoint {
                result.endpoint = endpoint;
            }
            if let Some(collection) = service.collection {
                result.collection = collection;
            }
            if let Some(api_key_env) = service.api_key_env {
                result.api_key_env = Some(api_key_env);
            }
            if let Some(timeout_secs) = service.timeout_secs {
                result.timeout_secs = timeout_secs;
            }
        }

        if let Some(logging) = config_file.logging {
            if let Some(level) = logging.level {
                result.log_level = Some(level);
            }
            if let Some(color) = logging.color {
                result.no_color = !color;
            }
        }

        Ok(result)
    }

    /// Apply CLI overrides to the configuration.
    ///
    /// This method merges command-line flags with the loaded configuration,
    /// giving precedence to CLI flags over environment variables.
    #[allow(clippy::too_many_arguments)]
    pub fn with_overrides(
        mut self,
        config_file: Option<PathBuf>,
        provider: Option<String>,
        endpoint: Option<String>,
        collection: Option<String>,
        log_level: Option<String>,
        verbose: bool,
        no_color: bool,
    ) -> Self {
        if let Some(config_file) = config_file {
            self.config_file = Some(config_file);
        }

        if let Some(provider) = provider {
            self.provider = provider;
        }

        if let Some(endpoint) = endpoint {
            self.endpoint = endpoint;
        }

        if let Some(collection) = collection {
            self.collection = collection;
        }

        if let Some(log_level) = log_level {
            self.log_level = Some(log_level);
        }

        if verbose {
            self.verbose = true;
            // Verbose mode implies debug logging
            if self.log_level.is_none() {
                self.log_level = Some("debug".to_string());
            }
        }

        if no_color {
            self.no_color = true;
        }

        self
    }

    /// Resolve the API key for the retrieval service.
    ///
    /// `LUGPT_API_KEY` wins; otherwise the environment variable named by
    /// `service.apiKeyEnv` in the config file is consulted. Returns `None`
    /// when no key is configured (the service may be open or local).
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(ref key) = self.api_key {
            return Some(key.clone());
        }

        if let Some(ref env_var) = self.api_key_env {
            if let Ok(key) = std::env::var(env_var) {
                return Some(key);
            }
        }

        None
    }

    /// Validate configuration for the active provider.
    pub fn validate(&self) -> AppResult<()> {
        let known_providers = ["http", "mock"];

        if !known_providers.contains(&self.provider.as_str()) {
            return Err(AppError::Config(format!(
                "Unknown provider: {}. Supported: {}",
                self.provider,
                known_providers.join(", ")
            )));
        }

        if self.timeout_secs == 0 {
            return Err(AppError::Config(
                "Request timeout must be at least 1 second".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.provider, "http");
        assert_eq!(config.collection, "LuGPT");
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(!config.verbose);
        assert!(!config.no_color);
    }

    #[test]
    fn test_with_overrides() {
        let config = AppConfig::default();
        let overridden = config.with_overrides(
            None,
            Some("mock".to_string()),
            Some("http://localhost:9999".to_string()),
            None,
            None,
            true,
            false,
        );

        assert_eq!(overridden.provider, "mock");
        assert_eq!(overridden.endpoint, "http://localhost:9999");
        assert!(overridden.verbose);
        assert_eq!(overridden.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_merge_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "service:\n  endpoint: https://rag.example.ch\n  collection: Kanton\n  timeoutSecs: 30\nlogging:\n  level: warn\n  color: false"
        )
        .unwrap();

        let mut config = AppConfig::default();
        let merged = config.merge_yaml(&file.path().to_path_buf()).unwrap();

        assert_eq!(merged.endpoint, "https://rag.example.ch");
        assert_eq!(merged.collection, "Kanton");
        assert_eq!(merged.timeout_secs, 30);
        assert_eq!(merged.log_level, Some("warn".to_string()));
        assert!(merged.no_color);
        // Untouched fields keep their defaults
        assert_eq!(merged.provider, "http");
    }

    #[test]
    fn test_validate_unknown_provider() {
        let mut config = AppConfig::default();
        config.provider = "milvus".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_timeout() {
        let mut config = AppConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_defaults() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }

    // Single test for everything that goes through `load()`: the LUGPT_*
    // variables are process-global, so exercising them from parallel test
    // threads would race.
    #[test]
    fn test_load_env_overrides_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "service:\n  endpoint: https://yaml.example.ch\n  collection: Kanton\n  timeoutSecs: 30"
        )
        .unwrap();

        std::env::set_var("LUGPT_CONFIG", file.path());
        std::env::set_var("LUGPT_ENDPOINT", "https://env.example.ch");
        std::env::set_var("LUGPT_PROVIDER", "mock");
        std::env::set_var("LUGPT_TIMEOUT_SECS", "15");

        let config = AppConfig::load().unwrap();

        // Environment wins over the YAML file
        assert_eq!(config.endpoint, "https://env.example.ch");
        assert_eq!(config.provider, "mock");
        assert_eq!(config.timeout_secs, 15);
        // YAML still applies where the environment is silent
        assert_eq!(config.collection, "Kanton");

        // A non-numeric timeout is a configuration error, not a panic
        std::env::set_var("LUGPT_TIMEOUT_SECS", "soon");
        let err = AppConfig::load().unwrap_err();
        match err {
            AppError::Config(msg) => assert!(msg.contains("LUGPT_TIMEOUT_SECS")),
            other => panic!("Expected Config error, got {:?}", other),
        }

        std::env::remove_var("LUGPT_CONFIG");
        std::env::remove_var("LUGPT_ENDPOINT");
        std::env::remove_var("LUGPT_PROVIDER");
        std::env::remove_var("LUGPT_TIMEOUT_SECS");
    }

    #[test]
    fn test_resolve_api_key_explicit() {
        let mut config = AppConfig::default();
        config.api_key = Some("sk-test".to_string());
        assert_eq!(config.resolve_api_key(), Some("sk-test".to_string()));
    }

    #[test]
    fn test_resolve_api_key_from_named_env_var() {
        // Variable name unique to this test so parallel tests cannot race
        std::env::set_var("LUGPT_TEST_SERVICE_KEY", "sk-from-env");

        let mut config = AppConfig::default();
        config.api_key_env = Some("LUGPT_TEST_SERVICE_KEY".to_string());
        assert_eq!(config.resolve_api_key(), Some("sk-from-env".to_string()));

        // The explicit key still wins over the indirection
        config.api_key = Some("sk-explicit".to_string());
        assert_eq!(config.resolve_api_key(), Some("sk-explicit".to_string()));

        std::env::remove_var("LUGPT_TEST_SERVICE_KEY");
    }

    #[test]
    fn test_resolve_api_key_missing() {
        let mut config = AppConfig::default();
        config.api_key_env = Some("LUGPT_TEST_UNSET_SERVICE_KEY".to_string());
        assert_eq!(config.resolve_api_key(), None);
    }
}
