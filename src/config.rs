//! Configuration management for the registry client
//!
//! Loads configuration from an optional `tokenlist` file and environment
//! variables. Environment variables override file values.

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::list::TokenList;

/// Registry client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RegistryConfig {
    /// Base URL of the IC dashboard API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    /// URL of the remote registry document
    #[serde(default = "default_tokenlist_url")]
    pub tokenlist_url: String,
    /// Name applied to fetched lists
    #[serde(default = "default_list_name")]
    pub list_name: String,
    /// Request timeout in milliseconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_ms: u64,
}

fn default_api_base_url() -> String {
    "https://ic-api.internetcomputer.org".to_string()
}

fn default_tokenlist_url() -> String {
    "https://raw.githubusercontent.com/infinity-swap/token-lists/main/src/tokenlist.json"
        .to_string()
}

fn default_list_name() -> String {
    TokenList::bundled().name.clone()
}

fn default_request_timeout() -> u64 {
    10000
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            tokenlist_url: default_tokenlist_url(),
            list_name: default_list_name(),
            request_timeout_ms: default_request_timeout(),
        }
    }
}

impl RegistryConfig {
    /// Load configuration from files and environment
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (TOKENLIST_*)
    /// 2. tokenlist.{toml,yaml,json} in the working directory (if exists)
    /// 3. Default values
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            // Start with default values
            .set_default("api_base_url", default_api_base_url())?
            .set_default("tokenlist_url", default_tokenlist_url())?
            .set_default("list_name", default_list_name())?
            .set_default("request_timeout_ms", default_request_timeout())?
            // Load from a config file (lower priority)
            .add_source(File::with_name("tokenlist").required(false))
            // Override with environment variables (highest priority - loaded last)
            // TOKENLIST_API_BASE_URL=... -> api_base_url = ...
            .add_source(
                Environment::with_prefix("TOKENLIST")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load configuration from an explicit file, ignoring the environment
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .set_default("api_base_url", default_api_base_url())?
            .set_default("tokenlist_url", default_tokenlist_url())?
            .set_default("list_name", default_list_name())?
            .set_default("request_timeout_ms", default_request_timeout())?
            .add_source(File::from(path))
            .build()?;

        config.try_deserialize()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_base_url.is_empty() {
            return Err(ConfigError::Message(
                "API base URL must not be empty".to_string(),
            ));
        }

        if self.tokenlist_url.is_empty() {
            return Err(ConfigError::Message(
                "Token list URL must not be empty".to_string(),
            ));
        }

        if self.list_name.is_empty() {
            return Err(ConfigError::Message(
                "List name must not be empty".to_string(),
            ));
        }

        if self.request_timeout_ms == 0 {
            return Err(ConfigError::Message(
                "Request timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
