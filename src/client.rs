//! HTTP client for the registry document and the IC dashboard API

use std::time::Duration;

use serde::Deserialize;

use crate::config::RegistryConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::list::TokenList;
use crate::token::CanisterInfo;

/// Client for the token registry and canister metadata endpoints
pub struct RegistryClient {
    client: reqwest::Client,
    config: RegistryConfig,
}

/// Canister record as served by the dashboard API
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CanisterRecord {
    canister_id: Option<String>,
    controllers: Option<Vec<String>>,
    module_hash: Option<String>,
    subnet_id: Option<String>,
}

impl From<CanisterRecord> for CanisterInfo {
    fn from(record: CanisterRecord) -> Self {
        Self {
            canister_id: record.canister_id,
            controllers: record.controllers,
            wasm_hash: record.module_hash,
            subnet_id: record.subnet_id,
        }
    }
}

impl RegistryClient {
    /// Create a new client with the given configuration
    pub fn new(config: RegistryConfig) -> RegistryResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()?;

        Ok(Self { client, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Fetch the registry document and wrap its entries
    pub async fn token_list(&self) -> RegistryResult<TokenList> {
        let url = &self.config.tokenlist_url;
        tracing::debug!(url = %url, "Fetching token list");

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(RegistryError::UnexpectedStatus {
                url: url.clone(),
                status: response.status(),
            });
        }

        let document: TokenList = response.json().await?;
        // The configured name wins over the one in the fetched document
        let list = TokenList {
            name: self.config.list_name.clone(),
            tokens: document.tokens,
        };

        tracing::info!(name = %list.name, tokens = list.tokens.len(), "Token list fetched");
        Ok(list)
    }

    /// Fetch live metadata for one canister
    pub async fn canister_info(&self, principal: &str) -> RegistryResult<CanisterInfo> {
        let url = format!(
            "{}/api/v3/canisters/{}",
            self.config.api_base_url, principal
        );
        tracing::debug!(principal = %principal, "Fetching canister info");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(RegistryError::UnexpectedStatus {
                url,
                status: response.status(),
            });
        }

        let record: CanisterRecord = response.json().await?;
        tracing::debug!(principal = %principal, "Canister info fetched");
        Ok(record.into())
    }
}
