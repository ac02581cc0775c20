//! Token list value object and the bundled registry document

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::client::RegistryClient;
use crate::error::RegistryResult;
use crate::token::Token;

/// Registry document shipped with the crate, parsed on first access
static BUNDLED: Lazy<TokenList> = Lazy::new(|| {
    serde_json::from_str(include_str!("tokenlist.json"))
        .expect("bundled token list must be valid JSON")
});

/// An ordered list of registry tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenList {
    /// Display name of the registry; empty when the document carries none
    #[serde(default)]
    pub name: String,
    /// Tokens in document order; a document without this array is rejected
    pub tokens: Vec<Token>,
}

impl TokenList {
    /// Fetch the remote registry document and wrap its entries
    ///
    /// The returned list carries the locally configured name, not the name
    /// of the fetched document.
    pub async fn create(client: &RegistryClient) -> RegistryResult<Self> {
        client.token_list().await
    }

    /// Parse a list from a JSON string
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a list from an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> RegistryResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize to the interchange JSON shape
    pub fn to_json(&self) -> RegistryResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The registry document bundled with the crate
    pub fn bundled() -> &'static TokenList {
        &BUNDLED
    }
}
