//! Token and canister metadata value objects
//!
//! Plain owned values deserialized from the registry document and the IC
//! dashboard API. Fetching metadata never mutates a token; enrichment goes
//! through an explicit merge.

use serde::{Deserialize, Serialize};

use crate::client::RegistryClient;
use crate::error::RegistryResult;

/// A single registry entry
///
/// Missing fields in otherwise valid JSON fall back to their defaults, and
/// unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    /// Canister principal, the unique key of the token
    pub principal: String,
    /// Display name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Precision of the smallest representable unit
    pub decimals: u8,
    /// Interface standard, e.g. "IS20" or "ICRC-1"
    pub standard: String,
    /// Live canister metadata, absent until merged by the caller
    #[serde(rename = "canisterInfo", skip_serializing_if = "Option::is_none")]
    pub canister_info: Option<CanisterInfo>,
}

/// Live metadata for a deployed canister
///
/// Every field is optional: the dashboard API may omit any of them, and
/// omission is not an error.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CanisterInfo {
    /// Canister principal, expected to match the owning token's
    pub canister_id: Option<String>,
    /// Controller principals, in API order
    pub controllers: Option<Vec<String>>,
    /// Hex hash of the installed wasm module
    pub wasm_hash: Option<String>,
    /// Subnet hosting the canister
    pub subnet_id: Option<String>,
}

impl Token {
    /// Parse a token from a JSON string
    pub fn from_json(json: &str) -> RegistryResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build a token from an already-parsed JSON value
    pub fn from_value(value: serde_json::Value) -> RegistryResult<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Serialize to the interchange JSON shape
    pub fn to_json(&self) -> RegistryResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Wasm hash of the deployed module, if metadata has been merged
    pub fn wasm_hash(&self) -> Option<&str> {
        self.canister_info.as_ref()?.wasm_hash.as_deref()
    }

    /// Controllers of the canister, if metadata has been merged
    pub fn controllers(&self) -> Option<&[String]> {
        self.canister_info.as_ref()?.controllers.as_deref()
    }

    /// Return this token with canister metadata attached
    pub fn with_canister_info(self, info: CanisterInfo) -> Self {
        Self {
            canister_info: Some(info),
            ..self
        }
    }

    /// Fetch live canister metadata for this token's principal
    ///
    /// Returns the metadata without storing it; attach it explicitly with
    /// [`Token::with_canister_info`] when needed.
    pub async fn fetch_canister_info(
        &self,
        client: &RegistryClient,
    ) -> RegistryResult<CanisterInfo> {
        client.canister_info(&self.principal).await
    }
}
