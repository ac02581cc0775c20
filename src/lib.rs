//! Token registry client for the Internet Computer
//!
//! Fetches the registry's token list document and live canister metadata
//! from the IC dashboard API, wrapping both in typed value objects.

pub mod client;
pub mod config;
pub mod error;
pub mod list;
pub mod token;

// Re-export commonly used types
pub use client::RegistryClient;
pub use config::RegistryConfig;
pub use error::{RegistryError, RegistryResult};
pub use list::TokenList;
pub use token::{CanisterInfo, Token};
