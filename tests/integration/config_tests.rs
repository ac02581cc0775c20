//! Configuration Loading Tests
//!
//! Tests file-based configuration against real temporary files.

use std::io::Write;

use anyhow::Result;
use ic_tokenlist::{RegistryConfig, TokenList};

#[test]
fn test_load_from_file_overrides_defaults() -> Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, r#"api_base_url = "http://localhost:9999""#)?;
    writeln!(file, r#"list_name = "Local List""#)?;

    let config = RegistryConfig::load_from(file.path())?;

    assert_eq!(config.api_base_url, "http://localhost:9999");
    assert_eq!(config.list_name, "Local List");
    // Unspecified keys keep their defaults
    assert_eq!(config.request_timeout_ms, 10000);
    assert!(config.tokenlist_url.ends_with("tokenlist.json"));
    Ok(())
}

#[test]
fn test_load_from_file_with_all_keys() -> Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, r#"api_base_url = "http://localhost:8000""#)?;
    writeln!(file, r#"tokenlist_url = "http://localhost:8000/list.json""#)?;
    writeln!(file, r#"list_name = "Pinned""#)?;
    writeln!(file, "request_timeout_ms = 2500")?;

    let config = RegistryConfig::load_from(file.path())?;

    assert_eq!(config.api_base_url, "http://localhost:8000");
    assert_eq!(config.tokenlist_url, "http://localhost:8000/list.json");
    assert_eq!(config.list_name, "Pinned");
    assert_eq!(config.request_timeout_ms, 2500);
    assert!(config.validate().is_ok());
    Ok(())
}

#[test]
fn test_empty_file_yields_defaults() -> Result<()> {
    let file = tempfile::Builder::new().suffix(".toml").tempfile()?;

    let config = RegistryConfig::load_from(file.path())?;

    assert_eq!(config.api_base_url, "https://ic-api.internetcomputer.org");
    assert_eq!(config.list_name, TokenList::bundled().name);
    assert_eq!(config.request_timeout_ms, 10000);
    Ok(())
}

#[test]
fn test_loaded_config_can_fail_validation() -> Result<()> {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile()?;
    writeln!(file, "request_timeout_ms = 0")?;

    let config = RegistryConfig::load_from(file.path())?;

    assert!(config.validate().is_err());
    Ok(())
}
