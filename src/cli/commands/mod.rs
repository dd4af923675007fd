//! Subcommand implementations.

use anyhow::Result;

use crate::api::Client;
use crate::config::{ConfigManager, ResolveOptions, ResolvedConfig, resolve_config};

/// Language listing command handler.
pub mod languages;

/// Translation command handler.
pub mod translate;

/// Usage information command handler.
pub mod usage;

/// Resolves configuration and builds a client for it.
///
/// Fails before any request is made when no API key is configured.
pub fn connect() -> Result<(Client, ResolvedConfig)> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;
    let config = resolve_config(&ResolveOptions::from_env(), &config_file)?;

    Ok((client_for(&config), config))
}

/// Builds a client for a resolved configuration.
pub fn client_for(config: &ResolvedConfig) -> Client {
    match &config.endpoint {
        Some(endpoint) => Client::with_base_url(config.api_key.clone(), endpoint.clone()),
        None => Client::new(config.api_key.clone()),
    }
}
