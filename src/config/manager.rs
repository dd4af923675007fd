use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

use crate::api::Formality;
use crate::paths;

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "DEEPL_API_KEY";

/// Environment variable overriding the API base URL.
pub const ENDPOINT_ENV: &str = "DEEPL_API_ENDPOINT";

/// Settings in the `[deepl]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeeplConfig {
    /// API key stored in the config file (the environment takes priority).
    pub api_key: Option<String>,
    /// Base URL override, e.g. a proxy in front of the service.
    pub endpoint: Option<String>,
    /// Default formality for `translate`.
    pub formality: Option<Formality>,
    /// Default for `translate --preserve-formatting`.
    pub preserve_formatting: Option<bool>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/deepl/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub deepl: DeeplConfig,
}

/// Values taken from the environment, which override the config file.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub api_key: Option<String>,
    pub endpoint: Option<String>,
}

impl ResolveOptions {
    /// Reads [`API_KEY_ENV`] and [`ENDPOINT_ENV`]. Empty values count as unset.
    pub fn from_env() -> Self {
        Self {
            api_key: non_empty_env(API_KEY_ENV),
            endpoint: non_empty_env(ENDPOINT_ENV),
        }
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Configuration after merging the environment and the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub api_key: String,
    /// `None` means the host is derived from the key.
    pub endpoint: Option<String>,
    pub formality: Option<Formality>,
    pub preserve_formatting: Option<bool>,
}

/// Merges environment values with config file settings.
///
/// The environment takes precedence over the config file.
///
/// # Errors
///
/// Returns an error if no API key is available from either source.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let file = &config_file.deepl;

    let Some(api_key) = options
        .api_key
        .clone()
        .or_else(|| file.api_key.clone().filter(|key| !key.is_empty()))
    else {
        bail!(
            "no {API_KEY_ENV} found. Please provide your API key in this environment variable."
        );
    };

    let endpoint = options
        .endpoint
        .clone()
        .or_else(|| file.endpoint.clone().filter(|url| !url.is_empty()));

    Ok(ResolvedConfig {
        api_key,
        endpoint,
        formality: file.formality,
        preserve_formatting: file.preserve_formatting,
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/deepl/config.toml`
    /// or `~/.config/deepl/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}
