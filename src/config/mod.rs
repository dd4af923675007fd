//! Configuration resolution from the environment and the config file.

mod manager;

pub use manager::{
    API_KEY_ENV, ConfigFile, ConfigManager, DeeplConfig, ENDPOINT_ENV, ResolveOptions,
    ResolvedConfig, resolve_config,
};
