//! Configuration management for relnote.
//!
//! This crate handles loading and writing the optional `relnote.toml` configuration file.

mod error;
mod loader;
mod schema;

pub use error::{ConfigError, ConfigResult};
pub use loader::{
    CONFIG_FILE_NAME, find_config_from, load_config, load_or_default, load_with_root, save_config,
};
pub use schema::{
    ChangelogConfig, Config, DEFAULT_NOISE, FilterConfig, RepositoryConfig, VersionConfig,
};
