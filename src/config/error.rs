//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid site config")]
    Toml(#[from] toml::de::Error),

    #[error("invalid site config in `{0}`")]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config validation error: {0}")]
    Validation(String),
}
