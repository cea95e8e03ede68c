use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OpponentError {
    /// A previous request has not resolved yet.
    #[error("the opponent is already thinking")]
    Busy,
    #[error("move requests need a running Tokio runtime")]
    NoRuntime,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid opponent config: {0}")]
    Parse(#[from] toml::de::Error),
}
