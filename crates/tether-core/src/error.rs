//! Setup-time error types.
//!
//! The simulation itself never fails: every runtime failure degrades to a
//! no-op that is visible in the snapshot. Only loading and validating
//! configuration can return an error.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value `{key}` = {value}: {expected}")]
    Invalid {
        key: &'static str,
        value: f32,
        expected: &'static str,
    },
}
