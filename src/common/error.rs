//! Error types for the few fallible edges: config load and flare save records.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config option `{key}` = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        key: &'static str,
        value: String,
        min: String,
        max: String,
    },
}

impl ConfigError {
    pub(crate) fn out_of_range(
        key: &'static str,
        value: impl ToString,
        min: impl ToString,
        max: impl ToString,
    ) -> Self {
        Self::OutOfRange {
            key,
            value: value.to_string(),
            min: min.to_string(),
            max: max.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("failed to encode flare records: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode flare records: {0}")]
    Decode(#[source] serde_json::Error),
}
