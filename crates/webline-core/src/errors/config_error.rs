//! Configuration loading errors.

use super::error_code::{self, WeblineErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Invalid config value for `{field}`: {message}")]
    Invalid { field: String, message: String },
}

impl WeblineErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => error_code::CONFIG_IO_ERROR,
            Self::TomlParse(_) => error_code::CONFIG_PARSE_ERROR,
            Self::Invalid { .. } => error_code::CONFIG_INVALID,
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
