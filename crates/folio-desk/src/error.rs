//! Error types for folio-desk.
//!
//! Runtime window operations never fail: an unknown window id is a no-op.
//! Errors only come from building the catalog and loading configuration.

use std::path::PathBuf;

/// Result type alias for folio-desk operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a registry or loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Two descriptors share the same application id.
    #[error("Duplicate window descriptor '{id}'")]
    DuplicateDescriptor { id: String },

    /// A descriptor declares an unusable default size.
    #[error("Invalid default size for '{id}': {message}")]
    InvalidDefaultSize { id: String, message: String },

    /// A descriptor's external link is not a valid URL.
    #[error("Invalid external link for '{id}': {source}")]
    InvalidLink {
        id: String,
        #[source]
        source: url::ParseError,
    },

    /// Configuration could not be parsed.
    #[error("Failed to parse shell configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration file could not be read.
    #[error("Failed to read shell configuration '{path}': {source}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration value is out of range.
    #[error("Invalid value for config key '{key}': {message}")]
    InvalidConfig { key: String, message: String },
}

impl Error {
    /// Create a duplicate descriptor error.
    pub fn duplicate_descriptor(id: impl Into<String>) -> Self {
        Self::DuplicateDescriptor { id: id.into() }
    }

    /// Create an invalid default size error.
    pub fn invalid_default_size(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidDefaultSize {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Create an invalid link error.
    pub fn invalid_link(id: impl Into<String>, source: url::ParseError) -> Self {
        Self::InvalidLink {
            id: id.into(),
            source,
        }
    }

    /// Create a configuration I/O error.
    pub fn config_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigIo {
            path: path.into(),
            source,
        }
    }

    /// Create an invalid configuration value error.
    pub fn invalid_config(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            key: key.into(),
            message: message.into(),
        }
    }
}
