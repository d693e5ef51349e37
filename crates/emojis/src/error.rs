//! Error types for the emojis feature

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the emoji registry
///
/// Both are caller misconfiguration and are not retried. Lookups of unknown
/// titles or groups are not errors; they return `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmojiError {
    /// Items were registered under the reserved "All" group
    #[error("emoji-invalid-group-name: \"All\" is reserved for the group listing every emoji")]
    InvalidGroupName,

    /// The configured group order names a group that was never registered
    #[error("emoji-invalid-order-group-name: no emoji group named \"{0}\" is registered")]
    InvalidOrderGroupName(String),
}

/// Errors raised while loading the emojis configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration is not valid TOML or does not match the schema
    #[error("failed to parse emojis configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type for registry operations
pub type Result<T> = std::result::Result<T, EmojiError>;
