//! Emojis configuration
//!
//! Read from the `[emojis]` table of the editor's TOML configuration:
//!
//! ```toml
//! [emojis]
//! order = ["Food", "People"]
//! all_label = "All"
//! ```
//!
//! Every key is optional. A file without an `[emojis]` table yields the
//! defaults.

use crate::error::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Configuration consumed by the emojis feature
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EmojisConfig {
    /// Groups surfaced first in the category dropdown, in this order.
    /// Every name must be a registered group.
    #[serde(default)]
    pub order: Vec<String>,
    /// Display label of the synthetic group listing every emoji
    #[serde(default = "default_all_label")]
    pub all_label: String,
}

fn default_all_label() -> String {
    "All".to_string()
}

impl Default for EmojisConfig {
    fn default() -> Self {
        Self {
            order: Vec::new(),
            all_label: default_all_label(),
        }
    }
}

/// Top-level layout of the configuration file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    emojis: EmojisConfig,
}

impl EmojisConfig {
    /// Set the preferred group order
    pub fn with_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Set the label of the "All" group
    pub fn with_all_label(mut self, label: impl Into<String>) -> Self {
        self.all_label = label.into();
        self
    }

    /// Parse the `[emojis]` table out of a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        Ok(file.emojis)
    }

    /// Load the configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(
            "Loaded emojis configuration from {} ({} ordered groups)",
            path.display(),
            config.order.len()
        );
        Ok(config)
    }
}
