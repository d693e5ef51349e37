//! Emojis
//!
//! Emoji picker for the rich text editor:
//!
//! - **Registry**: emoji titles mapped to characters, organized in named
//!   groups with a synthetic "All" group listing everything
//! - **Configuration**: preferred group order and the "All" label, read from
//!   the `[emojis]` table of the editor configuration
//! - **Picker views**: headless view models for the toolbar dropdown, the
//!   category navigation, the tile grid and the info bar
//!
//! # Example
//!
//! ```rust
//! use emojis::{Emojis, EmojisConfig, GroupOptions};
//!
//! let emojis = Emojis::new(EmojisConfig::default().with_order(["Food"]));
//!
//! emojis
//!     .add_items("People", [("Grinning Face", "😀")], GroupOptions::labeled("😀 People"))
//!     .unwrap();
//! emojis
//!     .add_items("Food", [("Red Apple", "🍎")], GroupOptions::labeled("🍔 Food"))
//!     .unwrap();
//!
//! let groups: Vec<_> = emojis.groups().unwrap().into_iter().collect();
//! assert_eq!(groups, vec!["Food", "People"]);
//! assert_eq!(emojis.character("Red Apple").as_deref(), Some("🍎"));
//! ```

pub mod config;
pub mod error;
pub mod plugin;
pub mod registry;
pub mod ui;

pub use config::EmojisConfig;
pub use error::{ConfigError, EmojiError, Result};
pub use plugin::Emojis;
pub use registry::{
    EmojiDefinition, EmojiRegistry, Group, GroupOptions, OrderedSet, SharedRegistry,
    ALL_EMOJIS_GROUP,
};
pub use ui::{
    CharacterExecute, CharacterGridView, CharacterInfo, CharacterInfoView, EmojisDropdown,
    EmojisView, GroupDropdown, GroupEntry, NavigationView, TextInsertion, Tile,
};

#[cfg(test)]
mod tests;
