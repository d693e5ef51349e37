//! Bundled emoji data
//!
//! The emoji groups shipped with the editor. [`register_all`] adds them to an
//! [`Emojis`] feature in the order the picker lists them by default:
//! People, Food, Places, Activities.
//!
//! ```rust
//! use emojis::{Emojis, EmojisConfig};
//!
//! let emojis = Emojis::new(EmojisConfig::default());
//! emojis_data::register_all(&emojis).unwrap();
//!
//! assert_eq!(emojis.character("Rocket").as_deref(), Some("🚀"));
//! ```

pub mod activities;
pub mod food;
pub mod people;
pub mod places;

use emojis::{Emojis, Result};

/// Register every bundled group
pub fn register_all(emojis: &Emojis) -> Result<()> {
    people::register(emojis)?;
    food::register(emojis)?;
    places::register(emojis)?;
    activities::register(emojis)?;

    tracing::debug!(
        "Registered bundled emoji data ({} emojis)",
        emojis
            .characters_for_group(emojis::ALL_EMOJIS_GROUP)
            .map_or(0, |titles| titles.len())
    );
    Ok(())
}
