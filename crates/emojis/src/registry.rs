//! Emoji registry
//!
//! Maps emoji titles to their characters and groups titles into named
//! categories. Category data sets populate it once during initialization with
//! [`EmojiRegistry::add_items`]; the picker then reads it to build the
//! category dropdown and the tile grid.
//!
//! Titles are global keys: registering a title again, in any group, replaces
//! its character. Groups keep their titles in insertion order without
//! duplicates. The group name [`ALL_EMOJIS_GROUP`] is reserved for the
//! synthetic category listing every registered title.
//!
//! ```
//! use emojis::{EmojiRegistry, GroupOptions};
//!
//! let mut registry = EmojiRegistry::new();
//! registry
//!     .add_items(
//!         "People",
//!         [("Grinning Face", "😀"), ("Winking Face", "😉")],
//!         GroupOptions::default(),
//!     )
//!     .unwrap();
//!
//! assert_eq!(registry.character("Grinning Face"), Some("😀"));
//! assert_eq!(registry.group_label("People"), Some("People"));
//! ```

use crate::error::{EmojiError, Result};
use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxBuildHasher;
use std::borrow::Cow;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Name of the synthetic group that lists every registered emoji
pub const ALL_EMOJIS_GROUP: &str = "All";

/// Insertion-ordered set of titles or group names
pub type OrderedSet = IndexSet<String, FxBuildHasher>;

/// A single emoji: its unique title and the character displayed for it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmojiDefinition {
    /// A unique name of the emoji (e.g. "Grinning Face")
    pub title: String,
    /// The string inserted into the document (e.g. "😀")
    pub character: String,
}

impl EmojiDefinition {
    pub fn new(title: impl Into<String>, character: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            character: character.into(),
        }
    }
}

/// `(title, character)` pairs, the layout of the bundled data tables
impl<T: Into<String>, C: Into<String>> From<(T, C)> for EmojiDefinition {
    fn from((title, character): (T, C)) -> Self {
        Self::new(title, character)
    }
}

/// Options for [`EmojiRegistry::add_items`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupOptions {
    /// Label displayed for the group. Defaults to the group name. Only used
    /// when the group is created; later calls cannot relabel it.
    pub label: Option<String>,
}

impl GroupOptions {
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
        }
    }
}

/// A named category of emoji titles
#[derive(Debug, Clone)]
pub struct Group {
    label: String,
    items: OrderedSet,
}

impl Group {
    fn new(label: String) -> Self {
        Self {
            label,
            items: OrderedSet::default(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Titles of this group in insertion order
    pub fn items(&self) -> &OrderedSet {
        &self.items
    }
}

/// Registry of emoji characters and their groups for one editor session
#[derive(Debug, Clone)]
pub struct EmojiRegistry {
    /// Title -> character, in first-registration order
    characters: IndexMap<String, String, FxBuildHasher>,
    /// Group name -> group, in creation order
    groups: IndexMap<String, Group, FxBuildHasher>,
    /// Label describing the "All" group
    all_group_label: String,
}

impl EmojiRegistry {
    /// Create an empty registry whose "All" group is labeled "All"
    pub fn new() -> Self {
        Self::with_all_group_label(ALL_EMOJIS_GROUP)
    }

    /// Create an empty registry with a custom label for the "All" group
    pub fn with_all_group_label(label: impl Into<String>) -> Self {
        Self {
            characters: IndexMap::default(),
            groups: IndexMap::default(),
            all_group_label: label.into(),
        }
    }

    /// Add emojis to `group_name`, creating the group on first use.
    ///
    /// An existing title gets its character replaced and keeps its position
    /// in the "All" listing. Adding a title a group already holds leaves the
    /// group unchanged.
    ///
    /// Fails with [`EmojiError::InvalidGroupName`] for the reserved "All"
    /// group, in which case nothing is registered.
    pub fn add_items<I>(&mut self, group_name: &str, items: I, options: GroupOptions) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<EmojiDefinition>,
    {
        if group_name == ALL_EMOJIS_GROUP {
            tracing::warn!("Rejected emoji registration under the reserved group name");
            return Err(EmojiError::InvalidGroupName);
        }

        let label = options.label.unwrap_or_else(|| group_name.to_string());
        let mut added = 0usize;

        let group = get_or_create_group(&mut self.groups, group_name, label);
        for item in items {
            let EmojiDefinition { title, character } = item.into();
            group.items.insert(title.clone());
            self.characters.insert(title, character);
            added += 1;
        }

        tracing::debug!(
            "Registered {} emojis in group '{}' ({} in group, {} total)",
            added,
            group_name,
            group.items.len(),
            self.characters.len()
        );
        Ok(())
    }

    /// Group names in display order.
    ///
    /// Names from `order` come first in the given order, then every other
    /// registered group in creation order. The "All" group is never part of
    /// the result.
    ///
    /// Fails with [`EmojiError::InvalidOrderGroupName`] naming the first
    /// entry of `order` that is not a registered group.
    pub fn groups<S: AsRef<str>>(&self, order: &[S]) -> Result<OrderedSet> {
        if let Some(invalid) = order
            .iter()
            .map(AsRef::as_ref)
            .find(|name| !self.groups.contains_key(*name))
        {
            return Err(EmojiError::InvalidOrderGroupName(invalid.to_string()));
        }

        let mut names: OrderedSet = order.iter().map(|name| name.as_ref().to_string()).collect();
        names.extend(self.groups.keys().cloned());
        Ok(names)
    }

    /// Titles shown for a group.
    ///
    /// "All" yields every registered title in registration order. Unknown
    /// groups yield `None`.
    pub fn characters_for_group(&self, group_name: &str) -> Option<Cow<'_, OrderedSet>> {
        if group_name == ALL_EMOJIS_GROUP {
            return Some(Cow::Owned(self.characters.keys().cloned().collect()));
        }

        self.groups
            .get(group_name)
            .map(|group| Cow::Borrowed(&group.items))
    }

    /// The character registered for `title`, if any
    pub fn character(&self, title: &str) -> Option<&str> {
        self.characters.get(title).map(String::as_str)
    }

    /// A registered group
    pub fn group(&self, group_name: &str) -> Option<&Group> {
        self.groups.get(group_name)
    }

    /// Display label of a group, including the "All" group
    pub fn group_label(&self, group_name: &str) -> Option<&str> {
        if group_name == ALL_EMOJIS_GROUP {
            return Some(&self.all_group_label);
        }
        self.group(group_name).map(Group::label)
    }

    pub fn all_group_label(&self) -> &str {
        &self.all_group_label
    }

    /// Number of registered titles
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Number of registered groups, not counting "All"
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl Default for EmojiRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Return the named group, creating it with `label` if it does not exist yet
fn get_or_create_group<'a>(
    groups: &'a mut IndexMap<String, Group, FxBuildHasher>,
    group_name: &str,
    label: String,
) -> &'a mut Group {
    groups
        .entry(group_name.to_string())
        .or_insert_with(|| Group::new(label))
}

/// Registry shared between the feature and the panels it builds
pub type SharedRegistry = Arc<RwLock<EmojiRegistry>>;

pub(crate) fn read_registry(registry: &SharedRegistry) -> RwLockReadGuard<'_, EmojiRegistry> {
    registry.read().unwrap_or_else(PoisonError::into_inner)
}

pub(crate) fn write_registry(registry: &SharedRegistry) -> RwLockWriteGuard<'_, EmojiRegistry> {
    registry.write().unwrap_or_else(PoisonError::into_inner)
}
