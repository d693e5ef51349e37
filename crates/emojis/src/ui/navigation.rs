//! Category navigation
//!
//! The navigation strip at the top of the picker: a header label and a
//! dropdown listing the emoji groups. The selected group lives in a
//! [`State`] so the grid can follow it through an effect.

use emojis_core::{Emitter, SharedReactiveGraph, State};

/// Header shown above the category dropdown
pub const NAVIGATION_HEADER: &str = "Emojis";

/// One entry of the category dropdown
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupEntry {
    /// Group name, the value stored when the entry is selected
    pub name: String,
    /// Display label
    pub label: String,
}

impl GroupEntry {
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
        }
    }
}

/// Dropdown choosing the group whose emojis the grid shows
pub struct GroupDropdown {
    value: State<String>,
    entries: Vec<GroupEntry>,
    execute: Emitter<String>,
}

impl GroupDropdown {
    /// Create the dropdown. The first entry starts selected.
    pub fn new(graph: &SharedReactiveGraph, entries: Vec<GroupEntry>) -> Self {
        let initial = entries
            .first()
            .map(|entry| entry.name.clone())
            .unwrap_or_default();

        Self {
            value: State::create(graph, initial),
            entries,
            execute: Emitter::new(),
        }
    }

    /// Selected group name
    pub fn value(&self) -> &State<String> {
        &self.value
    }

    pub fn entries(&self) -> &[GroupEntry] {
        &self.entries
    }

    /// Label of the selected entry, shown on the dropdown button
    pub fn button_label(&self) -> Option<String> {
        let current = self.value.get();
        self.entries
            .iter()
            .find(|entry| entry.name == current)
            .map(|entry| entry.label.clone())
    }

    /// Whether `name` is the selected entry (its check mark)
    pub fn is_on(&self, name: &str) -> bool {
        self.value.get() == name
    }

    /// Select an entry by group name and announce it on [`Self::execute`].
    ///
    /// Returns false, without changing the selection, for names that are not
    /// in the list.
    pub fn select(&self, name: &str) -> bool {
        if !self.entries.iter().any(|entry| entry.name == name) {
            tracing::warn!("Ignoring selection of unknown emoji group '{}'", name);
            return false;
        }

        self.value.set(name.to_string());
        self.execute.emit(&name.to_string());
        true
    }

    /// Emits the group name each time an entry is selected
    pub fn execute(&self) -> &Emitter<String> {
        &self.execute
    }
}

impl std::fmt::Debug for GroupDropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroupDropdown")
            .field("value", &self.value.try_get())
            .field("entries", &self.entries)
            .finish()
    }
}

/// Navigation strip of the picker panel
#[derive(Debug)]
pub struct NavigationView {
    header: String,
    dropdown: GroupDropdown,
    execute: Emitter<String>,
}

impl NavigationView {
    pub fn new(graph: &SharedReactiveGraph, entries: Vec<GroupEntry>) -> Self {
        let dropdown = GroupDropdown::new(graph, entries);
        let execute = Emitter::new();
        dropdown.execute().delegate_to(&execute);

        Self {
            header: NAVIGATION_HEADER.to_string(),
            dropdown,
            execute,
        }
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn dropdown(&self) -> &GroupDropdown {
        &self.dropdown
    }

    /// Name of the group currently selected in the dropdown
    pub fn current_group_name(&self) -> String {
        self.dropdown.value().get()
    }

    /// Re-emits the dropdown's selections
    pub fn execute(&self) -> &Emitter<String> {
        &self.execute
    }
}
