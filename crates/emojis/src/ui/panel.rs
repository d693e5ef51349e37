//! The picker panel
//!
//! Composes the navigation strip, the tile grid and the info bar. The grid
//! follows the navigation dropdown through an effect on its value, so
//! selecting a group (or building the panel) refills it from the registry.

use super::grid::CharacterGridView;
use super::info::CharacterInfoView;
use super::navigation::{GroupEntry, NavigationView};
use crate::error::Result;
use crate::registry::{read_registry, EmojiRegistry, SharedRegistry, ALL_EMOJIS_GROUP};
use emojis_core::{lock_graph, Effect, ListenerId, SharedReactiveGraph};
use std::sync::Arc;

/// Content of the emojis dropdown
#[derive(Debug)]
pub struct EmojisView {
    graph: SharedReactiveGraph,
    navigation: NavigationView,
    grid: CharacterGridView,
    info: CharacterInfoView,
    repopulate: Effect,
    /// Hover and focus listeners feeding the info bar
    info_listeners: [ListenerId; 2],
}

impl EmojisView {
    /// Build the panel from the current registry contents.
    ///
    /// The dropdown lists "All" first, then the groups in `order`, then the
    /// remaining groups in registration order. Fails if `order` names a group
    /// that is not registered.
    pub fn build<S: AsRef<str>>(
        graph: &SharedReactiveGraph,
        registry: &SharedRegistry,
        order: &[S],
    ) -> Result<Self> {
        let entries = group_entries(&read_registry(registry), order)?;
        tracing::debug!("Building emojis panel with {} groups", entries.len());

        let navigation = NavigationView::new(graph, entries);
        let grid = CharacterGridView::new();
        let info = CharacterInfoView::new(graph);

        let hover_info = info.clone();
        let hover = grid.tile_hover().on(move |character| hover_info.set(character));
        let focus_info = info.clone();
        let focus = grid.tile_focus().on(move |character| focus_info.set(character));

        // Runs once now, filling the grid for the initial selection
        let repopulate = {
            let grid = grid.clone();
            let registry = Arc::clone(registry);
            let value = navigation.dropdown().value().signal();
            lock_graph(graph).create_effect(move |g| {
                let group_name = g.get(value).unwrap_or_default();
                populate_grid(&grid, &read_registry(&registry), &group_name);
            })
        };

        Ok(Self {
            graph: Arc::clone(graph),
            navigation,
            grid,
            info,
            repopulate,
            info_listeners: [hover, focus],
        })
    }

    pub fn navigation(&self) -> &NavigationView {
        &self.navigation
    }

    pub fn grid(&self) -> &CharacterGridView {
        &self.grid
    }

    pub fn info(&self) -> &CharacterInfoView {
        &self.info
    }
}

impl Drop for EmojisView {
    fn drop(&mut self) {
        lock_graph(&self.graph).dispose_effect(self.repopulate);
        let [hover, focus] = self.info_listeners;
        self.grid.tile_hover().off(hover);
        self.grid.tile_focus().off(focus);
    }
}

fn group_entries<S: AsRef<str>>(registry: &EmojiRegistry, order: &[S]) -> Result<Vec<GroupEntry>> {
    let mut entries = vec![GroupEntry::new(
        ALL_EMOJIS_GROUP,
        registry.all_group_label(),
    )];
    for name in registry.groups(order)? {
        let label = registry.group_label(&name).unwrap_or(&name).to_string();
        entries.push(GroupEntry::new(name, label));
    }
    Ok(entries)
}

/// Replace the grid contents with the emojis of `group_name`
fn populate_grid(grid: &CharacterGridView, registry: &EmojiRegistry, group_name: &str) {
    grid.clear();

    let Some(titles) = registry.characters_for_group(group_name) else {
        tracing::warn!("No emoji group named '{}' to show", group_name);
        return;
    };

    for title in titles.iter() {
        if let Some(character) = registry.character(title) {
            grid.add_tile(grid.create_tile(character, title.as_str()));
        }
    }
    tracing::trace!("Showing {} emojis of group '{}'", grid.len(), group_name);
}
