//! The emojis editor feature
//!
//! [`Emojis`] owns the per-session state of the picker: the reactive graph
//! its views live in, the emoji registry and the configuration. Data sets
//! register their groups through it during initialization, and the editor
//! toolbar asks it for the dropdown.

use crate::config::EmojisConfig;
use crate::error::Result;
use crate::registry::{
    read_registry, write_registry, EmojiDefinition, EmojiRegistry, GroupOptions, OrderedSet,
    SharedRegistry,
};
use crate::ui::{EmojisDropdown, TextInsertion};
use emojis_core::{shared_graph, SharedReactiveGraph};
use std::sync::{Arc, RwLock};

/// Emoji picker feature of one editor session
#[derive(Debug, Clone)]
pub struct Emojis {
    graph: SharedReactiveGraph,
    registry: SharedRegistry,
    config: EmojisConfig,
}

impl Emojis {
    /// Create the feature with a fresh reactive graph
    pub fn new(config: EmojisConfig) -> Self {
        Self::with_graph(shared_graph(), config)
    }

    /// Create the feature inside an existing session graph
    pub fn with_graph(graph: SharedReactiveGraph, config: EmojisConfig) -> Self {
        let registry = EmojiRegistry::with_all_group_label(config.all_label.clone());
        Self {
            graph,
            registry: Arc::new(RwLock::new(registry)),
            config,
        }
    }

    pub fn config(&self) -> &EmojisConfig {
        &self.config
    }

    pub fn graph(&self) -> &SharedReactiveGraph {
        &self.graph
    }

    pub fn registry(&self) -> &SharedRegistry {
        &self.registry
    }

    /// See [`EmojiRegistry::add_items`]
    pub fn add_items<I>(&self, group_name: &str, items: I, options: GroupOptions) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<EmojiDefinition>,
    {
        write_registry(&self.registry).add_items(group_name, items, options)
    }

    /// Group names ordered by the configured `order`
    pub fn groups(&self) -> Result<OrderedSet> {
        read_registry(&self.registry).groups(self.config.order.as_slice())
    }

    pub fn characters_for_group(&self, group_name: &str) -> Option<OrderedSet> {
        read_registry(&self.registry)
            .characters_for_group(group_name)
            .map(|titles| titles.into_owned())
    }

    pub fn character(&self, title: &str) -> Option<String> {
        read_registry(&self.registry)
            .character(title)
            .map(str::to_string)
    }

    pub fn group_label(&self, group_name: &str) -> Option<String> {
        read_registry(&self.registry)
            .group_label(group_name)
            .map(str::to_string)
    }

    /// Create the toolbar dropdown inserting into `host`
    pub fn create_dropdown(&self, host: Arc<dyn TextInsertion>) -> EmojisDropdown {
        EmojisDropdown::new(
            &self.graph,
            &self.registry,
            self.config.order.clone(),
            host,
        )
    }
}

impl Default for Emojis {
    fn default() -> Self {
        Self::new(EmojisConfig::default())
    }
}
