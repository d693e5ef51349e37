//! Toolbar dropdown
//!
//! The "Emojis" toolbar button. Its panel is built the first time the open
//! state changes and kept afterwards; each open or close resets the info bar.
//! Activating a tile inserts the glyph through the host editor.

use super::grid::CharacterExecute;
use super::panel::EmojisView;
use crate::error::Result;
use crate::registry::SharedRegistry;
use emojis_core::{Emitter, SharedReactiveGraph, State};
use std::sync::Arc;

/// Label of the toolbar button
pub const DROPDOWN_LABEL: &str = "Emojis";

/// The editor the picker inserts into
pub trait TextInsertion: Send + Sync {
    /// Whether text can be inserted right now (the insert command is enabled)
    fn is_enabled(&self) -> bool;

    /// Insert `text` at the current selection
    fn insert_text(&self, text: &str);

    /// Return keyboard focus to the editing view
    fn focus(&self);
}

/// Toolbar dropdown hosting the emojis panel
pub struct EmojisDropdown {
    graph: SharedReactiveGraph,
    registry: SharedRegistry,
    order: Vec<String>,
    host: Arc<dyn TextInsertion>,
    is_open: State<bool>,
    panel: Option<EmojisView>,
    execute: Emitter<CharacterExecute>,
}

impl EmojisDropdown {
    pub fn new(
        graph: &SharedReactiveGraph,
        registry: &SharedRegistry,
        order: Vec<String>,
        host: Arc<dyn TextInsertion>,
    ) -> Self {
        let execute: Emitter<CharacterExecute> = Emitter::new();
        let target = Arc::clone(&host);
        execute.on(move |event| {
            tracing::debug!("Inserting emoji '{}'", event.name);
            target.insert_text(&event.character);
            target.focus();
        });

        Self {
            graph: Arc::clone(graph),
            registry: Arc::clone(registry),
            order,
            host,
            is_open: State::create(graph, false),
            panel: None,
            execute,
        }
    }

    pub fn button_label(&self) -> &str {
        DROPDOWN_LABEL
    }

    /// Follows the host's insert command
    pub fn is_enabled(&self) -> bool {
        self.host.is_enabled()
    }

    pub fn is_open(&self) -> bool {
        self.is_open.get()
    }

    /// The panel, once the dropdown has been opened
    pub fn panel(&self) -> Option<&EmojisView> {
        self.panel.as_ref()
    }

    /// Emits every tile activation before the host inserts it
    pub fn execute(&self) -> &Emitter<CharacterExecute> {
        &self.execute
    }

    pub fn open(&mut self) -> Result<()> {
        self.set_open(true)
    }

    pub fn close(&mut self) -> Result<()> {
        self.set_open(false)
    }

    pub fn toggle(&mut self) -> Result<()> {
        let open = !self.is_open();
        self.set_open(open)
    }

    /// Change the open state.
    ///
    /// The first change builds the panel, which fails if the configured
    /// group order names an unregistered group. The open state is left
    /// unchanged in that case. Setting the current state again does nothing.
    pub fn set_open(&mut self, open: bool) -> Result<()> {
        if self.is_open() == open {
            return Ok(());
        }

        self.ensure_panel()?.info().clear();
        self.is_open.set(open);
        tracing::trace!("Emojis dropdown {}", if open { "opened" } else { "closed" });
        Ok(())
    }

    fn ensure_panel(&mut self) -> Result<&EmojisView> {
        let panel = match self.panel.take() {
            Some(panel) => panel,
            None => {
                let panel =
                    EmojisView::build(&self.graph, &self.registry, self.order.as_slice())?;
                panel.grid().execute().delegate_to(&self.execute);
                panel
            }
        };
        Ok(&*self.panel.insert(panel))
    }
}

impl std::fmt::Debug for EmojisDropdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmojisDropdown")
            .field("order", &self.order)
            .field("is_open", &self.is_open.try_get())
            .field("panel", &self.panel.is_some())
            .finish()
    }
}
