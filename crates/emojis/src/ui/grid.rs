//! Character grid
//!
//! One tile per emoji of the selected group. The presentation layer forwards
//! pointer and keyboard interaction by tile index; the grid turns it into
//! hover, focus and execute events.

use emojis_core::Emitter;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A tile of the grid
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    /// Glyph drawn on the tile and inserted on activation
    pub character: String,
    /// Emoji title, shown as the tile tooltip
    pub title: String,
}

/// Payload of the hover and focus events, consumed by the info view
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterInfo {
    pub name: String,
    pub character: String,
}

/// Payload of the execute event raised when a tile is activated
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CharacterExecute {
    pub name: String,
    pub character: String,
}

impl From<&Tile> for CharacterInfo {
    fn from(tile: &Tile) -> Self {
        Self {
            name: tile.title.clone(),
            character: tile.character.clone(),
        }
    }
}

impl From<&Tile> for CharacterExecute {
    fn from(tile: &Tile) -> Self {
        Self {
            name: tile.title.clone(),
            character: tile.character.clone(),
        }
    }
}

/// Grid of emoji tiles
///
/// Cloning yields another handle to the same tiles and emitters.
#[derive(Clone, Debug, Default)]
pub struct CharacterGridView {
    tiles: Arc<Mutex<Vec<Tile>>>,
    tile_hover: Emitter<CharacterInfo>,
    tile_focus: Emitter<CharacterInfo>,
    execute: Emitter<CharacterExecute>,
}

impl CharacterGridView {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock_tiles(&self) -> MutexGuard<'_, Vec<Tile>> {
        self.tiles.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Remove every tile
    pub fn clear(&self) {
        self.lock_tiles().clear();
    }

    /// Build a tile without adding it
    pub fn create_tile(&self, character: impl Into<String>, title: impl Into<String>) -> Tile {
        Tile {
            character: character.into(),
            title: title.into(),
        }
    }

    /// Append a tile
    pub fn add_tile(&self, tile: Tile) {
        self.lock_tiles().push(tile);
    }

    /// Snapshot of the tiles in display order
    pub fn tiles(&self) -> Vec<Tile> {
        self.lock_tiles().clone()
    }

    pub fn tile(&self, index: usize) -> Option<Tile> {
        self.lock_tiles().get(index).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock_tiles().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock_tiles().is_empty()
    }

    /// Pointer entered the tile at `index`. Returns false if there is none.
    pub fn hover(&self, index: usize) -> bool {
        // The tile lock must be released before listeners run
        let Some(tile) = self.tile(index) else {
            return false;
        };
        self.tile_hover.emit(&CharacterInfo::from(&tile));
        true
    }

    /// Keyboard focus moved to the tile at `index`
    pub fn focus(&self, index: usize) -> bool {
        let Some(tile) = self.tile(index) else {
            return false;
        };
        self.tile_focus.emit(&CharacterInfo::from(&tile));
        true
    }

    /// The tile at `index` was clicked or confirmed with the keyboard
    pub fn activate(&self, index: usize) -> bool {
        let Some(tile) = self.tile(index) else {
            return false;
        };
        tracing::debug!("Activated emoji tile '{}'", tile.title);
        self.execute.emit(&CharacterExecute::from(&tile));
        true
    }

    pub fn tile_hover(&self) -> &Emitter<CharacterInfo> {
        &self.tile_hover
    }

    pub fn tile_focus(&self) -> &Emitter<CharacterInfo> {
        &self.tile_focus
    }

    pub fn execute(&self) -> &Emitter<CharacterExecute> {
        &self.execute
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with_tiles() -> CharacterGridView {
        let grid = CharacterGridView::new();
        grid.add_tile(grid.create_tile("😀", "Grinning Face"));
        grid.add_tile(grid.create_tile("😉", "Winking Face"));
        grid
    }

    #[test]
    fn test_tiles_keep_insertion_order() {
        let grid = grid_with_tiles();

        let titles: Vec<_> = grid.tiles().into_iter().map(|t| t.title).collect();
        assert_eq!(titles, vec!["Grinning Face", "Winking Face"]);
        assert_eq!(grid.len(), 2);
    }

    #[test]
    fn test_clear() {
        let grid = grid_with_tiles();
        grid.clear();
        assert!(grid.is_empty());
        assert_eq!(grid.tile(0), None);
    }

    #[test]
    fn test_clones_share_tiles() {
        let grid = CharacterGridView::new();
        let handle = grid.clone();
        handle.add_tile(handle.create_tile("🍎", "Red Apple"));
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn test_interaction_events() {
        let grid = grid_with_tiles();
        let hovered = Arc::new(Mutex::new(Vec::new()));
        let executed = Arc::new(Mutex::new(Vec::new()));

        let sink = hovered.clone();
        grid.tile_hover()
            .on(move |info| sink.lock().unwrap().push(info.name.clone()));
        let sink = hovered.clone();
        grid.tile_focus()
            .on(move |info| sink.lock().unwrap().push(format!("focus {}", info.name)));
        let sink = executed.clone();
        grid.execute()
            .on(move |event| sink.lock().unwrap().push(event.character.clone()));

        assert!(grid.hover(0));
        assert!(grid.focus(1));
        assert!(grid.activate(1));

        assert_eq!(
            *hovered.lock().unwrap(),
            vec!["Grinning Face".to_string(), "focus Winking Face".to_string()]
        );
        assert_eq!(*executed.lock().unwrap(), vec!["😉".to_string()]);
    }

    #[test]
    fn test_out_of_range_index() {
        let grid = grid_with_tiles();
        let count = Arc::new(Mutex::new(0));
        let sink = count.clone();
        grid.execute().on(move |_| *sink.lock().unwrap() += 1);

        assert!(!grid.hover(5));
        assert!(!grid.focus(2));
        assert!(!grid.activate(2));
        assert_eq!(*count.lock().unwrap(), 0);
    }
}
