//! Character info bar
//!
//! Shows the glyph, title and code points of the hovered or focused tile.

use super::grid::CharacterInfo;
use emojis_core::{SharedReactiveGraph, State};

/// Info bar below the grid
#[derive(Clone, Debug)]
pub struct CharacterInfoView {
    character: State<Option<String>>,
    name: State<Option<String>>,
}

impl CharacterInfoView {
    /// Create an empty info bar
    pub fn new(graph: &SharedReactiveGraph) -> Self {
        Self {
            character: State::create(graph, None),
            name: State::create(graph, None),
        }
    }

    pub fn character(&self) -> &State<Option<String>> {
        &self.character
    }

    pub fn name(&self) -> &State<Option<String>> {
        &self.name
    }

    /// Show `info`
    pub fn set(&self, info: &CharacterInfo) {
        self.character.set(Some(info.character.clone()));
        self.name.set(Some(info.name.clone()));
    }

    /// Show nothing
    pub fn clear(&self) {
        self.character.set(None);
        self.name.set(None);
    }

    pub fn is_empty(&self) -> bool {
        self.character.get().is_none()
    }

    /// Code points of the displayed glyph, e.g. `U+1F600`.
    ///
    /// Sequences list every scalar value separated by spaces.
    pub fn code_point(&self) -> Option<String> {
        self.character.get().map(|glyph| format_code_points(&glyph))
    }
}

fn format_code_points(glyph: &str) -> String {
    glyph
        .chars()
        .map(|c| format!("U+{:04X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use emojis_core::shared_graph;

    #[test]
    fn test_starts_empty() {
        let graph = shared_graph();
        let info = CharacterInfoView::new(&graph);

        assert!(info.is_empty());
        assert_eq!(info.name().get(), None);
        assert_eq!(info.code_point(), None);
    }

    #[test]
    fn test_set_and_clear() {
        let graph = shared_graph();
        let info = CharacterInfoView::new(&graph);

        info.set(&CharacterInfo {
            name: "Grinning Face".to_string(),
            character: "😀".to_string(),
        });
        assert_eq!(info.character().get().as_deref(), Some("😀"));
        assert_eq!(info.name().get().as_deref(), Some("Grinning Face"));
        assert_eq!(info.code_point().as_deref(), Some("U+1F600"));

        info.clear();
        assert!(info.is_empty());
        assert_eq!(info.name().get(), None);
    }

    #[test]
    fn test_code_points_of_sequences() {
        assert_eq!(
            format_code_points("🧗‍♂️"),
            "U+1F9D7 U+200D U+2642 U+FE0F"
        );
        assert_eq!(format_code_points("©"), "U+00A9");
    }
}
