//! End-to-end tests for the emojis feature
//!
//! Drive the feature the way the editor does: register groups, open the
//! toolbar dropdown, interact with the panel and check what reaches the host.

use crate::{EmojiError, Emojis, EmojisConfig, EmojisDropdown, GroupOptions, TextInsertion};
use emojis_core::lock_graph;
use std::sync::{Arc, Mutex};

/// Editor stand-in recording what the picker does to it
#[derive(Default)]
struct RecordingHost {
    inserted: Mutex<Vec<String>>,
    focus_count: Mutex<usize>,
    disabled: bool,
}

impl TextInsertion for RecordingHost {
    fn is_enabled(&self) -> bool {
        !self.disabled
    }

    fn insert_text(&self, text: &str) {
        self.inserted.lock().unwrap().push(text.to_string());
    }

    fn focus(&self) {
        *self.focus_count.lock().unwrap() += 1;
    }
}

fn populated(config: EmojisConfig) -> Emojis {
    let emojis = Emojis::new(config);
    emojis
        .add_items(
            "People",
            [
                ("Grinning Face", "😀"),
                ("Winking Face", "😉"),
                ("Man Climbing", "🧗‍♂️"),
            ],
            GroupOptions::labeled("😀 People"),
        )
        .unwrap();
    emojis
        .add_items(
            "Places",
            [("Rocket", "🚀"), ("Person Rowing Boat", "🚣")],
            GroupOptions::labeled("🚀 Places"),
        )
        .unwrap();
    emojis
        .add_items(
            "Food",
            [("Red Apple", "🍎"), ("Grapes", "🍇"), ("Red Apple", "🍎")],
            GroupOptions::labeled("🍔 Food"),
        )
        .unwrap();
    emojis
}

fn grid_titles(dropdown: &EmojisDropdown) -> Vec<String> {
    dropdown
        .panel()
        .unwrap()
        .grid()
        .tiles()
        .into_iter()
        .map(|tile| tile.title)
        .collect()
}

#[test]
fn test_panel_is_built_lazily_once() {
    let emojis = populated(EmojisConfig::default());
    let host = Arc::new(RecordingHost::default());
    let mut dropdown = emojis.create_dropdown(host);

    assert_eq!(dropdown.button_label(), "Emojis");
    assert!(dropdown.panel().is_none());

    dropdown.open().unwrap();
    dropdown.close().unwrap();
    dropdown.open().unwrap();

    assert!(dropdown.is_open());
    assert!(dropdown.panel().is_some());
    assert_eq!(lock_graph(emojis.graph()).stats().effect_count, 1);
}

#[test]
fn test_initial_grid_shows_every_emoji() {
    let emojis = populated(EmojisConfig::default());
    let mut dropdown = emojis.create_dropdown(Arc::new(RecordingHost::default()));
    dropdown.open().unwrap();

    let navigation = dropdown.panel().unwrap().navigation();
    assert_eq!(navigation.header(), "Emojis");
    assert_eq!(navigation.current_group_name(), "All");
    assert_eq!(navigation.dropdown().button_label().as_deref(), Some("All"));
    assert_eq!(
        grid_titles(&dropdown),
        vec![
            "Grinning Face",
            "Winking Face",
            "Man Climbing",
            "Rocket",
            "Person Rowing Boat",
            "Red Apple",
            "Grapes",
        ]
    );
}

#[test]
fn test_navigation_follows_configured_order() {
    let emojis = populated(EmojisConfig::default().with_order(["Food", "People"]));
    let mut dropdown = emojis.create_dropdown(Arc::new(RecordingHost::default()));
    dropdown.open().unwrap();

    let labels: Vec<_> = dropdown
        .panel()
        .unwrap()
        .navigation()
        .dropdown()
        .entries()
        .iter()
        .map(|entry| entry.label.clone())
        .collect();
    assert_eq!(labels, vec!["All", "🍔 Food", "😀 People", "🚀 Places"]);
}

#[test]
fn test_selecting_a_group_repopulates_grid() {
    let emojis = populated(EmojisConfig::default());
    let mut dropdown = emojis.create_dropdown(Arc::new(RecordingHost::default()));
    dropdown.open().unwrap();

    let dropdown_view = dropdown.panel().unwrap().navigation().dropdown();
    assert!(dropdown_view.select("Food"));
    assert!(dropdown_view.is_on("Food"));
    assert_eq!(dropdown_view.button_label().as_deref(), Some("🍔 Food"));

    assert_eq!(grid_titles(&dropdown), vec!["Red Apple", "Grapes"]);
}

#[test]
fn test_activating_a_tile_inserts_and_refocuses() {
    let emojis = populated(EmojisConfig::default());
    let host = Arc::new(RecordingHost::default());
    let mut dropdown = emojis.create_dropdown(host.clone());
    dropdown.open().unwrap();

    let executed = Arc::new(Mutex::new(Vec::new()));
    let sink = executed.clone();
    dropdown
        .execute()
        .on(move |event| sink.lock().unwrap().push(event.name.clone()));

    let panel = dropdown.panel().unwrap();
    panel.navigation().dropdown().select("People");
    assert!(panel.grid().activate(2));

    assert_eq!(*host.inserted.lock().unwrap(), vec!["🧗‍♂️".to_string()]);
    assert_eq!(*host.focus_count.lock().unwrap(), 1);
    assert_eq!(*executed.lock().unwrap(), vec!["Man Climbing".to_string()]);
}

#[test]
fn test_hover_fills_info_and_open_resets_it() {
    let emojis = populated(EmojisConfig::default());
    let mut dropdown = emojis.create_dropdown(Arc::new(RecordingHost::default()));
    dropdown.open().unwrap();

    let info = dropdown.panel().unwrap().info().clone();
    assert!(info.is_empty());

    dropdown.panel().unwrap().grid().hover(0);
    assert_eq!(info.name().get().as_deref(), Some("Grinning Face"));
    assert_eq!(info.character().get().as_deref(), Some("😀"));
    assert_eq!(info.code_point().as_deref(), Some("U+1F600"));

    dropdown.close().unwrap();
    assert!(info.is_empty());

    dropdown.open().unwrap();
    dropdown.panel().unwrap().grid().focus(3);
    assert_eq!(info.name().get().as_deref(), Some("Rocket"));
    dropdown.toggle().unwrap();
    assert!(!dropdown.is_open());
    assert!(info.is_empty());
}

#[test]
fn test_invalid_order_fails_on_open() {
    let emojis = populated(EmojisConfig::default().with_order(["Symbols"]));
    let mut dropdown = emojis.create_dropdown(Arc::new(RecordingHost::default()));

    let err = dropdown.open().unwrap_err();
    assert_eq!(err, EmojiError::InvalidOrderGroupName("Symbols".to_string()));
    assert!(!dropdown.is_open());
    assert!(dropdown.panel().is_none());
    assert!(emojis.groups().is_err());
}

#[test]
fn test_enabled_follows_host() {
    let emojis = populated(EmojisConfig::default());
    let host = Arc::new(RecordingHost {
        disabled: true,
        ..Default::default()
    });
    let dropdown = emojis.create_dropdown(host);
    assert!(!dropdown.is_enabled());
}

#[test]
fn test_feature_reads_and_rejects() {
    let emojis = populated(EmojisConfig::default().with_all_label("Everything"));

    assert_eq!(
        emojis.add_items("All", [("Star", "⭐")], GroupOptions::default()),
        Err(EmojiError::InvalidGroupName)
    );
    assert_eq!(emojis.character("Star"), None);

    assert_eq!(emojis.group_label("All").as_deref(), Some("Everything"));
    assert_eq!(emojis.group_label("Food").as_deref(), Some("🍔 Food"));
    assert_eq!(emojis.characters_for_group("Food").unwrap().len(), 2);
    assert_eq!(emojis.characters_for_group("All").unwrap().len(), 7);
    assert!(emojis.characters_for_group("Symbols").is_none());
}

#[test]
fn test_registration_after_open_shows_on_next_selection() {
    let emojis = populated(EmojisConfig::default());
    let mut dropdown = emojis.create_dropdown(Arc::new(RecordingHost::default()));
    dropdown.open().unwrap();

    emojis
        .add_items("Food", [("Kiwi Fruit", "🥝")], GroupOptions::default())
        .unwrap();
    dropdown
        .panel()
        .unwrap()
        .navigation()
        .dropdown()
        .select("Food");

    assert_eq!(grid_titles(&dropdown), vec!["Red Apple", "Grapes", "Kiwi Fruit"]);
}
