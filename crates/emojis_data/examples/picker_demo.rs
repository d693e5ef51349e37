//! Emoji Picker Demo
//!
//! Registers the bundled groups, opens the picker, browses a couple of
//! groups and inserts an emoji into a stand-in editor that prints to stdout.
//!
//! Run with: cargo run -p emojis_data --example picker_demo [config.toml]

use anyhow::{Context, Result};
use emojis::{Emojis, EmojisConfig, TextInsertion};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Editor that collects inserted text
#[derive(Default)]
struct ConsoleEditor {
    text: Mutex<String>,
}

impl TextInsertion for ConsoleEditor {
    fn is_enabled(&self) -> bool {
        true
    }

    fn insert_text(&self, text: &str) {
        let mut buffer = self.text.lock().unwrap();
        buffer.push_str(text);
        println!("editor: {}", buffer);
    }

    fn focus(&self) {
        println!("editor: focused");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => EmojisConfig::load(&path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => EmojisConfig::default().with_order(["Food", "People"]),
    };

    let emojis = Emojis::new(config);
    emojis_data::register_all(&emojis).context("registering bundled emojis")?;

    let editor = Arc::new(ConsoleEditor::default());
    let mut dropdown = emojis.create_dropdown(editor.clone());
    dropdown.open()?;

    let Some(panel) = dropdown.panel() else {
        anyhow::bail!("the picker panel was not built");
    };

    println!("{}", panel.navigation().header());
    for entry in panel.navigation().dropdown().entries() {
        println!("  {} ({})", entry.label, entry.name);
    }

    for group in ["All", "Food", "Activities"] {
        panel.navigation().dropdown().select(group);
        let tiles = panel.grid().tiles();
        let preview: String = tiles.iter().take(12).map(|t| t.character.as_str()).collect();
        println!("{group}: {} emojis {preview}", tiles.len());
    }

    panel.grid().hover(0);
    if let (Some(name), Some(code)) = (panel.info().name().get(), panel.info().code_point()) {
        println!("hovered {name} {code}");
    }

    panel.grid().activate(0);
    dropdown.close()?;

    println!("final text: {}", editor.text.lock().unwrap());
    Ok(())
}
