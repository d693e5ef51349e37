//! Headless picker views
//!
//! View models for the emoji picker. They hold the state a presentation
//! layer binds to and accept interaction by name or index; drawing is left to
//! the host.
//!
//! ```text
//! EmojisDropdown ("Emojis" toolbar button)
//! └── EmojisView
//!     ├── NavigationView ── GroupDropdown
//!     ├── CharacterGridView ── Tile*
//!     └── CharacterInfoView
//! ```

pub mod dropdown;
pub mod grid;
pub mod info;
pub mod navigation;
pub mod panel;

pub use dropdown::{EmojisDropdown, TextInsertion, DROPDOWN_LABEL};
pub use grid::{CharacterExecute, CharacterGridView, CharacterInfo, Tile};
pub use info::CharacterInfoView;
pub use navigation::{GroupDropdown, GroupEntry, NavigationView, NAVIGATION_HEADER};
pub use panel::EmojisView;
