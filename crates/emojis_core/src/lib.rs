//! Emojis Core Runtime
//!
//! The primitives the emoji picker views are wired with:
//!
//! - **Reactive Signals**: values a presentation layer binds to, and effects
//!   that re-run when a signal they read changes
//! - **Event Delegation**: emitters that forward interaction events from a
//!   nested view to its parent
//!
//! # Example
//!
//! ```rust
//! use emojis_core::reactive::ReactiveGraph;
//! use std::sync::{Arc, Mutex};
//!
//! let mut graph = ReactiveGraph::new();
//! let shown = Arc::new(Mutex::new(String::new()));
//!
//! let group = graph.create_signal("All".to_string());
//! let sink = shown.clone();
//! graph.create_effect(move |g| {
//!     *sink.lock().unwrap() = format!("Showing {}", g.get(group).unwrap_or_default());
//! });
//!
//! graph.set(group, "Food".to_string());
//! assert_eq!(*shown.lock().unwrap(), "Showing Food");
//! ```

pub mod events;
pub mod reactive;

pub use events::{Emitter, ListenerId};
pub use reactive::{
    lock_graph, shared_graph, Effect, EffectId, ReactiveGraph, ReactiveStats, SharedReactiveGraph,
    Signal, SignalId, State,
};
