//! Signals and effects
//!
//! A signal holds a value; an effect is a closure that reads signals and is
//! run again whenever one of the signals it read last time is set. This is
//! all the picker needs to keep its grid in step with the selected group.
//!
//! # State
//!
//! [`State<T>`] pairs a signal with the shared graph of an editor session.
//! The picker views hold their bindable values (selected group, open flag,
//! info bar contents) as `State`s.
//!
//! ```
//! use emojis_core::reactive::{shared_graph, State};
//!
//! let graph = shared_graph();
//! let group: State<String> = State::create(&graph, "All".to_string());
//!
//! group.set("Food".to_string());
//! assert_eq!(group.get(), "Food");
//! ```
//!
//! Effects run while the graph is locked. Inside an effect, read signals
//! through the `&ReactiveGraph` argument, never through `State::get`.

use slotmap::{new_key_type, SlotMap};
use smallvec::SmallVec;
use std::any::Any;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::marker::PhantomData;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

new_key_type! {
    pub struct SignalId;
    pub struct EffectId;
}

/// Typed handle to a signal
#[derive(Debug)]
pub struct Signal<T> {
    id: SignalId,
    _marker: PhantomData<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Signal<T> {}

impl<T> Signal<T> {
    pub fn id(&self) -> SignalId {
        self.id
    }
}

/// Handle to an effect, used to dispose of it
#[derive(Debug, Clone, Copy)]
pub struct Effect {
    id: EffectId,
}

impl Effect {
    pub fn id(&self) -> EffectId {
        self.id
    }
}

type EffectFn = Box<dyn FnMut(&ReactiveGraph) + Send>;

struct SignalNode {
    value: Box<dyn Any + Send>,
    /// Effects that read this signal on their last run
    readers: SmallVec<[EffectId; 4]>,
}

struct EffectNode {
    /// None while the effect is running
    run: Option<EffectFn>,
    reads: SmallVec<[SignalId; 4]>,
    queued: Cell<bool>,
}

/// Signals and the effects that depend on them
pub struct ReactiveGraph {
    signals: SlotMap<SignalId, SignalNode>,
    effects: SlotMap<EffectId, EffectNode>,
    queue: VecDeque<EffectId>,
    /// Signals read by the effect currently running
    reads: RefCell<Option<Vec<SignalId>>>,
}

impl ReactiveGraph {
    pub fn new() -> Self {
        Self {
            signals: SlotMap::with_key(),
            effects: SlotMap::with_key(),
            queue: VecDeque::new(),
            reads: RefCell::new(None),
        }
    }

    pub fn create_signal<T: Send + 'static>(&mut self, initial: T) -> Signal<T> {
        let id = self.signals.insert(SignalNode {
            value: Box::new(initial),
            readers: SmallVec::new(),
        });
        Signal {
            id,
            _marker: PhantomData,
        }
    }

    /// Read a signal. Inside an effect the read is recorded, so setting the
    /// signal later runs the effect again.
    pub fn get<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        if let Some(reads) = self.reads.borrow_mut().as_mut() {
            if !reads.contains(&signal.id) {
                reads.push(signal.id);
            }
        }
        self.get_untracked(signal)
    }

    /// Read a signal without recording it
    pub fn get_untracked<T: Clone + 'static>(&self, signal: Signal<T>) -> Option<T> {
        let node = self.signals.get(signal.id)?;
        node.value.downcast_ref::<T>().cloned()
    }

    /// Replace a signal's value and run every effect that read it
    pub fn set<T: Send + 'static>(&mut self, signal: Signal<T>, value: T) {
        let Some(node) = self.signals.get_mut(signal.id) else {
            return;
        };
        node.value = Box::new(value);
        let readers = node.readers.clone();

        for effect_id in readers {
            self.enqueue(effect_id);
        }
        self.run_queued();
    }

    /// Create an effect and run it once right away
    pub fn create_effect<F>(&mut self, run: F) -> Effect
    where
        F: FnMut(&ReactiveGraph) + Send + 'static,
    {
        let id = self.effects.insert(EffectNode {
            run: Some(Box::new(run)),
            reads: SmallVec::new(),
            queued: Cell::new(false),
        });
        self.enqueue(id);
        self.run_queued();
        Effect { id }
    }

    /// Remove an effect. It no longer runs when its signals change.
    pub fn dispose_effect(&mut self, effect: Effect) {
        let Some(node) = self.effects.remove(effect.id) else {
            return;
        };
        tracing::trace!("Disposing effect reading {} signals", node.reads.len());
        for signal_id in node.reads {
            if let Some(signal) = self.signals.get_mut(signal_id) {
                signal.readers.retain(|id| *id != effect.id);
            }
        }
    }

    pub fn stats(&self) -> ReactiveStats {
        ReactiveStats {
            signal_count: self.signals.len(),
            effect_count: self.effects.len(),
            queued_effects: self.queue.len(),
        }
    }

    fn enqueue(&mut self, effect_id: EffectId) {
        if let Some(node) = self.effects.get(effect_id) {
            if !node.queued.replace(true) {
                self.queue.push_back(effect_id);
            }
        }
    }

    fn run_queued(&mut self) {
        while let Some(effect_id) = self.queue.pop_front() {
            self.run_effect(effect_id);
        }
    }

    fn run_effect(&mut self, effect_id: EffectId) {
        let Some(node) = self.effects.get_mut(effect_id) else {
            return;
        };
        node.queued.set(false);
        let Some(mut run) = node.run.take() else {
            return;
        };

        let outer = self.reads.replace(Some(Vec::new()));
        run(&*self);
        let reads = self.reads.replace(outer).unwrap_or_default();

        let Some(node) = self.effects.get_mut(effect_id) else {
            return;
        };
        node.run = Some(run);
        let previous = std::mem::replace(&mut node.reads, reads.iter().copied().collect());

        for signal_id in previous {
            if let Some(signal) = self.signals.get_mut(signal_id) {
                signal.readers.retain(|id| *id != effect_id);
            }
        }
        for signal_id in reads {
            if let Some(signal) = self.signals.get_mut(signal_id) {
                signal.readers.push(effect_id);
            }
        }
    }
}

impl Default for ReactiveGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ReactiveGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReactiveGraph")
            .field("stats", &self.stats())
            .finish()
    }
}

/// Node counts of a graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReactiveStats {
    pub signal_count: usize,
    pub effect_count: usize,
    pub queued_effects: usize,
}

/// Graph shared by every view of one editor session
pub type SharedReactiveGraph = Arc<Mutex<ReactiveGraph>>;

pub fn shared_graph() -> SharedReactiveGraph {
    Arc::new(Mutex::new(ReactiveGraph::new()))
}

/// Lock a shared graph, recovering it if a panicking thread poisoned it
pub fn lock_graph(graph: &SharedReactiveGraph) -> MutexGuard<'_, ReactiveGraph> {
    graph.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A signal bound to its session graph
#[derive(Clone)]
pub struct State<T> {
    signal: Signal<T>,
    graph: SharedReactiveGraph,
}

impl<T: Clone + Send + 'static> State<T> {
    /// Create a signal in `graph` holding `initial`
    pub fn create(graph: &SharedReactiveGraph, initial: T) -> Self {
        let signal = lock_graph(graph).create_signal(initial);
        Self {
            signal,
            graph: Arc::clone(graph),
        }
    }

    /// Current value, or the default if the signal is gone
    pub fn get(&self) -> T
    where
        T: Default,
    {
        self.try_get().unwrap_or_default()
    }

    pub fn try_get(&self) -> Option<T> {
        lock_graph(&self.graph).get_untracked(self.signal)
    }

    /// Set the value, running the effects that depend on it
    pub fn set(&self, value: T) {
        lock_graph(&self.graph).set(self.signal, value);
    }

    /// The signal, for reads inside effects
    pub fn signal(&self) -> Signal<T> {
        self.signal
    }
}

impl<T> std::fmt::Debug for State<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("signal", &self.signal.id)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signal_get_set() {
        let mut graph = ReactiveGraph::new();

        let group = graph.create_signal("All".to_string());
        assert_eq!(graph.get(group), Some("All".to_string()));

        graph.set(group, "Food".to_string());
        assert_eq!(graph.get_untracked(group), Some("Food".to_string()));
    }

    #[test]
    fn test_effect_runs_on_change() {
        let mut graph = ReactiveGraph::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let group = graph.create_signal("All".to_string());
        let sink = seen.clone();
        graph.create_effect(move |g| {
            sink.lock().unwrap().push(g.get(group).unwrap_or_default());
        });
        assert_eq!(*seen.lock().unwrap(), vec!["All"]);

        graph.set(group, "Food".to_string());
        graph.set(group, "People".to_string());
        assert_eq!(*seen.lock().unwrap(), vec!["All", "Food", "People"]);
        assert_eq!(graph.stats().queued_effects, 0);
    }

    #[test]
    fn test_effect_follows_its_latest_reads() {
        let mut graph = ReactiveGraph::new();
        let runs = Arc::new(Mutex::new(0));

        let use_food = graph.create_signal(true);
        let food = graph.create_signal("🍎");
        let people = graph.create_signal("😀");
        let counter = runs.clone();
        graph.create_effect(move |g| {
            *counter.lock().unwrap() += 1;
            if g.get(use_food).unwrap_or(false) {
                g.get(food);
            } else {
                g.get(people);
            }
        });

        graph.set(use_food, false);
        assert_eq!(*runs.lock().unwrap(), 2);

        // No longer read by the effect
        graph.set(food, "🍇");
        assert_eq!(*runs.lock().unwrap(), 2);

        graph.set(people, "😉");
        assert_eq!(*runs.lock().unwrap(), 3);
    }

    #[test]
    fn test_dispose_effect() {
        let mut graph = ReactiveGraph::new();
        let runs = Arc::new(Mutex::new(0));

        let open = graph.create_signal(false);
        let counter = runs.clone();
        let effect = graph.create_effect(move |g| {
            g.get(open);
            *counter.lock().unwrap() += 1;
        });

        graph.set(open, true);
        assert_eq!(*runs.lock().unwrap(), 2);

        graph.dispose_effect(effect);
        graph.set(open, false);
        assert_eq!(*runs.lock().unwrap(), 2);
        assert_eq!(graph.stats().effect_count, 0);
    }

    #[test]
    fn test_untracked_read_does_not_subscribe() {
        let mut graph = ReactiveGraph::new();
        let runs = Arc::new(Mutex::new(0));

        let open = graph.create_signal(false);
        let counter = runs.clone();
        graph.create_effect(move |g| {
            g.get_untracked(open);
            *counter.lock().unwrap() += 1;
        });

        graph.set(open, true);
        assert_eq!(*runs.lock().unwrap(), 1);
    }

    #[test]
    fn test_state_drives_effect() {
        let graph = shared_graph();
        let open = State::create(&graph, false);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let signal = open.signal();
        let sink = seen.clone();
        lock_graph(&graph).create_effect(move |g| {
            sink.lock().unwrap().push(g.get(signal).unwrap_or_default());
        });

        open.set(true);
        assert!(open.get());
        assert_eq!(open.try_get(), Some(true));
        assert_eq!(*seen.lock().unwrap(), vec![false, true]);
        assert_eq!(lock_graph(&graph).stats().signal_count, 1);
    }
}
