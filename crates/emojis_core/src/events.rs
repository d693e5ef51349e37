//! Event emitters with delegation
//!
//! Views announce user interaction (a group picked, a tile activated) through
//! an [`Emitter`]. A parent view either listens with [`Emitter::on`] or
//! forwards the child's events to its own emitter with
//! [`Emitter::delegate_to`], so that the outermost listener sees every event
//! regardless of which nested view produced it.
//!
//! ```
//! use emojis_core::events::Emitter;
//! use std::sync::{Arc, Mutex};
//!
//! let grid: Emitter<String> = Emitter::new();
//! let dropdown: Emitter<String> = Emitter::new();
//! grid.delegate_to(&dropdown);
//!
//! let inserted = Arc::new(Mutex::new(Vec::new()));
//! let sink = inserted.clone();
//! dropdown.on(move |glyph: &String| sink.lock().unwrap().push(glyph.clone()));
//!
//! grid.emit(&"🍎".to_string());
//! assert_eq!(*inserted.lock().unwrap(), vec!["🍎".to_string()]);
//! ```

use rustc_hash::FxHashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

type Listener<E> = Arc<dyn Fn(&E) + Send + Sync>;

/// Handle returned by [`Emitter::on`], used to remove the listener again
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

struct Listeners<E> {
    next_id: u64,
    /// Registration order is call order
    order: Vec<u64>,
    callbacks: FxHashMap<u64, Listener<E>>,
}

/// A cloneable handle to a list of listeners for one event type
pub struct Emitter<E> {
    inner: Arc<Mutex<Listeners<E>>>,
}

impl<E> Clone for Emitter<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<E: 'static> Emitter<E> {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Listeners {
                next_id: 0,
                order: Vec::new(),
                callbacks: FxHashMap::default(),
            })),
        }
    }

    fn listeners(&self) -> MutexGuard<'_, Listeners<E>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Register a listener. Listeners run in registration order.
    pub fn on<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&E) + Send + Sync + 'static,
    {
        let mut listeners = self.listeners();
        let id = listeners.next_id;
        listeners.next_id += 1;
        listeners.order.push(id);
        listeners.callbacks.insert(id, Arc::new(listener));
        ListenerId(id)
    }

    /// Remove a listener. Returns false if it was already removed.
    pub fn off(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners();
        listeners.order.retain(|&i| i != id.0);
        listeners.callbacks.remove(&id.0).is_some()
    }

    /// Call every listener with `event`.
    ///
    /// The listener list is copied before the first call, so a listener may
    /// register or remove listeners (or emit again) without deadlocking.
    /// Listeners added during an emit only see later events.
    pub fn emit(&self, event: &E) {
        let snapshot: Vec<Listener<E>> = {
            let listeners = self.listeners();
            listeners
                .order
                .iter()
                .filter_map(|id| listeners.callbacks.get(id).cloned())
                .collect()
        };
        for listener in snapshot {
            listener(event);
        }
    }

    /// Forward every event emitted here to `target`
    pub fn delegate_to(&self, target: &Emitter<E>) -> ListenerId
    where
        E: Send + Sync,
    {
        let target = target.clone();
        self.on(move |event| target.emit(event))
    }

    pub fn listener_count(&self) -> usize {
        self.listeners().order.len()
    }
}

impl<E: 'static> Default for Emitter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Emitter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let count = self
            .inner
            .lock()
            .map(|l| l.order.len())
            .unwrap_or_default();
        f.debug_struct("Emitter").field("listeners", &count).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_listeners_run_in_registration_order() {
        let emitter = Emitter::<u32>::new();
        let calls = Arc::new(Mutex::new(Vec::new()));

        let first = calls.clone();
        emitter.on(move |v| first.lock().unwrap().push(("first", *v)));
        let second = calls.clone();
        emitter.on(move |v| second.lock().unwrap().push(("second", *v)));

        emitter.emit(&7);
        assert_eq!(*calls.lock().unwrap(), vec![("first", 7), ("second", 7)]);
    }

    #[test]
    fn test_off_removes_listener() {
        let emitter = Emitter::<()>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let count_clone = count.clone();
        let id = emitter.on(move |_| {
            count_clone.fetch_add(1, Ordering::SeqCst);
        });

        emitter.emit(&());
        assert!(emitter.off(id));
        assert!(!emitter.off(id));
        emitter.emit(&());

        assert_eq!(count.load(Ordering::SeqCst), 1);
        assert_eq!(emitter.listener_count(), 0);
    }

    #[test]
    fn test_delegation_chain() {
        let tile = Emitter::<String>::new();
        let grid = Emitter::<String>::new();
        let dropdown = Emitter::<String>::new();
        tile.delegate_to(&grid);
        grid.delegate_to(&dropdown);

        let received = Arc::new(Mutex::new(None));
        let received_clone = received.clone();
        dropdown.on(move |v| *received_clone.lock().unwrap() = Some(v.clone()));

        tile.emit(&"😉".to_string());
        assert_eq!(received.lock().unwrap().as_deref(), Some("😉"));
    }

    #[test]
    fn test_listener_may_register_during_emit() {
        let emitter = Emitter::<u8>::new();
        let count = Arc::new(AtomicUsize::new(0));

        let emitter_clone = emitter.clone();
        let count_clone = count.clone();
        emitter.on(move |_| {
            let inner = count_clone.clone();
            emitter_clone.on(move |_| {
                inner.fetch_add(1, Ordering::SeqCst);
            });
        });

        emitter.emit(&1);
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert_eq!(emitter.listener_count(), 2);

        emitter.emit(&2);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
