//! Listener registry for one notification channel.
//!
//! Listeners are plain callbacks keyed by a `ListenerId`. Notification is
//! synchronous and in registration order; listeners cannot answer back.

use serde::{Deserialize, Serialize};

/// Handle returned by `Observers::subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId(pub u32);

impl ListenerId {
    /// Create a new listener ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ListenerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Listener({})", self.0)
    }
}

type Listener<E> = Box<dyn FnMut(&E)>;

/// Registered listeners for events of type `E`.
///
/// ## Usage
///
/// ```
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use railroad_barons::events::Observers;
///
/// let mut observers: Observers<u32> = Observers::new();
/// let total = Rc::new(Cell::new(0));
///
/// let sink = Rc::clone(&total);
/// let id = observers.subscribe(move |n| sink.set(sink.get() + n));
///
/// observers.notify(&5);
/// assert!(observers.unsubscribe(id));
/// observers.notify(&5);
/// assert_eq!(total.get(), 5);
/// ```
pub struct Observers<E> {
    listeners: Vec<(ListenerId, Listener<E>)>,
    next_id: u32,
}

impl<E> Observers<E> {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Register a listener.
    pub fn subscribe(&mut self, listener: impl FnMut(&E) + 'static) -> ListenerId {
        let id = ListenerId::new(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns false if the ID is not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Deliver an event to every listener.
    pub fn notify(&mut self, event: &E) {
        for (_, listener) in &mut self.listeners {
            listener(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }
}

impl<E> Default for Observers<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> std::fmt::Debug for Observers<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observers")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
