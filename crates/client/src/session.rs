//! Bearer-token session.
//!
//! All token reads and writes go through [`SessionStore`]; subscribers hear
//! about sign-in and sign-out so the UI can redirect when a token expires.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    SignedIn,
    Cleared,
}

pub type SubscriptionId = u64;

pub type SessionListener = Rc<dyn Fn(SessionEvent)>;

pub trait SessionStore {
    fn token(&self) -> Option<String>;

    fn set_token(&self, token: &str);

    /// Drop the token. Always notifies, even when no token was stored.
    fn clear(&self);

    fn subscribe(&self, listener: SessionListener) -> SubscriptionId;

    fn unsubscribe(&self, id: SubscriptionId);

    fn is_authenticated(&self) -> bool {
        self.token().map(|t| !t.is_empty()).unwrap_or(false)
    }
}

/// Listener registry shared by the store implementations
#[derive(Default)]
pub struct SessionListeners {
    next_id: Cell<SubscriptionId>,
    listeners: RefCell<Vec<(SubscriptionId, SessionListener)>>,
}

impl SessionListeners {
    pub fn add(&self, listener: SessionListener) -> SubscriptionId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.listeners.borrow_mut().push((id, listener));
        id
    }

    pub fn remove(&self, id: SubscriptionId) {
        self.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
    }

    pub fn notify(&self, event: SessionEvent) {
        // Snapshot first: a listener may unsubscribe itself while running.
        let snapshot: Vec<SessionListener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default)]
struct MemoryInner {
    token: RefCell<Option<String>>,
    listeners: SessionListeners,
}

/// In-memory store for tests and non-browser callers. Clones share state.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    inner: Rc<MemoryInner>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_token(token: &str) -> Self {
        let store = Self::new();
        *store.inner.token.borrow_mut() = Some(token.to_string());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.inner.token.borrow().clone()
    }

    fn set_token(&self, token: &str) {
        *self.inner.token.borrow_mut() = Some(token.to_string());
        self.inner.listeners.notify(SessionEvent::SignedIn);
    }

    fn clear(&self) {
        self.inner.token.borrow_mut().take();
        self.inner.listeners.notify(SessionEvent::Cleared);
    }

    fn subscribe(&self, listener: SessionListener) -> SubscriptionId {
        self.inner.listeners.add(listener)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        self.inner.listeners.remove(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscribers_hear_clear() {
        let store = MemorySessionStore::with_token("abc");
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let id = store.subscribe(Rc::new(move |e| sink.borrow_mut().push(e)));

        store.clear();
        assert_eq!(store.token(), None);
        assert!(!store.is_authenticated());

        store.unsubscribe(id);
        store.set_token("def");
        assert_eq!(*events.borrow(), vec![SessionEvent::Cleared]);
        assert!(store.is_authenticated());
    }

    #[test]
    fn test_listener_may_unsubscribe_itself() {
        let store = MemorySessionStore::new();
        let id_cell = Rc::new(Cell::new(0));
        let store_for_listener = store.clone();
        let id_for_listener = Rc::clone(&id_cell);
        let id = store.subscribe(Rc::new(move |_| {
            store_for_listener.unsubscribe(id_for_listener.get());
        }));
        id_cell.set(id);

        store.clear();
        assert!(store.inner.listeners.is_empty());
    }
}
