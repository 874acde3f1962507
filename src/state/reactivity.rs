// ============================================================================
// REACTIVITY - Live store with subscribers
// ============================================================================

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

use crate::state::store::{Store, StoreAction};

type Subscriber = Rc<dyn Fn()>;

/// Handle returned by `subscribe`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Shared, mutable `Store`. Clones point at the same state.
#[derive(Clone, Default)]
pub struct StoreHandle {
    store: Rc<RefCell<Store>>,
    subscribers: Rc<RefCell<Vec<(SubscriptionId, Subscriber)>>>,
    next_id: Rc<Cell<u64>>,
}

impl StoreHandle {
    /// Copy of the current state.
    pub fn snapshot(&self) -> Store {
        self.store.borrow().clone()
    }

    /// Reads the current state without cloning it.
    pub fn with<R>(&self, reader: impl FnOnce(&Store) -> R) -> R {
        reader(&self.store.borrow())
    }

    /// Applies `action` and notifies subscribers if anything changed.
    pub fn dispatch(&self, action: StoreAction) {
        let changed = {
            let mut store = self.store.borrow_mut();
            let next = store.reduce(action);
            let changed = next != *store;
            *store = next;
            changed
        };
        if changed {
            self.notify();
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.subscribers.borrow_mut().push((id, Rc::new(callback)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) {
        self.subscribers.borrow_mut().retain(|(sub_id, _)| *sub_id != id);
    }

    fn notify(&self) {
        // Callbacks may subscribe or dispatch again, so don't hold the borrow.
        let subscribers: Vec<Subscriber> = self
            .subscribers
            .borrow()
            .iter()
            .map(|(_, callback)| callback.clone())
            .collect();
        for callback in subscribers {
            callback();
        }
    }
}

impl PartialEq for StoreHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl fmt::Debug for StoreHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreHandle")
            .field("store", &self.store.borrow())
            .field("subscribers", &self.subscribers.borrow().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscribers_see_changes() {
        let handle = StoreHandle::default();
        let calls = Rc::new(Cell::new(0));
        let id = {
            let calls = calls.clone();
            handle.subscribe(move || calls.set(calls.get() + 1))
        };

        handle.dispatch(StoreAction::SetToken(Some("abc".into())));
        assert_eq!(calls.get(), 1);
        assert_eq!(handle.snapshot().token(), Some("abc"));

        // same value again: no notification
        handle.dispatch(StoreAction::SetToken(Some("abc".into())));
        assert_eq!(calls.get(), 1);

        handle.unsubscribe(id);
        handle.dispatch(StoreAction::SetToken(None));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn clones_share_state() {
        let handle = StoreHandle::default();
        let other = handle.clone();
        other.dispatch(StoreAction::SetToken(Some("abc".into())));
        assert!(handle.with(Store::is_logged_in));
        assert_eq!(handle, other);
        assert_ne!(handle, StoreHandle::default());
    }

    #[test]
    fn subscriber_may_read_the_store() {
        let handle = StoreHandle::default();
        let seen = Rc::new(RefCell::new(None));
        {
            let reader = handle.clone();
            let seen = seen.clone();
            handle.subscribe(move || *seen.borrow_mut() = reader.with(|s| s.token().map(String::from)));
        }
        handle.dispatch(StoreAction::SetToken(Some("xyz".into())));
        assert_eq!(seen.borrow().as_deref(), Some("xyz"));
    }
}
