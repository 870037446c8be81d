//! Synchronous change observers.

use std::fmt;

use crate::PathStore;

/// Handle returned by [`PathStore::subscribe`], used to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription#{}", self.0)
    }
}

pub(crate) type Observer<T> = Box<dyn FnMut(&PathStore<T>) + Send>;

/// Registered observers, called in subscription order.
pub(crate) struct Observers<T> {
    next_id: u64,
    registered: Vec<(SubscriptionId, Observer<T>)>,
}

impl<T> Default for Observers<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            registered: Vec::new(),
        }
    }
}

impl<T> fmt::Debug for Observers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("count", &self.registered.len())
            .finish()
    }
}

impl<T> Observers<T> {
    pub(crate) fn register(&mut self, observer: Observer<T>) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.registered.push((id, observer));
        id
    }

    pub(crate) fn unregister(&mut self, id: SubscriptionId) -> bool {
        let before = self.registered.len();
        self.registered.retain(|(registered, _)| *registered != id);
        self.registered.len() != before
    }

    pub(crate) fn len(&self) -> usize {
        self.registered.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    pub(crate) fn notify_all(&mut self, store: &PathStore<T>) {
        for (_, observer) in self.registered.iter_mut() {
            observer(store);
        }
    }
}
