// ============================================================================
// RESOURCE STATE - list of server records + loading/error flags
// ============================================================================

use std::rc::Rc;

use chrono::{DateTime, Utc};

use crate::state::ReactiveState;

/// Fields shared by the device and trip stores.
///
/// Only the owning store writes these. Overlapping fetches are not sequenced:
/// the last response to arrive wins.
#[derive(Clone)]
pub struct ResourceState<T> {
    pub items: ReactiveState<Vec<T>>,
    pub loading: ReactiveState<bool>,
    pub error: ReactiveState<Option<String>>,
    pub last_loaded: ReactiveState<Option<DateTime<Utc>>>,
}

impl<T: Clone> ResourceState<T> {
    pub fn new() -> Self {
        Self {
            items: ReactiveState::new(Vec::new()),
            loading: ReactiveState::new(false),
            error: ReactiveState::new(None),
            last_loaded: ReactiveState::new(None),
        }
    }

    /// Start of a fetch: raise `loading`, forget the previous error
    pub fn begin_load(&self) {
        self.loading.set(true);
        self.error.set(None);
    }

    /// Replace the whole list with a fresh server response
    pub fn replace(&self, items: Vec<T>) {
        self.items.set(items);
        self.last_loaded.set(Some(Utc::now()));
    }

    /// Keep the current list, record the failure
    pub fn fail(&self, message: String) {
        self.error.set(Some(message));
    }

    /// End of a fetch, whatever its outcome
    pub fn end_load(&self) {
        self.loading.set(false);
    }

    pub fn push(&self, item: T) {
        self.items.update(|items| items.push(item));
    }

    pub fn len(&self) -> usize {
        self.items.with(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback: Rc<dyn Fn()> = Rc::new(callback);
        let on_items = callback.clone();
        let on_loading = callback.clone();
        self.items.subscribe(move || on_items());
        self.loading.subscribe(move || on_loading());
        self.error.subscribe(move || callback());
    }
}

impl<T: Clone> Default for ResourceState<T> {
    fn default() -> Self {
        Self::new()
    }
}
