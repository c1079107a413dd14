//! Owning store handle.
//!
//! Wraps a reducer and its current state in an explicit context object
//! that can be passed by reference (or cheaply cloned) to whichever
//! component needs to dispatch or read. No ambient globals.

use std::sync::{Arc, RwLock};

use super::reducer::Reducer;

/// Handle owning the single mutable state value of a reducer.
///
/// Dispatches are serialized behind a write lock: one action is
/// processed to completion before the next, each seeing the state the
/// previous one produced. Readers get cloned snapshots and never
/// observe a half-applied transition.
///
/// Cloning the handle is cheap and shares the underlying state.
pub struct Store<R: Reducer> {
    state: Arc<RwLock<R::State>>,
    reducer: Arc<R>,
}

impl<R: Reducer> Store<R> {
    /// Create a store from an initial state and reducer.
    pub fn new(initial: R::State, reducer: R) -> Self {
        Self {
            state: Arc::new(RwLock::new(initial)),
            reducer: Arc::new(reducer),
        }
    }

    /// Get a snapshot of the current state.
    ///
    /// This is a clone; holding it does not block dispatches.
    pub fn get(&self) -> R::State {
        self.state.read().expect("state lock poisoned").clone()
    }

    /// Apply one action and replace the current state with the result.
    pub fn dispatch(&self, action: R::Action) {
        let mut guard = self.state.write().expect("state lock poisoned");
        tracing::debug!(?action, "dispatch");
        let prev = std::mem::take(&mut *guard);
        *guard = self.reducer.reduce(prev, action);
    }
}

impl<R: Reducer> Clone for Store<R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: Arc::clone(&self.reducer),
        }
    }
}
