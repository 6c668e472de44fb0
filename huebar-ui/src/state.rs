//! Shared state handles.
//!
//! ## Usage
//!
//! A control keeps its per-instance state in a [`State<T>`]. Anything that may
//! outlive the control (a pointer route registered with the host, a deferred
//! gesture callback) holds a [`WeakState<T>`] instead and upgrades it before
//! touching the state, so work aimed at a torn down control is dropped.

use std::sync::{Arc, Weak};

use parking_lot::RwLock;

/// Handle to state shared between a control and its event routes.
///
/// Cloning the handle shares the same value.
///
/// ```
/// use huebar_ui::State;
///
/// let count = State::new(0usize);
/// count.with_mut(|c| *c += 1);
/// assert_eq!(count.get(), 1);
/// ```
pub struct State<T> {
    inner: Arc<RwLock<T>>,
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> State<T> {
    /// Creates a new handle owning `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
        }
    }

    /// Executes a closure with a shared reference to the stored value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        let guard = self.inner.read();
        f(&guard)
    }

    /// Executes a closure with a mutable reference to the stored value.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self.inner.write();
        f(&mut guard)
    }

    /// Returns a clone of the stored value.
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.with(Clone::clone)
    }

    /// Replaces the stored value.
    pub fn set(&self, value: T) {
        self.with_mut(|slot| *slot = value);
    }

    /// Creates a non-owning handle to the same value.
    pub fn downgrade(&self) -> WeakState<T> {
        WeakState {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

/// Non-owning counterpart of [`State`].
pub struct WeakState<T> {
    inner: Weak<RwLock<T>>,
}

impl<T> Clone for WeakState<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Weak::clone(&self.inner),
        }
    }
}

impl<T> WeakState<T> {
    /// Returns the owning handle if the value is still alive.
    pub fn upgrade(&self) -> Option<State<T>> {
        self.inner.upgrade().map(|inner| State { inner })
    }

    /// Returns `true` if every owning handle has been dropped.
    pub fn is_dropped(&self) -> bool {
        self.inner.strong_count() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let state = State::new(String::from("a"));
        let other = state.clone();
        other.with_mut(|s| s.push('b'));
        assert_eq!(state.get(), "ab");
        state.set(String::from("z"));
        assert_eq!(other.with(|s| s.len()), 1);
    }

    #[test]
    fn test_weak_handle_tracks_liveness() {
        let state = State::new(3);
        let weak = state.downgrade();
        assert_eq!(weak.upgrade().map(|s| s.get()), Some(3));
        assert!(!weak.is_dropped());

        drop(state);
        assert!(weak.upgrade().is_none());
        assert!(weak.is_dropped());
    }
}
