//! Identity-comparable callback handles.
//!
//! ## Usage
//!
//! Store host callbacks in configuration structs that must be diffed between
//! updates. Two handles are equal only when they share the same closure.

use std::sync::Arc;

/// Comparable handle for a shared callable trait object.
///
/// Compares by identity (`Arc::ptr_eq`), never by calling or inspecting the
/// closure.
pub struct Slot<F: ?Sized> {
    inner: Arc<F>,
}

impl<F: ?Sized> Slot<F> {
    /// Wraps an already shared callable.
    pub fn from_shared(handler: Arc<F>) -> Self {
        Self { inner: handler }
    }

    /// Returns the shared callable.
    pub fn shared(&self) -> Arc<F> {
        Arc::clone(&self.inner)
    }
}

impl<F: ?Sized> Clone for Slot<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F: ?Sized> PartialEq for Slot<F> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<F: ?Sized> Eq for Slot<F> {}

/// Comparable callback handle for `Fn(T) -> R`.
///
/// Value-change notifications use `CallbackWith<f64>`.
///
/// ```
/// use std::sync::{Arc, atomic::{AtomicUsize, Ordering}};
/// use huebar_ui::CallbackWith;
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let counter = calls.clone();
/// let on_change = CallbackWith::new(move |_value: f64| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// let copy = on_change.clone();
/// assert!(copy == on_change);
/// copy.call(0.5);
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub struct CallbackWith<T, R = ()> {
    slot: Slot<dyn Fn(T) -> R + Send + Sync>,
}

impl<T, R> CallbackWith<T, R> {
    /// Creates a callback handle from a closure.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self {
            slot: Slot::from_shared(Arc::new(handler)),
        }
    }

    /// Invokes the callback.
    pub fn call(&self, value: T) -> R {
        let handler = self.slot.shared();
        handler(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> std::fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CallbackWith(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_equality() {
        let first = CallbackWith::new(|value: f64| value * 2.0);
        let second = CallbackWith::new(|value: f64| value * 2.0);

        assert!(first == first.clone());
        assert!(first != second);
        assert_eq!(first.call(1.5), 3.0);
    }
}
