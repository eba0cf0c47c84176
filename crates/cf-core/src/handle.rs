//! `Handle<T>` — a shared, optionally-null reference to a curve or other
//! market object.
//!
//! A `Handle<T>` is a reference-counted pointer; multiple handles (and
//! multiple pricers) can share ownership of the same underlying value without
//! duplication.  The handle may also be *null*, which pricers treat as "this
//! curve was never configured".

use std::sync::Arc;

/// A shared, optionally-null reference to a value of type `T`.
///
/// `T` may be unsized, so trait objects such as
/// `Handle<dyn YieldTermStructure>` work directly.
pub struct Handle<T: ?Sized> {
    inner: Option<Arc<T>>,
}

impl<T: ?Sized> Handle<T> {
    /// Create a handle from an existing `Arc`.
    pub fn from_arc(arc: Arc<T>) -> Self {
        Self { inner: Some(arc) }
    }

    /// Create a null (empty) handle.
    pub fn null() -> Self {
        Self { inner: None }
    }

    /// Return `true` if the handle is null (contains no value).
    pub fn is_empty(&self) -> bool {
        self.inner.is_none()
    }

    /// Return a reference to the inner `Arc<T>`, or `None` if this handle is
    /// null.
    pub fn as_arc(&self) -> Option<&Arc<T>> {
        self.inner.as_ref()
    }

    /// Attempt to borrow the contained value.
    ///
    /// Returns `None` if the handle is null.
    pub fn get(&self) -> Option<&T> {
        self.inner.as_deref()
    }
}

impl<T> Handle<T> {
    /// Create a non-null handle wrapping `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Some(Arc::new(value)),
        }
    }
}

impl<T: ?Sized> Clone for Handle<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: ?Sized> Default for Handle<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T: ?Sized + std::fmt::Debug> std::fmt::Debug for Handle<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Some(v) => write!(f, "Handle({:?})", v),
            None => write!(f, "Handle(null)"),
        }
    }
}
