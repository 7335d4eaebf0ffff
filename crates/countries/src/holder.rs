use std::sync::Arc;
use tokio::sync::watch;

/// A single-slot observable cache.
///
/// The holder always has a value. Setting a new value replaces the old one and wakes every
/// subscriber; subscribers only ever observe the latest value. Clones share the same slot.
#[derive(Debug)]
pub struct Holder<T> {
    inner: Arc<watch::Sender<T>>,
}

impl<T> Clone for Holder<T> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<T: Clone> Holder<T> {
    /// Creates a holder with the given initial value.
    pub fn new(initial: T) -> Self {
        let (tx, _) = watch::channel(initial);
        Self { inner: Arc::new(tx) }
    }

    /// Returns a copy of the current value.
    pub fn get(&self) -> T {
        self.inner.borrow().clone()
    }

    /// Replaces the current value and notifies subscribers. Succeeds with no subscribers.
    pub fn set(&self, value: T) {
        self.inner.send_replace(value);
    }

    /// Returns a receiver that observes the current value and every later change.
    pub fn subscribe(&self) -> watch::Receiver<T> {
        self.inner.subscribe()
    }
}

impl<T: Clone + Default> Default for Holder<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
