use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared state cell with interior mutability.
///
/// `State<T>` wraps an `Arc<RwLock<T>>`, so clones are cheap and all point at
/// the same value. Every successful write marks the cell dirty (for the
/// renderer) and bumps a generation counter (for observers that need to know
/// how many writes happened, not just whether one did).
///
/// # Example
///
/// ```
/// use sandbox::state::State;
///
/// let count = State::new(0);
/// count.update(|c| *c += 1);
/// assert_eq!(count.get(), 1);
/// assert_eq!(count.generation(), 1);
/// ```
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    dirty: Arc<AtomicBool>,
    generation: Arc<AtomicU64>,
}

impl<T> State<T> {
    /// Create a new state with the given value
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            dirty: Arc::new(AtomicBool::new(false)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.read().clone()
    }

    /// Read the value through a closure without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.read())
    }

    /// Set a new value
    pub fn set(&self, value: T) {
        *self.write() = value;
        self.touch();
    }

    /// Update the value using a closure
    pub fn update<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let result = f(&mut self.write());
        self.touch();
        result
    }

    /// Update the value, counting it as a write only when `f` returns true.
    ///
    /// The closure runs under the write lock, so a check-then-write inside it
    /// cannot interleave with another writer.
    pub fn try_update(&self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let written = f(&mut self.write());
        if written {
            self.touch();
        }
        written
    }

    /// Number of writes since creation
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    /// Check if the state has been modified since last check
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }

    fn touch(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
    }

    fn read(&self) -> RwLockReadGuard<'_, T> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, T> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            dirty: Arc::clone(&self.dirty),
            generation: Arc::clone(&self.generation),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_update_is_not_a_write() {
        let state = State::new(1);
        assert!(!state.try_update(|v| {
            *v += 1;
            false
        }));
        assert_eq!(state.get(), 2);
        assert_eq!(state.generation(), 0);
        assert!(!state.is_dirty());
    }

    #[test]
    fn clones_share_value_and_dirty_flag() {
        let a = State::new(String::from("a"));
        let b = a.clone();
        b.set("b".into());
        assert_eq!(a.get(), "b");
        assert!(a.is_dirty());
        a.clear_dirty();
        assert!(!b.is_dirty());
    }
}
