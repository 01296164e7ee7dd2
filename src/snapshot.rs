//! Replace-wholesale snapshot store.
//!
//! The client never patches server state incrementally: after any mutating
//! action it re-fetches the whole collection and swaps it in here. Readers
//! hold cheap `Arc`-backed views that stay valid (and consistent) across a
//! swap; the last replace wins when fetches race.

use std::sync::{Arc, RwLock};

use tracing::debug;

use crate::error::SnapshotError;

/// An immutable view of one fetched collection.
#[derive(Debug)]
pub struct Snapshot<T> {
    data: Arc<[T]>,
    generation: u64,
}

// Cloning a view only bumps the Arc refcount; the element type does not
// need to be Clone, so the derive's `T: Clone` bound is wrong here.
impl<T> Clone for Snapshot<T> {
    fn clone(&self) -> Self {
        Self {
            data: Arc::clone(&self.data),
            generation: self.generation,
        }
    }
}

impl<T> Snapshot<T> {
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Monotonically increasing per store; lets a view detect it is stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Holds the latest snapshot of one server collection.
pub struct SnapshotStore<T> {
    inner: RwLock<Snapshot<T>>,
}

impl<T> SnapshotStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Snapshot {
                data: Arc::from(Vec::new()),
                generation: 0,
            }),
        }
    }

    /// The current snapshot. The returned view keeps reading the same data
    /// even if the store is replaced afterwards.
    pub fn current(&self) -> Result<Snapshot<T>, SnapshotError> {
        self.inner
            .read()
            .map(|guard| guard.clone())
            .map_err(|_| SnapshotError::LockPoisoned)
    }

    /// Swaps in a freshly fetched collection and bumps the generation.
    pub fn replace(&self, data: Vec<T>) -> Result<u64, SnapshotError> {
        let mut guard = self.inner.write().map_err(|_| SnapshotError::LockPoisoned)?;
        let generation = guard.generation + 1;
        debug!(generation, len = data.len(), "snapshot replaced");
        *guard = Snapshot {
            data: Arc::from(data),
            generation,
        };
        Ok(generation)
    }

    pub fn generation(&self) -> Result<u64, SnapshotError> {
        self.inner
            .read()
            .map(|guard| guard.generation)
            .map_err(|_| SnapshotError::LockPoisoned)
    }
}

impl<T> Default for SnapshotStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_at_generation_zero() {
        let store: SnapshotStore<u32> = SnapshotStore::new();
        let snap = store.current().unwrap();
        assert!(snap.is_empty());
        assert_eq!(snap.generation(), 0);
    }

    #[test]
    fn replace_bumps_generation_and_swaps_data() {
        let store = SnapshotStore::new();
        assert_eq!(store.replace(vec![1, 2, 3]).unwrap(), 1);
        assert_eq!(store.replace(vec![4]).unwrap(), 2);
        let snap = store.current().unwrap();
        assert_eq!(snap.as_slice(), &[4]);
        assert_eq!(snap.generation(), 2);
    }

    #[test]
    fn old_views_keep_reading_old_data_after_a_swap() {
        let store = SnapshotStore::new();
        store.replace(vec!["a", "b"]).unwrap();
        let before = store.current().unwrap();
        store.replace(vec!["c"]).unwrap();
        assert_eq!(before.as_slice(), &["a", "b"]);
        assert_eq!(store.current().unwrap().as_slice(), &["c"]);
    }

    #[test]
    fn views_clone_without_requiring_clone_elements() {
        // Element type is deliberately not Clone; only the Arc is cloned.
        struct Opaque(#[allow(dead_code)] u32);

        let store = SnapshotStore::new();
        store.replace(vec![Opaque(1), Opaque(2)]).unwrap();
        let snap = store.current().unwrap();
        let view = snap.clone();
        assert_eq!(view.len(), 2);
        assert_eq!(view.generation(), snap.generation());
    }

    #[test]
    fn last_replace_wins() {
        // Two racing fetches resolve in some order; whichever lands last is
        // what every later reader sees.
        let store = SnapshotStore::new();
        store.replace(vec![10]).unwrap();
        store.replace(vec![20]).unwrap();
        assert_eq!(store.current().unwrap().as_slice(), &[20]);
    }
}
