//! Bounded memoization for the pure index computations.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex, PoisonError};

/// Number of entries kept by each process-wide index cache.
pub const DEFAULT_CAPACITY: usize = 32;

/// A thread-safe memo table keyed by a scalar input, holding at most
/// `capacity` results and evicting the oldest insertion first.
///
/// Values are handed out as `Arc`s so hits never copy the cached list.
#[derive(Debug)]
pub struct IndexCache<V: ?Sized> {
    name: &'static str,
    capacity: usize,
    inner: Mutex<Entries<V>>,
}

#[derive(Debug)]
struct Entries<V: ?Sized> {
    map: HashMap<usize, Arc<V>>,
    order: VecDeque<usize>,
}

impl<V: ?Sized> IndexCache<V> {
    /// Create an empty cache; a `capacity` of 0 disables caching.
    pub fn new(name: &'static str, capacity: usize) -> Self {
        IndexCache {
            name,
            capacity,
            inner: Mutex::new(Entries { map: HashMap::new(), order: VecDeque::new() }),
        }
    }

    /// Return the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs outside the lock, so two threads missing on the same key
    /// may both compute it; the results are identical and the first stored wins.
    pub fn get_or_insert_with<F>(&self, key: usize, compute: F) -> Arc<V>
        where F: FnOnce() -> Arc<V>
    {
        if let Some(v) = self.lock().map.get(&key) {
            tracing::trace!(cache = self.name, key, "index cache hit");
            return Arc::clone(v);
        }

        let value = compute();
        if self.capacity == 0 {
            return value;
        }

        let mut entries = self.lock();
        if let Some(v) = entries.map.get(&key) {
            return Arc::clone(v);
        }
        while entries.order.len() >= self.capacity {
            if let Some(old) = entries.order.pop_front() {
                entries.map.remove(&old);
                tracing::trace!(cache = self.name, key = old, "index cache eviction");
            }
        }
        entries.order.push_back(key);
        entries.map.insert(key, Arc::clone(&value));
        value
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.lock().map.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every cached entry.
    pub fn clear(&self) {
        let mut entries = self.lock();
        entries.map.clear();
        entries.order.clear();
    }

    // the entries stay consistent even if a holder panicked
    fn lock(&self) -> std::sync::MutexGuard<'_, Entries<V>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
