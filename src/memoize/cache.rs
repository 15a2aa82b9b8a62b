//! The lock-guarded cache shared by every memoizing wrapper.

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;

use parking_lot::Mutex;

/// Hash builder used by memoization caches.
///
/// - With the `fxhash` feature: `rustc_hash::FxBuildHasher`
/// - With the `ahash` feature (and not `fxhash`): `ahash::RandomState`
/// - Otherwise: the standard library `RandomState`
#[cfg(feature = "fxhash")]
pub type CacheHasher = rustc_hash::FxBuildHasher;

/// Hash builder used by memoization caches.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type CacheHasher = ahash::RandomState;

/// Hash builder used by memoization caches.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type CacheHasher = std::collections::hash_map::RandomState;

/// A grow-only map from arguments to results behind a single mutex.
///
/// The mutex is held across lookup, computation and insertion. Concurrent
/// callers are therefore serialized, and a key is computed at most once.
/// If the computation panics the guard is released during unwinding and
/// nothing is stored.
pub struct MemoCache<K, V> {
    entries: Mutex<HashMap<K, V, CacheHasher>>,
}

impl<K, V> MemoCache<K, V> {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(HashMap::with_hasher(CacheHasher::default())),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }
}

impl<K, V> MemoCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn contains(&self, key: &K) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Returns the cached value for `key`, computing and storing it on a miss.
    pub fn get_or_insert_with<C>(&self, key: K, compute: C) -> V
    where
        C: FnOnce(K) -> V,
    {
        let mut entries = self.entries.lock();
        if let Some(value) = entries.get(&key) {
            tracing::trace!(cache_size = entries.len(), "memoize cache hit");
            return value.clone();
        }

        let value = compute(key.clone());
        entries.insert(key, value.clone());
        tracing::trace!(cache_size = entries.len(), "memoize cache miss, value stored");
        value
    }

    /// Like [`get_or_insert_with`](Self::get_or_insert_with), but only
    /// successful results are stored. An error is returned to the caller and
    /// the next call with the same key computes again.
    pub fn get_or_try_insert_with<E, C>(&self, key: K, compute: C) -> Result<V, E>
    where
        C: FnOnce(K) -> Result<V, E>,
    {
        let mut entries = self.entries.lock();
        if let Some(value) = entries.get(&key) {
            tracing::trace!(cache_size = entries.len(), "memoize cache hit");
            return Ok(value.clone());
        }

        match compute(key.clone()) {
            Ok(value) => {
                entries.insert(key, value.clone());
                tracing::trace!(cache_size = entries.len(), "memoize cache miss, value stored");
                Ok(value)
            }
            Err(error) => {
                tracing::debug!(
                    cache_size = entries.len(),
                    "memoized computation failed, nothing cached"
                );
                Err(error)
            }
        }
    }
}

impl<K, V> fmt::Debug for MemoCache<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = formatter.debug_struct("MemoCache");
        match self.entries.try_lock() {
            Some(entries) => debug.field("len", &entries.len()),
            None => debug.field("len", &format_args!("<locked>")),
        };
        debug.finish()
    }
}
