//! Memoization of functions of two arguments.

use std::fmt;
use std::hash::Hash;

use super::cache::MemoCache;
use crate::function::BiFunction;

/// Conversion of a function of two arguments into its memoized form.
///
/// The cache key is the positional pair `(first, second)`: `(1, 2)` and
/// `(2, 1)` are different keys, and pairs are equal when both components are.
pub trait BiMemoize<A, B> {
    /// The memoized function type.
    type Wrapper: BiFunction<A, B>;

    /// Returns a memoizing wrapper around `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::BiFunction;
    /// use fnkit::memoize::BiMemoize;
    /// use std::cell::Cell;
    ///
    /// let calls = Cell::new(0);
    /// let repeat = |count: usize, letter: char| {
    ///     calls.set(calls.get() + 1);
    ///     letter.to_string().repeat(count)
    /// };
    ///
    /// let memoized = repeat.memoized();
    /// assert_eq!(memoized.apply(5, 'a'), "aaaaa");
    /// assert_eq!(memoized.apply(5, 'a'), "aaaaa");
    /// assert_eq!(calls.get(), 1);
    /// ```
    fn memoized(self) -> Self::Wrapper;
}

impl<A, B, C, F> BiMemoize<A, B> for F
where
    F: Fn(A, B) -> C,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Clone,
{
    type Wrapper = BiMemoized<F, A, B, C>;

    fn memoized(self) -> BiMemoized<F, A, B, C> {
        BiMemoized::new(self)
    }
}

/// A function of two arguments that caches its results per argument pair.
///
/// Shares the locking and caching behavior of
/// [`Memoized`](super::Memoized).
pub struct BiMemoized<F, A, B, C> {
    function: F,
    cache: MemoCache<(A, B), C>,
}

impl<F, A, B, C> BiMemoized<F, A, B, C>
where
    F: Fn(A, B) -> C,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Clone,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: MemoCache::new(),
        }
    }

    /// Returns the number of cached results.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if the result for `(first, second)` is cached.
    pub fn is_cached(&self, first: &A, second: &B) -> bool {
        self.cache.contains(&(first.clone(), second.clone()))
    }
}

impl<F, A, B, C> BiFunction<A, B> for BiMemoized<F, A, B, C>
where
    F: Fn(A, B) -> C,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Clone,
{
    type Output = C;

    fn apply(&self, first: A, second: B) -> C {
        self.cache
            .get_or_insert_with((first, second), |(first, second)| {
                (self.function)(first, second)
            })
    }
}

impl<F, A, B, C> BiMemoize<A, B> for BiMemoized<F, A, B, C>
where
    F: Fn(A, B) -> C,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Clone,
{
    type Wrapper = Self;

    fn memoized(self) -> Self {
        self
    }
}

impl<F, A, B, C> fmt::Debug for BiMemoized<F, A, B, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BiMemoized")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(BiMemoized<fn(i64, char) -> String, i64, char, String>: Send, Sync);
