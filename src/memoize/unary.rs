//! Memoization of functions of one argument.

use std::fmt;
use std::hash::Hash;

use super::cache::MemoCache;
use crate::function::Function;

/// Conversion of a function of one argument into its memoized form.
///
/// Implemented for every `Fn(A) -> B` whose argument can serve as a cache
/// key (`Eq + Hash + Clone`) and whose result can be handed out repeatedly
/// (`Clone`). [`Memoized`] implements it by returning itself, so memoizing
/// twice never stacks a second cache.
pub trait Memoize<A> {
    /// The memoized function type.
    type Wrapper: Function<A>;

    /// Returns a memoizing wrapper around `self`.
    ///
    /// The wrapped function must be pure: results are cached per argument
    /// forever and a function with side effects or varying results would
    /// silently return stale values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::Function;
    /// use fnkit::memoize::Memoize;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    ///
    /// let calls = AtomicUsize::new(0);
    /// let slow_square = |value: u64| {
    ///     calls.fetch_add(1, Ordering::SeqCst);
    ///     value * value
    /// };
    ///
    /// let memoized = slow_square.memoized();
    /// assert_eq!(memoized.apply(9), 81);
    /// assert_eq!(memoized.apply(9), 81);
    /// assert_eq!(calls.load(Ordering::SeqCst), 1);
    /// ```
    fn memoized(self) -> Self::Wrapper;
}

impl<A, B, F> Memoize<A> for F
where
    F: Fn(A) -> B,
    A: Eq + Hash + Clone,
    B: Clone,
{
    type Wrapper = Memoized<F, A, B>;

    fn memoized(self) -> Memoized<F, A, B> {
        Memoized::new(self)
    }
}

/// A function of one argument that caches its results.
///
/// Each distinct argument is computed at most once over the lifetime of the
/// wrapper; later calls with an equal argument return a clone of the cached
/// result without invoking the wrapped function. The cache never shrinks.
///
/// # Thread Safety
///
/// `Memoized` is `Send + Sync` whenever the wrapped function is `Send + Sync`
/// and the arguments and results are `Send`. A single mutex guards the cache
/// and is held while the wrapped function runs, so concurrent calls are
/// serialized, even for different arguments.
///
/// Calling the same `Memoized` from inside its own wrapped function
/// deadlocks.
pub struct Memoized<F, A, B> {
    function: F,
    cache: MemoCache<A, B>,
}

impl<F, A, B> Memoized<F, A, B>
where
    F: Fn(A) -> B,
    A: Eq + Hash + Clone,
    B: Clone,
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

    /// Returns `true` if the result for `argument` is cached.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.contains(argument)
    }
}

impl<F, A, B> Function<A> for Memoized<F, A, B>
where
    F: Fn(A) -> B,
    A: Eq + Hash + Clone,
    B: Clone,
{
    type Output = B;

    fn apply(&self, argument: A) -> B {
        self.cache.get_or_insert_with(argument, &self.function)
    }
}

impl<F, A, B> Memoize<A> for Memoized<F, A, B>
where
    F: Fn(A) -> B,
    A: Eq + Hash + Clone,
    B: Clone,
{
    type Wrapper = Self;

    fn memoized(self) -> Self {
        self
    }
}

impl<F, A, B> fmt::Debug for Memoized<F, A, B> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoized")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Memoized<fn(u64) -> u64, u64, u64>: Send, Sync);
static_assertions::assert_impl_all!(Memoized<fn(String) -> Vec<u8>, String, Vec<u8>>: Send, Sync);
