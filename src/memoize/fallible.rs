//! Memoization of functions returning [`Result`].
//!
//! Only successful results are cached. A failure is returned to the caller
//! unchanged and leaves the cache untouched, so the next call with the same
//! argument runs the wrapped function again.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

use super::cache::MemoCache;
use crate::function::{BiFunction, Function};

/// Conversion of a fallible function of one argument into its memoized form.
pub trait TryMemoize<A> {
    /// The memoized function type.
    type Wrapper: Function<A>;

    /// Returns a wrapper that caches successful results of `self`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::Function;
    /// use fnkit::memoize::TryMemoize;
    /// use std::cell::Cell;
    ///
    /// let attempts = Cell::new(0);
    /// let flaky = |value: u32| {
    ///     attempts.set(attempts.get() + 1);
    ///     if attempts.get() == 1 { Err("first attempt fails") } else { Ok(value + 1) }
    /// };
    ///
    /// let memoized = flaky.try_memoized();
    /// assert_eq!(memoized.apply(1), Err("first attempt fails"));
    /// assert_eq!(memoized.apply(1), Ok(2));
    /// assert_eq!(memoized.apply(1), Ok(2));
    /// assert_eq!(attempts.get(), 2);
    /// ```
    fn try_memoized(self) -> Self::Wrapper;
}

impl<A, B, E, F> TryMemoize<A> for F
where
    F: Fn(A) -> Result<B, E>,
    A: Eq + Hash + Clone,
    B: Clone,
{
    type Wrapper = TryMemoized<F, A, B, E>;

    fn try_memoized(self) -> TryMemoized<F, A, B, E> {
        TryMemoized::new(self)
    }
}

/// A fallible function of one argument that caches its successful results.
pub struct TryMemoized<F, A, B, E> {
    function: F,
    cache: MemoCache<A, B>,
    error: PhantomData<fn() -> E>,
}

impl<F, A, B, E> TryMemoized<F, A, B, E>
where
    F: Fn(A) -> Result<B, E>,
    A: Eq + Hash + Clone,
    B: Clone,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: MemoCache::new(),
            error: PhantomData,
        }
    }

    /// Returns the number of cached results.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if a successful result for `argument` is cached.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.contains(argument)
    }
}

impl<F, A, B, E> Function<A> for TryMemoized<F, A, B, E>
where
    F: Fn(A) -> Result<B, E>,
    A: Eq + Hash + Clone,
    B: Clone,
{
    type Output = Result<B, E>;

    fn apply(&self, argument: A) -> Result<B, E> {
        self.cache.get_or_try_insert_with(argument, &self.function)
    }
}

impl<F, A, B, E> TryMemoize<A> for TryMemoized<F, A, B, E>
where
    F: Fn(A) -> Result<B, E>,
    A: Eq + Hash + Clone,
    B: Clone,
{
    type Wrapper = Self;

    fn try_memoized(self) -> Self {
        self
    }
}

impl<F, A, B, E> fmt::Debug for TryMemoized<F, A, B, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryMemoized")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

/// Conversion of a fallible function of two arguments into its memoized form.
pub trait TryBiMemoize<A, B> {
    /// The memoized function type.
    type Wrapper: BiFunction<A, B>;

    /// Returns a wrapper that caches successful results of `self` per
    /// argument pair.
    fn try_memoized(self) -> Self::Wrapper;
}

impl<A, B, C, E, F> TryBiMemoize<A, B> for F
where
    F: Fn(A, B) -> Result<C, E>,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Clone,
{
    type Wrapper = TryBiMemoized<F, A, B, C, E>;

    fn try_memoized(self) -> TryBiMemoized<F, A, B, C, E> {
        TryBiMemoized::new(self)
    }
}

/// A fallible function of two arguments that caches its successful results.
pub struct TryBiMemoized<F, A, B, C, E> {
    function: F,
    cache: MemoCache<(A, B), C>,
    error: PhantomData<fn() -> E>,
}

impl<F, A, B, C, E> TryBiMemoized<F, A, B, C, E>
where
    F: Fn(A, B) -> Result<C, E>,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Clone,
{
    /// Wraps `function` with an empty cache.
    pub fn new(function: F) -> Self {
        Self {
            function,
            cache: MemoCache::new(),
            error: PhantomData,
        }
    }

    /// Returns the number of cached results.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Returns `true` if a successful result for `(first, second)` is cached.
    pub fn is_cached(&self, first: &A, second: &B) -> bool {
        self.cache.contains(&(first.clone(), second.clone()))
    }
}

impl<F, A, B, C, E> BiFunction<A, B> for TryBiMemoized<F, A, B, C, E>
where
    F: Fn(A, B) -> Result<C, E>,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Clone,
{
    type Output = Result<C, E>;

    fn apply(&self, first: A, second: B) -> Result<C, E> {
        self.cache
            .get_or_try_insert_with((first, second), |(first, second)| {
                (self.function)(first, second)
            })
    }
}

impl<F, A, B, C, E> TryBiMemoize<A, B> for TryBiMemoized<F, A, B, C, E>
where
    F: Fn(A, B) -> Result<C, E>,
    A: Eq + Hash + Clone,
    B: Eq + Hash + Clone,
    C: Clone,
{
    type Wrapper = Self;

    fn try_memoized(self) -> Self {
        self
    }
}

impl<F, A, B, C, E> fmt::Debug for TryBiMemoized<F, A, B, C, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TryBiMemoized")
            .field("cache", &self.cache)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(
    TryMemoized<fn(u32) -> Result<u32, String>, u32, u32, String>: Send, Sync
);
static_assertions::assert_impl_all!(
    TryBiMemoized<fn(u32, u32) -> Result<u32, String>, u32, u32, u32, String>: Send, Sync
);
