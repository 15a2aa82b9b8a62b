//! Thread-safe memoization of pure functions.
//!
//! This module wraps a function in a cache keyed by its arguments, so each
//! distinct input is computed at most once over the lifetime of the wrapper:
//!
//! - [`Memoized`]: functions of one argument, via [`Memoize::memoized`]
//! - [`BiMemoized`]: functions of two arguments, keyed by the positional pair
//! - [`TryMemoized`] / [`TryBiMemoized`]: functions returning [`Result`];
//!   only `Ok` values are cached
//!
//! # Caching Rules
//!
//! - Arguments are cache keys and must be `Eq + Hash + Clone`; results are
//!   handed out by clone and must be `Clone`.
//! - The cache grows monotonically. There is no eviction, no TTL and no size
//!   bound, so memoize functions over small, bounded input domains.
//! - `Option` arguments and results are cached like any other value.
//! - Memoizing a memoized wrapper returns the same wrapper and cache.
//! - Errors are never cached, and a panic in the wrapped function unwinds to
//!   the caller and leaves the cache unchanged.
//!
//! # Concurrency
//!
//! Each wrapper owns one `parking_lot` mutex that is held across lookup,
//! computation and insertion. Wrappers can be shared between threads (for
//! example behind an `Arc`) and never compute a key twice, at the cost of
//! serializing all calls.
//!
//! # Examples
//!
//! ```rust
//! use fnkit::function::Function;
//! use fnkit::memoize::Memoize;
//! use std::sync::Arc;
//! use std::thread;
//!
//! let collatz_steps = |start: u64| {
//!     let mut value = start;
//!     let mut steps = 0u32;
//!     while value != 1 {
//!         value = if value % 2 == 0 { value / 2 } else { 3 * value + 1 };
//!         steps += 1;
//!     }
//!     steps
//! };
//!
//! let memoized = Arc::new(collatz_steps.memoized());
//! let handles: Vec<_> = (0..4)
//!     .map(|_| {
//!         let memoized = Arc::clone(&memoized);
//!         thread::spawn(move || memoized.apply(27))
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     assert_eq!(handle.join().unwrap(), 111);
//! }
//! assert_eq!(memoized.cached_len(), 1);
//! ```

mod binary;
mod cache;
mod fallible;
mod unary;

pub use binary::{BiMemoize, BiMemoized};
pub use cache::CacheHasher;
pub use fallible::{TryBiMemoize, TryBiMemoized, TryMemoize, TryMemoized};
pub use unary::{Memoize, Memoized};
