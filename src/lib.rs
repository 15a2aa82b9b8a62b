//! # fnkit
//!
//! Generic function combinators for Rust closures and function values.
//!
//! ## Overview
//!
//! One trait per function *shape* covers every argument and result type:
//!
//! - **Functions**: [`Function`](function::Function) and
//!   [`BiFunction`](function::BiFunction) with `compose`, `and_then`,
//!   `consume` and `boxed`
//! - **Predicates**: [`Predicate`](predicate::Predicate) and
//!   [`BiPredicate`](predicate::BiPredicate) with `negate`, `and`, `or`, `xor`
//! - **Fallible functions**: [`TryFunction`](fallible::TryFunction) and
//!   [`TryBiFunction`](fallible::TryBiFunction) with `nest`, `recover` and
//!   `sneaky_throw` for functions returning [`Result`]
//! - **Memoization**: thread-safe caching wrappers that compute each distinct
//!   input at most once
//!
//! ## Feature Flags
//!
//! - `function`: Function and `BiFunction` traits plus helper functions
//! - `predicate`: Predicate combinators
//! - `fallible`: Combinators for functions returning `Result`
//! - `memoize`: Memoizing wrappers (pulls in `parking_lot`)
//! - `fxhash` / `ahash`: Faster hashers for memoization caches
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnkit::prelude::*;
//!
//! let square = |value: u64| value * value;
//! let describe = square.and_then(|value: u64| format!("squared: {value}"));
//! assert_eq!(describe(4), "squared: 16");
//!
//! let memoized = square.memoized();
//! assert_eq!(memoized.apply(12), 144);
//! assert!(memoized.is_cached(&12));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use fnkit::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "function")]
    pub use crate::function::*;

    #[cfg(feature = "predicate")]
    pub use crate::predicate::*;

    #[cfg(feature = "fallible")]
    pub use crate::fallible::*;

    #[cfg(feature = "memoize")]
    pub use crate::memoize::*;
}

#[cfg(feature = "function")]
pub mod function;

#[cfg(feature = "predicate")]
pub mod predicate;

#[cfg(feature = "fallible")]
pub mod fallible;

#[cfg(feature = "memoize")]
pub mod memoize;
