//! Combinators for fallible functions.
//!
//! A fallible function is any [`Function`](crate::function::Function) or
//! [`BiFunction`](crate::function::BiFunction) returning [`Result`]. The
//! traits here bridge such functions to other error types or to infallible
//! signatures:
//!
//! - [`nest`](TryFunction::nest): wraps the error in [`NestedError`]
//! - [`nest_with`](TryFunction::nest_with): maps the error with a caller-supplied function
//! - [`recover`](TryFunction::recover): on failure, selects a fallback function
//!   from the error and returns its result instead
//! - [`sneaky_throw`](TryFunction::sneaky_throw): on failure, unwinds with the
//!   original error value as the panic payload
//! - [`try_and_then`](TryFunction::try_and_then): chains a fallible continuation
//!
//! # Panics are fatal
//!
//! Panics raised by the wrapped function are never intercepted: `nest` does
//! not wrap them and `recover` does not hand them to the fallback. They unwind
//! straight through every combinator in this module.
//!
//! # Examples
//!
//! ```
//! use fnkit::fallible::TryFunction;
//! use std::num::ParseIntError;
//!
//! let parse = |text: String| text.parse::<i32>();
//!
//! let parse_or_zero = parse.recover(|_: ParseIntError| |_: String| 0);
//! assert_eq!(parse_or_zero("12".to_string()), 12);
//! assert_eq!(parse_or_zero("twelve".to_string()), 0);
//! ```

mod binary;
mod error;
mod unary;

pub use binary::TryBiFunction;
pub use error::NestedError;
pub use unary::TryFunction;
