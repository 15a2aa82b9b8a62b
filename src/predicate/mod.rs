//! Predicate combinators.
//!
//! A predicate is any [`Function`](crate::function::Function) or
//! [`BiFunction`](crate::function::BiFunction) whose output is `bool`. The
//! traits in this module are implemented automatically for all of them and
//! add the boolean combinators:
//!
//! - `negate`: logical NOT
//! - `and`: logical AND, short-circuiting
//! - `or`: logical OR, short-circuiting
//! - `xor`: logical XOR, always evaluates both sides
//!
//! # Examples
//!
//! ```
//! use fnkit::predicate::Predicate;
//!
//! let is_even = |value: i32| value % 2 == 0;
//! let is_positive = |value: i32| value > 0;
//!
//! let is_positive_even = is_even.and(is_positive);
//! assert!(is_positive_even(4));
//! assert!(!is_positive_even(-4));
//! assert!(!is_positive_even(3));
//! ```

mod binary;
mod unary;

pub use binary::BiPredicate;
pub use unary::{Predicate, always_false, always_true, is_equal};
