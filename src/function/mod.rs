//! Function traits and combinators.
//!
//! This module provides the two function shapes the rest of the crate builds
//! on, together with the combinators every function value gets for free:
//!
//! - [`Function`]: a function of one argument, implemented for every `Fn(A) -> B`
//! - [`BiFunction`]: a function of two arguments, implemented for every `Fn(A, B) -> C`
//!
//! # Helper Functions
//!
//! - [`identity`]: The identity function - returns its argument unchanged
//! - [`constant`]: Creates a function that always returns the same value
//! - [`flip`]: Swaps the arguments of a binary function
//! - [`only_first`] / [`only_second`]: Lift a unary function to a binary one
//!   that ignores one argument
//!
//! # Examples
//!
//! ## Composition (right-to-left)
//!
//! ```
//! use fnkit::function::Function;
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! // add_one.compose(double)(x) = add_one(double(x))
//! let composed = add_one.compose(double);
//! assert_eq!(composed(5), 11);
//! ```
//!
//! ## Sequencing (left-to-right)
//!
//! ```
//! use fnkit::function::Function;
//!
//! let add_one = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! // add_one.and_then(double)(x) = double(add_one(x))
//! let sequenced = add_one.and_then(double);
//! assert_eq!(sequenced(5), 12);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `f.compose(g.compose(h)) == f.compose(g).compose(h)`
//! - **Identity**: `f.compose(identity) == f` and `f.and_then(identity) == f`
//! - **Duality**: `f.and_then(g) == g.compose(f)`

mod binary;
mod unary;
mod utils;

pub use binary::{BiFunction, BoxedBiFunction};
pub use unary::{BoxedFunction, Function};
pub use utils::{constant, flip, identity, only_first, only_second};
