//! Helper functions (combinators) for building functions.
//!
//! - [`identity`]: The identity function (I combinator)
//! - [`constant`]: Creates a function that always returns the same value (K combinator)
//! - [`flip`]: Swaps the arguments of a binary function (C combinator)
//! - [`only_first`] / [`only_second`]: Widen a unary function to two arguments

/// Returns the value unchanged.
///
/// The identity function is the unit element of composition:
/// `f.compose(identity)` and `f.and_then(identity)` both behave like `f`.
///
/// # Examples
///
/// ```
/// use fnkit::function::{Function, identity};
///
/// let double = |x: i32| x * 2;
/// let composed = double.compose(identity);
/// assert_eq!(composed(5), 10);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that always returns the given value, ignoring its input.
///
/// # Examples
///
/// ```
/// use fnkit::function::constant;
///
/// let always_five = constant::<_, &str>(5);
/// assert_eq!(always_five("ignored"), 5);
///
/// let zeros: Vec<i32> = vec![1, 2, 3].into_iter().map(constant(0)).collect();
/// assert_eq!(zeros, vec![0, 0, 0]);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// Free-function form of [`BiFunction::reversed`](super::BiFunction::reversed).
///
/// # Laws
///
/// - **Double flip identity**: `flip(flip(f)) == f`
/// - **Flip definition**: `flip(f)(a, b) == f(b, a)`
///
/// # Examples
///
/// ```
/// use fnkit::function::flip;
///
/// fn divide(numerator: f64, denominator: f64) -> f64 {
///     numerator / denominator
/// }
///
/// let flipped_divide = flip(divide);
/// assert!((flipped_divide(10.0, 2.0) - 0.2).abs() < f64::EPSILON);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second_argument, first_argument| function(first_argument, second_argument)
}

/// Widens a unary function to a binary one that ignores its second argument.
///
/// # Examples
///
/// ```
/// use fnkit::function::only_first;
///
/// let negate = only_first(|value: i32| -value);
/// assert_eq!(negate(4, "ignored"), -4);
/// ```
#[inline]
pub fn only_first<A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(A) -> C,
{
    move |first, _| function(first)
}

/// Widens a unary function to a binary one that ignores its first argument.
#[inline]
pub fn only_second<A, B, C, F>(function: F) -> impl Fn(A, B) -> C
where
    F: Fn(B) -> C,
{
    move |_, second| function(second)
}
