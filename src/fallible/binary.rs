//! The [`TryBiFunction`] trait for fallible functions of two arguments.

use std::error::Error;
use std::panic;

use super::NestedError;
use crate::function::{BiFunction, Function};

/// A function of two arguments that returns a [`Result`].
///
/// Implemented for every [`BiFunction`] with `Output = Result<C, E>`. The
/// combinators mirror [`TryFunction`](super::TryFunction).
///
/// # Examples
///
/// ```
/// use fnkit::fallible::TryBiFunction;
///
/// let divide = |numerator: i32, denominator: i32| {
///     numerator.checked_div(denominator).ok_or("division by zero")
/// };
/// let divide_or_zero = divide.recover(|_: &str| |_: i32, _: i32| 0);
///
/// assert_eq!(divide_or_zero(10, 2), 5);
/// assert_eq!(divide_or_zero(10, 0), 0);
/// ```
pub trait TryBiFunction<A, B, C, E>: BiFunction<A, B, Output = Result<C, E>> {
    /// Returns a function whose errors are wrapped in [`NestedError`].
    fn nest(self) -> impl Fn(A, B) -> Result<C, NestedError>
    where
        Self: Sized,
        E: Error + Send + Sync + 'static,
    {
        move |first, second| self.apply(first, second).map_err(NestedError::new)
    }

    /// Returns a function whose errors are converted by `mapper`.
    fn nest_with<R, M>(self, mapper: M) -> impl Fn(A, B) -> Result<C, R>
    where
        Self: Sized,
        M: Fn(E) -> R,
    {
        move |first, second| self.apply(first, second).map_err(&mapper)
    }

    /// Returns an infallible function that falls back on failure.
    ///
    /// `handler` maps the error to a fallback function, which is applied to
    /// the same pair of arguments.
    fn recover<G, H>(self, handler: H) -> impl Fn(A, B) -> C
    where
        Self: Sized,
        A: Clone,
        B: Clone,
        H: Fn(E) -> G,
        G: BiFunction<A, B, Output = C>,
    {
        move |first: A, second: B| match self.apply(first.clone(), second.clone()) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!("fallible function failed, delegating to fallback");
                handler(error).apply(first, second)
            }
        }
    }

    /// Returns an infallible function that unwinds with the original error.
    ///
    /// # Panics
    ///
    /// Whenever `self` returns `Err`; the payload is the error value itself.
    fn sneaky_throw(self) -> impl Fn(A, B) -> C
    where
        Self: Sized,
        E: Send + 'static,
    {
        move |first, second| match self.apply(first, second) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!("fallible function failed, unwinding with original error");
                panic::resume_unwind(Box::new(error))
            }
        }
    }

    /// Returns a function that applies `after` to the success value.
    fn try_and_then<D, G>(self, after: G) -> impl Fn(A, B) -> Result<D, E>
    where
        Self: Sized,
        G: Function<C, Output = Result<D, E>>,
    {
        move |first, second| self.apply(first, second).and_then(|value| after.apply(value))
    }
}

impl<A, B, C, E, F> TryBiFunction<A, B, C, E> for F where
    F: BiFunction<A, B, Output = Result<C, E>>
{
}
