//! The [`TryFunction`] trait for fallible functions of one argument.

use std::error::Error;
use std::panic;

use super::NestedError;
use crate::function::Function;

/// A function of one argument that returns a [`Result`].
///
/// Implemented for every [`Function`] with `Output = Result<B, E>`.
pub trait TryFunction<A, B, E>: Function<A, Output = Result<B, E>> {
    /// Returns a function whose errors are wrapped in [`NestedError`].
    ///
    /// The wrapper keeps the original error as its cause. An error that is
    /// already a `NestedError` is passed through without another layer.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnkit::fallible::TryFunction;
    /// use std::num::ParseIntError;
    ///
    /// let parse = |text: String| text.parse::<u8>();
    /// let nested = parse.nest();
    ///
    /// let error = nested("300".to_string()).unwrap_err();
    /// assert!(error.downcast_ref::<ParseIntError>().is_some());
    /// ```
    fn nest(self) -> impl Fn(A) -> Result<B, NestedError>
    where
        Self: Sized,
        E: Error + Send + Sync + 'static,
    {
        move |argument| self.apply(argument).map_err(NestedError::new)
    }

    /// Returns a function whose errors are converted by `mapper`.
    fn nest_with<R, M>(self, mapper: M) -> impl Fn(A) -> Result<B, R>
    where
        Self: Sized,
        M: Fn(E) -> R,
    {
        move |argument| self.apply(argument).map_err(&mapper)
    }

    /// Returns an infallible function that falls back on failure.
    ///
    /// When `self` fails, `handler` receives the error and returns the
    /// fallback function, which is then applied to the same argument. The
    /// argument is cloned once per call so it can be handed to the fallback.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnkit::fallible::TryFunction;
    /// use std::num::ParseIntError;
    ///
    /// let parse = |text: String| text.parse::<i64>();
    /// let parse_or_length = parse.recover(|_: ParseIntError| {
    ///     |text: String| i64::try_from(text.len()).unwrap_or(i64::MAX)
    /// });
    ///
    /// assert_eq!(parse_or_length("-7".to_string()), -7);
    /// assert_eq!(parse_or_length("seven".to_string()), 5);
    /// ```
    fn recover<G, H>(self, handler: H) -> impl Fn(A) -> B
    where
        Self: Sized,
        A: Clone,
        H: Fn(E) -> G,
        G: Function<A, Output = B>,
    {
        move |argument: A| match self.apply(argument.clone()) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!("fallible function failed, delegating to fallback");
                handler(error).apply(argument)
            }
        }
    }

    /// Returns an infallible function that unwinds with the original error.
    ///
    /// On failure the error value itself becomes the panic payload, without
    /// any wrapping, so a caller catching the unwind with
    /// [`std::panic::catch_unwind`] can downcast the payload back to `E`.
    /// The panic hook is not invoked.
    ///
    /// # Panics
    ///
    /// Whenever `self` returns `Err`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnkit::fallible::TryFunction;
    /// use std::num::ParseIntError;
    /// use std::panic::{self, AssertUnwindSafe};
    ///
    /// let parse = |text: String| text.parse::<i32>();
    /// let unchecked = parse.sneaky_throw();
    /// assert_eq!(unchecked("5".to_string()), 5);
    ///
    /// let payload = panic::catch_unwind(AssertUnwindSafe(|| unchecked("five".to_string())))
    ///     .unwrap_err();
    /// assert!(payload.downcast_ref::<ParseIntError>().is_some());
    /// ```
    fn sneaky_throw(self) -> impl Fn(A) -> B
    where
        Self: Sized,
        E: Send + 'static,
    {
        move |argument| match self.apply(argument) {
            Ok(value) => value,
            Err(error) => {
                tracing::debug!("fallible function failed, unwinding with original error");
                panic::resume_unwind(Box::new(error))
            }
        }
    }

    /// Returns a function that applies `after` to the success value.
    ///
    /// Errors from `self` are returned without calling `after`.
    fn try_and_then<C, G>(self, after: G) -> impl Fn(A) -> Result<C, E>
    where
        Self: Sized,
        G: Function<B, Output = Result<C, E>>,
    {
        move |argument| self.apply(argument).and_then(|value| after.apply(value))
    }
}

impl<A, B, E, F> TryFunction<A, B, E> for F where F: Function<A, Output = Result<B, E>> {}
