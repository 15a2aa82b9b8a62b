//! Error types for fallible function combinators.
//!
//! This module provides [`NestedError`], the single wrapper type that
//! [`TryFunction::nest`](super::TryFunction::nest) converts arbitrary errors
//! into.

use std::error::Error;
use std::fmt;

/// An error raised by a nested fallible function.
///
/// Carries the original error as its cause. The cause is reachable through
/// [`Error::source`], [`NestedError::cause`], [`NestedError::downcast_ref`]
/// and [`NestedError::into_cause`]. `Display` shows the cause's message
/// unchanged.
///
/// Wrapping a `NestedError` again returns it as-is, so nesting never stacks.
///
/// # Examples
///
/// ```rust
/// use fnkit::fallible::NestedError;
/// use std::error::Error;
///
/// let cause = "x".parse::<i32>().unwrap_err();
/// let nested = NestedError::new(cause.clone());
///
/// assert_eq!(nested.to_string(), cause.to_string());
/// assert_eq!(nested.downcast_ref::<std::num::ParseIntError>(), Some(&cause));
/// assert!(nested.source().is_some());
/// ```
#[derive(Debug)]
pub struct NestedError {
    cause: Box<dyn Error + Send + Sync + 'static>,
}

impl NestedError {
    /// Wraps `cause`.
    ///
    /// If `cause` is already a `NestedError` it is returned unchanged.
    pub fn new<E>(cause: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        let boxed: Box<dyn Error + Send + Sync + 'static> = Box::new(cause);
        match boxed.downcast::<Self>() {
            Ok(nested) => *nested,
            Err(cause) => Self { cause },
        }
    }

    /// Returns the original error.
    #[must_use]
    pub fn cause(&self) -> &(dyn Error + Send + Sync + 'static) {
        self.cause.as_ref()
    }

    /// Returns the original error if it is of type `T`.
    #[must_use]
    pub fn downcast_ref<T>(&self) -> Option<&T>
    where
        T: Error + 'static,
    {
        self.cause.downcast_ref::<T>()
    }

    /// Consumes the wrapper and returns the original error.
    #[must_use]
    pub fn into_cause(self) -> Box<dyn Error + Send + Sync + 'static> {
        self.cause
    }
}

impl fmt::Display for NestedError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.cause)
    }
}

impl Error for NestedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&*self.cause)
    }
}

static_assertions::assert_impl_all!(NestedError: Send, Sync);
