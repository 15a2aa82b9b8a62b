//! Unit tests for fallible function combinators.
//!
//! Covers `nest`, `nest_with`, `recover`, `sneaky_throw` and `try_and_then`
//! for both arities, and checks that panics pass through untouched.

#![cfg(feature = "fallible")]

use fnkit::fallible::{NestedError, TryBiFunction, TryFunction};
use rstest::rstest;
use std::cell::Cell;
use std::error::Error;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

#[derive(Debug, Clone, PartialEq, Eq)]
enum LookupError {
    Missing(String),
    Forbidden,
}

impl fmt::Display for LookupError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing(key) => write!(formatter, "missing key: {key}"),
            Self::Forbidden => write!(formatter, "forbidden"),
        }
    }
}

impl Error for LookupError {}

fn lookup(key: String) -> Result<u32, LookupError> {
    match key.as_str() {
        "one" => Ok(1),
        "two" => Ok(2),
        "secret" => Err(LookupError::Forbidden),
        _ => Err(LookupError::Missing(key)),
    }
}

fn lookup_pair(first: String, second: String) -> Result<u32, LookupError> {
    Ok(lookup(first)? + lookup(second)?)
}

// =============================================================================
// nest
// =============================================================================

#[rstest]
fn test_nest_passes_success_through() {
    let nested = lookup.nest();
    assert_eq!(nested("one".to_string()).ok(), Some(1));
}

#[rstest]
fn test_nest_wraps_failure_with_cause() {
    let nested = lookup.nest();
    let error: NestedError = nested("three".to_string()).unwrap_err();

    assert_eq!(
        error.downcast_ref::<LookupError>(),
        Some(&LookupError::Missing("three".to_string()))
    );
    assert_eq!(error.to_string(), "missing key: three");

    let source = error.source().expect("nested error has a source");
    assert_eq!(source.to_string(), "missing key: three");
}

#[rstest]
fn test_nest_cause_is_original_error() {
    let nested = lookup.nest();
    let error = nested("secret".to_string()).unwrap_err();

    assert_eq!(error.cause().to_string(), "forbidden");
    assert_eq!(
        error.cause().downcast_ref::<LookupError>(),
        Some(&LookupError::Forbidden)
    );

    let cause = error.into_cause();
    assert_eq!(
        cause.downcast_ref::<LookupError>(),
        Some(&LookupError::Forbidden)
    );
}

#[rstest]
fn test_nest_does_not_double_wrap() {
    let nested_twice = lookup.nest().nest();
    let error = nested_twice("secret".to_string()).unwrap_err();

    assert_eq!(
        error.downcast_ref::<LookupError>(),
        Some(&LookupError::Forbidden)
    );
}

#[rstest]
fn test_nest_with_uses_mapper() {
    let mapped = lookup.nest_with(|error: LookupError| format!("lookup failed: {error}"));
    assert_eq!(mapped("two".to_string()), Ok(2));
    assert_eq!(
        mapped("secret".to_string()),
        Err("lookup failed: forbidden".to_string())
    );
}

#[rstest]
fn test_nest_binary() {
    let nested = lookup_pair.nest();
    assert_eq!(nested("one".to_string(), "two".to_string()).ok(), Some(3));

    let error = nested("one".to_string(), "nine".to_string()).unwrap_err();
    assert_eq!(
        error.downcast_ref::<LookupError>(),
        Some(&LookupError::Missing("nine".to_string()))
    );
}

// =============================================================================
// recover
// =============================================================================

#[rstest]
#[case("one", 1)]
#[case("two", 2)]
#[case("secret", 0)]
#[case("seven", 5)]
fn test_recover_selects_fallback_from_error(#[case] key: &str, #[case] expected: u32) {
    let recovered = lookup.recover(|error: LookupError| {
        move |key: String| match &error {
            LookupError::Forbidden => 0,
            LookupError::Missing(_) => u32::try_from(key.len()).unwrap_or(u32::MAX),
        }
    });

    assert_eq!(recovered(key.to_string()), expected);
}

#[rstest]
fn test_recover_fallback_receives_original_argument() {
    let received = std::cell::RefCell::new(None);
    let recovered = lookup.recover(|_: LookupError| {
        |key: String| {
            *received.borrow_mut() = Some(key);
            99
        }
    });

    assert_eq!(recovered("unknown".to_string()), 99);
    assert_eq!(received.borrow().as_deref(), Some("unknown"));
}

#[rstest]
fn test_recover_binary() {
    let handler_calls = Cell::new(0);
    let recovered = lookup_pair.recover(|_: LookupError| {
        handler_calls.set(handler_calls.get() + 1);
        |first: String, second: String| u32::try_from(first.len() + second.len()).unwrap_or(0)
    });

    assert_eq!(recovered("one".to_string(), "two".to_string()), 3);
    assert_eq!(handler_calls.get(), 0);
    assert_eq!(recovered("abc".to_string(), "de".to_string()), 5);
    assert_eq!(handler_calls.get(), 1);
}

// =============================================================================
// sneaky_throw
// =============================================================================

#[rstest]
fn test_sneaky_throw_returns_success_value() {
    let unchecked = lookup.sneaky_throw();
    assert_eq!(unchecked("two".to_string()), 2);
}

#[rstest]
fn test_sneaky_throw_unwinds_with_original_error() {
    let unchecked = lookup.sneaky_throw();

    let payload = panic::catch_unwind(AssertUnwindSafe(|| unchecked("secret".to_string())))
        .expect_err("failure should unwind");

    let error = payload
        .downcast::<LookupError>()
        .expect("payload is the original error");
    assert_eq!(*error, LookupError::Forbidden);
}

#[rstest]
fn test_sneaky_throw_binary() {
    let unchecked = lookup_pair.sneaky_throw();
    assert_eq!(unchecked("one".to_string(), "one".to_string()), 2);

    let payload = panic::catch_unwind(AssertUnwindSafe(|| {
        unchecked("one".to_string(), "zero".to_string())
    }))
    .expect_err("failure should unwind");
    assert_eq!(
        payload.downcast_ref::<LookupError>(),
        Some(&LookupError::Missing("zero".to_string()))
    );
}

// =============================================================================
// try_and_then
// =============================================================================

#[rstest]
fn test_try_and_then_chains_success() {
    let doubled_if_small = lookup.try_and_then(|value: u32| {
        if value < 2 {
            Ok(value * 2)
        } else {
            Err(LookupError::Forbidden)
        }
    });

    assert_eq!(doubled_if_small("one".to_string()), Ok(2));
    assert_eq!(
        doubled_if_small("two".to_string()),
        Err(LookupError::Forbidden)
    );
    assert_eq!(
        doubled_if_small("ten".to_string()),
        Err(LookupError::Missing("ten".to_string()))
    );
}

#[rstest]
fn test_try_and_then_binary() {
    let describe = lookup_pair.try_and_then(|total: u32| Ok(format!("total={total}")));
    assert_eq!(
        describe("one".to_string(), "two".to_string()),
        Ok("total=3".to_string())
    );
}

// =============================================================================
// Panics are never intercepted
// =============================================================================

#[rstest]
fn test_panic_is_not_recovered() {
    let handler_calls = Cell::new(0);
    let explodes = |_: u8| -> Result<u8, LookupError> { panic!("fatal") };
    let recovered = explodes.recover(|_: LookupError| {
        handler_calls.set(handler_calls.get() + 1);
        |value: u8| value
    });

    let outcome = panic::catch_unwind(AssertUnwindSafe(|| recovered(1)));
    assert!(outcome.is_err());
    assert_eq!(handler_calls.get(), 0);
}

#[rstest]
fn test_panic_is_not_nested() {
    let explodes = |_: u8| -> Result<u8, LookupError> { panic!("fatal") };
    let nested = explodes.nest();

    let payload = panic::catch_unwind(AssertUnwindSafe(|| nested(1)))
        .expect_err("panic should pass through");
    assert_eq!(payload.downcast_ref::<&str>(), Some(&"fatal"));
}
