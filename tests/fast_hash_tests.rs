//! Tests for fast hash feature flags.
//!
//! The `fxhash` and `ahash` features swap the hash builder used by
//! memoization caches. These tests run under every combination and check
//! that caching behaves the same whichever hasher is selected.

#![cfg(feature = "memoize")]

use fnkit::function::{BiFunction, Function};
use fnkit::memoize::{BiMemoize, CacheHasher, Memoize};
use rstest::rstest;
use std::cell::Cell;
use std::hash::BuildHasher;

// =============================================================================
// Hasher selection
// =============================================================================

/// The selected builder hashes equal keys identically.
#[rstest]
fn test_same_key_produces_same_hash() {
    let hasher = CacheHasher::default();

    assert_eq!(
        BuildHasher::hash_one(&hasher, "key"),
        BuildHasher::hash_one(&hasher, "key")
    );
    assert_eq!(
        BuildHasher::hash_one(&hasher, 42_i32),
        BuildHasher::hash_one(&hasher, 42_i32)
    );
    assert_eq!(
        BuildHasher::hash_one(&hasher, (1_u8, 'a')),
        BuildHasher::hash_one(&hasher, (1_u8, 'a'))
    );
}

#[cfg(feature = "fxhash")]
#[rstest]
fn test_fxhash_is_selected() {
    assert_eq!(
        std::any::type_name::<CacheHasher>(),
        std::any::type_name::<rustc_hash::FxBuildHasher>()
    );
}

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
#[rstest]
fn test_ahash_is_selected() {
    assert_eq!(
        std::any::type_name::<CacheHasher>(),
        std::any::type_name::<ahash::RandomState>()
    );
}

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
#[rstest]
fn test_std_hasher_is_selected() {
    assert_eq!(
        std::any::type_name::<CacheHasher>(),
        std::any::type_name::<std::collections::hash_map::RandomState>()
    );
}

// =============================================================================
// Cache behavior under the selected hasher
// =============================================================================

#[rstest]
#[case(vec!["alpha", "beta", "gamma", "alpha", "beta"], 3)]
#[case(vec!["same", "same", "same"], 1)]
#[case(vec![], 0)]
fn test_string_keys_deduplicate(#[case] keys: Vec<&str>, #[case] expected_calls: usize) {
    let calls = Cell::new(0);
    let length = |text: String| {
        calls.set(calls.get() + 1);
        text.len()
    };
    let memoized = length.memoized();

    for key in keys {
        assert_eq!(memoized.apply(key.to_string()), key.len());
    }
    assert_eq!(calls.get(), expected_calls);
    assert_eq!(memoized.cached_len(), expected_calls);
}

#[rstest]
fn test_many_integer_keys() {
    let calls = Cell::new(0);
    let triple = |value: u64| {
        calls.set(calls.get() + 1);
        value * 3
    };
    let memoized = triple.memoized();

    for round in 0..2 {
        for value in 0..1_000_u64 {
            assert_eq!(memoized.apply(value), value * 3, "round {round}");
        }
    }
    assert_eq!(calls.get(), 1_000);
}

#[rstest]
fn test_tuple_keys_with_collisions_in_parts() {
    let calls = Cell::new(0);
    let combine = |left: u16, right: u16| {
        calls.set(calls.get() + 1);
        u32::from(left) << 16 | u32::from(right)
    };
    let memoized = combine.memoized();

    for left in 0..20_u16 {
        for right in 0..20_u16 {
            assert_eq!(memoized.apply(left, right), u32::from(left) << 16 | u32::from(right));
            assert_eq!(memoized.apply(right, left), u32::from(right) << 16 | u32::from(left));
        }
    }
    assert_eq!(calls.get(), 400);
}
