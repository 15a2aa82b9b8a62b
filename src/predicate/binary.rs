//! The [`BiPredicate`] trait for boolean functions of two arguments.

use crate::function::BiFunction;

/// A boolean-valued function of two arguments.
///
/// Implemented for every [`BiFunction`] with `Output = bool`.
///
/// # Examples
///
/// ```
/// use fnkit::predicate::BiPredicate;
///
/// let divides = |divisor: u32, value: u32| divisor != 0 && value % divisor == 0;
/// let does_not_divide = divides.negate();
/// assert!(does_not_divide(3, 10));
/// assert!(!does_not_divide(5, 10));
/// ```
pub trait BiPredicate<A, B>: BiFunction<A, B, Output = bool> {
    /// Evaluates the predicate on `first` and `second`.
    #[inline]
    fn test(&self, first: A, second: B) -> bool {
        self.apply(first, second)
    }

    /// Returns the logical negation of this predicate.
    fn negate(self) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
    {
        move |first, second| !self.apply(first, second)
    }

    /// Returns a predicate that holds when both predicates hold.
    ///
    /// `other` is not evaluated when `self` is false.
    fn and<P>(self, other: P) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
        P: BiPredicate<A, B>,
        A: Clone,
        B: Clone,
    {
        move |first: A, second: B| {
            self.apply(first.clone(), second.clone()) && other.apply(first, second)
        }
    }

    /// Returns a predicate that holds when either predicate holds.
    ///
    /// `other` is not evaluated when `self` is true.
    fn or<P>(self, other: P) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
        P: BiPredicate<A, B>,
        A: Clone,
        B: Clone,
    {
        move |first: A, second: B| {
            self.apply(first.clone(), second.clone()) || other.apply(first, second)
        }
    }

    /// Returns a predicate that holds when exactly one predicate holds.
    ///
    /// Both predicates are always evaluated, `self` first.
    fn xor<P>(self, other: P) -> impl Fn(A, B) -> bool
    where
        Self: Sized,
        P: BiPredicate<A, B>,
        A: Clone,
        B: Clone,
    {
        move |first: A, second: B| {
            let left = self.apply(first.clone(), second.clone());
            let right = other.apply(first, second);
            left ^ right
        }
    }
}

impl<A, B, P> BiPredicate<A, B> for P where P: BiFunction<A, B, Output = bool> {}
