//! The [`Predicate`] trait for boolean functions of one argument.

use crate::function::Function;

/// A boolean-valued function of one argument.
///
/// Implemented for every [`Function`] with `Output = bool`. The binary
/// combinators hand the argument to both predicates and therefore require
/// `A: Clone`; the clone is only made when the second predicate actually runs
/// or when both must run (`xor`).
pub trait Predicate<A>: Function<A, Output = bool> {
    /// Evaluates the predicate on `argument`.
    #[inline]
    fn test(&self, argument: A) -> bool {
        self.apply(argument)
    }

    /// Returns the logical negation of this predicate.
    ///
    /// # Examples
    ///
    /// ```
    /// use fnkit::predicate::Predicate;
    ///
    /// let is_empty = |text: String| text.is_empty();
    /// let is_not_empty = is_empty.negate();
    /// assert!(is_not_empty("text".to_string()));
    /// ```
    fn negate(self) -> impl Fn(A) -> bool
    where
        Self: Sized,
    {
        move |argument| !self.apply(argument)
    }

    /// Returns a predicate that holds when both predicates hold.
    ///
    /// `other` is not evaluated when `self` is false.
    fn and<P>(self, other: P) -> impl Fn(A) -> bool
    where
        Self: Sized,
        P: Predicate<A>,
        A: Clone,
    {
        move |argument: A| self.apply(argument.clone()) && other.apply(argument)
    }

    /// Returns a predicate that holds when either predicate holds.
    ///
    /// `other` is not evaluated when `self` is true.
    fn or<P>(self, other: P) -> impl Fn(A) -> bool
    where
        Self: Sized,
        P: Predicate<A>,
        A: Clone,
    {
        move |argument: A| self.apply(argument.clone()) || other.apply(argument)
    }

    /// Returns a predicate that holds when exactly one predicate holds.
    ///
    /// Both predicates are always evaluated, `self` first.
    fn xor<P>(self, other: P) -> impl Fn(A) -> bool
    where
        Self: Sized,
        P: Predicate<A>,
        A: Clone,
    {
        move |argument: A| {
            let left = self.apply(argument.clone());
            let right = other.apply(argument);
            left ^ right
        }
    }
}

impl<A, P> Predicate<A> for P where P: Function<A, Output = bool> {}

/// Creates a predicate that holds for values equal to `target`.
///
/// # Examples
///
/// ```
/// use fnkit::predicate::is_equal;
///
/// let is_answer = is_equal(42);
/// assert!(is_answer(42));
/// assert!(!is_answer(41));
/// ```
#[inline]
pub fn is_equal<T: PartialEq>(target: T) -> impl Fn(T) -> bool {
    move |value| value == target
}

/// Creates a predicate that always holds.
#[inline]
pub fn always_true<A>() -> impl Fn(A) -> bool {
    |_| true
}

/// Creates a predicate that never holds.
#[inline]
pub fn always_false<A>() -> impl Fn(A) -> bool {
    |_| false
}
