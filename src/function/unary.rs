//! The [`Function`] trait for functions of one argument.

/// A type-erased [`Function`].
///
/// Produced by [`Function::boxed`]. Useful for storing functions of different
/// concrete types in one collection, or returning them from branches.
pub type BoxedFunction<'a, A, B> = Box<dyn Fn(A) -> B + 'a>;

/// A function of one argument.
///
/// Every closure and function item implementing `Fn(A) -> B` is a
/// `Function<A, Output = B>` through a blanket implementation. Other types,
/// such as the memoizing wrappers, implement it directly, so the combinators
/// below work uniformly across both.
///
/// All combinators consume the receiver and return a new function; the
/// receiver is never mutated.
///
/// # Examples
///
/// ```rust
/// use fnkit::function::Function;
///
/// let length = |text: String| text.len();
/// assert_eq!(length.apply("hello".to_string()), 5);
///
/// let is_long = length.and_then(|size: usize| size > 3);
/// assert!(is_long("hello".to_string()));
/// assert!(!is_long("hi".to_string()));
/// ```
pub trait Function<A> {
    /// The result type of the function.
    type Output;

    /// Applies the function to `argument`.
    fn apply(&self, argument: A) -> Self::Output;

    /// Returns a function that first applies `before` and then `self`.
    ///
    /// `self.compose(before)(x) == self(before(x))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::Function;
    ///
    /// let to_string = |value: usize| value.to_string();
    /// let composed = to_string.compose(|text: String| text.len());
    /// assert_eq!(composed("four".to_string()), "4");
    /// ```
    fn compose<Z, G>(self, before: G) -> impl Fn(Z) -> Self::Output
    where
        Self: Sized,
        G: Function<Z, Output = A>,
    {
        move |argument| self.apply(before.apply(argument))
    }

    /// Returns a function that first applies `self` and then `after`.
    ///
    /// `self.and_then(after)(x) == after(self(x))`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::Function;
    ///
    /// let parse = |text: String| text.parse::<i32>().unwrap_or_default();
    /// let parse_and_double = parse.and_then(|value: i32| value * 2);
    /// assert_eq!(parse_and_double("21".to_string()), 42);
    /// ```
    fn and_then<C, G>(self, after: G) -> impl Fn(A) -> C
    where
        Self: Sized,
        G: Function<Self::Output, Output = C>,
    {
        move |argument| after.apply(self.apply(argument))
    }

    /// Returns a function that applies `self` and discards the result.
    ///
    /// Only the side effects of `self` remain observable.
    fn consume(self) -> impl Fn(A)
    where
        Self: Sized,
    {
        move |argument| {
            let _ = self.apply(argument);
        }
    }

    /// Erases the concrete type of the function.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::{BoxedFunction, Function};
    ///
    /// let functions: Vec<BoxedFunction<'_, i32, i32>> = vec![
    ///     (|x: i32| x + 1).boxed(),
    ///     (|x: i32| x * 10).boxed(),
    /// ];
    /// let results: Vec<i32> = functions.iter().map(|function| function(3)).collect();
    /// assert_eq!(results, vec![4, 30]);
    /// ```
    fn boxed<'a>(self) -> BoxedFunction<'a, A, Self::Output>
    where
        Self: Sized + 'a,
    {
        Box::new(move |argument| self.apply(argument))
    }

    /// Converts the function into a plain closure.
    ///
    /// Needed to hand a non-closure `Function` (for example a memoized
    /// wrapper) to APIs that expect `Fn`, such as iterator adapters.
    fn into_fn(self) -> impl Fn(A) -> Self::Output
    where
        Self: Sized,
    {
        move |argument| self.apply(argument)
    }
}

impl<A, B, F> Function<A> for F
where
    F: Fn(A) -> B,
{
    type Output = B;

    #[inline]
    fn apply(&self, argument: A) -> B {
        self(argument)
    }
}
