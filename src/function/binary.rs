//! The [`BiFunction`] trait for functions of two arguments.

use super::Function;

/// A type-erased [`BiFunction`].
pub type BoxedBiFunction<'a, A, B, C> = Box<dyn Fn(A, B) -> C + 'a>;

/// A function of two arguments.
///
/// Implemented for every `Fn(A, B) -> C`. Arguments are positional: a
/// `BiFunction<A, B>` is never implicitly reordered, use [`reversed`] to swap
/// them explicitly.
///
/// [`reversed`]: BiFunction::reversed
///
/// # Examples
///
/// ```rust
/// use fnkit::function::BiFunction;
///
/// let subtract = |minuend: i32, subtrahend: i32| minuend - subtrahend;
/// assert_eq!(subtract.apply(10, 3), 7);
///
/// let reversed = subtract.reversed();
/// assert_eq!(reversed(10, 3), -7);
/// ```
pub trait BiFunction<A, B> {
    /// The result type of the function.
    type Output;

    /// Applies the function to `first` and `second`.
    fn apply(&self, first: A, second: B) -> Self::Output;

    /// Returns a function that maps each argument through its own function
    /// before applying `self`.
    ///
    /// `before_first` is evaluated before `before_second`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::BiFunction;
    ///
    /// let concat = |left: String, right: String| format!("{left}{right}");
    /// let composed = concat.compose(
    ///     |value: i32| value.to_string(),
    ///     |flag: bool| if flag { "!".to_string() } else { "?".to_string() },
    /// );
    /// assert_eq!(composed(42, true), "42!");
    /// ```
    fn compose<Y, Z, G, H>(
        self,
        before_first: G,
        before_second: H,
    ) -> impl Fn(Y, Z) -> Self::Output
    where
        Self: Sized,
        G: Function<Y, Output = A>,
        H: Function<Z, Output = B>,
    {
        move |first, second| {
            let first = before_first.apply(first);
            let second = before_second.apply(second);
            self.apply(first, second)
        }
    }

    /// Returns a function that applies `self` and then maps the result
    /// through `after`.
    fn and_then<D, G>(self, after: G) -> impl Fn(A, B) -> D
    where
        Self: Sized,
        G: Function<Self::Output, Output = D>,
    {
        move |first, second| after.apply(self.apply(first, second))
    }

    /// Returns a function that applies `self` and discards the result.
    fn consume(self) -> impl Fn(A, B)
    where
        Self: Sized,
    {
        move |first, second| {
            let _ = self.apply(first, second);
        }
    }

    /// Erases the concrete type of the function.
    fn boxed<'a>(self) -> BoxedBiFunction<'a, A, B, Self::Output>
    where
        Self: Sized + 'a,
    {
        Box::new(move |first, second| self.apply(first, second))
    }

    /// Converts the function into a plain closure.
    fn into_fn(self) -> impl Fn(A, B) -> Self::Output
    where
        Self: Sized,
    {
        move |first, second| self.apply(first, second)
    }

    /// Returns a function taking the arguments in swapped order.
    ///
    /// `self.reversed()(b, a) == self(a, b)`.
    fn reversed(self) -> impl Fn(B, A) -> Self::Output
    where
        Self: Sized,
    {
        move |second, first| self.apply(first, second)
    }

    /// Fixes the first argument, yielding a function of the second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::BiFunction;
    ///
    /// let power = |base: i64, exponent: u32| base.pow(exponent);
    /// let power_of_two = power.apply_partially(2);
    /// assert_eq!(power_of_two(10), 1024);
    /// ```
    fn apply_partially(self, first: A) -> impl Fn(B) -> Self::Output
    where
        Self: Sized,
        A: Clone,
    {
        move |second| self.apply(first.clone(), second)
    }

    /// Fixes the second argument, yielding a function of the first.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fnkit::function::BiFunction;
    ///
    /// let power = |base: i64, exponent: u32| base.pow(exponent);
    /// let square = power.apply_partially_second(2);
    /// assert_eq!(square(9), 81);
    /// ```
    fn apply_partially_second(self, second: B) -> impl Fn(A) -> Self::Output
    where
        Self: Sized,
        B: Clone,
    {
        move |first| self.apply(first, second.clone())
    }
}

impl<A, B, C, F> BiFunction<A, B> for F
where
    F: Fn(A, B) -> C,
{
    type Output = C;

    #[inline]
    fn apply(&self, first: A, second: B) -> C {
        self(first, second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_compose_evaluates_arguments_in_order() {
        let calls = RefCell::new(Vec::new());
        let add = |left: i32, right: i32| {
            calls.borrow_mut().push("add");
            left + right
        };
        let first = |value: i32| {
            calls.borrow_mut().push("first");
            value * 10
        };
        let second = |value: i32| {
            calls.borrow_mut().push("second");
            value * 100
        };

        let composed = add.compose(first, second);
        assert_eq!(composed(1, 2), 210);
        assert_eq!(*calls.borrow(), vec!["first", "second", "add"]);
    }

    #[test]
    fn test_reversed_twice_is_original() {
        let divide = |numerator: i32, denominator: i32| numerator / denominator;
        let restored = divide.reversed().reversed();
        assert_eq!(restored(10, 2), divide(10, 2));
    }

    #[test]
    fn test_and_then_maps_result() {
        let multiply = |left: i32, right: i32| left * right;
        let describe = multiply.and_then(|product: i32| format!("product={product}"));
        assert_eq!(describe(6, 7), "product=42");
    }
}
