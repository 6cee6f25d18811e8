//! Applicative type class - lifting pure values into a wrapper and applying
//! wrapped functions to wrapped values.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! pure(identity).apply(v) == v
//! ```
//!
//! ## Homomorphism Law
//!
//! ```text
//! pure(f).apply(pure(x)) == pure(f(x))
//! ```
//!
//! ## Interchange Law
//!
//! ```text
//! u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//! ```

use super::functor::Functor;

/// A type class for wrappers that can lift a plain value.
///
/// `pure` never performs an observable effect: `IO::pure` returns its value
/// on every run and `Stream::pure` yields it once per materialization. The
/// `Clone` bound is what makes that repetition possible.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "control")]
/// # {
/// use rivulet::typeclass::Applicative;
/// use rivulet::control::Either;
///
/// let lifted: Either<String, i32> = <Either<String, ()> as Applicative>::pure(42);
/// assert_eq!(lifted, Either::right(42));
/// # }
/// ```
pub trait Applicative: Functor {
    /// Lifts a pure value into the wrapper.
    fn pure<B>(value: B) -> Self::WithType<B>
    where
        B: Clone + 'static;

    /// Applies the wrapped function(s) to the value(s) in `other`.
    ///
    /// The function side is evaluated first. `Either` returns the first
    /// `Left` it meets, `IO` runs `self` then `other` on every run, and
    /// `Stream` pairs every function with every value, functions outermost.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "stream")]
    /// # {
    /// use rivulet::typeclass::Applicative;
    /// use rivulet::stream::Stream;
    ///
    /// let steps: [fn(i32) -> i32; 2] = [|x| x + 1, |x| x * 10];
    /// let applied = Stream::of(steps).apply::<i32, i32>(Stream::of([1, 2]));
    /// assert_eq!(applied.to_list(), vec![2, 3, 10, 20]);
    /// # }
    /// ```
    fn apply<B, Output>(self, other: Self::WithType<B>) -> Self::WithType<Output>
    where
        Self: Sized,
        Self::Inner: Fn(B) -> Output + 'static,
        B: 'static,
        Output: 'static;
}
