//! Functor type class - mapping over values inside a wrapper.
//!
//! # Laws
//!
//! ## Identity Law
//!
//! ```text
//! fa.fmap(|x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! fa.fmap(f).fmap(g) == fa.fmap(|x| g(f(x)))
//! ```
//!
//! Equality is observational: `Either` values compare directly, an `IO` is
//! compared by its `run` result and a `Stream` by its `to_list`.

use super::higher::TypeConstructor;

/// A type class for wrappers whose contents can be transformed.
///
/// The mapping function is `Fn + 'static` rather than `FnOnce`: a `Stream`
/// applies it to every element of every materialization, and an `IO` applies
/// it on every `run`.
///
/// # Examples
///
/// ```rust
/// # #[cfg(feature = "stream")]
/// # {
/// use rivulet::typeclass::Functor;
/// use rivulet::stream::Stream;
///
/// let doubled = Stream::of([1, 2, 3]).fmap(|x| x * 2);
/// assert_eq!(doubled.to_list(), vec![2, 4, 6]);
/// # }
/// ```
pub trait Functor: TypeConstructor {
    /// Applies a function to the value(s) inside the wrapper.
    ///
    /// Deferred wrappers only record the function; nothing runs until the
    /// wrapper is evaluated.
    fn fmap<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> B + 'static,
        B: 'static;

    /// Replaces the inner value(s) with a constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "control")]
    /// # {
    /// use rivulet::typeclass::Functor;
    /// use rivulet::control::Either;
    ///
    /// let replaced = Either::<String, i32>::right(1).replace("done");
    /// assert_eq!(replaced, Either::right("done"));
    /// # }
    /// ```
    fn replace<B>(self, value: B) -> Self::WithType<B>
    where
        Self: Sized,
        B: Clone + 'static,
    {
        self.fmap(move |_| value.clone())
    }

    /// Discards the inner value(s), keeping only the structure.
    fn void(self) -> Self::WithType<()>
    where
        Self: Sized,
    {
        self.fmap(|_| ())
    }
}
