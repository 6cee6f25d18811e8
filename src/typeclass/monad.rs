//! Monad type class - sequencing computations within a wrapper.
//!
//! A `Monad` lets the result of one step decide the next step. For the
//! wrappers in this crate that means:
//!
//! - `Either`: continue with the right value, or short-circuit on `Left`
//! - `IO`: run the first effect, then build and run the second
//! - `Stream`: expand every element into a sub-stream and concatenate
//!
//! # Laws
//!
//! ## Left Identity Law
//!
//! ```text
//! Self::pure(a).flat_map(f) == f(a)
//! ```
//!
//! ## Right Identity Law
//!
//! ```text
//! m.flat_map(Self::pure) == m
//! ```
//!
//! ## Associativity Law
//!
//! ```text
//! m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//! ```
//!
//! # Examples
//!
//! Code that only needs chaining can be generic over the wrapper:
//!
//! ```rust
//! # #[cfg(all(feature = "control", feature = "stream"))]
//! # {
//! use rivulet::typeclass::{Monad, TypeConstructor};
//! use rivulet::control::Either;
//! use rivulet::stream::Stream;
//!
//! fn add_then_double<M>(m: M, lift: fn(i32) -> M) -> M
//! where
//!     M: Monad<Inner = i32> + TypeConstructor<WithType<i32> = M> + 'static,
//! {
//!     m.flat_map::<i32, _>(move |x| lift(x + 1)).fmap::<i32, _>(|x| x * 2)
//! }
//!
//! let either = add_then_double(Either::<String, i32>::right(4), Either::right);
//! assert_eq!(either, Either::right(10));
//!
//! let stream = add_then_double(Stream::of([1, 2]), Stream::pure);
//! assert_eq!(stream.to_list(), vec![4, 6]);
//! # }
//! ```

use super::applicative::Applicative;

/// A type class for wrappers that support dependent sequencing.
///
/// # Laws
///
/// ## Left Identity Law
///
/// ```text
/// Self::pure(a).flat_map(f) == f(a)
/// ```
///
/// ## Right Identity Law
///
/// ```text
/// m.flat_map(Self::pure) == m
/// ```
///
/// ## Associativity Law
///
/// ```text
/// m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
/// ```
pub trait Monad: Applicative {
    /// Applies a function returning a wrapper and flattens the result.
    ///
    /// In Haskell this is `>>=` (bind).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "stream")]
    /// # {
    /// use rivulet::typeclass::Monad;
    /// use rivulet::stream::Stream;
    ///
    /// let expanded = Monad::flat_map::<i32, _>(Stream::of([1, 2]), |n| Stream::of([n, n * 10]));
    /// assert_eq!(expanded.to_list(), vec![1, 10, 2, 20]);
    /// # }
    /// ```
    fn flat_map<B, F>(self, function: F) -> Self::WithType<B>
    where
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static;

    /// Alias for `flat_map` to match Rust's naming conventions.
    #[inline]
    fn and_then<B, F>(self, function: F) -> Self::WithType<B>
    where
        Self: Sized,
        F: Fn(Self::Inner) -> Self::WithType<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two computations, discarding the first result.
    ///
    /// In Haskell, this is the `>>` operator. A short-circuiting `self`
    /// (a `Left`, a failing `IO`, an empty `Stream`) stops the sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # #[cfg(feature = "stream")]
    /// # {
    /// use rivulet::typeclass::Monad;
    /// use rivulet::stream::Stream;
    ///
    /// let repeated = Monad::then::<&str>(Stream::of([1, 2, 3]), Stream::of(["x"]));
    /// assert_eq!(repeated.to_list(), vec!["x", "x", "x"]);
    /// # }
    /// ```
    fn then<B>(self, next: Self::WithType<B>) -> Self::WithType<B>
    where
        Self: Sized,
        Self::WithType<B>: Clone + 'static,
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }
}
