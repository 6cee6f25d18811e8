//! Either type - a resolved value that is one of two variants.
//!
//! `Either<L, R>` models expected, typed failures: `Left` carries the
//! failure (a validation message, a parse error) and `Right` carries the
//! success. It is right-biased: `map`, `flat_map` and friends operate on
//! `Right` and pass a `Left` through untouched.
//!
//! Unlike [`IO`](crate::effect::IO), an `Either` is already evaluated when it
//! is constructed.
//!
//! # Examples
//!
//! ```rust
//! use rivulet::control::Either;
//!
//! fn parse_port(input: &str) -> Either<String, u16> {
//!     input
//!         .parse::<u16>()
//!         .map_err(|error| format!("invalid port {input:?}: {error}"))
//!         .into()
//! }
//!
//! let port = parse_port("8080").map(|port| port + 1);
//! assert_eq!(port, Either::right(8081));
//!
//! let fallback = parse_port("http").get_or_else(80);
//! assert_eq!(fallback, 80);
//! ```

use std::fmt;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// By convention:
/// - `Left` represents a modeled failure
/// - `Right` represents success
///
/// # Monad Laws
///
/// 1. **Left Identity**: `Either::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(Either::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Either<L, R> {
    /// The failure variant.
    Left(L),
    /// The success variant.
    Right(R),
}

impl<L, R> Either<L, R> {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Creates a `Left` value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::control::Either;
    ///
    /// let failed: Either<&str, i32> = Either::left("boom");
    /// assert!(failed.is_left());
    /// ```
    #[inline]
    pub const fn left(error: L) -> Self {
        Self::Left(error)
    }

    /// Creates a `Right` value.
    #[inline]
    pub const fn right(value: R) -> Self {
        Self::Right(value)
    }

    /// Lifts a value into `Right`. Same as [`Either::right`].
    #[inline]
    pub const fn pure(value: R) -> Self {
        Self::Right(value)
    }

    // =========================================================================
    // Type Checking
    // =========================================================================

    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    // =========================================================================
    // Value Extraction
    // =========================================================================

    /// Converts into `Option<L>`, discarding a `Right`.
    #[inline]
    pub fn into_left(self) -> Option<L> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Converts into `Option<R>`, discarding a `Left`.
    #[inline]
    pub fn into_right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns a reference to the left value if present.
    #[inline]
    pub const fn left_ref(&self) -> Option<&L> {
        match self {
            Self::Left(error) => Some(error),
            Self::Right(_) => None,
        }
    }

    /// Returns a reference to the right value if present.
    #[inline]
    pub const fn right_ref(&self) -> Option<&R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Returns the right value, or `default` for a `Left`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::control::Either;
    ///
    /// assert_eq!(Either::<&str, i32>::right(3).get_or_else(0), 3);
    /// assert_eq!(Either::<&str, i32>::left("nope").get_or_else(0), 0);
    /// ```
    #[inline]
    pub fn get_or_else(self, default: R) -> R {
        match self {
            Self::Left(_) => default,
            Self::Right(value) => value,
        }
    }

    // =========================================================================
    // Mapping Operations
    // =========================================================================

    /// Transforms the right value; a `Left` passes through unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::control::Either;
    ///
    /// let doubled = Either::<String, i32>::right(21).map(|x| x * 2);
    /// assert_eq!(doubled, Either::right(42));
    ///
    /// let untouched = Either::<String, i32>::left("bad".into()).map(|x| x * 2);
    /// assert_eq!(untouched, Either::left("bad".to_string()));
    /// ```
    #[inline]
    pub fn map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Transforms the left value; a `Right` passes through unchanged.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(error) => Either::Left(function(error)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// A `Left` short-circuits: `function` is not called.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::control::Either;
    ///
    /// fn half(n: i32) -> Either<String, i32> {
    ///     if n % 2 == 0 { Either::right(n / 2) } else { Either::left(format!("{n} is odd")) }
    /// }
    ///
    /// assert_eq!(Either::right(8).flat_map(half).flat_map(half), Either::right(2));
    /// assert_eq!(Either::right(6).flat_map(half).flat_map(half), Either::left("3 is odd".to_string()));
    /// ```
    #[inline]
    pub fn flat_map<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        match self {
            Self::Left(error) => Either::Left(error),
            Self::Right(value) => function(value),
        }
    }

    /// Alias for [`Either::flat_map`].
    #[inline]
    pub fn bind<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> Either<L, T>,
    {
        self.flat_map(function)
    }

    // =========================================================================
    // Recovery
    // =========================================================================

    /// Returns `self` if it is `Right`, otherwise `alternative`.
    #[inline]
    pub fn or_else(self, alternative: Self) -> Self {
        match self {
            Self::Left(_) => alternative,
            right @ Self::Right(_) => right,
        }
    }

    /// Turns a `Left` into a `Right` by computing a value from the error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::control::Either;
    ///
    /// let recovered = Either::<String, usize>::left("oops".into()).recover(|error| error.len());
    /// assert_eq!(recovered, Either::right(4));
    /// ```
    #[inline]
    pub fn recover<F>(self, function: F) -> Self
    where
        F: FnOnce(L) -> R,
    {
        match self {
            Self::Left(error) => Self::Right(function(error)),
            right @ Self::Right(_) => right,
        }
    }

    // =========================================================================
    // Fold and Swap
    // =========================================================================

    /// Collapses both variants into a single value.
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(error) => left_function(error),
            Self::Right(value) => right_function(value),
        }
    }

    /// Swaps the variants.
    #[inline]
    pub fn swap(self) -> Either<R, L> {
        match self {
            Self::Left(error) => Either::Right(error),
            Self::Right(value) => Either::Left(value),
        }
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<L, R> TypeConstructor for Either<L, R> {
    type Inner = R;
    type WithType<B> = Either<L, B>;
}

impl<L, R> Functor for Either<L, R> {
    #[inline]
    fn fmap<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<L, R> Applicative for Either<L, R> {
    #[inline]
    fn pure<B>(value: B) -> Either<L, B>
    where
        B: Clone + 'static,
    {
        Either::Right(value)
    }

    fn apply<B, Output>(self, other: Either<L, B>) -> Either<L, Output>
    where
        R: Fn(B) -> Output + 'static,
        B: 'static,
        Output: 'static,
    {
        match (self, other) {
            (Self::Right(function), Either::Right(value)) => Either::Right(function(value)),
            (Self::Left(error), _) | (_, Either::Left(error)) => Either::Left(error),
        }
    }
}

impl<L, R> Monad for Either<L, R> {
    #[inline]
    fn flat_map<B, F>(self, function: F) -> Either<L, B>
    where
        F: Fn(R) -> Either<L, B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}

// =============================================================================
// Formatting
// =============================================================================

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => formatter.debug_tuple("Left").field(error).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(error) => write!(formatter, "Left({error})"),
            Self::Right(value) => write!(formatter, "Right({value})"),
        }
    }
}

// =============================================================================
// From Implementations
// =============================================================================

impl<L, R> From<Result<R, L>> for Either<L, R> {
    #[inline]
    fn from(result: Result<R, L>) -> Self {
        match result {
            Ok(value) => Self::Right(value),
            Err(error) => Self::Left(error),
        }
    }
}

impl<L, R> From<Either<L, R>> for Result<R, L> {
    #[inline]
    fn from(either: Either<L, R>) -> Self {
        match either {
            Either::Left(error) => Err(error),
            Either::Right(value) => Ok(value),
        }
    }
}
