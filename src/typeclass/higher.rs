//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust cannot abstract over a type constructor such as `Stream<_>` directly.
//! [`TypeConstructor`] names the constructor through a GAT so that
//! `Functor` and `Monad` can describe "the same wrapper around another type".
//!
//! # Example
//!
//! ```rust
//! # #[cfg(feature = "control")]
//! # {
//! use rivulet::typeclass::TypeConstructor;
//! use rivulet::control::Either;
//!
//! fn assert_inner<T: TypeConstructor<Inner = i32>>() {}
//! assert_inner::<Either<String, i32>>();
//! # }
//! ```

/// A trait representing a type constructor.
///
/// # Associated Types
///
/// - `Inner`: The type parameter that this type constructor is currently applied to.
/// - `WithType<B>`: The same type constructor applied to a different type `B`.
///
/// # Laws
///
/// `<F as TypeConstructor>::WithType<F::Inner>` must be `F` itself.
pub trait TypeConstructor {
    /// The inner type that this type constructor is applied to.
    ///
    /// For `Stream<i32>` this is `i32`; for `Either<String, i32>` it is the
    /// right-hand `i32`.
    type Inner;

    /// The same type constructor applied to a different type `B`.
    ///
    /// Any fixed parameters (the left type of `Either`, the fault type of
    /// `IO`) are carried over unchanged.
    type WithType<B>: TypeConstructor<Inner = B>;
}
