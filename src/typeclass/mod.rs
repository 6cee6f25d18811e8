//! Type class traits shared by every wrapper in the crate.
//!
//! - [`Functor`]: Mapping over wrapped values
//! - [`Applicative`]: Lifting pure values and applying wrapped functions
//! - [`Monad`]: Sequencing computations with dependency
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT).
//! [`TypeConstructor`] uses Generic Associated Types (GAT) to emulate them,
//! so `Either<L, _>`, `IO<_, E>` and `Stream<_>` can share one interface.
//!
//! ## Closure Bounds
//!
//! Every function argument is `Fn + 'static`. `IO` and `Stream` keep the
//! functions they are given and call them again on every `run` or
//! materialization, so a consumed-once `FnOnce` cannot describe them.
//!
//! # Examples
//!
//! ```rust
//! # #[cfg(feature = "effect")]
//! # {
//! use rivulet::typeclass::{Functor, Monad};
//! use rivulet::effect::IO;
//!
//! let io: IO<i32, String> = IO::pure(20);
//! let chained = Monad::flat_map::<i32, _>(io, |x| IO::pure(x + 1)).fmap(|x| x * 2);
//! assert_eq!(chained.run(), Ok(42));
//! # }
//! ```

mod applicative;
mod functor;
mod higher;
mod monad;

pub use applicative::Applicative;
pub use functor::Functor;
pub use higher::TypeConstructor;
pub use monad::Monad;
