//! # rivulet
//!
//! Composable computation wrappers with lawful monadic chaining.
//!
//! ## Overview
//!
//! Pipelines are described first and evaluated only when asked:
//!
//! - **Type Classes**: `Functor`, `Applicative`, `Monad` over the wrappers below
//! - **Either**: a resolved, two-variant value for typed failures
//! - **IO**: a deferred side effect, executed by `run`, with fault capture and retry
//! - **Stream**: a restartable, possibly infinite lazy sequence
//! - **Function Composition**: `compose!`, `pipe!`, `curry!`, `partial!` and a
//!   memoization cache
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type class traits (Functor, Monad, etc.)
//! - `control`: The `Either` wrapper
//! - `effect`: The `IO` wrapper and its file helpers
//! - `stream`: The lazy `Stream` wrapper
//! - `compose`: Function composition utilities
//! - `tracing`: Emit `tracing` events from retries, fault capture, file and
//!   console helpers and memoization, and enable `IO::instrument`
//! - `fxhash`: Use `rustc-hash` for the `Stream::distinct` seen-set and the
//!   `Memoized` cache
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! # #[cfg(all(feature = "effect", feature = "stream"))]
//! # {
//! use rivulet::prelude::*;
//!
//! let squares = Stream::range(1, None).map(|n| n * n).take(4);
//! assert_eq!(squares.to_list(), vec![1, 4, 9, 16]);
//! // Streams are restartable.
//! assert_eq!(squares.count(), 4);
//!
//! let total: IO<i64, String> = IO::pure(squares).map(|stream| stream.reduce(0, |a, b| a + b));
//! assert_eq!(total.run(), Ok(30));
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use rivulet::prelude::*;
/// ```
pub mod prelude {

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "effect")]
    pub use crate::effect::*;

    #[cfg(feature = "stream")]
    pub use crate::stream::*;

    #[cfg(feature = "compose")]
    pub use crate::compose::*;
}

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "effect")]
pub mod effect;

#[cfg(feature = "stream")]
pub mod stream;

#[cfg(feature = "compose")]
pub mod compose;
