//! Function composition utilities.
//!
//! - [`compose!`]: Compose functions right-to-left
//! - [`pipe!`]: Thread a value through functions left-to-right
//! - [`curry!`]: Convert a function of 2 to 4 arguments into curried form
//! - [`partial!`]: Fix some arguments of a function, leaving `__` placeholders
//! - [`identity`], [`constant`], [`flip`], [`tap`]: Small combinators
//! - [`Memoized`]: A function paired with a cache it owns, bounded by a
//!   [`CachePolicy`]
//!
//! # Examples
//!
//! ```
//! use rivulet::{compose, curry, pipe};
//!
//! fn add(a: i32, b: i32) -> i32 { a + b }
//!
//! let add_ten = curry!(add, 2)(10);
//! let double = |x: i32| x * 2;
//!
//! // compose!(f, g)(x) = f(g(x))
//! assert_eq!(compose!(add_ten, double)(5), 20);
//!
//! // pipe!(x, f, g) = g(f(x))
//! let add_ten = curry!(add, 2)(10);
//! assert_eq!(pipe!(5, add_ten, double), 30);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == f == compose!(f, identity)`
//! - **Double Flip**: `flip(flip(f)) == f`

mod compose_macro;
mod curry_macro;
mod memoize;
mod partial_macro;
mod pipe_macro;
mod utils;

pub use memoize::{CachePolicy, Memoized};
pub use utils::{constant, flip, identity, tap};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::curry;
pub use crate::partial;
pub use crate::pipe;
