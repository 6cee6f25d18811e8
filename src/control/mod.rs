//! Control structures for modeled failure.
//!
//! - [`Either`]: A resolved value that is either a typed failure (`Left`)
//!   or a success (`Right`)
//!
//! `Either` is the value that crosses between the other wrappers:
//! [`IO::attempt`](crate::effect::IO::attempt) captures a raised fault into
//! `Either::Left`, and [`Stream::find`](crate::stream::Stream::find) reports
//! a missing element the same way.
//!
//! # Examples
//!
//! ```rust
//! use rivulet::control::Either;
//!
//! let total = Either::<String, i32>::right(2)
//!     .flat_map(|x| Either::right(x + 3))
//!     .map(|x| x * 10);
//! assert_eq!(total, Either::right(50));
//! ```

mod either;

pub use either::Either;
