//! Restartable lazy sequences.
//!
//! A [`Stream`] is built from a source factory and a chain of
//! transformations. Nothing is evaluated until a terminal operation such as
//! [`Stream::to_list`] or [`Stream::reduce`] pulls elements, and every
//! terminal operation starts again from a fresh source.
//!
//! - Construction: `new`, `empty`, `pure`, `of`, `from_iterable`, `range`,
//!   `range_step`, `repeat`
//! - Transformation: `map`, `filter`, `flat_map`, `take`, `skip`,
//!   `take_while`, `drop_while`, `distinct`, `chunk`, `zip`, `concat`,
//!   `flatten`
//! - Terminal: `iter`, `to_list`, `collect`, `count`, `reduce`, `for_each`,
//!   `find`, `exists`, `all`
//!
//! # Infinite Streams
//!
//! Unbounded sources are fine as long as the chain bounds them before a
//! terminal operation materializes everything:
//!
//! ```rust
//! use rivulet::stream::Stream;
//!
//! let primes = Stream::range(2, None)
//!     .filter(|n| (2..*n).take_while(|d| d * d <= *n).all(|d| n % d != 0))
//!     .take(5);
//!
//! assert_eq!(primes.to_list(), vec![2, 3, 5, 7, 11]);
//! ```
//!
//! With the `fxhash` feature, `distinct` buffers seen elements in an
//! `FxHashSet` instead of the default `HashSet`.

mod source;
mod terminal;
mod transform;

pub use source::Stream;
