//! Deferred side effects.
//!
//! - [`IO`]: A description of a computation that may perform side effects
//!   and may raise a fault
//! - [`Fault`]: The default fault type
//! - [`RetryPolicy`]: How a failing action is re-run
//!
//! # IO Monad
//!
//! Side effects are deferred until `run` is called, and every call to `run`
//! executes the description again.
//!
//! ```rust
//! use rivulet::effect::IO;
//!
//! let io: IO<i32, String> = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//!
//! assert_eq!(io.run(), Ok(21));
//! ```
//!
//! # Fault Handling
//!
//! A fault is an `Err` returned by the wrapped function. It propagates out of
//! `run` unless it is captured with [`IO::attempt`], replaced with
//! [`IO::recover`], or retried with [`IO::retry`].
//!
//! ```rust
//! use rivulet::control::Either;
//! use rivulet::effect::IO;
//!
//! let failing: IO<i32, String> = IO::fail("unreachable host".to_string());
//! let captured = failing.clone().attempt().run();
//! assert_eq!(captured, Ok(Either::left("unreachable host".to_string())));
//!
//! let recovered = failing.recover(|_| 0).run();
//! assert_eq!(recovered, Ok(0));
//! ```
//!
//! # Tracing
//!
//! With the `tracing` feature, `retry` logs failed attempts, `attempt` logs
//! captured faults, file and console helpers log their accesses, and
//! [`IO::instrument`] runs an action inside a span.
//!
//! # Console
//!
//! [`IO::print_line`] writes a line; [`IO::read_line`] and [`IO::prompt`]
//! read one. Console failures, including end of input, become
//! [`Fault::Console`].

mod console;
mod error;
mod fs;
mod io;
mod retry;

pub use error::Fault;
pub use io::IO;
pub use retry::RetryPolicy;
