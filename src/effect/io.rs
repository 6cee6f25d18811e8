//! IO - deferred, re-runnable side effects.
//!
//! An `IO<A, E>` *describes* a computation that may perform side effects and
//! either produces an `A` or raises a fault `E`. Nothing happens until
//! [`IO::run`] is called, and every call to `run` executes the whole
//! description again from scratch.
//!
//! # Design Philosophy
//!
//! Building a chain (`fmap`, `flat_map`, `attempt`, `retry`, ...) only wraps
//! the previous action in a new one. Execution happens only via `run`, which
//! should be called at the program's edge.
//!
//! # Examples
//!
//! ```rust
//! use rivulet::effect::IO;
//!
//! let io: IO<i32, String> = IO::pure(10)
//!     .fmap(|x| x * 2)
//!     .flat_map(|x| IO::pure(x + 1));
//! assert_eq!(io.run(), Ok(21));
//! ```
//!
//! # Side Effect Deferral
//!
//! ```rust
//! use rivulet::effect::IO;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let runs = Rc::new(Cell::new(0));
//! let counter = Rc::clone(&runs);
//!
//! let io: IO<i32, String> = IO::from_fn(move || {
//!     counter.set(counter.get() + 1);
//!     counter.get()
//! });
//!
//! // Not executed yet
//! assert_eq!(runs.get(), 0);
//!
//! // Each run executes the action again
//! assert_eq!(io.run(), Ok(1));
//! assert_eq!(io.run(), Ok(2));
//! ```

use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use super::error::Fault;
use crate::control::Either;
use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

type Action<A, E> = Rc<dyn Fn() -> Result<A, E>>;

/// A monad representing deferred, re-runnable side effects.
///
/// # Type Parameters
///
/// - `A`: The value produced by a successful run.
/// - `E`: The fault raised by a failed run. Defaults to [`Fault`].
///
/// # Monad Laws
///
/// Two `IO`s are equal when running them produces equal results.
///
/// 1. **Left Identity**: `IO::pure(a).flat_map(f) == f(a)`
/// 2. **Right Identity**: `m.flat_map(IO::pure) == m`
/// 3. **Associativity**: `m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))`
pub struct IO<A, E = Fault> {
    /// The wrapped computation.
    run_io: Action<A, E>,
}

static_assertions::assert_not_impl_any!(IO<i32>: Send, Sync);

impl<A, E> Clone for IO<A, E> {
    fn clone(&self) -> Self {
        Self {
            run_io: Rc::clone(&self.run_io),
        }
    }
}

impl<A, E> fmt::Debug for IO<A, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("IO(<effect>)")
    }
}

impl<A: 'static, E: 'static> IO<A, E> {
    /// Creates a new IO action from a fallible closure.
    ///
    /// Returning `Err` raises a fault. The closure is not called until
    /// [`IO::run`], and is called again on every run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::effect::IO;
    ///
    /// let parse: IO<i32, String> = IO::new(|| "42".parse::<i32>().map_err(|e| e.to_string()));
    /// assert_eq!(parse.run(), Ok(42));
    /// ```
    pub fn new<F>(action: F) -> Self
    where
        F: Fn() -> Result<A, E> + 'static,
    {
        Self {
            run_io: Rc::new(action),
        }
    }

    /// Creates an IO action from a closure that cannot raise.
    pub fn from_fn<F>(action: F) -> Self
    where
        F: Fn() -> A + 'static,
    {
        Self::new(move || Ok(action()))
    }

    /// Wraps a pure value in an IO action.
    ///
    /// Running it returns a clone of `value` and performs no side effect.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || Ok(value.clone()))
    }

    /// Creates an IO action that always raises `error`.
    pub fn fail(error: E) -> Self
    where
        E: Clone,
    {
        Self::new(move || Err(error.clone()))
    }

    /// Executes the IO action now.
    ///
    /// This is the only operation through which side effects happen. Calling
    /// it twice executes the described computation twice.
    ///
    /// # Errors
    ///
    /// Returns the fault raised by the first failing step of the chain.
    pub fn run(&self) -> Result<A, E> {
        (self.run_io)()
    }

    /// Transforms the result of an IO action using a function.
    ///
    /// This is the `fmap` operation from Functor.
    pub fn fmap<B, F>(self, function: F) -> IO<B, E>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        IO::new(move || self.run().map(&function))
    }

    /// Alias for [`IO::fmap`].
    pub fn map<B, F>(self, function: F) -> IO<B, E>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.fmap(function)
    }

    /// Chains IO actions, passing the result of the first to a function
    /// that produces the second.
    ///
    /// The first action runs to completion before `function` is called; a
    /// fault from the first action skips the rest of the chain.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::effect::IO;
    ///
    /// let io: IO<i32, String> = IO::pure(10).flat_map(|x| IO::pure(x * 2));
    /// assert_eq!(io.run(), Ok(20));
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> IO<B, E>
    where
        F: Fn(A) -> IO<B, E> + 'static,
        B: 'static,
    {
        IO::new(move || {
            let value = self.run()?;
            function(value).run()
        })
    }

    /// Alias for [`IO::flat_map`].
    pub fn bind<B, F>(self, function: F) -> IO<B, E>
    where
        F: Fn(A) -> IO<B, E> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Alias for [`IO::flat_map`].
    pub fn and_then<B, F>(self, function: F) -> IO<B, E>
    where
        F: Fn(A) -> IO<B, E> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Sequences two IO actions, discarding the result of the first.
    ///
    /// The first action is still executed for its side effects.
    pub fn then<B>(self, next: IO<B, E>) -> IO<B, E>
    where
        B: 'static,
    {
        self.flat_map(move |_| next.clone())
    }

    /// Runs both actions in order and combines their results.
    pub fn map2<B, C, F>(self, other: IO<B, E>, function: F) -> IO<C, E>
    where
        F: Fn(A, B) -> C + 'static,
        B: 'static,
        C: 'static,
    {
        IO::new(move || {
            let first = self.run()?;
            let second = other.run()?;
            Ok(function(first, second))
        })
    }

    /// Runs both actions in order and pairs their results.
    pub fn product<B>(self, other: IO<B, E>) -> IO<(A, B), E>
    where
        B: 'static,
    {
        self.map2(other, |first, second| (first, second))
    }

    /// Converts the fault type.
    pub fn map_err<E2, F>(self, function: F) -> IO<A, E2>
    where
        F: Fn(E) -> E2 + 'static,
        E2: 'static,
    {
        IO::new(move || self.run().map_err(&function))
    }

    // =========================================================================
    // Fault Handling
    // =========================================================================

    /// Captures a raised fault into `Either::Left`.
    ///
    /// Running the returned action never returns `Err`: a success becomes
    /// `Either::Right(value)` and a fault becomes `Either::Left(fault)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::control::Either;
    /// use rivulet::effect::IO;
    ///
    /// let failing: IO<i32, String> = IO::fail("boom".to_string());
    /// assert_eq!(failing.attempt().run(), Ok(Either::left("boom".to_string())));
    /// ```
    pub fn attempt(self) -> IO<Either<E, A>, E> {
        IO::new(move || {
            Ok(match self.run() {
                Ok(value) => Either::Right(value),
                Err(fault) => {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(
                        fault_type = std::any::type_name::<E>(),
                        "effect raised a fault; captured by attempt"
                    );
                    Either::Left(fault)
                }
            })
        })
    }

    /// Computes a replacement value from a raised fault instead of
    /// propagating it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::effect::IO;
    ///
    /// let failing: IO<usize, String> = IO::fail("oops".to_string());
    /// assert_eq!(failing.recover(|fault| fault.len()).run(), Ok(4));
    /// ```
    pub fn recover<F>(self, handler: F) -> Self
    where
        F: Fn(E) -> A + 'static,
    {
        IO::new(move || Ok(self.run().unwrap_or_else(&handler)))
    }

    // =========================================================================
    // Collections of Effects
    // =========================================================================

    /// Runs each action in order and collects their results.
    ///
    /// The first fault stops the sequence; later actions are not run.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::effect::IO;
    ///
    /// let all: IO<Vec<i32>, String> = IO::sequence(vec![IO::pure(1), IO::pure(2), IO::pure(3)]);
    /// assert_eq!(all.run(), Ok(vec![1, 2, 3]));
    /// ```
    pub fn sequence<I>(effects: I) -> IO<Vec<A>, E>
    where
        I: IntoIterator<Item = Self>,
    {
        let effects: Vec<Self> = effects.into_iter().collect();
        IO::new(move || effects.iter().map(Self::run).collect())
    }

    /// Maps every item to an action, then sequences the actions.
    ///
    /// Equivalent to `IO::sequence(items.into_iter().map(function))`.
    pub fn traverse<T, I, F>(items: I, function: F) -> IO<Vec<A>, E>
    where
        I: IntoIterator<Item = T>,
        F: FnMut(T) -> Self,
    {
        Self::sequence(items.into_iter().map(function))
    }

    /// Enters `span` for the duration of every run.
    #[cfg(feature = "tracing")]
    pub fn instrument(self, span: tracing::Span) -> Self {
        IO::new(move || {
            let _entered = span.enter();
            self.run()
        })
    }
}

// =============================================================================
// Convenience Constructors
// =============================================================================

impl<E: 'static> IO<(), E> {
    /// Creates an IO action that prints a line to standard output.
    ///
    /// The output is not printed until `run` is called.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use rivulet::effect::IO;
    ///
    /// let io: IO<(), String> = IO::print_line("Hello, World!");
    /// io.run().unwrap(); // Prints "Hello, World!"
    /// ```
    pub fn print_line<S: fmt::Display + 'static>(message: S) -> Self {
        IO::from_fn(move || {
            println!("{message}");
        })
    }

    /// Creates an IO action that blocks the current thread for `duration`.
    pub fn delay(duration: Duration) -> Self {
        IO::from_fn(move || {
            std::thread::sleep(duration);
        })
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A, E> TypeConstructor for IO<A, E> {
    type Inner = A;
    type WithType<B> = IO<B, E>;
}

impl<A: 'static, E: 'static> Functor for IO<A, E> {
    fn fmap<B, F>(self, function: F) -> IO<B, E>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        Self::fmap(self, function)
    }
}

impl<A: 'static, E: 'static> Applicative for IO<A, E> {
    fn pure<B>(value: B) -> IO<B, E>
    where
        B: Clone + 'static,
    {
        IO::new(move || Ok(value.clone()))
    }

    fn apply<B, Output>(self, other: IO<B, E>) -> IO<Output, E>
    where
        A: Fn(B) -> Output + 'static,
        B: 'static,
        Output: 'static,
    {
        self.map2(other, |function, value| function(value))
    }
}

impl<A: 'static, E: 'static> Monad for IO<A, E> {
    fn flat_map<B, F>(self, function: F) -> IO<B, E>
    where
        F: Fn(A) -> IO<B, E> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}
