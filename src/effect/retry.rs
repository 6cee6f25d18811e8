//! Bounded retry for IO actions.
//!
//! A [`RetryPolicy`] is pure data describing how often to re-run a failing
//! action and how long to wait in between. [`IO::retry`] and
//! [`IO::retry_with`] wrap an action in the retry loop; like every other
//! combinator, nothing runs until the returned action is run.

use std::time::Duration;

use super::io::IO;

/// How a failing [`IO`] is re-run.
///
/// `max_attempts` counts *total* invocations, including the first one, so a
/// policy with `max_attempts == 1` never re-runs anything.
///
/// # Examples
///
/// ```rust
/// use rivulet::effect::RetryPolicy;
/// use std::time::Duration;
///
/// let policy = RetryPolicy::new(4).with_delay(Duration::from_millis(10));
/// assert_eq!(policy.max_attempts(), 4);
/// assert_eq!(policy.delay(), Some(Duration::from_millis(10)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_attempts: u32,
    delay: Option<Duration>,
}

impl RetryPolicy {
    /// Creates a policy allowing `max_attempts` total invocations with no
    /// delay between them.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    pub fn new(max_attempts: u32) -> Self {
        assert!(max_attempts >= 1, "RetryPolicy requires max_attempts >= 1");
        Self {
            max_attempts,
            delay: None,
        }
    }

    /// Waits `delay` before every re-run.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Total number of invocations allowed.
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Delay between invocations, if any.
    pub const fn delay(&self) -> Option<Duration> {
        self.delay
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(3)
    }
}

impl<A: 'static, E: 'static> IO<A, E> {
    /// Re-runs the action while it raises, up to `max_attempts` total
    /// invocations.
    ///
    /// The first success is returned. When every attempt raises, the fault
    /// of the last attempt propagates; earlier faults are dropped.
    ///
    /// # Panics
    ///
    /// Panics if `max_attempts` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::effect::IO;
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    ///
    /// let calls = Rc::new(Cell::new(0));
    /// let counter = Rc::clone(&calls);
    /// let flaky: IO<&str, String> = IO::new(move || {
    ///     counter.set(counter.get() + 1);
    ///     if counter.get() < 3 { Err("not yet".to_string()) } else { Ok("done") }
    /// });
    ///
    /// assert_eq!(flaky.retry(5).run(), Ok("done"));
    /// assert_eq!(calls.get(), 3);
    /// ```
    pub fn retry(self, max_attempts: u32) -> Self {
        self.retry_with(RetryPolicy::new(max_attempts))
    }

    /// Re-runs the action according to `policy`.
    pub fn retry_with(self, policy: RetryPolicy) -> Self {
        IO::new(move || {
            let mut attempt = 1;
            loop {
                match self.run() {
                    Ok(value) => return Ok(value),
                    Err(fault) if attempt >= policy.max_attempts => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(attempts = attempt, "retries exhausted");
                        return Err(fault);
                    }
                    Err(_) => {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(
                            attempt,
                            max_attempts = policy.max_attempts,
                            "attempt failed, retrying"
                        );
                        if let Some(delay) = policy.delay {
                            std::thread::sleep(delay);
                        }
                        attempt += 1;
                    }
                }
            }
        })
    }
}
