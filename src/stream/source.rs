use std::fmt;
use std::iter;
use std::rc::Rc;

use crate::typeclass::{Applicative, Functor, Monad, TypeConstructor};

type Source<A> = Rc<dyn Fn() -> Box<dyn Iterator<Item = A>>>;

/// A restartable, lazily evaluated sequence.
///
/// A `Stream` holds a *source factory* rather than elements. Every terminal
/// operation calls the factory to obtain a fresh cursor, so the same stream
/// can be consumed any number of times and always yields the same elements
/// (provided the factory itself is deterministic).
///
/// Transformations consume the stream and return a new one that wraps the
/// previous factory; no element is produced until a terminal operation pulls
/// it.
///
/// # Examples
///
/// ```rust
/// use rivulet::stream::Stream;
///
/// let evens = Stream::range(0, None).filter(|n| n % 2 == 0).take(3);
///
/// assert_eq!(evens.to_list(), vec![0, 2, 4]);
/// assert_eq!(evens.to_list(), vec![0, 2, 4]);
/// ```
pub struct Stream<A> {
    source: Source<A>,
}

static_assertions::assert_not_impl_any!(Stream<i32>: Send, Sync);

impl<A> Clone for Stream<A> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
        }
    }
}

impl<A> fmt::Debug for Stream<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Stream(<lazy>)")
    }
}

impl<A: 'static> Stream<A> {
    /// Creates a stream from a factory producing a fresh iterator per call.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::Stream;
    ///
    /// let letters = Stream::new(|| "abc".chars());
    /// assert_eq!(letters.collect::<String>(), "abc");
    /// ```
    pub fn new<F, I>(factory: F) -> Self
    where
        F: Fn() -> I + 'static,
        I: Iterator<Item = A> + 'static,
    {
        Self {
            source: Rc::new(move || Box::new(factory())),
        }
    }

    /// Creates a stream with no elements.
    pub fn empty() -> Self {
        Self::new(iter::empty)
    }

    /// Creates a stream with exactly one element.
    pub fn pure(value: A) -> Self
    where
        A: Clone,
    {
        Self::new(move || iter::once(value.clone()))
    }

    /// Creates a stream over the given values, in order.
    ///
    /// The values are collected once; each traversal yields clones.
    pub fn of<I>(values: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Clone,
    {
        let values: Vec<A> = values.into_iter().collect();
        Self::new(move || values.clone().into_iter())
    }

    /// Creates a stream from a re-iterable collection.
    ///
    /// Each traversal iterates a clone of `iterable`, so ranges, vectors and
    /// other cheap-to-clone collections all restart from the beginning.
    pub fn from_iterable<I>(iterable: I) -> Self
    where
        I: IntoIterator<Item = A> + Clone + 'static,
        I::IntoIter: 'static,
    {
        Self::new(move || iterable.clone().into_iter())
    }

    /// Repeats `value`, `times` times or forever when `times` is `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::Stream;
    ///
    /// assert_eq!(Stream::repeat('x', Some(3)).to_list(), vec!['x', 'x', 'x']);
    /// assert_eq!(Stream::repeat(0, None).take(2).to_list(), vec![0, 0]);
    /// ```
    pub fn repeat(value: A, times: impl Into<Option<usize>>) -> Self
    where
        A: Clone,
    {
        match times.into() {
            Some(times) => Self::new(move || iter::repeat_n(value.clone(), times)),
            None => Self::new(move || iter::repeat(value.clone())),
        }
    }

    /// Returns a fresh cursor over the stream's elements.
    pub fn iter(&self) -> Box<dyn Iterator<Item = A>> {
        (self.source)()
    }
}

impl Stream<i64> {
    /// Counts up from `start` by one, stopping before `stop` if given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::Stream;
    ///
    /// assert_eq!(Stream::range(2, Some(5)).to_list(), vec![2, 3, 4]);
    /// assert_eq!(Stream::range(0, None).take(3).to_list(), vec![0, 1, 2]);
    /// ```
    pub fn range(start: i64, stop: impl Into<Option<i64>>) -> Self {
        Self::range_step(start, stop, 1)
    }

    /// Counts from `start` by `step`, stopping before `stop` if given.
    ///
    /// Without a stop the stream is unbounded in the direction of `step`; it
    /// ends rather than overflow `i64`.
    ///
    /// # Panics
    ///
    /// Panics if `step` is zero and a `stop` is given.
    pub fn range_step(start: i64, stop: impl Into<Option<i64>>, step: i64) -> Self {
        let counter = move || iter::successors(Some(start), move |n: &i64| n.checked_add(step));
        match stop.into() {
            Some(stop) => {
                assert!(step != 0, "range_step requires a non-zero step when a stop is given");
                Self::new(move || {
                    counter().take_while(move |n| if step > 0 { *n < stop } else { *n > stop })
                })
            }
            None => Self::new(counter),
        }
    }
}

impl<A: 'static> IntoIterator for &Stream<A> {
    type Item = A;
    type IntoIter = Box<dyn Iterator<Item = A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<A: 'static> IntoIterator for Stream<A> {
    type Item = A;
    type IntoIter = Box<dyn Iterator<Item = A>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Type Class Implementations
// =============================================================================

impl<A> TypeConstructor for Stream<A> {
    type Inner = A;
    type WithType<B> = Stream<B>;
}

impl<A: 'static> Functor for Stream<A> {
    fn fmap<B, F>(self, function: F) -> Stream<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        self.map(function)
    }
}

impl<A: 'static> Applicative for Stream<A> {
    fn pure<B>(value: B) -> Stream<B>
    where
        B: Clone + 'static,
    {
        Stream::<B>::new(move || iter::once(value.clone()))
    }

    fn apply<B, Output>(self, other: Stream<B>) -> Stream<Output>
    where
        A: Fn(B) -> Output + 'static,
        B: 'static,
        Output: 'static,
    {
        Self::flat_map(self, move |function| {
            other.clone().map(move |value| function(value))
        })
    }
}

impl<A: 'static> Monad for Stream<A> {
    fn flat_map<B, F>(self, function: F) -> Stream<B>
    where
        F: Fn(A) -> Stream<B> + 'static,
        B: 'static,
    {
        Self::flat_map(self, function)
    }
}
