use std::hash::Hash;
use std::rc::Rc;

use super::source::Stream;

#[cfg(feature = "fxhash")]
type SeenSet<A> = rustc_hash::FxHashSet<A>;
#[cfg(not(feature = "fxhash"))]
type SeenSet<A> = std::collections::HashSet<A>;

impl<A: 'static> Stream<A> {
    /// Applies `function` to every element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::Stream;
    ///
    /// let doubled = Stream::of([1, 2, 3]).map(|x| x * 2);
    /// assert_eq!(doubled.to_list(), vec![2, 4, 6]);
    /// ```
    pub fn map<B, F>(self, function: F) -> Stream<B>
    where
        F: Fn(A) -> B + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Stream::new(move || {
            let function = Rc::clone(&function);
            self.iter().map(move |element| function(element))
        })
    }

    /// Keeps the elements for which `predicate` holds.
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        Stream::new(move || {
            let predicate = Rc::clone(&predicate);
            self.iter().filter(move |element| predicate(element))
        })
    }

    /// Maps every element to a stream and concatenates the results.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::Stream;
    ///
    /// let pairs = Stream::of([1, 2]).flat_map(|x| Stream::of([x, x * 10]));
    /// assert_eq!(pairs.to_list(), vec![1, 10, 2, 20]);
    /// ```
    pub fn flat_map<B, F>(self, function: F) -> Stream<B>
    where
        F: Fn(A) -> Stream<B> + 'static,
        B: 'static,
    {
        let function = Rc::new(function);
        Stream::new(move || {
            let function = Rc::clone(&function);
            self.iter().flat_map(move |element| function(element))
        })
    }

    /// Alias for [`Stream::flat_map`].
    pub fn bind<B, F>(self, function: F) -> Stream<B>
    where
        F: Fn(A) -> Stream<B> + 'static,
        B: 'static,
    {
        self.flat_map(function)
    }

    /// Yields at most the first `count` elements.
    ///
    /// Elements past `count` are never pulled from upstream, which makes
    /// `take` the usual way to bound an infinite stream.
    pub fn take(self, count: usize) -> Self {
        Stream::new(move || self.iter().take(count))
    }

    /// Skips the first `count` elements.
    pub fn skip(self, count: usize) -> Self {
        Stream::new(move || self.iter().skip(count))
    }

    /// Yields elements while `predicate` holds, then stops.
    pub fn take_while<P>(self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        Stream::new(move || {
            let predicate = Rc::clone(&predicate);
            self.iter().take_while(move |element| predicate(element))
        })
    }

    /// Drops elements while `predicate` holds, then yields everything else.
    ///
    /// The predicate is not consulted again after it first returns `false`.
    pub fn drop_while<P>(self, predicate: P) -> Self
    where
        P: Fn(&A) -> bool + 'static,
    {
        let predicate = Rc::new(predicate);
        Stream::new(move || {
            let predicate = Rc::clone(&predicate);
            self.iter().skip_while(move |element| predicate(element))
        })
    }

    /// Removes repeated elements, keeping the first occurrence of each.
    ///
    /// Every distinct element seen so far is buffered for the rest of the
    /// traversal, so memory grows with the number of distinct values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::Stream;
    ///
    /// let unique = Stream::of([3, 1, 3, 2, 1]).distinct();
    /// assert_eq!(unique.to_list(), vec![3, 1, 2]);
    /// ```
    pub fn distinct(self) -> Self
    where
        A: Eq + Hash + Clone,
    {
        Stream::new(move || {
            let mut seen = SeenSet::default();
            self.iter().filter(move |element| seen.insert(element.clone()))
        })
    }

    /// Groups consecutive elements into vectors of `size`.
    ///
    /// The last chunk holds the remainder and may be shorter.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::Stream;
    ///
    /// let chunks = Stream::of([1, 2, 3, 4, 5]).chunk(2);
    /// assert_eq!(chunks.to_list(), vec![vec![1, 2], vec![3, 4], vec![5]]);
    /// ```
    pub fn chunk(self, size: usize) -> Stream<Vec<A>> {
        assert!(size >= 1, "chunk size must be at least 1");
        Stream::new(move || Chunks {
            inner: self.iter(),
            size,
        })
    }

    /// Pairs elements of both streams positionally, ending with the shorter.
    pub fn zip<B: 'static>(self, other: Stream<B>) -> Stream<(A, B)> {
        Stream::new(move || self.iter().zip(other.iter()))
    }

    /// Yields this stream's elements followed by `other`'s.
    pub fn concat(self, other: Self) -> Self {
        Stream::new(move || self.iter().chain(other.iter()))
    }
}

impl<I> Stream<I>
where
    I: IntoIterator + 'static,
    I::IntoIter: 'static,
    I::Item: 'static,
{
    /// Flattens a stream of iterables into a stream of their elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::Stream;
    ///
    /// let nested = Stream::of([vec![1, 2], vec![], vec![3]]);
    /// assert_eq!(nested.flatten().to_list(), vec![1, 2, 3]);
    /// ```
    pub fn flatten(self) -> Stream<I::Item> {
        Stream::new(move || self.iter().flatten())
    }
}

struct Chunks<I> {
    inner: I,
    size: usize,
}

impl<I: Iterator> Iterator for Chunks<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let chunk: Vec<I::Item> = self.inner.by_ref().take(self.size).collect();
        if chunk.is_empty() { None } else { Some(chunk) }
    }
}
