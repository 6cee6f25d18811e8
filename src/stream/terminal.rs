use super::source::Stream;
use crate::control::Either;

impl<A: 'static> Stream<A> {
    /// Materializes every element into a `Vec`.
    ///
    /// Never returns for an unbounded stream; bound it with `take` or
    /// `take_while` first.
    pub fn to_list(&self) -> Vec<A> {
        self.iter().collect()
    }

    /// Materializes every element into any collection.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::Stream;
    /// use std::collections::BTreeSet;
    ///
    /// let set: BTreeSet<i32> = Stream::of([3, 1, 3]).collect();
    /// assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3]);
    /// ```
    pub fn collect<C>(&self) -> C
    where
        C: FromIterator<A>,
    {
        self.iter().collect()
    }

    /// Counts the elements.
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Folds every element into an accumulator, left to right.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::stream::Stream;
    ///
    /// let sum = Stream::of([1, 2, 3, 4]).reduce(0, |acc, x| acc + x);
    /// assert_eq!(sum, 10);
    /// ```
    pub fn reduce<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.iter().fold(initial, function)
    }

    /// Alias for [`Stream::reduce`].
    pub fn fold_left<B, F>(&self, initial: B, function: F) -> B
    where
        F: FnMut(B, A) -> B,
    {
        self.reduce(initial, function)
    }

    /// Calls `action` on every element, in order.
    pub fn for_each<F>(&self, action: F)
    where
        F: FnMut(A),
    {
        self.iter().for_each(action);
    }

    /// Returns the first element satisfying `predicate`.
    ///
    /// A missing element is reported as `Left("No element found")`. Stops
    /// pulling at the first match.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rivulet::control::Either;
    /// use rivulet::stream::Stream;
    ///
    /// let numbers = Stream::range(1, None);
    /// assert_eq!(numbers.find(|n| n % 7 == 0), Either::right(7));
    ///
    /// let none = Stream::of([1, 3]).find(|n| n % 2 == 0);
    /// assert_eq!(none, Either::left("No element found".to_string()));
    /// ```
    pub fn find<P>(&self, mut predicate: P) -> Either<String, A>
    where
        P: FnMut(&A) -> bool,
    {
        self.iter()
            .find(|element| predicate(element))
            .map_or_else(|| Either::Left("No element found".to_string()), Either::Right)
    }

    /// Returns `true` if any element satisfies `predicate`.
    ///
    /// Short-circuits at the first match.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnMut(A) -> bool,
    {
        self.iter().any(predicate)
    }

    /// Returns `true` if every element satisfies `predicate`.
    ///
    /// An empty stream satisfies any predicate.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(A) -> bool,
    {
        self.iter().all(predicate)
    }
}
