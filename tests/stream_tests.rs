//! Integration tests for the lazy `Stream` wrapper.
//!
//! Focuses on laziness, restartability and the behavior of pipelines built
//! from several transformations, including over infinite sources.

#![cfg(feature = "stream")]

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use proptest::prelude::*;
use rivulet::control::Either;
use rivulet::stream::Stream;
use rstest::rstest;

/// A bounded source that counts how many elements were pulled from it.
fn metered(limit: i32, pulls: &Rc<Cell<usize>>) -> Stream<i32> {
    let pulls = Rc::clone(pulls);
    Stream::new(move || {
        let pulls = Rc::clone(&pulls);
        (0..limit).inspect(move |_| pulls.set(pulls.get() + 1))
    })
}

// =============================================================================
// Laziness
// =============================================================================

#[rstest]
fn infinite_range_take() {
    assert_eq!(Stream::range(0, None).take(5).to_list(), vec![0, 1, 2, 3, 4]);
}

#[rstest]
fn long_chain_pulls_only_what_is_needed() {
    let pulls = Rc::new(Cell::new(0));
    let pipeline = metered(1_000, &pulls)
        .map(|x| x * 3)
        .filter(|x| x % 2 == 1)
        .skip(1)
        .take(2);

    assert_eq!(pulls.get(), 0);
    assert_eq!(pipeline.to_list(), vec![9, 15]);
    assert_eq!(pulls.get(), 6);
}

#[rstest]
fn side_effects_in_map_wait_for_terminal() {
    let seen = Rc::new(Cell::new(0));
    let counter = Rc::clone(&seen);
    let stream = Stream::of([1, 2, 3]).map(move |x| {
        counter.set(counter.get() + 1);
        x
    });

    assert_eq!(seen.get(), 0);
    stream.for_each(drop);
    assert_eq!(seen.get(), 3);
}

#[rstest]
fn take_while_on_infinite_stream_terminates() {
    let small_squares = Stream::range(1, None)
        .map(|n| n * n)
        .take_while(|square| *square < 50);
    assert_eq!(small_squares.to_list(), vec![1, 4, 9, 16, 25, 36, 49]);
}

#[rstest]
fn exists_and_find_short_circuit_on_infinite_streams() {
    let naturals = Stream::range(0, None);
    assert!(naturals.exists(|n| n > 1_000));
    assert_eq!(naturals.find(|n| n * n > 200), Either::right(15));
}

// =============================================================================
// Restartability
// =============================================================================

#[rstest]
fn same_stream_materializes_twice() {
    let stream = Stream::of([5, 3, 5, 1]).distinct().map(|x| x * 2);
    assert_eq!(stream.to_list(), stream.to_list());
    assert_eq!(stream.to_list(), vec![10, 6, 2]);
}

#[rstest]
fn cloned_stream_is_independent_cursor() {
    let stream = Stream::range(0, Some(3));
    let copy = stream.clone();
    let mut first = stream.iter();
    assert_eq!(first.next(), Some(0));
    assert_eq!(copy.to_list(), vec![0, 1, 2]);
    assert_eq!(first.next(), Some(1));
}

// =============================================================================
// Combinators
// =============================================================================

#[rstest]
#[case(1, vec![vec![1], vec![2], vec![3], vec![4], vec![5]])]
#[case(2, vec![vec![1, 2], vec![3, 4], vec![5]])]
#[case(5, vec![vec![1, 2, 3, 4, 5]])]
#[case(9, vec![vec![1, 2, 3, 4, 5]])]
fn chunk_sizes(#[case] size: usize, #[case] expected: Vec<Vec<i32>>) {
    assert_eq!(Stream::of([1, 2, 3, 4, 5]).chunk(size).to_list(), expected);
}

#[rstest]
fn zip_with_infinite_side() {
    let labelled = Stream::of(["a", "b", "c"]).zip(Stream::range(1, None));
    assert_eq!(labelled.to_list(), vec![("a", 1), ("b", 2), ("c", 3)]);
}

#[rstest]
fn concat_then_chunk_then_flatten() {
    let stream = Stream::of([1, 2])
        .concat(Stream::of([3, 4, 5]))
        .chunk(2)
        .flatten();
    assert_eq!(stream.to_list(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn drop_while_then_reduce() {
    let total = Stream::of([0, 0, 3, 0, 4]).drop_while(|x| *x == 0).reduce(0, |acc, x| acc + x);
    assert_eq!(total, 7);
}

#[rstest]
fn bind_expands_each_element() {
    let stream = Stream::of(['x', 'y']).bind(|c| Stream::repeat(c, Some(2)));
    assert_eq!(stream.collect::<String>(), "xxyy");
}

#[rstest]
fn collect_into_map() {
    let lengths: HashMap<&str, usize> = Stream::of(["one", "three"])
        .map(|word| (word, word.len()))
        .collect();
    assert_eq!(lengths["three"], 5);
}

#[rstest]
fn all_is_vacuously_true() {
    assert!(Stream::<i32>::empty().all(|_| false));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_map_matches_iterator_map(values in prop::collection::vec(any::<i32>(), 0..32)) {
        let expected: Vec<i64> = values.iter().map(|x| i64::from(*x) * 2).collect();
        let actual = Stream::of(values).map(|x| i64::from(x) * 2).to_list();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_take_then_skip_partition(
        values in prop::collection::vec(any::<u8>(), 0..32),
        split in 0usize..40,
    ) {
        let stream = Stream::of(values.clone());
        let mut rejoined = stream.clone().take(split).to_list();
        rejoined.extend(stream.skip(split).to_list());
        prop_assert_eq!(rejoined, values);
    }

    #[test]
    fn prop_chunks_preserve_elements(
        values in prop::collection::vec(any::<i16>(), 0..32),
        size in 1usize..8,
    ) {
        let chunks = Stream::of(values.clone()).chunk(size).to_list();
        prop_assert!(chunks.iter().all(|chunk| !chunk.is_empty() && chunk.len() <= size));
        prop_assert_eq!(chunks.concat(), values);
    }

    #[test]
    fn prop_zip_length_is_minimum(
        left in prop::collection::vec(any::<u8>(), 0..16),
        right in prop::collection::vec(any::<u8>(), 0..16),
    ) {
        let expected = left.len().min(right.len());
        prop_assert_eq!(Stream::of(left).zip(Stream::of(right)).count(), expected);
    }

    #[test]
    fn prop_distinct_is_idempotent(values in prop::collection::vec(0u8..6, 0..32)) {
        let once = Stream::of(values).distinct();
        let twice = once.clone().distinct();
        prop_assert_eq!(once.to_list(), twice.to_list());
    }
}
