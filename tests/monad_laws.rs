#![cfg(all(feature = "control", feature = "effect", feature = "stream"))]
//! Property-based tests for the Functor, Applicative and Monad laws.
//!
//! Every wrapper is checked by the same generic harness, written only
//! against the type class traits:
//! - Left Identity: pure(a).flat_map(f) == f(a)
//! - Right Identity: m.flat_map(pure) == m
//! - Associativity: m.flat_map(f).flat_map(g) == m.flat_map(|x| f(x).flat_map(g))
//!
//! The applicative laws are checked per wrapper with plain function
//! pointers on the function side:
//! - Identity: pure(id).apply(v) == v
//! - Homomorphism: pure(f).apply(pure(x)) == pure(f(x))
//! - Interchange: u.apply(pure(y)) == pure(|f| f(y)).apply(u)
//!
//! Deferred wrappers are compared by what they produce: `IO` by the result
//! of `run`, `Stream` by its materialized list.

use std::fmt::Debug;

use proptest::prelude::*;
use rivulet::control::Either;
use rivulet::effect::IO;
use rivulet::stream::Stream;
use rivulet::typeclass::{Applicative, Functor, Monad, TypeConstructor};

// =============================================================================
// Observation
// =============================================================================

/// Turns a wrapper into a value that can be compared for equality.
trait Observe {
    type Observed: PartialEq + Debug;

    fn observe(&self) -> Self::Observed;
}

impl Observe for Either<String, i32> {
    type Observed = Self;

    fn observe(&self) -> Self {
        self.clone()
    }
}

impl Observe for IO<i32, String> {
    type Observed = Result<i32, String>;

    fn observe(&self) -> Result<i32, String> {
        self.run()
    }
}

impl Observe for Stream<i32> {
    type Observed = Vec<i32>;

    fn observe(&self) -> Vec<i32> {
        self.to_list()
    }
}

// =============================================================================
// Generic Harness
// =============================================================================

fn check_left_identity<M, F>(value: i32, function: F) -> Result<(), TestCaseError>
where
    M: Monad<Inner = i32> + TypeConstructor<WithType<i32> = M> + Observe + 'static,
    F: Fn(i32) -> M + Clone + 'static,
{
    let lifted: M = <M as Applicative>::pure(value);
    let left = lifted.flat_map::<i32, F>(function.clone());
    prop_assert_eq!(left.observe(), function(value).observe());
    Ok(())
}

fn check_right_identity<M>(monad: M) -> Result<(), TestCaseError>
where
    M: Monad<Inner = i32> + TypeConstructor<WithType<i32> = M> + Observe + Clone + 'static,
{
    let left: M = monad.clone().flat_map::<i32, _>(|x| <M as Applicative>::pure(x));
    prop_assert_eq!(left.observe(), monad.observe());
    Ok(())
}

fn check_associativity<M, F, G>(monad: M, first: F, second: G) -> Result<(), TestCaseError>
where
    M: Monad<Inner = i32> + TypeConstructor<WithType<i32> = M> + Observe + Clone + 'static,
    F: Fn(i32) -> M + Clone + 'static,
    G: Fn(i32) -> M + Clone + 'static,
{
    let grouped_left: M = monad
        .clone()
        .flat_map::<i32, F>(first.clone())
        .flat_map::<i32, G>(second.clone());
    let grouped_right: M = monad.flat_map::<i32, _>(move |x| {
        let inner: M = first(x);
        inner.flat_map::<i32, G>(second.clone())
    });
    prop_assert_eq!(grouped_left.observe(), grouped_right.observe());
    Ok(())
}

fn check_functor_identity<M>(functor: M) -> Result<(), TestCaseError>
where
    M: Functor<Inner = i32> + TypeConstructor<WithType<i32> = M> + Observe + Clone + 'static,
{
    let mapped: M = functor.clone().fmap::<i32, _>(|x| x);
    prop_assert_eq!(mapped.observe(), functor.observe());
    Ok(())
}

fn check_functor_composition<M>(functor: M) -> Result<(), TestCaseError>
where
    M: Functor<Inner = i32> + TypeConstructor<WithType<i32> = M> + Observe + Clone + 'static,
{
    let add_one = |x: i32| x.wrapping_add(1);
    let double = |x: i32| x.wrapping_mul(2);
    let stepwise: M = functor
        .clone()
        .fmap::<i32, _>(add_one)
        .fmap::<i32, _>(double);
    let fused: M = functor.fmap::<i32, _>(move |x| double(add_one(x)));
    prop_assert_eq!(stepwise.observe(), fused.observe());
    Ok(())
}

// =============================================================================
// Instances Under Test
// =============================================================================

fn either_from(value: i32) -> Either<String, i32> {
    if value % 5 == 0 {
        Either::left(format!("rejected {value}"))
    } else {
        Either::right(value)
    }
}

fn either_half(value: i32) -> Either<String, i32> {
    if value % 2 == 0 {
        Either::right(value / 2)
    } else {
        Either::left(format!("{value} is odd"))
    }
}

fn either_negate(value: i32) -> Either<String, i32> {
    Either::right(value.wrapping_neg())
}

fn io_from(value: i32) -> IO<i32, String> {
    IO::new(move || {
        if value % 5 == 0 {
            Err(format!("rejected {value}"))
        } else {
            Ok(value)
        }
    })
}

fn io_triple(value: i32) -> IO<i32, String> {
    IO::new(move || {
        if value < 0 {
            Err(format!("{value} is negative"))
        } else {
            Ok(value.wrapping_mul(3))
        }
    })
}

fn io_increment(value: i32) -> IO<i32, String> {
    IO::from_fn(move || value.wrapping_add(1))
}

fn stream_pair(value: i32) -> Stream<i32> {
    Stream::of([value, value.wrapping_add(1)])
}

fn stream_evens_only(value: i32) -> Stream<i32> {
    if value % 2 == 0 {
        Stream::pure(value)
    } else {
        Stream::empty()
    }
}

// =============================================================================
// Either
// =============================================================================

proptest! {
    #[test]
    fn prop_either_left_identity(value: i32) {
        check_left_identity(value, either_half)?;
    }

    #[test]
    fn prop_either_right_identity(value: i32) {
        check_right_identity(either_from(value))?;
    }

    #[test]
    fn prop_either_associativity(value: i32) {
        check_associativity(either_from(value), either_half, either_negate)?;
    }

    #[test]
    fn prop_either_functor_laws(value: i32) {
        check_functor_identity(either_from(value))?;
        check_functor_composition(either_from(value))?;
    }
}

// =============================================================================
// IO
// =============================================================================

proptest! {
    #[test]
    fn prop_io_left_identity(value: i32) {
        check_left_identity(value, io_triple)?;
    }

    #[test]
    fn prop_io_right_identity(value: i32) {
        check_right_identity(io_from(value))?;
    }

    #[test]
    fn prop_io_associativity(value: i32) {
        check_associativity(io_from(value), io_triple, io_increment)?;
    }

    #[test]
    fn prop_io_functor_laws(value: i32) {
        check_functor_identity(io_from(value))?;
        check_functor_composition(io_from(value))?;
    }
}

// =============================================================================
// Stream
// =============================================================================

proptest! {
    #[test]
    fn prop_stream_left_identity(value: i32) {
        check_left_identity(value, stream_pair)?;
    }

    #[test]
    fn prop_stream_right_identity(values in prop::collection::vec(any::<i32>(), 0..8)) {
        check_right_identity(Stream::of(values))?;
    }

    #[test]
    fn prop_stream_associativity(values in prop::collection::vec(any::<i32>(), 0..8)) {
        check_associativity(Stream::of(values), stream_pair, stream_evens_only)?;
    }

    #[test]
    fn prop_stream_functor_laws(values in prop::collection::vec(any::<i32>(), 0..8)) {
        check_functor_identity(Stream::of(values.clone()))?;
        check_functor_composition(Stream::of(values))?;
    }
}

// =============================================================================
// Applicative Laws
// =============================================================================

type Endo = fn(i32) -> i32;

fn endo_identity(value: i32) -> i32 {
    value
}

fn endo_double(value: i32) -> i32 {
    value.wrapping_mul(2)
}

fn endo_negate(value: i32) -> i32 {
    value.wrapping_neg()
}

fn either_endo(value: i32) -> Either<String, Endo> {
    if value % 3 == 0 {
        Either::left(format!("no function for {value}"))
    } else {
        Either::right(endo_double)
    }
}

fn io_endo(value: i32) -> IO<Endo, String> {
    IO::new(move || {
        if value % 3 == 0 {
            Err(format!("no function for {value}"))
        } else {
            Ok(endo_negate as Endo)
        }
    })
}

proptest! {
    #[test]
    fn prop_either_applicative_identity(value: i32) {
        let applied = Either::<String, Endo>::right(endo_identity).apply::<i32, i32>(either_from(value));
        prop_assert_eq!(applied, either_from(value));
    }

    #[test]
    fn prop_either_applicative_homomorphism(value: i32) {
        let applied = Either::<String, Endo>::right(endo_double).apply::<i32, i32>(Either::right(value));
        prop_assert_eq!(applied, Either::right(endo_double(value)));
    }

    #[test]
    fn prop_either_applicative_interchange(value: i32) {
        let left = either_endo(value).apply::<i32, i32>(Either::right(value));
        let at_value = move |function: Endo| function(value);
        let right = Either::<String, _>::right(at_value).apply::<Endo, i32>(either_endo(value));
        prop_assert_eq!(left, right);
    }

    #[test]
    fn prop_io_applicative_identity(value: i32) {
        let applied = IO::<Endo, String>::pure(endo_identity).apply::<i32, i32>(io_from(value));
        prop_assert_eq!(applied.observe(), io_from(value).observe());
    }

    #[test]
    fn prop_io_applicative_homomorphism(value: i32) {
        let applied = IO::<Endo, String>::pure(endo_double).apply::<i32, i32>(IO::pure(value));
        prop_assert_eq!(applied.observe(), Ok(endo_double(value)));
    }

    #[test]
    fn prop_io_applicative_interchange(value: i32) {
        let left = io_endo(value).apply::<i32, i32>(IO::pure(value));
        let at_value = move |function: Endo| function(value);
        let right = IO::<_, String>::pure(at_value).apply::<Endo, i32>(io_endo(value));
        prop_assert_eq!(left.observe(), right.observe());
    }

    #[test]
    fn prop_stream_applicative_identity(values in prop::collection::vec(any::<i32>(), 0..8)) {
        let applied = Stream::<Endo>::pure(endo_identity).apply::<i32, i32>(Stream::of(values.clone()));
        prop_assert_eq!(applied.observe(), values);
    }

    #[test]
    fn prop_stream_applicative_homomorphism(value: i32) {
        let applied = Stream::<Endo>::pure(endo_double).apply::<i32, i32>(Stream::pure(value));
        prop_assert_eq!(applied.observe(), vec![endo_double(value)]);
    }

    #[test]
    fn prop_stream_applicative_interchange(value: i32) {
        let functions = Stream::<Endo>::of([endo_double, endo_negate]);
        let left = functions.clone().apply::<i32, i32>(Stream::pure(value));
        let at_value = move |function: Endo| function(value);
        let right = Stream::pure(at_value).apply::<Endo, i32>(functions);
        prop_assert_eq!(left.observe(), right.observe());
    }
}
