//! Small combinators for point-free code.

/// Returns its argument unchanged.
///
/// # Examples
///
/// ```
/// # #[cfg(feature = "stream")]
/// # {
/// use rivulet::compose::identity;
/// use rivulet::stream::Stream;
///
/// let same = Stream::of([1, 2]).map(identity);
/// assert_eq!(same.to_list(), vec![1, 2]);
/// # }
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Creates a function that ignores its input and returns a clone of `value`.
///
/// # Examples
///
/// ```
/// use rivulet::compose::constant;
///
/// let zero = constant::<i32, &str>(0);
/// assert_eq!(zero("anything"), 0);
/// ```
#[inline]
pub fn constant<T: Clone, U>(value: T) -> impl Fn(U) -> T {
    move |_| value.clone()
}

/// Swaps the arguments of a binary function.
///
/// # Examples
///
/// ```
/// use rivulet::compose::flip;
///
/// let subtract = |a: i32, b: i32| a - b;
/// assert_eq!(flip(subtract)(1, 10), 9);
/// ```
#[inline]
pub fn flip<A, B, C, F>(function: F) -> impl Fn(B, A) -> C
where
    F: Fn(A, B) -> C,
{
    move |second, first| function(first, second)
}

/// Runs `inspect` on a value for its side effect and passes the value on.
///
/// Useful for observing an intermediate value inside a `pipe!` or a stream
/// `map` without changing it.
///
/// # Examples
///
/// ```
/// use rivulet::compose::tap;
/// use rivulet::pipe;
/// use std::cell::RefCell;
///
/// let seen = RefCell::new(Vec::new());
/// let result = pipe!(4, |x: i32| x * 2, tap(|x: &i32| seen.borrow_mut().push(*x)), |x: i32| x + 1);
///
/// assert_eq!(result, 9);
/// assert_eq!(*seen.borrow(), vec![8]);
/// ```
#[inline]
pub fn tap<T, F>(inspect: F) -> impl Fn(T) -> T
where
    F: Fn(&T),
{
    move |value| {
        inspect(&value);
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0)]
    #[case(-17)]
    #[case(i32::MAX)]
    fn test_identity(#[case] value: i32) {
        assert_eq!(identity(value), value);
    }

    #[test]
    fn test_constant_clones_each_call() {
        let greeting = constant::<String, i32>("hi".to_string());
        assert_eq!(greeting(1), "hi");
        assert_eq!(greeting(2), "hi");
    }

    #[test]
    fn test_flip_twice_is_original() {
        let divide = |a: i32, b: i32| a / b;
        let restored = flip(flip(divide));
        assert_eq!(restored(10, 2), 5);
    }

    #[test]
    fn test_tap_returns_value() {
        let count = std::cell::Cell::new(0);
        let observed = tap(|_: &&str| count.set(count.get() + 1));
        assert_eq!(observed("x"), "x");
        assert_eq!(count.get(), 1);
    }
}
