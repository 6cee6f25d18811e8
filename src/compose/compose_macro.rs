//! Right-to-left function composition.

/// Composes functions right to left.
///
/// `compose!(f, g, h)` builds a closure computing `f(g(h(x)))`: the last
/// function is applied first. Every argument is evaluated once, when the
/// macro expands, and moved into the resulting closure.
///
/// # Examples
///
/// ```
/// use rivulet::compose;
///
/// let trim = |s: &str| s.trim().to_string();
/// let shout = |s: String| s.to_uppercase();
/// let exclaim = |s: String| format!("{s}!");
///
/// let announce = compose!(exclaim, shout, trim);
/// assert_eq!(announce("  ready "), "READY!");
/// ```
///
/// Composition works with any callables, including the stream combinators:
///
/// ```
/// # #[cfg(feature = "stream")]
/// # {
/// use rivulet::compose;
/// use rivulet::stream::Stream;
///
/// let first_three = |s: Stream<i64>| s.take(3);
/// let squares = |s: Stream<i64>| s.map(|n| n * n);
///
/// let pipeline = compose!(first_three, squares);
/// assert_eq!(pipeline(Stream::range(1, None)).to_list(), vec![1, 4, 9]);
/// # }
/// ```
#[macro_export]
macro_rules! compose {
    ($function:expr $(,)?) => {
        $function
    };
    ($outer:expr, $($rest:expr),+ $(,)?) => {{
        let outer = $outer;
        let rest = $crate::compose!($($rest),+);
        move |input| outer(rest(input))
    }};
}
