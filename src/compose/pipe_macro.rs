//! Left-to-right value pipelines.

/// Threads a value through functions left to right.
///
/// `pipe!(x, f, g, h)` evaluates `h(g(f(x)))` immediately. Unlike
/// [`compose!`](crate::compose), it produces a value rather than a closure.
///
/// # Examples
///
/// ```
/// use rivulet::pipe;
///
/// let words = pipe!(
///     "a b  c",
///     |s: &str| s.split_whitespace().count(),
///     |n: usize| n * 10
/// );
/// assert_eq!(words, 30);
/// ```
#[macro_export]
macro_rules! pipe {
    ($value:expr $(,)?) => {
        $value
    };
    ($value:expr, $function:expr $(, $rest:expr)* $(,)?) => {
        $crate::pipe!(($function)($value) $(, $rest)*)
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_pipe_without_functions() {
        assert_eq!(pipe!(7), 7);
    }

    #[test]
    fn test_pipe_applies_first_function_first() {
        let add_one = |x: i32| x + 1;
        let double = |x: i32| x * 2;
        assert_eq!(pipe!(5, add_one, double), 12);
    }

    #[test]
    fn test_pipe_accepts_inline_closures() {
        let result = pipe!(vec![3, 1, 2], |mut v: Vec<i32>| {
            v.sort_unstable();
            v
        });
        assert_eq!(result, vec![1, 2, 3]);
    }
}
