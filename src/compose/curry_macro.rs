//! Currying by explicit arity.
//!
//! Rust cannot inspect a function's parameter count, so [`curry!`] takes
//! the arity as its second argument. Each stage is an `Fn` closure: the
//! wrapped function is shared through `Rc` and already-supplied arguments
//! are cloned on every later call, so partial applications can be reused.

/// Converts a function of 2, 3 or 4 arguments into nested single-argument
/// closures.
///
/// Every argument except the last must implement [`Clone`].
///
/// # Examples
///
/// ```
/// use rivulet::curry;
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let clamp = curry!(clamp, 3);
/// let percent = clamp(0)(100);
///
/// assert_eq!(percent(140), 100);
/// assert_eq!(percent(-5), 0);
/// assert_eq!(percent(42), 42);
/// ```
///
/// Partial applications compose with the stream combinators:
///
/// ```
/// # #[cfg(feature = "stream")]
/// # {
/// use rivulet::curry;
/// use rivulet::stream::Stream;
///
/// let scale = curry!(|factor: i64, n: i64| factor * n, 2);
/// let tripled = Stream::range(1, Some(4)).map(scale(3));
/// assert_eq!(tripled.to_list(), vec![3, 6, 9]);
/// # }
/// ```
#[macro_export]
macro_rules! curry {
    ($function:expr, 2 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| function(::std::clone::Clone::clone(&first), second)
        }
    }};
    ($function:expr, 3 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    function(
                        ::std::clone::Clone::clone(&first),
                        ::std::clone::Clone::clone(&second),
                        third,
                    )
                }
            }
        }
    }};
    ($function:expr, 4 $(,)?) => {{
        let function = ::std::rc::Rc::new($function);
        move |first| {
            let function = ::std::rc::Rc::clone(&function);
            move |second| {
                let function = ::std::rc::Rc::clone(&function);
                let first = ::std::clone::Clone::clone(&first);
                move |third| {
                    let function = ::std::rc::Rc::clone(&function);
                    let first = ::std::clone::Clone::clone(&first);
                    let second = ::std::clone::Clone::clone(&second);
                    move |fourth| {
                        function(
                            ::std::clone::Clone::clone(&first),
                            ::std::clone::Clone::clone(&second),
                            ::std::clone::Clone::clone(&third),
                            fourth,
                        )
                    }
                }
            }
        }
    }};
    ($function:expr, $arity:literal $(,)?) => {
        ::std::compile_error!("curry! supports arities 2, 3 and 4")
    };
}
