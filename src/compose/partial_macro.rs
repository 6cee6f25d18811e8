//! Partial application with placeholders.
//!
//! [`partial!`] fixes some arguments of a function of up to four arguments.
//! Each `__` placeholder becomes a parameter of the resulting closure, in
//! order. The function is held in an `Rc` and fixed arguments are cloned on
//! every call, so the partial application is a reusable `Fn` and cloning it
//! never clones the function.

/// Fixes some arguments of a function, leaving `__` placeholders as the
/// parameters of the returned closure.
///
/// Fixed arguments are evaluated once, when the macro expands, and must
/// implement [`Clone`]. `__` is matched as a literal token; there is nothing
/// to import for it.
///
/// # Examples
///
/// ```
/// use rivulet::partial;
///
/// fn greet(greeting: &str, name: &str) -> String {
///     format!("{greeting}, {name}!")
/// }
///
/// let say_hello = partial!(greet, "Hello", __);
/// assert_eq!(say_hello("World"), "Hello, World!");
///
/// let greet_ada = partial!(greet, __, "Ada");
/// assert_eq!(greet_ada("Welcome"), "Welcome, Ada!");
///
/// let thunk = partial!(greet, "Hi", "Bob");
/// assert_eq!(thunk(), "Hi, Bob!");
/// ```
///
/// Partial applications slot into [`compose!`](crate::compose):
///
/// ```
/// use rivulet::{compose, partial};
///
/// fn clamp(low: i32, high: i32, value: i32) -> i32 {
///     value.max(low).min(high)
/// }
///
/// let to_percent = partial!(clamp, 0, 100, __);
/// let scaled = compose!(to_percent, |x: i32| x * 10);
/// assert_eq!(scaled(7), 70);
/// assert_eq!(scaled(12), 100);
/// ```
#[macro_export]
macro_rules! partial {
    (@build $function:expr;
        [$($names:ident)*];
        [$($params:ident)*];
        [$(($bound:ident = $value:expr))*];
        [$(($arg:expr))*];
    ) => {{
        let function = ::std::rc::Rc::new($function);
        $(let $bound = $value;)*
        move |$($params),*| function($($arg),*)
    }};
    (@build $function:expr;
        [$name:ident $($names:ident)*];
        [$($params:ident)*];
        [$($lets:tt)*];
        [$($args:tt)*];
        __ $(, $($rest:tt)*)?
    ) => {
        $crate::partial!(@build $function;
            [$($names)*];
            [$($params)* $name];
            [$($lets)*];
            [$($args)* ($name)];
            $($($rest)*)?
        )
    };
    (@build $function:expr;
        [$name:ident $($names:ident)*];
        [$($params:ident)*];
        [$($lets:tt)*];
        [$($args:tt)*];
        $argument:expr $(, $($rest:tt)*)?
    ) => {
        $crate::partial!(@build $function;
            [$($names)*];
            [$($params)*];
            [$($lets)* ($name = $argument)];
            [$($args)* (::std::clone::Clone::clone(&$name))];
            $($($rest)*)?
        )
    };
    (@build $($overflow:tt)*) => {
        ::std::compile_error!("partial! supports functions of 1 to 4 arguments")
    };
    ($function:expr, $($arguments:tt)+) => {
        $crate::partial!(@build $function;
            [first second third fourth];
            [];
            [];
            [];
            $($arguments)+
        )
    };
}
