/// Compile a regex literal once and hand out a `&'static Regex`.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: $crate::__private::Lazy<$crate::__private::Regex> =
            $crate::__private::Lazy::new(|| $crate::__private::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// A [`Pattern::Regex`](crate::Pattern::Regex) backed by a `regex!` static.
#[macro_export]
macro_rules! re {
    ($pat:literal) => {
        $crate::Pattern::Regex($crate::regex!($pat).clone())
    };
}
