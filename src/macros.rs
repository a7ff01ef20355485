//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] for a `static`, panicking with `$msg` if the
/// pattern is invalid.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static DASHES: LazyLock<Regex> = mdtsv::lazy_regex!(r"-{3,}", "dash run");
/// assert!(DASHES.is_match(":---:"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        ::std::sync::LazyLock::new(|| ::regex::Regex::new($pattern).expect($msg))
    };
}
