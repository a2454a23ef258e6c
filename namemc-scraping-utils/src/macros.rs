/// Compiles a CSS selector once and hands out a `&'static Selector`.
///
/// Only meant for string literals; an invalid literal is a programming error.
#[macro_export]
macro_rules! selector {
    ($e: expr) => {{
        use $crate::__private::once_cell::sync::Lazy;
        use $crate::__private::scraper::Selector;
        static SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse($e).unwrap());
        &*SELECTOR
    }};
}
