//! Crate-internal helper macros.

/// Compile a literal regex once and hand out a `&'static Regex`.
macro_rules! regex {
    ($re:literal $(,)?) => {{
        static RE: std::sync::OnceLock<regex::Regex> = std::sync::OnceLock::new();
        RE.get_or_init(|| regex::Regex::new($re).expect("literal regex"))
    }};
}
