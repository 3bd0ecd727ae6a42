/// Core value representation.
///
/// Declares the `Value` enum with its five variants and the `Group` container
/// that ordered and quoted groups share, together with the structural
/// operations (append, prepend, pop, take, join) the evaluator and builtins
/// use to move values around. Values render in their literal form, with
/// numbers formatted by `util::num`.
pub mod core;
