/// Core evaluation logic.
///
/// Reduces ordered groups to a single value, short-circuiting on the first
/// error among the evaluated children.
pub mod core;

/// Utility functions for evaluation.
///
/// Argument checks shared by the builtins.
pub mod utils;

/// Builtin functions.
///
/// The registry that maps operation names to implementations, and the
/// implementations themselves.
pub mod function;
