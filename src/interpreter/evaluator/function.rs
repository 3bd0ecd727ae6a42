/// Arithmetic builtins.
///
/// Left folds over numeric arguments: `add`, `sub`, `mul`, `div`, `mod` and
/// `exp`, plus their symbol aliases.
pub mod arithmetic;
/// List builtins.
///
/// `list`, `head`, `tail`, `join`, `cons` and `eval`.
pub mod list;
/// `min` and `max` function implementations.
///
/// Returns the smallest or largest of one or more numbers.
pub mod min_max;

pub mod core;
