/// Parsing errors.
///
/// Defines the errors that can occur while lexing and parsing a line of
/// source text into a syntax tree: unknown characters, unbalanced or
/// mismatched delimiters, and premature end of input.
pub mod parse_error;
/// Read loop errors.
///
/// Failures of the command line front end itself, such as the line editor
/// failing to start or a script file that cannot be read.
pub mod repl_error;
/// Runtime errors.
///
/// Describes every way a builtin or the evaluator can reject its input:
/// argument count and type violations, division by zero, unknown functions
/// and missing operators. These never escape evaluation as Rust errors; they
/// are converted into `Value::Error` values.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use repl_error::ReplError;
pub use runtime_error::RuntimeError;
