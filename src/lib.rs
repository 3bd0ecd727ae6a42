//! # lioliosh
//!
//! lioliosh is a small s-expression calculator language written in Rust.
//! Ordered groups such as `(+ 1 2)` are evaluated; quoted groups such as
//! `{1 2 3}` are literal lists that builtins like `head`, `tail`, `join`,
//! `cons` and `eval` can manipulate.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::ParseError,
    interpreter::{evaluator::core::evaluate, parser::parse, reader::read, value::core::Value},
};

/// Defines the concrete syntax tree handed to the reader.
///
/// This module declares the `SyntaxNode` trait the reader consumes, the
/// `Node` type the bundled parser produces, and the tag vocabulary both
/// agree on.
///
/// # Responsibilities
/// - Describes syntax nodes by tag, text and ordered children.
/// - Prints trees for debugging.
pub mod ast;
/// Provides error types for parsing, evaluation and the command line.
///
/// Parse errors are ordinary Rust errors returned to the caller. Runtime
/// errors are converted into `Value::Error` values and flow through
/// evaluation like any other value.
pub mod error;
/// Orchestrates lexing, parsing, reading and evaluation.
///
/// # Responsibilities
/// - Tokenizes and parses source text into a syntax tree.
/// - Reads the syntax tree into a value tree.
/// - Evaluates value trees with the builtin registry.
pub mod interpreter;
/// The interactive read loop and script runner.
pub mod repl;
/// General utilities for number formatting and literal conversion.
pub mod util;

/// Parses, reads and evaluates one line of source text.
///
/// # Errors
/// Returns a `ParseError` if the text does not match the grammar. Failures
/// during evaluation are not errors here; they come back as `Value::Error`.
///
/// # Examples
/// ```
/// use lioliosh::{evaluate_source, interpreter::value::core::Value};
///
/// assert_eq!(evaluate_source("(+ 1 2 3)").unwrap(), Value::Number(6.0));
/// assert_eq!(evaluate_source("(/ 1 0)").unwrap(), Value::error("Division by zero."));
/// assert!(evaluate_source("(+ 1 2").is_err());
/// ```
pub fn evaluate_source(source: &str) -> Result<Value, ParseError> {
    let tree = parse(source)?;
    Ok(evaluate(read(&tree)))
}

/// Evaluates one line of source text and renders the result.
///
/// # Errors
/// Returns a `ParseError` if the text does not match the grammar.
///
/// # Examples
/// ```
/// use lioliosh::run_line;
///
/// assert_eq!(run_line("(tail {1 2 3})").unwrap(), "{2 3}");
/// assert_eq!(run_line("(head 1)").unwrap(), "Error: Function 'head' passed incorrect type.");
/// ```
pub fn run_line(source: &str) -> Result<String, ParseError> {
    evaluate_source(source).map(|value| value.to_string())
}
