use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
/// Represents all errors that can occur during evaluation.
///
/// The display strings are the messages users see after `Error: ` in the
/// read loop, so they are part of the language's observable behaviour.
pub enum RuntimeError {
    /// A number literal was out of range.
    #[error("invalid number")]
    InvalidNumber,
    /// The first element of an expression was not an operation.
    #[error("Expression expected an operator.")]
    ExpectedOperator,
    /// The operation name is not a registered builtin.
    #[error("Unknown Function")]
    UnknownFunction,
    /// A builtin received the wrong number of arguments.
    #[error("Function '{function}' takes exactly {expected} {}.", argument_noun(*.expected))]
    ArgumentCountMismatch {
        /// Canonical name of the builtin.
        function: &'static str,
        /// The number of arguments it accepts.
        expected: usize,
    },
    /// A builtin that needs at least one argument received none.
    #[error("Function '{function}' passed no arguments.")]
    MissingArguments {
        /// Canonical name of the builtin.
        function: &'static str,
    },
    /// An argument had the wrong variant.
    #[error("Function '{function}' passed incorrect type.")]
    IncorrectType {
        /// Canonical name of the builtin.
        function: &'static str,
    },
    /// A list argument was empty where a non-empty list is required.
    #[error("Function '{function}' passed {{}}.")]
    EmptyList {
        /// Canonical name of the builtin.
        function: &'static str,
    },
    /// Division or modulus with a zero divisor.
    #[error("Division by zero.")]
    DivisionByZero,
    /// The tree reader met a syntax node it does not understand.
    #[error("unexpected syntax node '{tag}'")]
    UnknownSyntax {
        /// Tag of the node.
        tag: String,
    },
}

const fn argument_noun(count: usize) -> &'static str {
    if count == 1 { "argument" } else { "arguments" }
}
