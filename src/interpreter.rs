/// The evaluator module reduces value trees to results.
///
/// The evaluator walks an ordered group, evaluates its children left to
/// right, and applies the leading operation to the rest. It owns the builtin
/// registry and all builtin implementations.
///
/// # Responsibilities
/// - Evaluates ordered groups recursively; leaves every other value alone.
/// - Propagates the first error value and discards its siblings.
/// - Dispatches operation names to builtins.
pub mod evaluator;
/// The lexer module tokenizes a line of source text.
///
/// Produces numbers, operator names and delimiters, skipping whitespace.
pub mod lexer;
/// The parser module builds the concrete syntax tree.
///
/// The tree uses the tag conventions of [`crate::ast::tag`], which is what the
/// reader expects.
pub mod parser;
/// The reader module converts a syntax tree into values.
///
/// Works with any tree implementing [`crate::ast::SyntaxNode`].
pub mod reader;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Group` container.
/// - Provides the structural operations that move values between groups.
/// - Renders values as text.
pub mod value;
