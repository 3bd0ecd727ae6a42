use crate::{
    ast::{SyntaxNode, tag},
    error::RuntimeError,
    interpreter::value::core::Value,
    util::num::parse_number,
};

/// Converts a syntax tree into a value tree.
///
/// - Number nodes become `Value::Number`, or `Value::Error("invalid number")`
///   when the literal is out of range. The rest of the tree is still read.
/// - Operator nodes become `Value::Operation` with the text verbatim.
/// - The root node and ordered-group nodes become ordered groups; quoted-group
///   nodes become quoted groups.
/// - Delimiter children (`(`, `)`, `{`, `}`) and anchor children are skipped.
///
/// # Example
/// ```
/// use lioliosh::interpreter::{parser::parse, reader::read};
///
/// let value = read(&parse("(+ 1 {2 3})").unwrap());
/// assert_eq!(value.to_string(), "((+ 1 {2 3}))");
/// ```
pub fn read<N: SyntaxNode>(node: &N) -> Value {
    let node_tag = node.tag();

    if node_tag.contains("number") {
        return read_number(node.contents());
    }
    if node_tag.contains("operator") {
        return Value::operation(node.contents());
    }

    let mut value = if node_tag == tag::ROOT || node_tag.contains("oexpr") {
        Value::ordered()
    } else if node_tag.contains("qexpr") {
        Value::quoted()
    } else {
        tracing::debug!(tag = node_tag, "unreadable syntax node");
        return RuntimeError::UnknownSyntax { tag: node_tag.to_string() }.into();
    };

    if let Some(group) = value.group_mut() {
        for child in node.children().iter().filter(|c| !is_punctuation(*c)) {
            group.append(read(child));
        }
    }

    value
}

fn read_number(text: &str) -> Value {
    parse_number(text).map_or_else(|| {
                                       tracing::debug!(text, "number literal out of range");
                                       RuntimeError::InvalidNumber.into()
                                   },
                                   Value::Number)
}

/// Delimiters and anchors carry no meaning of their own.
fn is_punctuation<N: SyntaxNode>(node: &N) -> bool {
    matches!(node.contents(), "(" | ")" | "{" | "}") || node.tag() == tag::ANCHOR
}
