use std::fmt;

/// Tag strings attached to syntax nodes.
///
/// Tags follow the parser-combinator convention of joining the names of the
/// rules a node was produced by with `|`. The tree reader matches on
/// substrings (`number`, `operator`, `oexpr`, `qexpr`), so nodes from any
/// parser that follows the same convention can be read.
pub mod tag {
    /// The synthetic top-level node.
    pub const ROOT: &str = ">";
    /// Start and end of input anchors. Always skipped by the reader.
    pub const ANCHOR: &str = "regex";
    /// A number literal.
    pub const NUMBER: &str = "expr|number|regex";
    /// A named operator such as `head` or `add`.
    pub const WORD_OPERATOR: &str = "expr|operator|string";
    /// A single-character operator such as `+` or `%`.
    pub const SYMBOL_OPERATOR: &str = "expr|operator|char";
    /// An ordered group, `( ... )`.
    pub const ORDERED: &str = "expr|oexpr|>";
    /// A quoted group, `{ ... }`.
    pub const QUOTED: &str = "expr|qexpr|>";
    /// A bracket or brace delimiter.
    pub const DELIMITER: &str = "char";
}

/// A node of a concrete syntax tree as seen by the tree reader.
///
/// The reader only looks at these three facets, so any parser can feed it by
/// implementing this trait on its own node type.
pub trait SyntaxNode: Sized {
    /// The grammar category of the node.
    fn tag(&self) -> &str;
    /// The raw text the node matched. Empty for group nodes.
    fn contents(&self) -> &str;
    /// Child nodes in source order.
    fn children(&self) -> &[Self];
}

/// A concrete syntax tree node produced by [`crate::interpreter::parser`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    tag:      String,
    contents: String,
    children: Vec<Node>,
}

impl Node {
    /// A node without children.
    pub fn leaf(tag: impl Into<String>, contents: impl Into<String>) -> Self {
        Self { tag:      tag.into(),
               contents: contents.into(),
               children: Vec::new(), }
    }

    /// A node with children and no text of its own.
    pub fn branch(tag: impl Into<String>, children: Vec<Self>) -> Self {
        Self { tag: tag.into(),
               contents: String::new(),
               children }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        write!(f, "{:indent$}{}", "", self.tag, indent = depth * 2)?;
        if !self.contents.is_empty() {
            write!(f, " '{}'", self.contents)?;
        }
        writeln!(f)?;
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl SyntaxNode for Node {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn contents(&self) -> &str {
        &self.contents
    }

    fn children(&self) -> &[Self] {
        &self.children
    }
}

impl fmt::Display for Node {
    /// Prints the tree one node per line, children indented by two spaces.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
