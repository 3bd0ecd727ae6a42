use std::fmt;

use crate::{error::RuntimeError, util::num::format_general};

/// Represents a runtime value in the interpreter.
///
/// A value is either atomic (`Error`, `Number`, `Operation`) or a group.
/// Groups exclusively own their children, so dropping a value releases the
/// whole subtree exactly once.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A failed computation. Never evaluated further.
    Error(String),
    /// A double precision number.
    Number(f64),
    /// The name of a builtin operation, such as `head` or `+`.
    Operation(String),
    /// A group evaluated as an expression: `(op arg ...)`.
    OrderedGroup(Group),
    /// A literal list that is never evaluated automatically: `{a b ...}`.
    QuotedGroup(Group),
}

/// An ordered sequence of values owned by a group variant.
///
/// Children are contiguous and their order is significant. Moving a child out
/// of a group (with [`Group::pop`] or [`Group::take`]) ends the group's
/// ownership of it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Group {
    cells: Vec<Value>,
}

impl Value {
    /// Creates an error value carrying `message`.
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }

    /// Creates an operation value carrying `name` verbatim.
    pub fn operation(name: impl Into<String>) -> Self {
        Self::Operation(name.into())
    }

    /// A new, empty ordered group.
    #[must_use]
    pub fn ordered() -> Self {
        Self::OrderedGroup(Group::new())
    }

    /// A new, empty quoted group.
    #[must_use]
    pub fn quoted() -> Self {
        Self::QuotedGroup(Group::new())
    }

    /// Returns `true` for `Value::Error`.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Mutable access to the children of a group value.
    pub const fn group_mut(&mut self) -> Option<&mut Group> {
        match self {
            Self::OrderedGroup(group) | Self::QuotedGroup(group) => Some(group),
            _ => None,
        }
    }

    /// Builder for group literals: appends `child` and returns the group.
    ///
    /// Only meant for `OrderedGroup` and `QuotedGroup` values. An atom has no
    /// children to extend, so calling this on one drops `child` and returns
    /// the atom as it was.
    ///
    /// # Example
    /// ```
    /// use lioliosh::interpreter::value::core::Value;
    ///
    /// let list = Value::quoted().with(Value::Number(1.0)).with(Value::Number(2.0));
    /// assert_eq!(list.to_string(), "{1 2}");
    ///
    /// let atom = Value::Number(1.0).with(Value::Number(2.0));
    /// assert_eq!(atom, Value::Number(1.0));
    /// ```
    #[must_use]
    pub fn with(mut self, child: Self) -> Self {
        if let Some(group) = self.group_mut() {
            group.append(child);
        }
        self
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<RuntimeError> for Value {
    fn from(e: RuntimeError) -> Self {
        Self::Error(e.to_string())
    }
}

impl Group {
    /// Creates an empty group.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: Vec::new() }
    }

    /// Number of children.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` when the group has no children.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterates over the children in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.cells.iter()
    }

    /// Borrows the first child, if any.
    pub fn first(&self) -> Option<&Value> {
        self.cells.first()
    }

    /// Adds `value` as the new last child.
    pub fn append(&mut self, value: Value) {
        self.cells.push(value);
    }

    /// Adds `value` as the new first child, shifting the others right.
    pub fn prepend(&mut self, value: Value) {
        self.cells.insert(0, value);
    }

    /// Removes and returns the child at `index`, shifting later children
    /// left.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    ///
    /// # Example
    /// ```
    /// use lioliosh::interpreter::value::core::{Group, Value};
    ///
    /// let mut group: Group = [1.0, 2.0, 3.0].into_iter().map(Value::Number).collect();
    /// assert_eq!(group.pop(1), Value::Number(2.0));
    /// assert_eq!(group.to_string(), "1 3");
    /// ```
    pub fn pop(&mut self, index: usize) -> Value {
        self.cells.remove(index)
    }

    /// Extracts the child at `index` and drops the rest of the group.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`.
    pub fn take(mut self, index: usize) -> Value {
        self.pop(index)
    }

    /// Moves every child of `other` to the end of `self`, in order.
    ///
    /// # Example
    /// ```
    /// use lioliosh::interpreter::value::core::{Group, Value};
    ///
    /// let left: Group = [1.0, 2.0].into_iter().map(Value::Number).collect();
    /// let right: Group = [3.0].into_iter().map(Value::Number).collect();
    /// assert_eq!(left.join(right).to_string(), "1 2 3");
    /// ```
    #[must_use]
    pub fn join(mut self, mut other: Self) -> Self {
        self.cells.append(&mut other.cells);
        self
    }

    /// Keeps the first `len` children and drops the rest.
    pub fn truncate(&mut self, len: usize) {
        self.cells.truncate(len);
    }

    /// Index of the first error child, if any.
    pub fn position_of_error(&self) -> Option<usize> {
        self.cells.iter().position(Value::is_error)
    }

    /// Replaces every child with the result of `f`, consuming the old child.
    pub fn map_in_place(&mut self, f: impl FnMut(Value) -> Value) {
        let cells = std::mem::take(&mut self.cells);
        self.cells = cells.into_iter().map(f).collect();
    }
}

impl From<Vec<Value>> for Group {
    fn from(cells: Vec<Value>) -> Self {
        Self { cells }
    }
}

impl FromIterator<Value> for Group {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        Self { cells: iter.into_iter().collect() }
    }
}

impl IntoIterator for Group {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.into_iter()
    }
}

impl<'a> IntoIterator for &'a Group {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl fmt::Display for Value {
    /// Renders a value in its literal form.
    ///
    /// Ordered groups print inside `(` `)`, quoted groups inside `{` `}`, and
    /// errors as `Error: <message>`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error(message) => write!(f, "Error: {message}"),
            Self::Number(n) => f.write_str(&format_general(*n)),
            Self::Operation(name) => f.write_str(name),
            Self::OrderedGroup(group) => write!(f, "({group})"),
            Self::QuotedGroup(group) => write!(f, "{{{group}}}"),
        }
    }
}

impl fmt::Display for Group {
    /// Children separated by single spaces, without delimiters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, child) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{child}")?;
        }
        Ok(())
    }
}
