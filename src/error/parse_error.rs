use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
/// Represents all errors that can occur while turning source text into a
/// syntax tree.
///
/// Offsets are byte offsets into the source line.
pub enum ParseError {
    /// The lexer found text that starts no token.
    #[error("<stdin>:{}: error: unexpected character '{found}'", .offset + 1)]
    UnexpectedCharacter {
        /// The offending text.
        found:  String,
        /// Where it starts.
        offset: usize,
    },
    /// A closing delimiter with no matching opener.
    #[error("<stdin>:{}: error: unexpected '{found}'", .offset + 1)]
    UnexpectedClosing {
        /// The closing delimiter that was found.
        found:  char,
        /// Where it was found.
        offset: usize,
    },
    /// A group closed with the wrong delimiter, as in `(1 2}`.
    #[error("<stdin>:{}: error: expected '{expected}' but found '{found}'", .offset + 1)]
    MismatchedClosing {
        /// The delimiter that would close the open group.
        expected: char,
        /// The delimiter that was found instead.
        found:    char,
        /// Where it was found.
        offset:   usize,
    },
    /// Groups nested deeper than the parser allows.
    #[error("<stdin>:{}: error: groups nested deeper than {limit} levels", .offset + 1)]
    NestingTooDeep {
        /// The deepest nesting accepted.
        limit:  usize,
        /// The opener that went one level too deep.
        offset: usize,
    },
    /// The input ended while a group was still open.
    #[error("<stdin>:{}: error: unclosed '{opening}'", .offset + 1)]
    UnclosedGroup {
        /// The opening delimiter of the unclosed group.
        opening: char,
        /// Where that group starts.
        offset:  usize,
    },
}
