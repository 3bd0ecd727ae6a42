use std::ops::Range;

use logos::Logos;

use crate::error::ParseError;

/// Byte range of a token in the source line.
pub type Span = Range<usize>;

/// Represents a lexical token in the source input.
///
/// Whitespace is skipped. Logos prefers the longest match, so `-5` is a
/// number while `- 5` is the `-` operator followed by a number.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Number literals such as `42`, `-3.5` or `7.`.
    #[regex(r"-?[0-9]+(\.[0-9]*)?", |lex| lex.slice().to_string())]
    Number(String),
    /// Builtin operation names, both word and symbol forms.
    #[token("list", operator_name)]
    #[token("head", operator_name)]
    #[token("tail", operator_name)]
    #[token("eval", operator_name)]
    #[token("join", operator_name)]
    #[token("cons", operator_name)]
    #[token("min", operator_name)]
    #[token("max", operator_name)]
    #[token("add", operator_name)]
    #[token("sub", operator_name)]
    #[token("mul", operator_name)]
    #[token("div", operator_name)]
    #[token("mod", operator_name)]
    #[token("exp", operator_name)]
    #[token("+", operator_name)]
    #[token("-", operator_name)]
    #[token("*", operator_name)]
    #[token("/", operator_name)]
    #[token("%", operator_name)]
    #[token("^", operator_name)]
    Operator(String),
    /// `(`
    #[token("(")]
    OpenParen,
    /// `)`
    #[token(")")]
    CloseParen,
    /// `{`
    #[token("{")]
    OpenBrace,
    /// `}`
    #[token("}")]
    CloseBrace,
}

fn operator_name(lex: &mut logos::Lexer<Token>) -> String {
    lex.slice().to_string()
}

impl Token {
    /// The delimiter character of bracket tokens.
    pub const fn delimiter(&self) -> Option<char> {
        match self {
            Self::OpenParen => Some('('),
            Self::CloseParen => Some(')'),
            Self::OpenBrace => Some('{'),
            Self::CloseBrace => Some('}'),
            Self::Number(_) | Self::Operator(_) => None,
        }
    }
}

/// Splits a source line into tokens with their byte spans.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` at the first text that does not
/// start a token.
///
/// # Example
/// ```
/// use lioliosh::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("(- -5)").unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(t, _)| t).collect();
/// assert_eq!(kinds, vec![Token::OpenParen,
///                        Token::Operator("-".into()),
///                        Token::Number("-5".into()),
///                        Token::CloseParen]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, Span)>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span()));
        } else {
            tracing::debug!(span = ?lexer.span(), "lexer rejected input");
            return Err(ParseError::UnexpectedCharacter { found:  lexer.slice().to_string(),
                                                         offset: lexer.span().start, });
        }
    }

    Ok(tokens)
}
