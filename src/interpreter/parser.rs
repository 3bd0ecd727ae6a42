use std::iter::Peekable;

use crate::{
    ast::{Node, tag},
    error::ParseError,
    interpreter::lexer::{Span, Token, tokenize},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Deepest group nesting a line may use.
///
/// Reading, evaluating and dropping a tree all recurse once per level, so the
/// parser rejects deeper input before any of that happens.
pub const MAX_NESTING: usize = 128;

/// Parses one line of source text into a concrete syntax tree.
///
/// Grammar:
/// ```text
///     number   : /-?[0-9]+(\.[0-9]*)?/ ;
///     operator : "list" | "head" | ... | '+' | '-' | ... ;
///     oexpr    : '(' <expr>* ')' ;
///     qexpr    : '{' <expr>* '}' ;
///     expr     : <number> | <operator> | <oexpr> | <qexpr> ;
///     lang     : /^/ <expr>* /$/ ;
/// ```
///
/// The root node is tagged `>` and is framed by two empty anchor nodes. Group
/// nodes keep their delimiters as `char` children, in source order.
///
/// # Errors
/// Lexing errors, unbalanced delimiters, mismatched delimiters, and groups
/// nested deeper than [`MAX_NESTING`].
///
/// # Example
/// ```
/// use lioliosh::{ast::SyntaxNode, interpreter::parser::parse};
///
/// let tree = parse("(+ 1 2)").unwrap();
/// assert_eq!(tree.tag(), ">");
/// assert_eq!(tree.children()[1].tag(), "expr|oexpr|>");
/// ```
pub fn parse(source: &str) -> ParseResult<Node> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    let mut children = vec![Node::leaf(tag::ANCHOR, "")];
    while let Some((token, span)) = iter.peek() {
        if let Token::CloseParen | Token::CloseBrace = token {
            return Err(ParseError::UnexpectedClosing { found:  closing_char(token),
                                                       offset: span.start, });
        }
        children.push(parse_expression(&mut iter, 0)?);
    }
    children.push(Node::leaf(tag::ANCHOR, ""));

    Ok(Node::branch(tag::ROOT, children))
}

/// Parses a single `expr` enclosed by `depth` open groups.
///
/// Closing delimiters are handled by the callers, which know what they expect
/// to see.
fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Span)>
{
    match tokens.next() {
        Some((Token::Number(text), _)) => Ok(Node::leaf(tag::NUMBER, text.as_str())),
        Some((Token::Operator(name), _)) => {
            let tag = if name.chars().count() == 1 {
                tag::SYMBOL_OPERATOR
            } else {
                tag::WORD_OPERATOR
            };
            Ok(Node::leaf(tag, name.as_str()))
        },
        Some((Token::OpenParen | Token::OpenBrace, span)) if depth >= MAX_NESTING => {
            tracing::debug!(offset = span.start, "nesting limit reached");
            Err(ParseError::NestingTooDeep { limit:  MAX_NESTING,
                                             offset: span.start, })
        },
        Some((Token::OpenParen, span)) => {
            parse_group(tokens, tag::ORDERED, ('(', Token::CloseParen), span.start, depth + 1)
        },
        Some((Token::OpenBrace, span)) => {
            parse_group(tokens, tag::QUOTED, ('{', Token::CloseBrace), span.start, depth + 1)
        },
        Some((token @ (Token::CloseParen | Token::CloseBrace), span)) => {
            Err(ParseError::UnexpectedClosing { found:  closing_char(token),
                                                offset: span.start, })
        },
        None => Err(ParseError::UnclosedGroup { opening: '(',
                                                offset:  0, }),
    }
}

/// Parses the body of a group after its opening delimiter.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opener.
/// - `group_tag`: Tag of the resulting node.
/// - `(opening, closing)`: The opener character and the token that closes it.
/// - `offset`: Position of the opener, for error reporting.
/// - `depth`: Number of open groups, this one included.
fn parse_group<'a, I>(tokens: &mut Peekable<I>,
                      group_tag: &str,
                      (opening, closing): (char, Token),
                      offset: usize,
                      depth: usize)
                      -> ParseResult<Node>
    where I: Iterator<Item = &'a (Token, Span)>
{
    let mut children = vec![Node::leaf(tag::DELIMITER, opening.to_string())];

    loop {
        match tokens.peek() {
            Some((token, _)) if *token == closing => {
                tokens.next();
                children.push(Node::leaf(tag::DELIMITER, closing_char(&closing).to_string()));
                return Ok(Node::branch(group_tag, children));
            },
            Some((token @ (Token::CloseParen | Token::CloseBrace), span)) => {
                return Err(ParseError::MismatchedClosing { expected: closing_char(&closing),
                                                           found:    closing_char(token),
                                                           offset:   span.start, });
            },
            Some(_) => children.push(parse_expression(tokens, depth)?),
            None => return Err(ParseError::UnclosedGroup { opening, offset }),
        }
    }
}

fn closing_char(token: &Token) -> char {
    token.delimiter().unwrap_or('?')
}
