use std::iter::Peekable;

use crate::{
    compiler::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
    error::{Expected, ParseError},
};

/// Consumes the next token, requiring it to be of the given kind.
///
/// # Errors
/// - `UnexpectedToken` if the next token has another kind.
/// - `UnexpectedEndOfInput` if there is no next token.
pub(in crate::compiler::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                  kind: TokenKind,
                                                  expected: Expected)
                                                  -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(unexpected(token, expected)),
        None => Err(ParseError::UnexpectedEndOfInput { expected }),
    }
}

/// Builds the error for a token that does not fit the grammar.
pub(in crate::compiler::parser) fn unexpected(token: &Token, expected: Expected) -> ParseError {
    ParseError::UnexpectedToken { expected,
                                  found: token.lexeme.clone(),
                                  line: token.line,
                                  position: token.offset }
}
