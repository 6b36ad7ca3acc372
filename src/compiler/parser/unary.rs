use std::iter::Peekable;

use crate::{
    ast::Expr,
    compiler::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
    error::{Expected, ParseError},
};

/// Parses a factor, the tightest-binding level of the grammar.
///
/// Unary minus is right-recursive and binds tighter than any binary
/// operator. It has no node of its own: `-e` is rewritten to `0 - e`.
///
/// Grammar:
/// ```text
///     factor := "-" factor
///             | INTEGER
///             | IDENTIFIER
///             | "(" expression ")"
/// ```
///
/// # Errors
/// - `UnexpectedToken` if the next token cannot start a factor, or a `(` is
///   not matched by `)`.
/// - `UnexpectedEndOfInput` if the tokens run out.
pub fn parse_factor<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: Expected::Factor });
    };

    match token.kind {
        TokenKind::Minus => {
            let operand = parse_factor(tokens)?;
            Ok(Expr::negate(operand))
        },
        TokenKind::Integer => Ok(Expr::integer(token.lexeme.as_str())),
        TokenKind::Identifier => Ok(Expr::identifier(token.lexeme.as_str())),
        TokenKind::LParen => {
            let inner = parse_expression(tokens)?;
            expect(tokens, TokenKind::RParen, Expected::ClosingParen)?;
            Ok(inner)
        },
        _ => Err(unexpected(token, Expected::Factor)),
    }
}
