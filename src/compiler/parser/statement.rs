use std::iter::Peekable;

use tracing::trace;

use crate::{
    ast::Statement,
    compiler::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
    error::{Expected, ParseError},
};

/// Parses a single assignment statement.
///
/// Grammar: `statement := "let" IDENTIFIER "=" expression ";"`
///
/// # Errors
/// Returns a `ParseError` if the `let` keyword, the variable name, the `=`
/// or the terminating `;` is missing, or if the expression fails to parse.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.is_keyword("let") => {},
        Some(token) => return Err(unexpected(token, Expected::Let)),
        None => return Err(ParseError::UnexpectedEndOfInput { expected: Expected::Let }),
    }

    let name = expect(tokens, TokenKind::Identifier, Expected::Identifier)?.lexeme.clone();
    expect(tokens, TokenKind::Assign, Expected::Assign)?;
    let value = parse_expression(tokens)?;
    expect(tokens, TokenKind::Semicolon, Expected::Semicolon)?;

    trace!(%name, %value, "parsed assignment");
    Ok(Statement::Assignment { name, value })
}
