use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Program},
    compiler::{
        lexer::Token,
        parser::{binary::parse_additive, statement::parse_statement},
    },
    error::ParseError,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a full token sequence into a [`Program`].
///
/// Statements are parsed until the tokens run out. Parsing is all or
/// nothing: the first error ends the parse and no partial program is
/// returned.
///
/// Grammar: `program := statement*`
///
/// # Example
/// ```
/// use letc::compiler::{lexer::tokenize, parser::parse_program};
///
/// let program = parse_program(&tokenize("let a = 1; let b = a * 2;")).unwrap();
/// assert_eq!(program.len(), 2);
/// assert_eq!(program.statements[1].target(), "b");
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter)?);
    }

    debug!(statements = statements.len(), "parsed program");
    Ok(Program::new(statements))
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing. It begins at the lowest
/// precedence level, addition and subtraction, and descends from there.
///
/// Grammar: `expression := term (("+" | "-") term)*`
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    parse_additive(tokens)
}
