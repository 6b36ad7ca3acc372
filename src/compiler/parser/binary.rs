use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    compiler::{
        lexer::{Token, TokenKind},
        parser::{core::ParseResult, unary::parse_factor},
    },
};

/// Parses addition and subtraction.
///
/// Both operators share one precedence level and associate to the left, so
/// `10 - 3 - 2` becomes `(10 - 3) - 2`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_term(tokens)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind)
          && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
    {
        tokens.next();
        let right = parse_term(tokens)?;
        left = Expr::binary(op, left, right);
    }
    Ok(left)
}

/// Parses multiplication and division.
///
/// Binds tighter than [`parse_additive`] and also associates to the left.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
pub fn parse_term<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    let mut left = parse_factor(tokens)?;
    while let Some(token) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token.kind)
          && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
    {
        tokens.next();
        let right = parse_factor(tokens)?;
        left = Expr::binary(op, left, right);
    }
    Ok(left)
}

const fn token_to_binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    match kind {
        TokenKind::Plus => Some(BinaryOperator::Add),
        TokenKind::Minus => Some(BinaryOperator::Sub),
        TokenKind::Star => Some(BinaryOperator::Mul),
        TokenKind::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
