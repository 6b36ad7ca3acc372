/// Core parsing entry points.
///
/// Defines the parser result type, the expression entry point and the
/// whole-program loop.
pub mod core;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence levels: additive
/// (`+`, `-`) and multiplicative (`*`, `/`).
pub mod binary;

/// Factor parsing.
///
/// Handles unary minus, literals, identifiers and parenthesised expressions.
pub mod unary;

/// Statement parsing.
///
/// Parses `let <name> = <expression>;`.
pub mod statement;

/// Small helpers shared by the parser modules.
pub mod utils;

pub use self::core::{ParseResult, parse_expression, parse_program};
pub use binary::parse_term;
pub use statement::parse_statement;
pub use unary::parse_factor;
