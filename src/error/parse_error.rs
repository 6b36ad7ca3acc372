use std::fmt;

/// What the parser was looking for when it gave up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// The `let` keyword that opens every statement.
    Let,
    /// The variable name following `let`.
    Identifier,
    /// The `=` between the name and the expression.
    Assign,
    /// The `;` terminating a statement.
    Semicolon,
    /// The `)` closing a parenthesised expression.
    ClosingParen,
    /// The start of a factor: an integer, an identifier, `-` or `(`.
    Factor,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let => f.write_str("'let'"),
            Self::Identifier => f.write_str("identifier after 'let'"),
            Self::Assign => f.write_str("'='"),
            Self::Semicolon => f.write_str("';'"),
            Self::ClosingParen => f.write_str("closing parenthesis ')'"),
            Self::Factor => f.write_str("an integer, identifier, '-' or '('"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during parsing.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    UnexpectedToken {
        /// What the grammar required.
        expected: Expected,
        /// The text of the token actually found.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// Byte offset of the offending token in the source.
        position: usize,
    },
    /// Reached the end of input while a token was still required.
    UnexpectedEndOfInput {
        /// What the grammar required.
        expected: Expected,
    },
}

impl ParseError {
    /// Returns what the parser expected to see.
    #[must_use]
    pub const fn expected(&self) -> Expected {
        match self {
            Self::UnexpectedToken { expected, .. } | Self::UnexpectedEndOfInput { expected } => {
                *expected
            },
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    position, } => write!(f,
                                                          "Error on line {line} (offset {position}): Expected {expected}, found '{found}'."),
            Self::UnexpectedEndOfInput { expected } => {
                write!(f, "Unexpected end of input: expected {expected}.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
