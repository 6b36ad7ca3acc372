use std::fmt;

use crate::ast::BinaryOperator;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while executing a program.
pub enum EvalError {
    /// Tried to read a variable that was never assigned.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// An integer literal could not be represented as a 32-bit signed value.
    MalformedLiteral {
        /// The literal as written in the source.
        text: String,
    },
    /// Arithmetic overflowed the 32-bit signed range.
    Overflow {
        /// Left operand.
        left:  i32,
        /// The operator that overflowed.
        op:    BinaryOperator,
        /// Right operand.
        right: i32,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::MalformedLiteral { text } => {
                write!(f, "Malformed integer literal '{text}'.")
            },
            Self::Overflow { left, op, right } => write!(f,
                                                         "Integer overflow while computing {left} {op} {right}."),
        }
    }
}

impl std::error::Error for EvalError {}
