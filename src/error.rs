use std::fmt;

/// Parsing errors.
///
/// Defines every way the recursive-descent parser can reject a token
/// sequence: a token that does not fit the grammar, or input that ends where
/// a token is still required.
pub mod parse_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while executing a program:
/// undefined variables, division by zero, malformed literals and arithmetic
/// overflow.
pub mod eval_error;
/// Code generation errors.
///
/// The emitter only fails when an expression reads a variable that has no
/// stack slot yet.
pub mod emit_error;

pub use emit_error::EmitError;
pub use eval_error::EvalError;
pub use parse_error::{Expected, ParseError};

/// Any failure of the full pipeline.
///
/// Each variant wraps the error of exactly one stage. A run stops at the first
/// error, so a `CompileError` always describes a single problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    /// The token sequence is not a valid program.
    Parse(ParseError),
    /// The program failed while being executed.
    Eval(EvalError),
    /// The program could not be lowered to IR.
    Emit(EmitError),
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Eval(e) => write!(f, "Evaluation error: {e}"),
            Self::Emit(e) => write!(f, "Code generation error: {e}"),
        }
    }
}

impl std::error::Error for CompileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Eval(e) => Some(e),
            Self::Emit(e) => Some(e),
        }
    }
}

impl From<ParseError> for CompileError {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<EvalError> for CompileError {
    fn from(value: EvalError) -> Self {
        Self::Eval(value)
    }
}

impl From<EmitError> for CompileError {
    fn from(value: EmitError) -> Self {
        Self::Emit(value)
    }
}
