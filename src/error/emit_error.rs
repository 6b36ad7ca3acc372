use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during IR emission.
pub enum EmitError {
    /// An expression reads a variable that has no stack slot yet.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UndefinedVariable { name } => {
                write!(f, "Undefined variable '{name}' has no stack slot.")
            },
        }
    }
}

impl std::error::Error for EmitError {}
