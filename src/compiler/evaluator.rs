/// Core evaluation logic and the binding environment.
///
/// Contains the `Environment`, statement execution and expression
/// evaluation.
pub mod core;

/// Binary operator evaluation.
///
/// Implements checked 32-bit arithmetic for `+`, `-`, `*` and `/`.
pub mod binary;

pub use self::core::{Binding, Environment, EvalResult, execute};
