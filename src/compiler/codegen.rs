//! IR generation.
//!
//! Lowers the AST into a single LLVM-style `main` function. Every variable
//! gets one stack slot (`alloca`) on its first assignment and is read back
//! with `load`. Intermediate values live in numbered virtual registers that
//! are never reused.

/// The per-run emission context and the public entry points.
pub mod core;

/// Instructions, operands and registers.
pub mod instruction;

/// The emitted function and its rendering.
pub mod module;

pub use self::core::{CodegenContext, EmitResult, emit, emit_ir};
pub use instruction::{Instruction, Operand, Register};
pub use module::IrModule;
