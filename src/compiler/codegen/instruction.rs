use std::fmt;

use crate::ast::BinaryOperator;

/// A numbered virtual register, printed as `%<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Register(pub u32);

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "%{}", self.0)
    }
}

/// A value an instruction can consume.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operand {
    /// An integer literal used directly, spelled as in the source.
    Immediate(String),
    /// The result of an earlier instruction.
    Register(Register),
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Immediate(text) => f.write_str(text),
            Self::Register(register) => write!(f, "{register}"),
        }
    }
}

/// One IR instruction. Slots are stored with their leading `%`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// `%x = alloca i32`
    Alloca {
        /// The slot being allocated.
        slot: String,
    },
    /// `store i32 <value>, i32* %x`
    Store {
        /// The value written.
        value: Operand,
        /// The destination slot.
        slot:  String,
    },
    /// `%n = load i32, i32* %x`
    Load {
        /// The register receiving the value.
        dest: Register,
        /// The slot read from.
        slot: String,
    },
    /// `%n = <op> i32 <lhs>, <rhs>`
    Binary {
        /// The register receiving the result.
        dest: Register,
        /// The arithmetic operator.
        op:   BinaryOperator,
        /// Left operand.
        lhs:  Operand,
        /// Right operand.
        rhs:  Operand,
    },
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alloca { slot } => write!(f, "{slot} = alloca i32"),
            Self::Store { value, slot } => write!(f, "store i32 {value}, i32* {slot}"),
            Self::Load { dest, slot } => write!(f, "{dest} = load i32, i32* {slot}"),
            Self::Binary { dest, op, lhs, rhs } => {
                write!(f, "{dest} = {} i32 {lhs}, {rhs}", op.opcode())
            },
        }
    }
}
