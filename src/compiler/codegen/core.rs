use indexmap::IndexMap;
use tracing::{debug, trace};

use crate::{
    ast::{Expr, Program, Statement},
    compiler::codegen::{
        instruction::{Instruction, Operand, Register},
        module::IrModule,
    },
    error::EmitError,
};

/// Result type used by the code generator.
pub type EmitResult<T> = Result<T, EmitError>;

/// State of a single emission run.
///
/// A context is consumed by [`CodegenContext::emit_program`], so register
/// numbers and slots can never leak from one compilation into the next.
#[derive(Debug, Clone)]
pub struct CodegenContext {
    next_register: u32,
    instructions:  Vec<Instruction>,
    slots:         IndexMap<String, String>,
}

impl Default for CodegenContext {
    fn default() -> Self {
        Self { next_register: 1,
               instructions:  Vec::new(),
               slots:         IndexMap::new(), }
    }
}

impl CodegenContext {
    /// Creates a context whose first register will be `%1`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Emits every statement of the program and returns the finished module.
    pub fn emit_program(mut self, program: &Program) -> EmitResult<IrModule> {
        for statement in program {
            self.emit_statement(statement)?;
        }
        debug!(instructions = self.instructions.len(),
               slots = self.slots.len(),
               registers = self.next_register - 1,
               "emitted IR");
        Ok(IrModule::new(self.instructions, self.slots))
    }

    /// Emits one assignment.
    ///
    /// The value is computed first. The variable's slot is allocated on its
    /// first assignment only; every assignment ends with a store into it.
    pub fn emit_statement(&mut self, statement: &Statement) -> EmitResult<()> {
        match statement {
            Statement::Assignment { name, value } => {
                let value = self.emit_expr(value)?;
                let slot = match self.slots.get(name) {
                    Some(slot) => slot.clone(),
                    None => {
                        let slot = format!("%{name}");
                        self.push(Instruction::Alloca { slot: slot.clone() });
                        self.slots.insert(name.clone(), slot.clone());
                        slot
                    },
                };
                self.push(Instruction::Store { value, slot });
                Ok(())
            },
        }
    }

    /// Emits the instructions computing an expression and returns the operand
    /// holding its value.
    ///
    /// # Errors
    /// `UndefinedVariable` if an identifier has no slot yet.
    pub fn emit_expr(&mut self, expr: &Expr) -> EmitResult<Operand> {
        match expr {
            Expr::IntegerLiteral { text } => Ok(Operand::Immediate(text.clone())),
            Expr::Identifier { name } => {
                let slot = self.slots
                               .get(name)
                               .cloned()
                               .ok_or_else(|| EmitError::UndefinedVariable { name: name.clone() })?;
                let dest = self.fresh_register();
                self.push(Instruction::Load { dest, slot });
                Ok(Operand::Register(dest))
            },
            Expr::BinaryOp { op, left, right } => {
                let lhs = self.emit_expr(left)?;
                let rhs = self.emit_expr(right)?;
                let dest = self.fresh_register();
                self.push(Instruction::Binary { dest,
                                                op: *op,
                                                lhs,
                                                rhs });
                Ok(Operand::Register(dest))
            },
        }
    }

    fn fresh_register(&mut self) -> Register {
        let register = Register(self.next_register);
        self.next_register += 1;
        register
    }

    fn push(&mut self, instruction: Instruction) {
        trace!(%instruction, "emit");
        self.instructions.push(instruction);
    }
}

/// Emits a program with a fresh context.
///
/// # Example
/// ```
/// use letc::compiler::{codegen::emit, lexer::tokenize, parser::parse_program};
///
/// let program = parse_program(&tokenize("let x = 1; let x = x + 1;")).unwrap();
/// let module = emit(&program).unwrap();
/// assert_eq!(module.slot("x"), Some("%x"));
/// assert_eq!(module.instructions().len(), 5);
/// ```
pub fn emit(program: &Program) -> EmitResult<IrModule> {
    CodegenContext::new().emit_program(program)
}

/// Emits a program and renders the complete function as text lines.
pub fn emit_ir(program: &Program) -> EmitResult<Vec<String>> {
    emit(program).map(|module| module.lines())
}
