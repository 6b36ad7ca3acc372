use std::fmt;

use indexmap::IndexMap;

use crate::compiler::codegen::instruction::Instruction;

const INDENT: &str = "  ";

/// The emitted `main` function.
///
/// Holds the instructions in emission order and the stack slot allocated for
/// each variable, in allocation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IrModule {
    instructions: Vec<Instruction>,
    slots:        IndexMap<String, String>,
}

impl IrModule {
    pub(crate) const fn new(instructions: Vec<Instruction>, slots: IndexMap<String, String>) -> Self {
        Self { instructions,
               slots }
    }

    /// The instructions of the function body, in order.
    #[must_use]
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Maps each variable name to its slot, e.g. `x` to `%x`.
    #[must_use]
    pub const fn slots(&self) -> &IndexMap<String, String> {
        &self.slots
    }

    /// Returns the slot of a variable, if one was allocated.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.slots.get(name).map(String::as_str)
    }

    /// The body instructions rendered as indented text lines.
    #[must_use]
    pub fn instruction_lines(&self) -> Vec<String> {
        self.instructions
            .iter()
            .map(|instruction| format!("{INDENT}{instruction}"))
            .collect()
    }

    /// The complete function, one line per element, ready to be written to a
    /// `.ll` file.
    ///
    /// # Example
    /// ```
    /// use letc::compiler::{codegen::emit, lexer::tokenize, parser::parse_program};
    ///
    /// let program = parse_program(&tokenize("let x = 1 + 2;")).unwrap();
    /// let module = emit(&program).unwrap();
    /// assert_eq!(module.lines(),
    ///            ["define i32 @main() {",
    ///             "entry:",
    ///             "  %1 = add i32 1, 2",
    ///             "  %x = alloca i32",
    ///             "  store i32 %1, i32* %x",
    ///             "  ret i32 0",
    ///             "}"]);
    /// ```
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.instructions.len() + 4);
        lines.push("define i32 @main() {".to_string());
        lines.push("entry:".to_string());
        lines.extend(self.instruction_lines());
        lines.push(format!("{INDENT}ret i32 0"));
        lines.push("}".to_string());
        lines
    }
}

impl fmt::Display for IrModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
