use std::{collections::HashMap, fmt};

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Program, Statement},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// A variable binding recorded while executing a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The variable that was assigned.
    pub name:  String,
    /// The value it was assigned.
    pub value: i32,
}

impl Binding {
    /// Creates a binding.
    pub fn new(name: impl Into<String>, value: i32) -> Self {
        Self { name: name.into(),
               value }
    }
}

impl fmt::Display for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

/// Stores the variables of one program run.
///
/// Each run owns its own environment, so independent programs never see each
/// other's variables. Assignment overwrites; nothing is ever removed.
#[derive(Debug, Clone, Default)]
pub struct Environment {
    variables: HashMap<String, i32>,
}

impl Environment {
    /// Creates an empty environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value of a variable, if it has been assigned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<i32> {
        self.variables.get(name).copied()
    }

    /// Binds `value` to `name`, replacing any earlier value.
    pub fn bind(&mut self, name: &str, value: i32) {
        self.variables.insert(name.to_string(), value);
    }

    /// Number of distinct variables bound so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable has been bound yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Executes every statement of the program in order.
    ///
    /// Returns one [`Binding`] per executed statement. The first failing
    /// statement stops execution; its target is left untouched.
    ///
    /// # Example
    /// ```
    /// use letc::compiler::{evaluator::Environment, lexer::tokenize, parser::parse_program};
    ///
    /// let program = parse_program(&tokenize("let x = 2 + 3 * 4; let x = x - 4;")).unwrap();
    /// let mut env = Environment::new();
    /// let trace = env.execute(&program).unwrap();
    ///
    /// assert_eq!(trace.len(), 2);
    /// assert_eq!(env.get("x"), Some(10));
    /// ```
    pub fn execute(&mut self, program: &Program) -> EvalResult<Vec<Binding>> {
        let bindings = program.iter()
                              .map(|statement| self.execute_statement(statement))
                              .collect::<EvalResult<Vec<_>>>()?;
        debug!(bindings = bindings.len(), variables = self.len(), "executed program");
        Ok(bindings)
    }

    /// Executes a single statement and returns the binding it produced.
    pub fn execute_statement(&mut self, statement: &Statement) -> EvalResult<Binding> {
        match statement {
            Statement::Assignment { name, value } => {
                let value = self.eval(value)?;
                self.bind(name, value);
                trace!(%name, value, "bound variable");
                Ok(Binding::new(name.as_str(), value))
            },
        }
    }

    /// Evaluates an expression against the current bindings.
    ///
    /// The left operand of a binary operation is always evaluated before the
    /// right one.
    ///
    /// # Errors
    /// - `MalformedLiteral` if a literal does not fit in an `i32`.
    /// - `UndefinedVariable` if an identifier has not been assigned.
    /// - `DivisionByZero` or `Overflow` from the arithmetic itself.
    pub fn eval(&self, expr: &Expr) -> EvalResult<i32> {
        match expr {
            Expr::IntegerLiteral { text } => {
                text.parse()
                    .map_err(|_| EvalError::MalformedLiteral { text: text.clone() })
            },
            Expr::Identifier { name } => {
                self.get(name)
                    .ok_or_else(|| EvalError::UndefinedVariable { name: name.clone() })
            },
            Expr::BinaryOp { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                Self::eval_binary_op(*op, left, right)
            },
        }
    }
}

/// Executes a program in a fresh environment and returns its bindings.
///
/// # Example
/// ```
/// use letc::compiler::{evaluator::execute, lexer::tokenize, parser::parse_program};
///
/// let program = parse_program(&tokenize("let x = -3 + 5 * (2 - 1);")).unwrap();
/// let trace = execute(&program).unwrap();
/// assert_eq!(trace[0].to_string(), "x = 2");
/// ```
pub fn execute(program: &Program) -> EvalResult<Vec<Binding>> {
    Environment::new().execute(program)
}
