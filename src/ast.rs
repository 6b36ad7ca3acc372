use std::fmt;

/// Arithmetic operators supported by the language.
///
/// The set is closed: the parser only ever builds these four operators, which
/// lets both the evaluator and the code generator match on them
/// exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`, truncating signed division.
    Div,
}

impl BinaryOperator {
    /// Returns the source spelling of the operator.
    ///
    /// # Example
    /// ```
    /// use letc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Mul.symbol(), "*");
    /// ```
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// Returns the IR instruction name for the operator.
    ///
    /// # Example
    /// ```
    /// use letc::ast::BinaryOperator;
    ///
    /// assert_eq!(BinaryOperator::Div.opcode(), "sdiv");
    /// ```
    #[must_use]
    pub const fn opcode(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::Mul => "mul",
            Self::Div => "sdiv",
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// Every inner node exclusively owns its two children, so a tree can never
/// contain cycles or shared subtrees. Unary minus has no node of its own: the
/// parser rewrites `-e` into `0 - e`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A decimal integer literal, kept as its source text.
    IntegerLiteral {
        /// The digits as written.
        text: String,
    },
    /// Reference to a previously assigned variable.
    Identifier {
        /// Name of the variable.
        name: String,
    },
    /// A binary arithmetic operation.
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
}

impl Expr {
    /// Builds an integer literal node.
    pub fn integer(text: impl Into<String>) -> Self {
        Self::IntegerLiteral { text: text.into() }
    }

    /// Builds an identifier node.
    pub fn identifier(name: impl Into<String>) -> Self {
        Self::Identifier { name: name.into() }
    }

    /// Builds a binary operation node, boxing both operands.
    #[must_use]
    pub fn binary(op: BinaryOperator, left: Self, right: Self) -> Self {
        Self::BinaryOp { op,
                         left: Box::new(left),
                         right: Box::new(right) }
    }

    /// Builds the desugared form of unary minus, `0 - operand`.
    #[must_use]
    pub fn negate(operand: Self) -> Self {
        Self::binary(BinaryOperator::Sub, Self::integer("0"), operand)
    }

    /// Renders the expression as an indented tree.
    ///
    /// Each node takes one line. Inner nodes print their operator and leaves
    /// print their text; every level of depth adds two spaces of indentation.
    ///
    /// # Example
    /// ```
    /// use letc::ast::{BinaryOperator, Expr};
    ///
    /// let expr = Expr::binary(BinaryOperator::Add, Expr::integer("3"), Expr::identifier("x"));
    /// assert_eq!(expr.render_tree(), "+\n  3\n  x\n");
    /// ```
    #[must_use]
    pub fn render_tree(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, depth: usize) {
        out.push_str(&"  ".repeat(depth));
        match self {
            Self::IntegerLiteral { text } => out.push_str(text),
            Self::Identifier { name } => out.push_str(name),
            Self::BinaryOp { op, left, right } => {
                out.push_str(op.symbol());
                out.push('\n');
                left.write_tree(out, depth + 1);
                right.write_tree(out, depth + 1);
                return;
            },
        }
        out.push('\n');
    }
}

/// Writes the expression back as source text.
///
/// Binary operations are always parenthesised, so the output parses back into
/// an identical tree regardless of precedence.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IntegerLiteral { text } => f.write_str(text),
            Self::Identifier { name } => f.write_str(name),
            Self::BinaryOp { op, left, right } => write!(f, "({left} {op} {right})"),
        }
    }
}

/// A top-level statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Statement {
    /// `let <name> = <value>;`
    Assignment {
        /// The variable being bound.
        name:  String,
        /// The expression whose value is bound.
        value: Expr,
    },
}

impl Statement {
    /// Returns the name of the variable the statement assigns.
    #[must_use]
    pub fn target(&self) -> &str {
        match self {
            Self::Assignment { name, .. } => name,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assignment { name, value } => write!(f, "let {name} = {value};"),
        }
    }
}

/// A parsed program: statements in textual (and execution) order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    /// The statements of the program.
    pub statements: Vec<Statement>,
}

impl Program {
    /// Wraps a list of statements.
    #[must_use]
    pub const fn new(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Number of statements in the program.
    #[must_use]
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Whether the program has no statements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterates the statements in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl<'a> IntoIterator for &'a Program {
    type IntoIter = std::slice::Iter<'a, Statement>;
    type Item = &'a Statement;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// One statement per line.
impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{statement}")?;
        }
        Ok(())
    }
}
