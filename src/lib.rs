//! # letc
//!
//! letc compiles a tiny statement language, sequences of
//! `let <name> = <expression>;` over 32-bit integer arithmetic, in four
//! stages: lexing, parsing, evaluation and IR emission.
//!
//! The evaluator and the IR emitter both consume the same AST and each owns
//! its own state, so independent compilations share nothing and can run on
//! separate threads.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::info_span;

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` types that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// and walked by both the evaluator and the code generator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Writes trees back out as source text or as an indented dump.
pub mod ast;
/// The four pipeline stages.
///
/// Ties together the lexer, parser, evaluator and code generator. Each stage
/// is usable on its own; [`compile`] runs them all.
pub mod compiler;
/// Provides typed errors for every stage.
///
/// # Responsibilities
/// - Defines one error enum per fallible stage (parser, evaluator, emitter).
/// - Wraps them in `CompileError` for the full pipeline.
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;

pub use crate::{
    ast::{BinaryOperator, Expr, Program, Statement},
    compiler::{
        codegen::{IrModule, emit, emit_ir},
        evaluator::{Binding, Environment, execute},
        lexer::{Token, TokenKind, tokenize},
        parser::parse_program,
    },
    error::CompileError,
};

/// Everything a successful run produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compilation {
    /// The token list of the source.
    pub tokens:   Vec<Token>,
    /// The parsed program.
    pub program:  Program,
    /// The value bound by each statement, in execution order.
    pub bindings: Vec<Binding>,
    /// The emitted IR.
    pub module:   IrModule,
}

/// Runs the whole pipeline on a source string.
///
/// The source is tokenized, parsed, executed in a fresh environment and
/// lowered to IR with a fresh context. The run is all or nothing: the first
/// error from any stage is returned and no partial output survives.
///
/// # Errors
/// Returns the parse, evaluation or emission error that stopped the run.
///
/// # Examples
/// ```
/// use letc::compile;
///
/// let compilation = compile("let x = 1 + 2; let y = x * 3;").unwrap();
/// assert_eq!(compilation.bindings[1].to_string(), "y = 9");
/// assert!(compilation.module.to_string().contains("%3 = mul i32 %2, 3"));
///
/// // 'y' is used before it is assigned.
/// assert!(compile("let x = y + 1;").is_err());
/// ```
pub fn compile(source: &str) -> Result<Compilation, CompileError> {
    let _span = info_span!("compile", bytes = source.len()).entered();

    let tokens = tokenize(source);
    let program = parse_program(&tokens)?;
    let bindings = execute(&program)?;
    let module = emit(&program)?;

    Ok(Compilation { tokens,
                     program,
                     bindings,
                     module })
}
