/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a flat list of tokens,
/// each carrying its category, its exact text and its location. Scanning is
/// total: characters that fit no rule become `Unknown` tokens.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// A recursive-descent parser with one token of lookahead. It validates the
/// grammar and reports the first syntax error it meets.
pub mod parser;
/// The evaluator module executes the AST.
///
/// Walks the statements in order against a per-run environment and records
/// the value bound by each assignment.
pub mod evaluator;
/// The codegen module lowers the AST to textual IR.
///
/// Produces a linear instruction list with numbered virtual registers and
/// one stack slot per variable.
pub mod codegen;
