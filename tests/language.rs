use letc::{
    BinaryOperator, CompileError, Environment, Expr, Statement, TokenKind, compile,
    compiler::{lexer::render_tokens, parser::parse_program},
    error::{EmitError, EvalError, Expected, ParseError},
    execute, tokenize,
};

fn last_value(src: &str, name: &str) -> i32 {
    let compilation = compile(src).unwrap_or_else(|e| panic!("Script failed: {e}"));
    compilation.bindings
               .iter()
               .rev()
               .find(|binding| binding.name == name)
               .unwrap_or_else(|| panic!("no binding for '{name}'"))
               .value
}

fn eval_error(src: &str) -> EvalError {
    match compile(src) {
        Err(CompileError::Eval(e)) => e,
        Err(other) => panic!("expected an evaluation error, got: {other}"),
        Ok(_) => panic!("Script succeeded but was expected to fail"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match parse_program(&tokenize(src)) {
        Err(e) => e,
        Ok(program) => panic!("parsed but was expected to fail:\n{program}"),
    }
}

#[test]
fn tokens_carry_kind_and_lexeme() {
    let tokens = tokenize("let x = 3 + 5 * (2 - 1);");
    let listing = render_tokens(&tokens);

    assert_eq!(listing,
               "1 KEYWORD let\n2 IDENTIFIER x\n3 ASSIGN =\n4 INTEGER 3\n5 PLUS +\n6 INTEGER 5\n\
                7 STAR *\n8 LPAREN (\n9 INTEGER 2\n10 MINUS -\n11 INTEGER 1\n12 RPAREN )\n\
                13 SEMICOLON ;\n");
}

#[test]
fn keyword_is_only_exact_let() {
    let kinds: Vec<_> = tokenize("let letter lets Let").into_iter()
                                                      .map(|t| t.kind)
                                                      .collect();
    assert_eq!(kinds,
               [TokenKind::Keyword,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier]);
}

#[test]
fn letters_and_digits_split_into_separate_tokens() {
    let tokens = tokenize("x1");
    assert_eq!(tokens.len(), 2);
    assert_eq!((tokens[0].kind, tokens[0].lexeme.as_str()), (TokenKind::Identifier, "x"));
    assert_eq!((tokens[1].kind, tokens[1].lexeme.as_str()), (TokenKind::Integer, "1"));
}

#[test]
fn unknown_characters_do_not_stop_the_scan() {
    let tokens = tokenize("let a = 1 @ 2 % é;");
    let unknown: Vec<_> = tokens.iter()
                                .filter(|t| t.kind == TokenKind::Unknown)
                                .map(|t| t.lexeme.as_str())
                                .collect();
    assert_eq!(unknown, ["@", "%", "é"]);
    assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Semicolon));
}

#[test]
fn slash_is_a_division_token() {
    let tokens = tokenize("8/2");
    assert_eq!(tokens[1].kind, TokenKind::Slash);
}

#[test]
fn tokens_track_lines_and_offsets() {
    let tokens = tokenize("let a = 1;\n  let b = a;");
    let b = &tokens[6];
    assert_eq!(b.lexeme, "b");
    assert_eq!(b.line, 2);
    assert_eq!(b.offset, 17);
}

#[test]
fn empty_source_is_an_empty_program() {
    let compilation = compile("  \n\t ").unwrap();
    assert!(compilation.tokens.is_empty());
    assert!(compilation.program.is_empty());
    assert!(compilation.bindings.is_empty());
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(last_value("let x = 2 + 3 * 4;", "x"), 14);
}

#[test]
fn subtraction_is_left_associative() {
    assert_eq!(last_value("let x = 10 - 3 - 2;", "x"), 5);
    assert_eq!(last_value("let x = 100 / 10 / 5;", "x"), 2);
}

#[test]
fn unary_minus_composes_with_binary_operators() {
    assert_eq!(last_value("let x = -3 + 5 * (2 - 1);", "x"), 2);
    assert_eq!(last_value("let x = --4;", "x"), 4);
    assert_eq!(last_value("let x = 2 * -3;", "x"), -6);
}

#[test]
fn unary_minus_desugars_to_subtraction_from_zero() {
    let program = parse_program(&tokenize("let x = -y;")).unwrap();
    let Statement::Assignment { value, .. } = &program.statements[0];
    assert_eq!(*value,
               Expr::binary(BinaryOperator::Sub, Expr::integer("0"), Expr::identifier("y")));
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(last_value("let x = (2 + 3) * 4;", "x"), 20);
}

#[test]
fn division_truncates_toward_zero() {
    assert_eq!(last_value("let x = 7 / 2;", "x"), 3);
    assert_eq!(last_value("let x = -7 / 2;", "x"), -3);
}

#[test]
fn variables_are_visible_to_later_statements() {
    let compilation = compile("let x = 1 + 2; let y = x * 3; let x = y - x;").unwrap();
    let trace: Vec<_> = compilation.bindings.iter().map(ToString::to_string).collect();
    assert_eq!(trace, ["x = 3", "y = 9", "x = 6"]);
}

#[test]
fn undefined_variable_fails_without_binding() {
    let program = parse_program(&tokenize("let x = y + 1;")).unwrap();
    let mut env = Environment::new();

    assert_eq!(env.execute(&program),
               Err(EvalError::UndefinedVariable { name: "y".to_string() }));
    assert_eq!(env.get("x"), None);
    assert!(env.is_empty());
}

#[test]
fn failing_statement_keeps_earlier_bindings_only() {
    let program = parse_program(&tokenize("let a = 1; let b = a / 0; let c = 3;")).unwrap();
    let mut env = Environment::new();

    assert_eq!(env.execute(&program), Err(EvalError::DivisionByZero));
    assert_eq!(env.get("a"), Some(1));
    assert_eq!(env.get("b"), None);
    assert_eq!(env.get("c"), None);
}

#[test]
fn division_by_zero_is_error() {
    assert_eq!(eval_error("let x = 1 / 0;"), EvalError::DivisionByZero);
    assert_eq!(eval_error("let z = 0; let x = 5 / z;"), EvalError::DivisionByZero);
}

#[test]
fn oversized_literal_is_malformed() {
    assert_eq!(eval_error("let x = 99999999999;"),
               EvalError::MalformedLiteral { text: "99999999999".to_string() });
}

#[test]
fn overflow_is_reported() {
    assert_eq!(eval_error("let x = 2147483647 + 1;"),
               EvalError::Overflow { left:  i32::MAX,
                                     op:    BinaryOperator::Add,
                                     right: 1, });
    assert!(matches!(eval_error("let m = -2147483647 - 1; let x = m / -1;"),
                     EvalError::Overflow { op: BinaryOperator::Div, .. }));
}

#[test]
fn each_run_starts_with_a_fresh_environment() {
    let first = parse_program(&tokenize("let x = 1;")).unwrap();
    let second = parse_program(&tokenize("let y = x;")).unwrap();

    assert!(execute(&first).is_ok());
    assert_eq!(execute(&second),
               Err(EvalError::UndefinedVariable { name: "x".to_string() }));
}

#[test]
fn missing_let_is_error() {
    assert_eq!(parse_error("x = 1;"),
               ParseError::UnexpectedToken { expected: Expected::Let,
                                             found:    "x".to_string(),
                                             line:     1,
                                             position: 0, });
}

#[test]
fn missing_identifier_is_error() {
    assert_eq!(parse_error("let = 1;").expected(), Expected::Identifier);
    assert_eq!(parse_error("let 5 = 1;").expected(), Expected::Identifier);
}

#[test]
fn missing_assign_is_error() {
    assert_eq!(parse_error("let x 1;").expected(), Expected::Assign);
}

#[test]
fn missing_semicolon_is_error() {
    assert_eq!(parse_error("let x = 1 let y = 2;"),
               ParseError::UnexpectedToken { expected: Expected::Semicolon,
                                             found:    "let".to_string(),
                                             line:     1,
                                             position: 10, });
    assert_eq!(parse_error("let x = 1"),
               ParseError::UnexpectedEndOfInput { expected: Expected::Semicolon });
}

#[test]
fn unmatched_parenthesis_is_error() {
    assert_eq!(parse_error("let x = (1 + 2;").expected(), Expected::ClosingParen);
    assert_eq!(parse_error("let x = (1 + 2"),
               ParseError::UnexpectedEndOfInput { expected: Expected::ClosingParen });
}

#[test]
fn unexpected_factor_is_error() {
    assert_eq!(parse_error("let x = 1 + ;").expected(), Expected::Factor);
    assert_eq!(parse_error("let x = @;"),
               ParseError::UnexpectedToken { expected: Expected::Factor,
                                             found:    "@".to_string(),
                                             line:     1,
                                             position: 8, });
    assert_eq!(parse_error("let x ="),
               ParseError::UnexpectedEndOfInput { expected: Expected::Factor });
}

#[test]
fn parse_errors_abort_the_whole_run() {
    let err = compile("let a = 1; let b = ;").unwrap_err();
    assert!(matches!(err, CompileError::Parse(_)));
    assert!(err.to_string().starts_with("Parse error: Error on line 1"));
}

#[test]
fn reserialized_programs_parse_to_the_same_tree() {
    for src in ["let x = 2 + 3 * 4;",
                "let x = 10 - 3 - 2; let y = x / (x - 3);",
                "let x = -3 + 5 * (2 - 1);\nlet total = x * -x;"]
    {
        let program = parse_program(&tokenize(src)).unwrap();
        let printed = program.to_string();
        let reparsed = parse_program(&tokenize(&printed)).unwrap();

        assert_eq!(reparsed.len(), program.len());
        let names: Vec<_> = reparsed.iter().map(Statement::target).collect();
        let expected: Vec<_> = program.iter().map(Statement::target).collect();
        assert_eq!(names, expected);
        assert_eq!(reparsed, program, "round trip changed the tree of:\n{printed}");
    }
}

#[test]
fn expression_tree_rendering() {
    let program = parse_program(&tokenize("let x = 3 + 5 * (2 - 1);")).unwrap();
    let Statement::Assignment { value, .. } = &program.statements[0];

    assert_eq!(value.render_tree(), "+\n  3\n  *\n    5\n    -\n      2\n      1\n");
}

#[test]
fn compile_error_wraps_emit_errors() {
    let err = CompileError::from(EmitError::UndefinedVariable { name: "q".to_string() });
    assert_eq!(err.to_string(),
               "Code generation error: Undefined variable 'q' has no stack slot.");
    assert!(std::error::Error::source(&err).is_some());
}
