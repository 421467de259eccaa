//! Integration tests for the complete front end.
//!
//! These tests verify that the pipeline works end to end from source text
//! through tokenization and parsing to a Program plus diagnostics.

use quill::{
    ast::{
        ast::{Expr, Stmt, StmtType},
        expressions::{BinaryExpr, CallExpr, FnExpr, NumberExpr},
        statements::{ExpressionStmt, LetStmt},
    },
    lexer::{
        lexer::{tokenize, Lexer},
        tokens::TokenKind,
    },
    parser::parser::parse,
};

#[test]
fn test_tokenize_let_binding() {
    let source = "let five = 5;".to_string();
    let tokens = tokenize(source, Some("test.quill".to_string()));

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
    assert_eq!(tokens[1].value, "five");
    assert_eq!(tokens[3].value, "5");
}

#[test]
fn test_parse_small_program() {
    let source = r#"
        let five = 5;
        let ten = 10;
        let add = fn(x, y) {
            return x + y;
        };
        add(five, ten);
    "#;

    let lexer = Lexer::new(source.to_string(), Some("test.quill".to_string()));
    let (program, errors) = parse(lexer);

    assert!(errors.is_empty(), "unexpected diagnostics: {:?}", errors);
    assert_eq!(program.statements.len(), 4);

    let names: Vec<&str> = program
        .iter()
        .take(3)
        .map(|stmt| {
            stmt.as_any()
                .downcast_ref::<LetStmt>()
                .unwrap()
                .identifier
                .as_str()
        })
        .collect();
    assert_eq!(names, vec!["five", "ten", "add"]);

    let add = program.statements[2]
        .as_any()
        .downcast_ref::<LetStmt>()
        .unwrap();
    let function = add.value.as_any().downcast_ref::<FnExpr>().unwrap();
    assert_eq!(function.parameters, vec!["x", "y"]);

    let call = program.statements[3]
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .unwrap()
        .expression
        .as_any()
        .downcast_ref::<CallExpr>()
        .unwrap();
    assert_eq!(call.arguments.len(), 2);
}

#[test]
fn test_precedence_end_to_end() {
    let lexer = Lexer::new("1 + 2 * 3;".to_string(), Some("test.quill".to_string()));
    let (program, errors) = parse(lexer);

    assert!(errors.is_empty());

    let root = program.statements[0]
        .as_any()
        .downcast_ref::<ExpressionStmt>()
        .unwrap()
        .expression
        .as_any()
        .downcast_ref::<BinaryExpr>()
        .unwrap();
    assert_eq!(root.operator.kind, TokenKind::Plus);

    let product = root.right.as_any().downcast_ref::<BinaryExpr>().unwrap();
    assert_eq!(product.operator.kind, TokenKind::Star);
    assert_eq!(
        product.right.as_any().downcast_ref::<NumberExpr>().unwrap().value,
        3
    );
}

#[test]
fn test_partial_program_with_diagnostics() {
    let source = "let x 5; let y = 7;";
    let lexer = Lexer::new(source.to_string(), Some("test.quill".to_string()));
    let (program, errors) = parse(lexer);

    // The bad statement is dropped but the parse completes
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].to_string(),
        "expected next token to be Assignment, got Number instead"
    );
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0].get_stmt_type(), StmtType::LetStmt);
}

#[test]
fn test_diagnostic_positions_point_into_source() {
    let source = "let x = @;";
    let lexer = Lexer::new(source.to_string(), Some("test.quill".to_string()));
    let (_, errors) = parse(lexer);

    assert_eq!(errors.len(), 1);
    let position = errors[0].get_position();
    assert_eq!(position.0 as usize, source.find('@').unwrap());
    assert_eq!(*position.1, "test.quill");
}

#[test]
fn test_reparse_is_deterministic() {
    let source = "let x = 1 + 2; if (x > 2) { x; } else { 0; }";

    let first = parse(Lexer::new(
        source.to_string(),
        Some("test.quill".to_string()),
    ));
    let second = parse(Lexer::new(
        source.to_string(),
        Some("test.quill".to_string()),
    ));

    assert_eq!(first.1.len(), second.1.len());
    assert_eq!(first.0.statements.len(), second.0.statements.len());
    for (a, b) in first.0.iter().zip(second.0.iter()) {
        assert_eq!(a.get_stmt_type(), b.get_stmt_type());
    }
}
