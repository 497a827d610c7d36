//! Integration tests for the full front end.
//!
//! These tests drive the pipeline end-to-end, from source text through
//! tokenization and parsing to the finished syntax tree, and pin down the
//! grammar's observable properties: precedence, associativity, postfix
//! chaining, literal classification, and failure behavior.

use couch_lang::{
    ast::{
        ast::{BinaryOp, PrefixOp, Program},
        expressions::Expr,
        statements::Stmt,
    },
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
    render_error,
};

/// Parses a source consisting of a single expression statement and returns
/// the expression.
fn parse_single_expr(source: &str) -> Expr {
    let program: Program = parse(source).unwrap();
    assert_eq!(program.body.len(), 1, "expected one statement in {source:?}");
    match program.body.into_iter().next().unwrap() {
        Stmt::Expression(statement) => statement.expression,
        other => panic!("expected expression statement, got {:?}", other),
    }
}

fn symbol_name(expr: &Expr) -> &str {
    match expr {
        Expr::Symbol(symbol) => &symbol.name,
        other => panic!("expected symbol, got {:?}", other),
    }
}

#[test]
fn test_statement_counts_match_source() {
    let source = r#"
        let total = 0;
        fn accumulate(mut total, amount) {
            total += amount;
            return total;
        }
        total = accumulate(total, 5);
    "#;
    let program = parse(source).unwrap();

    assert_eq!(program.body.len(), 3);
    let Stmt::FnDecl(function) = &program.body[1] else {
        panic!("expected function declaration, got {:?}", program.body[1]);
    };
    assert_eq!(function.body.body.len(), 2);
}

#[test]
fn test_subtraction_is_right_associative() {
    // The grammar's additive rule is right-recursive, so a chain of one
    // operator nests to the right.
    let expr = parse_single_expr("a - b - c;");

    let Expr::Binary(outer) = &expr else {
        panic!("expected binary expression, got {:?}", expr);
    };
    assert_eq!(outer.op, BinaryOp::Subtract);
    assert_eq!(symbol_name(&outer.left), "a");

    let Expr::Binary(inner) = &*outer.right else {
        panic!("expected nested binary on the right, got {:?}", outer.right);
    };
    assert_eq!(inner.op, BinaryOp::Subtract);
    assert_eq!(symbol_name(&inner.left), "b");
    assert_eq!(symbol_name(&inner.right), "c");
}

#[test]
fn test_equality_is_right_associative() {
    let expr = parse_single_expr("a == b != c;");

    let Expr::Binary(outer) = &expr else {
        panic!("expected binary expression, got {:?}", expr);
    };
    assert_eq!(outer.op, BinaryOp::Equals);

    let Expr::Binary(inner) = &*outer.right else {
        panic!("expected nested binary on the right, got {:?}", outer.right);
    };
    assert_eq!(inner.op, BinaryOp::NotEquals);
}

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    let expr = parse_single_expr("1 + 2 * 3;");

    let Expr::Binary(outer) = &expr else {
        panic!("expected binary expression, got {:?}", expr);
    };
    assert_eq!(outer.op, BinaryOp::Add);
    let Expr::Integer(left) = &*outer.left else {
        panic!("expected integer on the left, got {:?}", outer.left);
    };
    assert_eq!(left.value, 1);

    let Expr::Binary(product) = &*outer.right else {
        panic!("expected product on the right, got {:?}", outer.right);
    };
    assert_eq!(product.op, BinaryOp::Multiply);
}

#[test]
fn test_equality_binds_looser_than_addition() {
    let expr = parse_single_expr("a + b == c;");

    let Expr::Binary(outer) = &expr else {
        panic!("expected binary expression, got {:?}", expr);
    };
    assert_eq!(outer.op, BinaryOp::Equals);
    let Expr::Binary(sum) = &*outer.left else {
        panic!("expected sum on the left, got {:?}", outer.left);
    };
    assert_eq!(sum.op, BinaryOp::Add);
}

#[test]
fn test_postfix_chain() {
    // a.b[0](c, d) folds left-to-right into Call(Index(Member(a, b), 0), [c, d])
    let expr = parse_single_expr("a.b[0](c, d);");

    let Expr::Call(call) = &expr else {
        panic!("expected call, got {:?}", expr);
    };
    assert_eq!(call.arguments.len(), 2);
    assert_eq!(symbol_name(&call.arguments[0]), "c");
    assert_eq!(symbol_name(&call.arguments[1]), "d");

    let Expr::Index(index) = &*call.callee else {
        panic!("expected index as callee, got {:?}", call.callee);
    };
    let Expr::Integer(subscript) = &*index.index else {
        panic!("expected integer subscript, got {:?}", index.index);
    };
    assert_eq!(subscript.value, 0);

    let Expr::Member(member) = &*index.object else {
        panic!("expected member access, got {:?}", index.object);
    };
    assert_eq!(member.name, "b");
    assert_eq!(symbol_name(&member.object), "a");
}

#[test]
fn test_chained_member_access() {
    let expr = parse_single_expr("a.b.c;");

    let Expr::Member(outer) = &expr else {
        panic!("expected member access, got {:?}", expr);
    };
    assert_eq!(outer.name, "c");
    let Expr::Member(inner) = &*outer.object else {
        panic!("expected nested member access, got {:?}", outer.object);
    };
    assert_eq!(inner.name, "b");
}

#[test]
fn test_chained_calls() {
    let expr = parse_single_expr("f()();");

    let Expr::Call(outer) = &expr else {
        panic!("expected call, got {:?}", expr);
    };
    assert!(matches!(*outer.callee, Expr::Call(_)));
}

#[test]
fn test_prefix_operators_stack() {
    let expr = parse_single_expr("!-x;");

    let Expr::Prefix(outer) = &expr else {
        panic!("expected prefix expression, got {:?}", expr);
    };
    assert_eq!(outer.op, PrefixOp::Not);
    let Expr::Prefix(inner) = &*outer.operand else {
        panic!("expected nested prefix, got {:?}", outer.operand);
    };
    assert_eq!(inner.op, PrefixOp::Negate);
}

#[test]
fn test_prefix_binds_tighter_than_binary() {
    let expr = parse_single_expr("-a * b;");

    let Expr::Binary(product) = &expr else {
        panic!("expected binary expression, got {:?}", expr);
    };
    assert_eq!(product.op, BinaryOp::Multiply);
    assert!(matches!(*product.left, Expr::Prefix(_)));
}

#[test]
fn test_prefix_binds_looser_than_postfix() {
    let expr = parse_single_expr("-a.b;");

    let Expr::Prefix(prefix) = &expr else {
        panic!("expected prefix expression, got {:?}", expr);
    };
    assert!(matches!(*prefix.operand, Expr::Member(_)));
}

#[test]
fn test_float_and_integer_literals() {
    let float_expr = parse_single_expr("3.14;");
    let Expr::Float(float) = &float_expr else {
        panic!("expected float literal, got {:?}", float_expr);
    };
    assert_eq!(float.value, 3.14);

    let integer_expr = parse_single_expr("42;");
    let Expr::Integer(integer) = &integer_expr else {
        panic!("expected integer literal, got {:?}", integer_expr);
    };
    assert_eq!(integer.value, 42);
}

#[test]
fn test_integer_dot_is_an_error() {
    // `42.` lexes as Integer then Dot; the dot then demands a member name
    let result = parse("42.;");

    assert!(result.is_err());
    assert!(!result.unwrap_err().is_lexical());
}

#[test]
fn test_string_literal_with_escapes() {
    let expr = parse_single_expr(r#""line one\nline two";"#);

    let Expr::String(string) = &expr else {
        panic!("expected string literal, got {:?}", expr);
    };
    assert_eq!(string.value, "line one\nline two");
}

#[test]
fn test_unterminated_constructs_fail() {
    assert!(parse("fn f( {").is_err());
    assert!(parse("(1 + 2").is_err());
    assert!(parse("while x {").is_err());
    assert!(parse("f(1, 2").is_err());
    assert!(parse("a[1").is_err());
}

#[test]
fn test_trailing_commas_accepted() {
    let program = parse("fn f(a, b,) { }").unwrap();
    let Stmt::FnDecl(function) = &program.body[0] else {
        panic!("expected function declaration, got {:?}", program.body[0]);
    };
    let names: Vec<&str> = function
        .parameters
        .iter()
        .map(|parameter| parameter.name.as_str())
        .collect();
    assert_eq!(names, vec!["a", "b"]);

    let expr = parse_single_expr("f(1, 2,);");
    let Expr::Call(call) = &expr else {
        panic!("expected call, got {:?}", expr);
    };
    assert_eq!(call.arguments.len(), 2);
}

#[test]
fn test_reparse_is_idempotent() {
    let source = r#"
        fn classify(n) {
            if n == 0 {
                return "zero";
            }
            return "other";
        }
        let mut i = 0;
        while i != 3 {
            classify(i);
            i += 1;
        }
    "#;

    let first = parse(source).unwrap();
    let second = parse(source).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_lexical_and_parse_errors_distinguished() {
    let lexical = parse("let a = @;").unwrap_err();
    assert!(lexical.is_lexical());

    let syntactic = parse("let a = ;").unwrap_err();
    assert!(!syntactic.is_lexical());
}

#[test]
fn test_tokenize_entry_point() {
    let tokens = tokenize("let x = 1;").unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Let,
            TokenKind::Identifier,
            TokenKind::Assignment,
            TokenKind::Integer,
            TokenKind::Semicolon,
            TokenKind::EOF,
        ]
    );
}

#[test]
fn test_assignment_target_not_restricted() {
    // Any expression is accepted as an assignment target at this layer
    assert!(parse("a.b[0] = 5;").is_ok());
    assert!(parse("1 = 2;").is_ok());
    assert!(parse("f() += 1;").is_ok());
}

#[test]
fn test_if_expression_value_position() {
    let program = parse("let sign = if negative { } else { };").unwrap();

    let Stmt::Let(statement) = &program.body[0] else {
        panic!("expected let statement, got {:?}", program.body[0]);
    };
    assert!(matches!(statement.value, Expr::If(_)));
}

#[test]
fn test_spans_are_contained() {
    let source = "let x = 1 + 2;";
    let program = parse(source).unwrap();

    let Stmt::Let(statement) = &program.body[0] else {
        panic!("expected let statement, got {:?}", program.body[0]);
    };
    let statement_span = &statement.span;
    let value_span = statement.value.span();

    assert!(statement_span.start.index <= value_span.start.index);
    assert!(value_span.end.index <= statement_span.end.index);
    assert!(value_span.start.index < value_span.end.index);
}

#[test]
fn test_render_error_for_parse_failure() {
    let source = "let a = ;";
    let error = parse(source).unwrap_err();

    let rendered = render_error(&error, source);
    assert!(rendered.contains("Error: UnexpectedToken"));
    assert!(rendered.contains("let a = ;"));
}

#[test]
fn test_whole_program() {
    let source = r#"
        fn fib(n) {
            if n == 0 {
                return 0;
            }
            if n == 1 {
                return 1;
            }
            return fib(n - 1) + fib(n - 2);
        }

        fn main() {
            let mut results = make_list();
            let mut i = 0;
            while i != 10 {
                if i % 2 == 0 {
                    i += 1;
                    continue;
                }
                results.push(fib(i));
                i += 1;
            }
            print(results[0], "done\n");
        }
    "#;

    let program = parse(source).unwrap();
    assert_eq!(program.body.len(), 2);

    let Stmt::FnDecl(main) = &program.body[1] else {
        panic!("expected function declaration, got {:?}", program.body[1]);
    };
    assert_eq!(main.name, "main");
    assert_eq!(main.body.body.len(), 4);
}
