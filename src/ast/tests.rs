//! Canonical rendering of hand-built trees.

use test_log::test;

use super::{
    ast::{Expr, Program, Stmt},
    expressions::{
        BinaryExpr, BinaryOperator, BooleanExpr, CallExpr, FloatExpr, FunctionExpr, IfExpr,
        IntegerExpr, PrefixExpr, PrefixOperator, StringExpr, SymbolExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

fn symbol(name: &str) -> Expr {
    Expr::Symbol(SymbolExpr {
        value: name.to_string(),
    })
}

fn int(value: i64) -> Expr {
    Expr::Integer(IntegerExpr { value })
}

fn binary(left: Expr, operator: BinaryOperator, right: Expr) -> Expr {
    Expr::Binary(BinaryExpr {
        left: Some(Box::new(left)),
        operator,
        right: Some(Box::new(right)),
    })
}

fn expression_stmt(expr: Expr) -> Stmt {
    Stmt::Expression(ExpressionStmt {
        expression: Some(Box::new(expr)),
    })
}

#[test]
fn test_render_let_statement() {
    let program = Program {
        statements: vec![Stmt::Let(LetStmt {
            name: SymbolExpr {
                value: "my_var".to_string(),
            },
            value: Some(Box::new(symbol("another_var"))),
        })],
    };

    assert_eq!(program.to_string(), "let my_var = another_var;");
    assert!(matches!(program.statements[0], Stmt::Let(_)));
}

#[test]
fn test_render_absent_subtrees_as_empty() {
    let stmt = Stmt::Let(LetStmt {
        name: SymbolExpr {
            value: "x".to_string(),
        },
        value: None,
    });
    assert_eq!(stmt.to_string(), "let x = ;");

    let stmt = Stmt::Return(ReturnStmt { value: None });
    assert_eq!(stmt.to_string(), "return ;");

    let stmt = Stmt::Expression(ExpressionStmt { expression: None });
    assert_eq!(stmt.to_string(), "");
}

#[test]
fn test_render_operators_fully_parenthesized() {
    let expr = binary(
        int(1),
        BinaryOperator::Plus,
        binary(int(2), BinaryOperator::Multiply, int(3)),
    );
    assert_eq!(expr.to_string(), "(1 + (2 * 3))");

    let negated = Expr::Prefix(PrefixExpr {
        operator: PrefixOperator::Negate,
        right_expr: Some(Box::new(symbol("a"))),
    });
    assert_eq!(negated.to_string(), "(-a)");
    assert!(matches!(negated, Expr::Prefix(_)));

    let compare = binary(symbol("a"), BinaryOperator::GreaterEquals, symbol("b"));
    assert_eq!(compare.to_string(), "(a >= b)");
}

#[test]
fn test_render_literals() {
    assert_eq!(Expr::Float(FloatExpr { value: 3.0 }).to_string(), "3.0");
    assert_eq!(Expr::Float(FloatExpr { value: 2.5 }).to_string(), "2.5");
    assert_eq!(Expr::Boolean(BooleanExpr { value: false }).to_string(), "false");
    assert_eq!(int(-7).to_string(), "-7");

    let string = Expr::String(StringExpr {
        value: "say \"hi\"\n".to_string(),
    });
    assert_eq!(string.to_string(), r#""say \"hi\"\n""#);
}

#[test]
fn test_render_if_expression() {
    let expr = Expr::If(IfExpr {
        condition: Some(Box::new(binary(symbol("x"), BinaryOperator::Less, symbol("y")))),
        consequence: BlockStmt {
            body: vec![expression_stmt(symbol("x"))],
        },
        alternative: Some(BlockStmt {
            body: vec![expression_stmt(symbol("y"))],
        }),
    });

    assert_eq!(expr.to_string(), "if(x < y) xelse y");
}

#[test]
fn test_render_function_and_call() {
    let function = Expr::Function(FunctionExpr {
        parameters: vec![
            SymbolExpr {
                value: "a".to_string(),
            },
            SymbolExpr {
                value: "b".to_string(),
            },
        ],
        body: BlockStmt {
            body: vec![Stmt::Return(ReturnStmt {
                value: Some(Box::new(binary(symbol("a"), BinaryOperator::Plus, symbol("b")))),
            })],
        },
    });
    assert_eq!(function.to_string(), "fn(a, b) return (a + b);");

    let call = Expr::Call(CallExpr {
        callee: Some(Box::new(symbol("f"))),
        arguments: vec![int(1), binary(int(2), BinaryOperator::Plus, int(3))],
    });
    assert_eq!(call.to_string(), "f(1, (2 + 3))");
}

#[test]
fn test_block_and_program_concatenate() {
    let block = Stmt::Block(BlockStmt {
        body: vec![expression_stmt(int(1)), expression_stmt(int(2))],
    });
    assert_eq!(block.to_string(), "12");

    let program = Program {
        statements: vec![block, expression_stmt(symbol("z"))],
    };
    assert_eq!(program.to_string(), "12z");
    assert_eq!(program.len(), 2);
}

#[test]
fn test_operator_lookup() {
    use crate::lexer::tokens::TokenKind;

    assert_eq!(
        BinaryOperator::from_token_kind(TokenKind::Dash),
        Some(BinaryOperator::Minus)
    );
    assert_eq!(BinaryOperator::from_token_kind(TokenKind::Assignment), None);
    assert_eq!(
        PrefixOperator::from_token_kind(TokenKind::Dash),
        Some(PrefixOperator::Negate)
    );
    assert_eq!(PrefixOperator::from_token_kind(TokenKind::Plus), None);
}
