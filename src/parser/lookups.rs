//! Token-kind dispatch for the Pratt parser.
//!
//! The set of token kinds is closed, so every table here is an exhaustive
//! `match` rather than a map filled at runtime. Adding a `TokenKind`
//! forces a decision in each of them.

use crate::{
    ast::ast::{Expr, Stmt},
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Precedence ladder, lowest first. `Default` is what every token that
/// cannot continue an expression binds with.
#[derive(PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Debug)]
pub enum BindingPower {
    Default,
    Equality,
    Relational,
    Additive,
    Multiplicative,
    Unary,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Option<Stmt>;
pub type NUDHandler = fn(&mut Parser) -> Option<Expr>;
pub type LEDHandler = fn(&mut Parser, Option<Expr>) -> Option<Expr>;

pub fn binding_power(kind: TokenKind) -> BindingPower {
    match kind {
        TokenKind::Equals | TokenKind::NotEquals => BindingPower::Equality,
        TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals => BindingPower::Relational,
        TokenKind::Plus | TokenKind::Dash => BindingPower::Additive,
        TokenKind::Star | TokenKind::Slash => BindingPower::Multiplicative,
        TokenKind::OpenParen => BindingPower::Call,
        TokenKind::Let
        | TokenKind::Fn
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::While
        | TokenKind::Return
        | TokenKind::Struct
        | TokenKind::Impl
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Int
        | TokenKind::Float
        | TokenKind::String
        | TokenKind::Bool
        | TokenKind::Identifier
        | TokenKind::Assignment
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Dot
        | TokenKind::Arrow
        | TokenKind::EOF
        | TokenKind::Illegal => BindingPower::Default,
    }
}

/// Null denotation: the production used when `kind` starts an expression.
pub fn nud_handler(kind: TokenKind) -> Option<NUDHandler> {
    let handler: NUDHandler = match kind {
        // Literals and symbols
        TokenKind::Identifier => parse_symbol_expr,
        TokenKind::Int => parse_integer_expr,
        TokenKind::Float => parse_float_expr,
        TokenKind::String => parse_string_expr,
        TokenKind::Bool | TokenKind::True | TokenKind::False => parse_boolean_expr,

        TokenKind::Dash => parse_prefix_expr,
        TokenKind::OpenParen => parse_grouping_expr,
        TokenKind::If => parse_if_expr,
        TokenKind::Fn => parse_fn_expr,

        // Reserved for future productions
        TokenKind::While | TokenKind::Struct | TokenKind::Impl => return None,

        TokenKind::Let
        | TokenKind::Else
        | TokenKind::Return
        | TokenKind::Plus
        | TokenKind::Star
        | TokenKind::Slash
        | TokenKind::Assignment
        | TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Dot
        | TokenKind::Arrow
        | TokenKind::EOF
        | TokenKind::Illegal => return None,
    };
    Some(handler)
}

/// Left denotation: the production used when `kind` continues an
/// already parsed expression.
pub fn led_handler(kind: TokenKind) -> Option<LEDHandler> {
    let handler: LEDHandler = match kind {
        TokenKind::Equals
        | TokenKind::NotEquals
        | TokenKind::Less
        | TokenKind::LessEquals
        | TokenKind::Greater
        | TokenKind::GreaterEquals
        | TokenKind::Plus
        | TokenKind::Dash
        | TokenKind::Star
        | TokenKind::Slash => parse_binary_expr,

        TokenKind::OpenParen => parse_call_expr,

        TokenKind::Let
        | TokenKind::Fn
        | TokenKind::If
        | TokenKind::Else
        | TokenKind::While
        | TokenKind::Return
        | TokenKind::Struct
        | TokenKind::Impl
        | TokenKind::True
        | TokenKind::False
        | TokenKind::Int
        | TokenKind::Float
        | TokenKind::String
        | TokenKind::Bool
        | TokenKind::Identifier
        | TokenKind::Assignment
        | TokenKind::CloseParen
        | TokenKind::OpenCurly
        | TokenKind::CloseCurly
        | TokenKind::Comma
        | TokenKind::Semicolon
        | TokenKind::Dot
        | TokenKind::Arrow
        | TokenKind::EOF
        | TokenKind::Illegal => return None,
    };
    Some(handler)
}

/// Statements with their own leading keyword. Anything else is parsed as
/// an expression statement.
pub fn stmt_handler(kind: TokenKind) -> Option<StmtHandler> {
    let handler: StmtHandler = match kind {
        TokenKind::Let => parse_let_stmt,
        TokenKind::Return => parse_return_stmt,
        TokenKind::OpenCurly => parse_block_stmt,
        _ => return None,
    };
    Some(handler)
}
