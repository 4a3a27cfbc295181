use std::fmt::{Display, Formatter, Result};

use super::{
    expressions::{
        BinaryExpr, BooleanExpr, CallExpr, FloatExpr, FunctionExpr, IfExpr, IntegerExpr,
        PrefixExpr, StringExpr, SymbolExpr,
    },
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// The root of a parsed source buffer. Statements are kept in source
/// order, which is also evaluation order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Stmt::Let(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
            Stmt::Block(stmt) => stmt.fmt(f),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Symbol(SymbolExpr),
    Integer(IntegerExpr),
    Float(FloatExpr),
    String(StringExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Binary(BinaryExpr),
    If(IfExpr),
    Function(FunctionExpr),
    Call(CallExpr),
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Expr::Symbol(expr) => expr.fmt(f),
            Expr::Integer(expr) => expr.fmt(f),
            Expr::Float(expr) => expr.fmt(f),
            Expr::String(expr) => expr.fmt(f),
            Expr::Boolean(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Binary(expr) => expr.fmt(f),
            Expr::If(expr) => expr.fmt(f),
            Expr::Function(expr) => expr.fmt(f),
            Expr::Call(expr) => expr.fmt(f),
        }
    }
}

/// Writes a possibly absent subtree; absent subtrees render as nothing.
pub(crate) fn write_optional<T: Display>(f: &mut Formatter<'_>, node: &Option<T>) -> Result {
    match node {
        Some(node) => write!(f, "{}", node),
        None => Ok(()),
    }
}
