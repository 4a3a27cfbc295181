use std::{
    fmt::{Display, Formatter, Result},
    slice::Iter,
};

use super::{
    ast::{write_optional, Expr, Stmt},
    expressions::SymbolExpr,
};

/// `let <name> = <value>;`
///
/// `value` is `None` only when the initializer failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub name: SymbolExpr,
    pub value: Option<Box<Expr>>,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "let {} = ", self.name)?;
        write_optional(f, &self.value)?;
        write!(f, ";")
    }
}

/// `return <value>?;`
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub value: Option<Box<Expr>>,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "return ")?;
        write_optional(f, &self.value)?;
        write!(f, ";")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub expression: Option<Box<Expr>>,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write_optional(f, &self.expression)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct BlockStmt {
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for stmt in &self.body {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
