use std::fmt::{Display, Formatter, Result};

use crate::lexer::tokens::TokenKind;

use super::{
    ast::{write_optional, Expr},
    statements::BlockStmt,
};

// LITERALS

/// Symbol Expression
/// Represents an identifier in the AST. This includes function names.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SymbolExpr {
    pub value: String,
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntegerExpr {
    pub value: i64,
}

impl Display for IntegerExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FloatExpr {
    pub value: f64,
}

impl Display for FloatExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        // Debug keeps the fractional part (`3.0`), so the output lexes as a float again.
        write!(f, "{:?}", self.value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringExpr {
    pub value: String,
}

impl Display for StringExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "\"")?;
        for ch in self.value.chars() {
            match ch {
                '\n' => write!(f, "\\n")?,
                '\t' => write!(f, "\\t")?,
                '\r' => write!(f, "\\r")?,
                '\0' => write!(f, "\\0")?,
                '\\' => write!(f, "\\\\")?,
                '"' => write!(f, "\\\"")?,
                _ => write!(f, "{}", ch)?,
            }
        }
        write!(f, "\"")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BooleanExpr {
    pub value: bool,
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.value)
    }
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrefixOperator {
    Negate,
}

impl PrefixOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Dash => Some(PrefixOperator::Negate),
            _ => None,
        }
    }
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            PrefixOperator::Negate => write!(f, "-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    Equals,
    NotEquals,
    Less,
    LessEquals,
    Greater,
    GreaterEquals,
}

impl BinaryOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        let operator = match kind {
            TokenKind::Plus => BinaryOperator::Plus,
            TokenKind::Dash => BinaryOperator::Minus,
            TokenKind::Star => BinaryOperator::Multiply,
            TokenKind::Slash => BinaryOperator::Divide,
            TokenKind::Equals => BinaryOperator::Equals,
            TokenKind::NotEquals => BinaryOperator::NotEquals,
            TokenKind::Less => BinaryOperator::Less,
            TokenKind::LessEquals => BinaryOperator::LessEquals,
            TokenKind::Greater => BinaryOperator::Greater,
            TokenKind::GreaterEquals => BinaryOperator::GreaterEquals,
            _ => return None,
        };
        Some(operator)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOperator::Plus => "+",
            BinaryOperator::Minus => "-",
            BinaryOperator::Multiply => "*",
            BinaryOperator::Divide => "/",
            BinaryOperator::Equals => "==",
            BinaryOperator::NotEquals => "!=",
            BinaryOperator::Less => "<",
            BinaryOperator::LessEquals => "<=",
            BinaryOperator::Greater => ">",
            BinaryOperator::GreaterEquals => ">=",
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.as_str())
    }
}

// COMPOUND EXPRESSIONS

/// Prefix Expression
/// Renders as `(-operand)`.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub operator: PrefixOperator,
    pub right_expr: Option<Box<Expr>>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}", self.operator)?;
        write_optional(f, &self.right_expr)?;
        write!(f, ")")
    }
}

/// Binary Expression
/// Always fully parenthesized: `(left op right)`.
#[derive(Debug, Clone, PartialEq)]
pub struct BinaryExpr {
    pub left: Option<Box<Expr>>,
    pub operator: BinaryOperator,
    pub right: Option<Box<Expr>>,
}

impl Display for BinaryExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "(")?;
        write_optional(f, &self.left)?;
        write!(f, " {} ", self.operator)?;
        write_optional(f, &self.right)?;
        write!(f, ")")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfExpr {
    pub condition: Option<Box<Expr>>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "if")?;
        write_optional(f, &self.condition)?;
        write!(f, " {}", self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FunctionExpr {
    pub parameters: Vec<SymbolExpr>,
    pub body: BlockStmt,
}

impl Display for FunctionExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let parameters: Vec<String> = self.parameters.iter().map(|p| p.to_string()).collect();
        write!(f, "fn({}) {}", parameters.join(", "), self.body)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Option<Box<Expr>>,
    pub arguments: Vec<Expr>,
}

impl Display for CallExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let arguments: Vec<String> = self.arguments.iter().map(|a| a.to_string()).collect();
        write_optional(f, &self.callee)?;
        write!(f, "({})", arguments.join(", "))
    }
}
