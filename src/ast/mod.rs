/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: `Program` plus the `Stmt` and `Expr` sum types
/// - expressions: Definitions for the expression node kinds and operators
/// - statements: Definitions for the statement node kinds
///
/// Every node renders a canonical, fully parenthesized text form through
/// `Display`. The rendering is a debugging aid, not a source printer.
pub mod ast;
pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;
